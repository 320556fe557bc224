use super::card::{Card, CardAction, DetailPanel, DetailSection};
use super::state::ViewState;
use super::LinkButton;
use crate::config::SiteConfig;
use crate::content::{self, Filter, ProjectKey, ProjectRecord};
use crate::links;
use crate::locale::{self, Locale, Text};
use crate::routes::Routes;
use serde::Serialize;

/// The full portfolio: filter bar plus one card per visible project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingView {
    state: ViewState,
}

impl ListingView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ViewState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.state.set_filter(filter);
    }

    pub fn toggle_expanded(&mut self, key: ProjectKey) {
        self.state.toggle_expanded(key);
    }

    /// Everything the portfolio template needs, in `locale`.
    pub fn page(&self, locale: Locale, routes: Routes, config: &SiteConfig) -> ListingPage {
        let filters = Filter::ALL
            .into_iter()
            .map(|filter| FilterButton {
                code: filter.code(),
                label: filter.label(locale).to_string(),
                href: routes.listing(locale, &routes.filter_target(&self.state, filter)),
                pressed: filter == self.state.active_filter(),
            })
            .collect();

        let cards = self
            .state
            .visible()
            .into_iter()
            .map(|record| self.card(record, locale, routes))
            .collect();

        ListingPage {
            lang: locale.code(),
            title: Text::PortfolioTitle.get(locale).to_string(),
            description: Text::PortfolioDescription.get(locale).to_string(),
            heading: Text::PortfolioHeading.get(locale).to_string(),
            intro: Text::PortfolioIntro.get(locale).to_string(),
            filters,
            request_case: LinkButton {
                label: Text::RequestCase.get(locale).to_string(),
                href: links::request_case_mailto(&config.contact_email, locale),
            },
            switch_language: LinkButton {
                label: Text::SwitchLanguage.get(locale).to_string(),
                href: routes.listing(locale.toggled(), &self.state),
            },
            home: routes.landing(locale),
            cards,
        }
    }

    fn card(&self, record: &ProjectRecord, locale: Locale, routes: Routes) -> Card {
        let key = record.key;
        let copy = content::copy(key);
        let expanded = self.state.is_expanded(key);

        let toggle_label = if expanded { Text::ViewLess } else { Text::ViewDetails };
        let toggle_href = routes.listing(locale, &routes.toggle_target(&self.state, key));

        let card = Card::new(
            key.as_str(),
            record.cover,
            locale::cover_alt(copy.title, locale),
            copy.title,
            copy.description.get(locale),
            content::tag_line(key, locale),
        )
        .expanded(expanded)
        .action(CardAction::external(copy.link.get(locale), record.href))
        .action(CardAction::toggle(toggle_label.get(locale), toggle_href, expanded));

        if expanded {
            card.detail(detail_panel(key, locale))
        } else {
            card
        }
    }
}

/// Case study of `key` laid out for the card's detail slot.
pub fn detail_panel(key: ProjectKey, locale: Locale) -> DetailPanel {
    let case = content::detail(key);
    let section = |heading: Text, facts: &content::Facts| {
        DetailSection::new(heading.get(locale), facts.get(locale))
    };
    DetailPanel {
        summary: case.summary.get(locale).to_string(),
        columns: vec![
            section(Text::Stack, &case.stack),
            section(Text::Integrations, &case.integrations),
            section(Text::Challenges, &case.challenges),
            section(Text::Solution, &case.solution),
        ],
        impact: section(Text::Impact, &case.results),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterButton {
    pub code: &'static str,
    pub label: String,
    pub href: String,
    pub pressed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingPage {
    pub lang: &'static str,
    pub title: String,
    pub description: String,
    pub heading: String,
    pub intro: String,
    pub filters: Vec<FilterButton>,
    pub request_case: LinkButton,
    pub switch_language: LinkButton,
    pub home: String,
    pub cards: Vec<Card>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    fn page(view: &ListingView, locale: Locale) -> ListingPage {
        view.page(locale, Routes::Query, &SiteConfig::default())
    }

    #[test]
    fn initial_page_lists_everything_collapsed() {
        let page = page(&ListingView::new(), Locale::Es);
        let keys: Vec<_> = page.cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(
            keys,
            ["magenta", "esteban", "lem", "mutter", "federico", "bionova", "boating"]
        );
        assert!(page.cards.iter().all(|c| !c.expanded && c.detail.is_none()));
        assert!(page.filters[0].pressed);
        assert_eq!(page.filters[0].label, "Todos");
    }

    #[test]
    fn card_slots_are_filled_explicitly() {
        let mut view = ListingView::new();
        view.toggle_expanded(ProjectKey::Lem);
        let page = page(&view, Locale::En);
        let lem = page.cards.iter().find(|c| c.key == "lem").unwrap();

        assert_eq!(lem.actions.len(), 2);
        assert!(lem.actions[0].external);
        assert_eq!(lem.actions[0].href, "https://lem-box.com.uy");
        assert!(lem.actions[1].toggle);
        assert_eq!(lem.actions[1].label, "View less");
        assert_eq!(lem.actions[1].href, "/portfolio?lang=en");

        let detail = lem.detail.as_ref().unwrap();
        assert!(detail.summary.starts_with("Logistics in Miami and international shipping"));
        let headings: Vec<_> = detail.columns.iter().map(|s| s.heading.as_str()).collect();
        assert_eq!(headings, ["Stack", "Integrations", "Challenges", "Solution"]);
        assert_eq!(detail.impact.heading, "Impact");
        assert_eq!(detail.impact.items.len(), 3);
    }

    #[test]
    fn collapsed_toggle_links_to_expanded_state() {
        let page = page(&ListingView::new(), Locale::Es);
        let mutter = page.cards.iter().find(|c| c.key == "mutter").unwrap();
        assert_eq!(mutter.actions[1].label, "Ver más");
        assert_eq!(mutter.actions[1].href, "/portfolio?lang=es&open=mutter");
    }

    #[test]
    fn ecom_filter_marks_its_button() {
        let mut view = ListingView::new();
        view.set_filter(Filter::Only(Category::Ecom));
        let page = page(&view, Locale::En);
        let pressed: Vec<_> = page.filters.iter().filter(|f| f.pressed).map(|f| f.code).collect();
        assert_eq!(pressed, ["ecom"]);
        let keys: Vec<_> = page.cards.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, ["mutter", "bionova"]);
    }

    #[test]
    fn tag_line_and_alt_follow_locale() {
        let es = page(&ListingView::new(), Locale::Es);
        let en = page(&ListingView::new(), Locale::En);
        let lem_es = es.cards.iter().find(|c| c.key == "lem").unwrap();
        let lem_en = en.cards.iter().find(|c| c.key == "lem").unwrap();
        assert_eq!(lem_es.tags, "Logística · Next.js");
        assert_eq!(lem_en.tags, "Logistics · Next.js");
        assert_eq!(lem_es.cover_alt, "Imagen del proyecto LEM Box");
        assert_eq!(lem_en.cover_alt, "Project cover: LEM Box");
    }

    #[test]
    fn language_switch_keeps_view_state() {
        let mut view = ListingView::new();
        view.set_filter(Filter::Only(Category::Services));
        view.toggle_expanded(ProjectKey::Lem);
        let page = page(&view, Locale::Es);
        assert_eq!(page.switch_language.label, "English");
        assert_eq!(
            page.switch_language.href,
            "/portfolio?lang=en&filter=services&open=lem"
        );
    }

    #[test]
    fn request_case_uses_configured_address() {
        let config = SiteConfig {
            contact_email: "hola@example.com".to_string(),
            ..SiteConfig::default()
        };
        let page = ListingView::new().page(Locale::En, Routes::Query, &config);
        assert_eq!(
            page.request_case.href,
            "mailto:hola@example.com?subject=Request%20detailed%20case"
        );
    }
}
