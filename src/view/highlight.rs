use super::LinkButton;
use crate::config::SiteConfig;
use crate::content::{self, highlights::HIGHLIGHTS};
use crate::locale::{self, Locale, Text};
use crate::routes::Routes;
use crate::view::ViewState;
use serde::Serialize;

/// The landing page's portfolio teaser. It has no state of its own: no
/// filter, no expansion, only a fixed list and two calls to action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSection {
    pub eyebrow: String,
    pub heading: String,
    pub intro: String,
    pub items: Vec<HighlightCard>,
    pub footer: String,
    pub contact: LinkButton,
    pub portfolio: LinkButton,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightCard {
    pub key: &'static str,
    pub logo: &'static str,
    pub logo_alt: String,
    pub title: &'static str,
    pub summary: &'static str,
}

impl HighlightSection {
    pub fn new(locale: Locale, routes: Routes, config: &SiteConfig) -> Self {
        let items = HIGHLIGHTS
            .iter()
            .map(|h| {
                let title = content::copy(h.key).title;
                HighlightCard {
                    key: h.key.as_str(),
                    logo: h.logo,
                    logo_alt: locale::logo_alt(title, locale),
                    title,
                    summary: h.summary.get(locale),
                }
            })
            .collect();

        Self {
            eyebrow: Text::HighlightEyebrow.get(locale).to_string(),
            heading: Text::HighlightHeading.get(locale).to_string(),
            intro: Text::HighlightIntro.get(locale).to_string(),
            items,
            footer: Text::HighlightFooter.get(locale).to_string(),
            contact: LinkButton {
                label: Text::ContactCta.get(locale).to_string(),
                href: config.contact_anchor.clone(),
            },
            portfolio: LinkButton {
                label: Text::FullPortfolioCta.get(locale).to_string(),
                href: routes.listing(locale, &ViewState::new()),
            },
        }
    }
}

/// The landing page: head metadata, language switch and the highlight
/// section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LandingPage {
    pub lang: &'static str,
    pub title: String,
    pub description: String,
    pub switch_language: LinkButton,
    pub highlight: HighlightSection,
}

impl LandingPage {
    pub fn new(locale: Locale, routes: Routes, config: &SiteConfig) -> Self {
        Self {
            lang: locale.code(),
            title: Text::LandingTitle.get(locale).to_string(),
            description: Text::LandingDescription.get(locale).to_string(),
            switch_language: LinkButton {
                label: Text::SwitchLanguage.get(locale).to_string(),
                href: routes.landing(locale.toggled()),
            },
            highlight: HighlightSection::new(locale, routes, config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_the_curated_three() {
        let section = HighlightSection::new(Locale::Es, Routes::Query, &SiteConfig::default());
        let keys: Vec<_> = section.items.iter().map(|i| i.key).collect();
        assert_eq!(keys, ["esteban", "lem", "mutter"]);
        assert_eq!(section.items[1].logo_alt, "Logo de LEM Box");
    }

    #[test]
    fn calls_to_action() {
        let section = HighlightSection::new(Locale::En, Routes::Static, &SiteConfig::default());
        assert_eq!(section.contact.href, "/#contacto");
        assert_eq!(section.contact.label, "Let's talk about your project");
        assert_eq!(section.portfolio.href, "/en/portfolio/");
        assert_eq!(section.portfolio.label, "View full portfolio");
    }

    #[test]
    fn summaries_switch_language() {
        let es = HighlightSection::new(Locale::Es, Routes::Query, &SiteConfig::default());
        let en = HighlightSection::new(Locale::En, Routes::Query, &SiteConfig::default());
        assert!(es.items[2].summary.starts_with("E‑commerce de videojuegos"));
        assert!(en.items[2].summary.starts_with("Video‑games e‑commerce"));
        assert_eq!(es.items[2].title, en.items[2].title);
    }
}
