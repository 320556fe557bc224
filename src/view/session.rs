use super::highlight::LandingPage;
use super::listing::{ListingPage, ListingView};
use crate::config::SiteConfig;
use crate::content::{Filter, ProjectKey};
use crate::locale::Locale;
use crate::routes::Routes;

/// One visitor's view tree: the active language, shared by the landing
/// section and the portfolio, plus the portfolio's own state.
#[derive(Debug, Clone)]
pub struct Session {
    locale: Locale,
    listing: ListingView,
    routes: Routes,
    config: SiteConfig,
}

impl Session {
    /// Fresh session in the configured default language.
    pub fn new(config: SiteConfig, routes: Routes) -> Self {
        Self {
            locale: config.default_locale,
            listing: ListingView::new(),
            routes,
            config,
        }
    }

    pub fn with_listing(mut self, listing: ListingView) -> Self {
        self.listing = listing;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Switch language for both views. Listing state is kept.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.listing.set_filter(filter);
    }

    pub fn toggle_expanded(&mut self, key: ProjectKey) {
        self.listing.toggle_expanded(key);
    }

    pub fn listing(&self) -> &ListingView {
        &self.listing
    }

    pub fn landing_page(&self) -> LandingPage {
        LandingPage::new(self.locale, self.routes, &self.config)
    }

    pub fn listing_page(&self) -> ListingPage {
        self.listing.page(self.locale, self.routes, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expanded_detail_follows_locale_switch() {
        let mut session = Session::new(SiteConfig::default(), Routes::Query);
        session.toggle_expanded(ProjectKey::Lem);
        session.set_locale(Locale::En);

        let page = session.listing_page();
        let lem = page.cards.iter().find(|c| c.key == "lem").unwrap();
        let detail = lem.detail.as_ref().expect("lem stays expanded");
        assert!(detail.summary.starts_with("Logistics in Miami and international shipping"));
    }

    #[test]
    fn locale_round_trip_restores_pages() {
        let mut session = Session::new(SiteConfig::default(), Routes::Query);
        session.toggle_expanded(ProjectKey::Magenta);
        let listing = session.listing_page();
        let landing = session.landing_page();

        session.set_locale(Locale::En);
        assert_ne!(session.listing_page(), listing);
        session.set_locale(Locale::Es);

        assert_eq!(session.listing_page(), listing);
        assert_eq!(session.landing_page(), landing);
    }

    #[test]
    fn starts_in_configured_locale() {
        let config = SiteConfig {
            default_locale: Locale::En,
            ..SiteConfig::default()
        };
        let session = Session::new(config, Routes::Static);
        assert_eq!(session.locale(), Locale::En);
        assert_eq!(session.landing_page().lang, "en");
    }
}
