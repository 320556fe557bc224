//! Where links point.
//!
//! Each click of the original page (filter, expand, language) is a link
//! here, and the link target carries the state the click produces. The dev
//! server reads that state from the query string; the static export has one
//! directory per reachable state.

use crate::content::{Filter, ProjectKey};
use crate::locale::Locale;
use crate::view::ViewState;
use std::path::PathBuf;

/// Listing route of the dev server.
pub const PORTFOLIO_PATH: &str = "/portfolio";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Routes {
    /// `/portfolio?lang=en&filter=ecom&open=lem,mutter`
    Query,
    /// `/en/portfolio/ecom/lem/`
    Static,
}

impl Routes {
    pub fn landing(self, locale: Locale) -> String {
        match self {
            Routes::Query => format!("/?lang={locale}"),
            Routes::Static => format!("/{locale}/"),
        }
    }

    pub fn listing(self, locale: Locale, state: &ViewState) -> String {
        match self {
            Routes::Query => {
                let mut url = format!("{PORTFOLIO_PATH}?lang={locale}");
                if state.active_filter() != Filter::All {
                    url.push_str("&filter=");
                    url.push_str(state.active_filter().code());
                }
                let open: Vec<&str> = state.expanded_keys().map(|k| k.as_str()).collect();
                if !open.is_empty() {
                    url.push_str("&open=");
                    url.push_str(&open.join(","));
                }
                url
            }
            Routes::Static => {
                let mut url = String::from("/");
                for segment in static_segments(locale, state) {
                    url.push_str(&segment);
                    url.push('/');
                }
                url
            }
        }
    }

    /// State a filter button leads to.
    ///
    /// The static export only holds collapsed pages per filter, so there the
    /// expanded cards are dropped.
    pub fn filter_target(self, state: &ViewState, filter: Filter) -> ViewState {
        let mut next = state.with_filter(filter);
        if self == Routes::Static {
            next.collapse_all();
        }
        next
    }

    /// State a card toggle leads to.
    ///
    /// The static export holds at most one expanded card per page, so
    /// opening a card there closes the others.
    pub fn toggle_target(self, state: &ViewState, key: ProjectKey) -> ViewState {
        match self {
            Routes::Query => state.with_toggled(key),
            Routes::Static => {
                let mut next = state.clone();
                let reopen = !next.is_expanded(key);
                next.collapse_all();
                if reopen {
                    next.toggle_expanded(key);
                }
                next
            }
        }
    }
}

/// Directory segments of a listing page in the static export. Only the
/// first expanded card is encoded.
pub fn static_segments(locale: Locale, state: &ViewState) -> Vec<String> {
    let mut segments = vec![locale.code().to_string(), "portfolio".to_string()];
    if state.active_filter() != Filter::All {
        segments.push(state.active_filter().code().to_string());
    }
    if let Some(key) = state.expanded_keys().next() {
        segments.push(key.as_str().to_string());
    }
    segments
}

/// File a listing page is written to, relative to the output directory.
pub fn static_file(locale: Locale, state: &ViewState) -> PathBuf {
    let mut path: PathBuf = static_segments(locale, state).into_iter().collect();
    path.push("index.html");
    path
}

/// Query of the dev server's pages.
#[derive(Debug, Default, Clone)]
pub struct PageQuery {
    pub lang: Option<String>,
    pub filter: Option<String>,
    pub open: Option<String>,
}

impl PageQuery {
    /// Fold raw `key=value` pairs. A repeated `lang` or `filter` keeps the
    /// last value; every `open` value is merged. Other keys are skipped.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = PageQuery::default();
        for (key, value) in pairs {
            match key.as_str() {
                "lang" => keep_last(&mut query.lang, "lang", value),
                "filter" => keep_last(&mut query.filter, "filter", value),
                "open" => match &mut query.open {
                    Some(open) => {
                        open.push(',');
                        open.push_str(&value);
                    }
                    None => query.open = Some(value),
                },
                _ => tracing::warn!(param = %key, "ignoring unknown query parameter"),
            }
        }
        query
    }

    /// Requested locale, or `default` when absent or unknown.
    pub fn locale(&self, default: Locale) -> Locale {
        match self.lang.as_deref() {
            None => default,
            Some(code) => Locale::from_code(code).unwrap_or_else(|| {
                tracing::warn!(lang = code, "ignoring unknown language");
                default
            }),
        }
    }

    /// Listing state described by the query. Unknown tokens are skipped.
    pub fn view_state(&self) -> ViewState {
        let mut state = ViewState::new();
        if let Some(code) = self.filter.as_deref() {
            match Filter::from_code(code) {
                Some(filter) => state.set_filter(filter),
                None => tracing::warn!(filter = code, "ignoring unknown filter"),
            }
        }
        if let Some(open) = self.open.as_deref() {
            for token in open.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                match ProjectKey::from_code(token) {
                    Some(key) if !state.is_expanded(key) => state.toggle_expanded(key),
                    Some(_) => {}
                    None => tracing::warn!(project = token, "ignoring unknown project"),
                }
            }
        }
        state
    }
}

fn keep_last(slot: &mut Option<String>, param: &str, value: String) {
    if let Some(previous) = slot.replace(value) {
        tracing::warn!(param, %previous, "repeated query parameter, keeping the last");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    fn query(lang: Option<&str>, filter: Option<&str>, open: Option<&str>) -> PageQuery {
        PageQuery {
            lang: lang.map(String::from),
            filter: filter.map(String::from),
            open: open.map(String::from),
        }
    }

    #[test]
    fn query_links_carry_state() {
        let state = ViewState::new()
            .with_filter(Filter::Only(Category::Ecom))
            .with_toggled(ProjectKey::Bionova)
            .with_toggled(ProjectKey::Mutter);
        assert_eq!(
            Routes::Query.listing(Locale::En, &state),
            "/portfolio?lang=en&filter=ecom&open=mutter,bionova"
        );
        assert_eq!(
            Routes::Query.listing(Locale::Es, &ViewState::new()),
            "/portfolio?lang=es"
        );
    }

    #[test]
    fn query_round_trips_through_links() {
        let state = ViewState::new()
            .with_filter(Filter::Only(Category::Services))
            .with_toggled(ProjectKey::Lem)
            .with_toggled(ProjectKey::Magenta);
        let parsed = query(Some("en"), Some("services"), Some("magenta,lem"));
        assert_eq!(parsed.view_state(), state);
        assert_eq!(parsed.locale(Locale::Es), Locale::En);
    }

    #[test]
    fn unknown_tokens_fall_back() {
        let parsed = query(Some("fr"), Some("games"), Some("lem,,nope"));
        assert_eq!(parsed.locale(Locale::Es), Locale::Es);
        let state = parsed.view_state();
        assert_eq!(state.active_filter(), Filter::All);
        assert_eq!(state.expanded_keys().collect::<Vec<_>>(), vec![ProjectKey::Lem]);
    }

    #[test]
    fn repeated_open_keys_do_not_cancel_out() {
        let state = query(None, None, Some("lem,lem")).view_state();
        assert!(state.is_expanded(ProjectKey::Lem));
    }

    fn pairs(raw: &[(&str, &str)]) -> PageQuery {
        PageQuery::from_pairs(raw.iter().map(|(k, v)| (k.to_string(), v.to_string())))
    }

    #[test]
    fn repeated_params_fold_into_one_query() {
        let parsed = pairs(&[
            ("lang", "es"),
            ("open", "lem"),
            ("filter", "ecom"),
            ("lang", "en"),
            ("open", "mutter"),
            ("filter", "services"),
            ("utm_source", "mail"),
        ]);
        assert_eq!(parsed.locale(Locale::Es), Locale::En);
        let state = parsed.view_state();
        assert_eq!(state.active_filter(), Filter::Only(Category::Services));
        assert_eq!(
            state.expanded_keys().collect::<Vec<_>>(),
            vec![ProjectKey::Lem, ProjectKey::Mutter]
        );
    }

    #[test]
    fn empty_pairs_mean_defaults() {
        let parsed = pairs(&[]);
        assert_eq!(parsed.locale(Locale::En), Locale::En);
        assert_eq!(parsed.view_state(), ViewState::new());
    }

    #[test]
    fn static_paths() {
        let state = ViewState::new();
        assert_eq!(Routes::Static.listing(Locale::Es, &state), "/es/portfolio/");
        let state = state
            .with_filter(Filter::Only(Category::Ecom))
            .with_toggled(ProjectKey::Mutter);
        assert_eq!(Routes::Static.listing(Locale::En, &state), "/en/portfolio/ecom/mutter/");
        assert_eq!(
            static_file(Locale::En, &state),
            PathBuf::from("en/portfolio/ecom/mutter/index.html")
        );
        assert_eq!(Routes::Static.landing(Locale::En), "/en/");
    }

    #[test]
    fn static_toggle_keeps_one_card_open() {
        let state = ViewState::new().with_toggled(ProjectKey::Lem);
        let next = Routes::Static.toggle_target(&state, ProjectKey::Esteban);
        assert_eq!(next.expanded_keys().collect::<Vec<_>>(), vec![ProjectKey::Esteban]);
        let closed = Routes::Static.toggle_target(&next, ProjectKey::Esteban);
        assert_eq!(closed.expanded_keys().count(), 0);
    }

    #[test]
    fn query_toggle_is_independent_per_card() {
        let state = ViewState::new().with_toggled(ProjectKey::Lem);
        let next = Routes::Query.toggle_target(&state, ProjectKey::Esteban);
        assert_eq!(
            next.expanded_keys().collect::<Vec<_>>(),
            vec![ProjectKey::Esteban, ProjectKey::Lem]
        );
    }

    #[test]
    fn static_filter_links_collapse() {
        let state = ViewState::new().with_toggled(ProjectKey::Lem);
        let next = Routes::Static.filter_target(&state, Filter::Only(Category::Ecom));
        assert_eq!(next.expanded_keys().count(), 0);
        let kept = Routes::Query.filter_target(&state, Filter::Only(Category::Ecom));
        assert!(kept.is_expanded(ProjectKey::Lem));
    }
}
