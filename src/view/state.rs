use crate::content::{filter_projects, Filter, ProjectKey, ProjectRecord};
use std::collections::BTreeMap;

/// Per-listing state: the active filter and which cards are expanded.
///
/// Every project starts collapsed. Filtering never touches the expanded
/// map, so a card keeps its state while it is filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    active_filter: Filter,
    expanded: BTreeMap<ProjectKey, bool>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            active_filter: Filter::All,
            expanded: ProjectKey::ALL.into_iter().map(|k| (k, false)).collect(),
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_filter(&self) -> Filter {
        self.active_filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.active_filter = filter;
    }

    /// Flip one card. Other cards are untouched, so several can be open.
    pub fn toggle_expanded(&mut self, key: ProjectKey) {
        let open = self.expanded.entry(key).or_insert(false);
        *open = !*open;
    }

    pub fn is_expanded(&self, key: ProjectKey) -> bool {
        self.expanded.get(&key).copied().unwrap_or(false)
    }

    /// Expanded projects, in canonical order.
    pub fn expanded_keys(&self) -> impl Iterator<Item = ProjectKey> + '_ {
        self.expanded
            .iter()
            .filter(|(_, open)| **open)
            .map(|(key, _)| *key)
    }

    /// Collapse every card.
    pub fn collapse_all(&mut self) {
        for open in self.expanded.values_mut() {
            *open = false;
        }
    }

    /// Projects the listing shows, in canonical order.
    pub fn visible(&self) -> Vec<&'static ProjectRecord> {
        filter_projects(self.active_filter)
    }

    /// Copy with `filter` applied; what a filter button links to.
    pub fn with_filter(&self, filter: Filter) -> ViewState {
        let mut next = self.clone();
        next.set_filter(filter);
        next
    }

    /// Copy with `key` toggled; what a card's toggle links to.
    pub fn with_toggled(&self, key: ProjectKey) -> ViewState {
        let mut next = self.clone();
        next.toggle_expanded(key);
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Category;

    fn keys(state: &ViewState) -> Vec<ProjectKey> {
        state.visible().iter().map(|p| p.key).collect()
    }

    #[test]
    fn starts_collapsed_on_all() {
        let state = ViewState::new();
        assert_eq!(state.active_filter(), Filter::All);
        assert!(ProjectKey::ALL.iter().all(|k| !state.is_expanded(*k)));
        assert_eq!(keys(&state), ProjectKey::ALL.to_vec());
    }

    #[test]
    fn filter_preserves_canonical_order() {
        let mut state = ViewState::new();
        state.set_filter(Filter::Only(Category::Services));
        assert_eq!(
            keys(&state),
            vec![
                ProjectKey::Magenta,
                ProjectKey::Esteban,
                ProjectKey::Lem,
                ProjectKey::Boating
            ]
        );
        state.set_filter(Filter::Only(Category::Personal));
        assert_eq!(keys(&state), vec![ProjectKey::Federico]);
    }

    #[test]
    fn double_toggle_restores_state() {
        let mut state = ViewState::new();
        state.toggle_expanded(ProjectKey::Mutter);
        let before = state.clone();

        state.toggle_expanded(ProjectKey::Lem);
        assert!(state.is_expanded(ProjectKey::Lem));
        state.toggle_expanded(ProjectKey::Lem);

        assert_eq!(state, before);
        assert!(state.is_expanded(ProjectKey::Mutter));
    }

    #[test]
    fn several_cards_can_be_open() {
        let state = ViewState::new()
            .with_toggled(ProjectKey::Lem)
            .with_toggled(ProjectKey::Bionova);
        assert_eq!(
            state.expanded_keys().collect::<Vec<_>>(),
            vec![ProjectKey::Lem, ProjectKey::Bionova]
        );
    }

    #[test]
    fn filtering_keeps_expanded_state() {
        let mut state = ViewState::new().with_toggled(ProjectKey::Lem);
        state.set_filter(Filter::Only(Category::Ecom));
        assert!(state.is_expanded(ProjectKey::Lem));
        state.set_filter(Filter::All);
        assert!(state.is_expanded(ProjectKey::Lem));
    }

    #[test]
    fn with_helpers_leave_the_original_alone() {
        let state = ViewState::new();
        let next = state
            .with_filter(Filter::Only(Category::Ecom))
            .with_toggled(ProjectKey::Mutter);
        assert_eq!(state, ViewState::new());
        assert_eq!(next.active_filter(), Filter::Only(Category::Ecom));
        assert!(next.is_expanded(ProjectKey::Mutter));
    }
}
