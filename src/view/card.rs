use serde::Serialize;

/// One project preview: cover, title, description, tag line, then two
/// explicit slots. `actions` render inline in the action row; `detail`
/// renders below a divider when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub key: String,
    pub cover: String,
    pub cover_alt: String,
    pub title: String,
    pub description: String,
    pub tags: String,
    pub expanded: bool,
    pub actions: Vec<CardAction>,
    pub detail: Option<DetailPanel>,
}

impl Card {
    pub fn new(
        key: impl Into<String>,
        cover: impl Into<String>,
        cover_alt: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        tags: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            cover: cover.into(),
            cover_alt: cover_alt.into(),
            title: title.into(),
            description: description.into(),
            tags: tags.into(),
            expanded: false,
            actions: Vec::new(),
            detail: None,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn action(mut self, action: CardAction) -> Self {
        self.actions.push(action);
        self
    }

    pub fn detail(mut self, detail: DetailPanel) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// A link in the card's action row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardAction {
    pub label: String,
    pub href: String,
    /// Opens in a new browsing context.
    pub external: bool,
    /// Expand/collapse control; `expanded` feeds `aria-expanded`.
    pub toggle: bool,
    pub expanded: bool,
}

impl CardAction {
    pub fn external(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: true,
            toggle: false,
            expanded: false,
        }
    }

    pub fn toggle(label: impl Into<String>, href: impl Into<String>, expanded: bool) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: false,
            toggle: true,
            expanded,
        }
    }
}

/// Case study block under the divider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailPanel {
    pub summary: String,
    /// Two-column grid: stack, integrations, challenges, solution.
    pub columns: Vec<DetailSection>,
    /// Full-width section below the grid.
    pub impact: DetailSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailSection {
    pub heading: String,
    pub items: Vec<String>,
}

impl DetailSection {
    pub fn new(heading: &str, items: &[&str]) -> Self {
        Self {
            heading: heading.to_string(),
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}
