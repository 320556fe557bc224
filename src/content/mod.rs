//! The content store: every project the site shows, authored in source.
//!
//! Records, metadata, copy and case studies are parallel tables keyed by
//! [`ProjectKey`]. Because the key set is a closed enum and every lookup is
//! an exhaustive `match`, a project without metadata or a case study does
//! not compile. The remaining authoring invariants (same number of facts in
//! both languages, well-formed links) are checked by [`integrity::check`].

mod cases;
pub mod highlights;
pub mod integrity;
mod projects;

use crate::locale::{Locale, Text};
use serde::{Deserialize, Serialize};
use std::fmt;

pub use cases::detail;
pub use projects::{copy, metadata, PROJECTS};

/// Identifier of a portfolio project.
///
/// Declaration order is the canonical listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKey {
    Magenta,
    Esteban,
    Lem,
    Mutter,
    Federico,
    Bionova,
    Boating,
}

impl ProjectKey {
    pub const ALL: [ProjectKey; 7] = [
        ProjectKey::Magenta,
        ProjectKey::Esteban,
        ProjectKey::Lem,
        ProjectKey::Mutter,
        ProjectKey::Federico,
        ProjectKey::Bionova,
        ProjectKey::Boating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectKey::Magenta => "magenta",
            ProjectKey::Esteban => "esteban",
            ProjectKey::Lem => "lem",
            ProjectKey::Mutter => "mutter",
            ProjectKey::Federico => "federico",
            ProjectKey::Bionova => "bionova",
            ProjectKey::Boating => "boating",
        }
    }

    pub fn from_code(key: &str) -> Option<ProjectKey> {
        ProjectKey::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Position in the canonical order.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category a project can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Ecom,
    Personal,
    Services,
}

impl Category {
    pub fn code(&self) -> &'static str {
        match self {
            Category::Ecom => "ecom",
            Category::Personal => "personal",
            Category::Services => "services",
        }
    }
}

/// Listing filter. `All` is a filter-only choice; no project can be filed
/// under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    /// Filter bar order.
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::Only(Category::Ecom),
        Filter::Only(Category::Personal),
        Filter::Only(Category::Services),
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Only(category) => category.code(),
        }
    }

    pub fn from_code(code: &str) -> Option<Filter> {
        Filter::ALL.into_iter().find(|f| f.code() == code)
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => *wanted == category,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        let text = match self {
            Filter::All => Text::FilterAll,
            Filter::Only(Category::Ecom) => Text::FilterEcom,
            Filter::Only(Category::Personal) => Text::FilterPersonal,
            Filter::Only(Category::Services) => Text::FilterServices,
        };
        text.get(locale)
    }
}

/// A value authored per language.
///
/// `Shared` is for content written once and shown unchanged in both
/// languages (tech stack lists mostly).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Localized<T: 'static> {
    Shared(T),
    Split { es: T, en: T },
}

impl<T: Copy> Localized<T> {
    pub fn get(&self, locale: Locale) -> T {
        match *self {
            Localized::Shared(value) => value,
            Localized::Split { es, en } => locale.pick(es, en),
        }
    }
}

/// Ordered list of facts for one case-study field.
pub type Facts = Localized<&'static [&'static str]>;

/// Facts authored separately per language.
pub const fn facts(es: &'static [&'static str], en: &'static [&'static str]) -> Facts {
    Localized::Split { es, en }
}

/// Facts shown unchanged in both languages.
pub const fn shared(facts: &'static [&'static str]) -> Facts {
    Localized::Shared(facts)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub key: ProjectKey,
    pub href: &'static str,
    pub cover: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectMetadata {
    pub category: Category,
    pub tags: Facts,
}

/// Display copy for a project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCopy {
    pub title: &'static str,
    pub description: Localized<&'static str>,
    /// Label of the outbound link.
    pub link: Localized<&'static str>,
}

/// Extended case study shown when a card is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseDetail {
    pub summary: Localized<&'static str>,
    pub stack: Facts,
    pub integrations: Facts,
    pub challenges: Facts,
    pub solution: Facts,
    pub results: Facts,
}

impl CaseDetail {
    /// Named fact lists, in display order.
    pub fn fields(&self) -> [(&'static str, &Facts); 5] {
        [
            ("stack", &self.stack),
            ("integrations", &self.integrations),
            ("challenges", &self.challenges),
            ("solution", &self.solution),
            ("results", &self.results),
        ]
    }
}

/// Record for a key.
pub fn record(key: ProjectKey) -> &'static ProjectRecord {
    let record = &PROJECTS[key.index()];
    debug_assert_eq!(record.key, key, "PROJECTS is out of canonical order");
    record
}

/// Projects passing `filter`, in canonical order.
pub fn filter_projects(filter: Filter) -> Vec<&'static ProjectRecord> {
    PROJECTS
        .iter()
        .filter(|p| filter.matches(metadata(p.key).category))
        .collect()
}

/// Tag line shown under a card description: "Logistics · Next.js".
pub fn tag_line(key: ProjectKey, locale: Locale) -> String {
    metadata(key).tags.get(locale).join(" · ")
}
