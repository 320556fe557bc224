use serde::{Deserialize, Serialize};

pub mod config;
pub mod content;
pub mod error;
pub mod generator;
pub mod links;
pub mod locale;
pub mod logging;
pub mod render;
pub mod routes;
pub mod server;
pub mod view;

pub use config::SiteConfig;
pub use error::SiteError;
pub use generator::{GenerationReport, SiteGenerator};
pub use locale::Locale;

use content::{Category, ProjectKey};

/// Machine-readable summary of the portfolio, written as `site.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SiteIndex {
    pub locales: Vec<Locale>,
    pub categories: Vec<Category>,
    pub projects: Vec<IndexedProject>,
    pub highlights: Vec<ProjectKey>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct IndexedProject {
    pub key: ProjectKey,
    pub title: String,
    pub category: Category,
    pub href: String,
    pub cover: String,
    pub tags: LocalizedList,
}

/// One list per language.
#[derive(Debug, Serialize, Deserialize)]
pub struct LocalizedList {
    pub es: Vec<String>,
    pub en: Vec<String>,
}

impl SiteIndex {
    pub fn build() -> Self {
        let projects = ProjectKey::ALL
            .into_iter()
            .map(|key| {
                let record = content::record(key);
                let meta = content::metadata(key);
                let owned = |locale: Locale| -> Vec<String> {
                    meta.tags.get(locale).iter().map(|t| t.to_string()).collect()
                };
                IndexedProject {
                    key,
                    title: content::copy(key).title.to_string(),
                    category: meta.category,
                    href: record.href.to_string(),
                    cover: record.cover.to_string(),
                    tags: LocalizedList {
                        es: owned(Locale::Es),
                        en: owned(Locale::En),
                    },
                }
            })
            .collect();

        SiteIndex {
            locales: Locale::all().to_vec(),
            categories: vec![Category::Ecom, Category::Personal, Category::Services],
            projects,
            highlights: content::highlights::HIGHLIGHTS.iter().map(|h| h.key).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_lists_projects_in_canonical_order() {
        let index = SiteIndex::build();
        let keys: Vec<_> = index.projects.iter().map(|p| p.key).collect();
        assert_eq!(keys, ProjectKey::ALL.to_vec());
        assert_eq!(
            index.highlights,
            vec![ProjectKey::Esteban, ProjectKey::Lem, ProjectKey::Mutter]
        );
    }

    #[test]
    fn index_serializes_lowercase_codes() {
        let json = serde_json::to_value(SiteIndex::build()).unwrap();
        assert_eq!(json["locales"], serde_json::json!(["es", "en"]));
        assert_eq!(json["projects"][3]["key"], "mutter");
        assert_eq!(json["projects"][3]["category"], "ecom");
        assert_eq!(json["projects"][2]["tags"]["en"][0], "Logistics");
    }
}
