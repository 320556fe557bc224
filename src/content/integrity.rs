//! Authoring checks the type system cannot express.
//!
//! Missing metadata or case studies are compile errors (see the module
//! docs of [`crate::content`]). What is left: both languages must carry the
//! same number of facts, links must be absolute `https` URLs and image
//! references must point into `/img/`.

use super::highlights::HIGHLIGHTS;
use super::{copy, detail, metadata, Facts, Localized, ProjectKey, PROJECTS};
use crate::error::SiteError;
use regex::Regex;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityIssue {
    #[error("{key}: {field} has {es} Spanish entries but {en} English entries")]
    FactCountMismatch {
        key: ProjectKey,
        field: &'static str,
        es: usize,
        en: usize,
    },
    #[error("{key}: {field} is empty")]
    Empty { key: ProjectKey, field: &'static str },
    #[error("{key}: link {href} is not an https URL")]
    BadLink { key: ProjectKey, href: &'static str },
    #[error("{key}: image {path} is not an /img/ asset")]
    BadImage { key: ProjectKey, path: &'static str },
}

/// Run every check over the content store and the highlight list.
pub fn check() -> Result<Vec<IntegrityIssue>, SiteError> {
    let link_re = Regex::new(r"^https://[A-Za-z0-9.-]+\.[A-Za-z]{2,}(/\S*)?$")?;
    let image_re = Regex::new(r"^/img/[A-Za-z0-9._-]+\.(jpe?g|png|svg|webp)$")?;

    let mut issues = Vec::new();

    for project in PROJECTS.iter() {
        let key = project.key;
        if !link_re.is_match(project.href) {
            issues.push(IntegrityIssue::BadLink { key, href: project.href });
        }
        if !image_re.is_match(project.cover) {
            issues.push(IntegrityIssue::BadImage { key, path: project.cover });
        }

        check_facts(key, "tags", &metadata(key).tags, &mut issues);

        let copy = copy(key);
        if copy.title.trim().is_empty() {
            issues.push(IntegrityIssue::Empty { key, field: "title" });
        }
        check_text(key, "description", &copy.description, &mut issues);
        check_text(key, "link", &copy.link, &mut issues);

        let case = detail(key);
        check_text(key, "summary", &case.summary, &mut issues);
        for (field, facts) in case.fields() {
            check_facts(key, field, facts, &mut issues);
        }
    }

    for highlight in HIGHLIGHTS.iter() {
        if !image_re.is_match(highlight.logo) {
            issues.push(IntegrityIssue::BadImage {
                key: highlight.key,
                path: highlight.logo,
            });
        }
        check_text(highlight.key, "highlight summary", &highlight.summary, &mut issues);
    }

    Ok(issues)
}

fn check_facts(key: ProjectKey, field: &'static str, facts: &Facts, issues: &mut Vec<IntegrityIssue>) {
    match *facts {
        Localized::Shared(list) => {
            if list.is_empty() {
                issues.push(IntegrityIssue::Empty { key, field });
            }
        }
        Localized::Split { es, en } => {
            if es.is_empty() && en.is_empty() {
                issues.push(IntegrityIssue::Empty { key, field });
            } else if es.len() != en.len() {
                issues.push(IntegrityIssue::FactCountMismatch {
                    key,
                    field,
                    es: es.len(),
                    en: en.len(),
                });
            }
        }
    }
}

fn check_text(
    key: ProjectKey,
    field: &'static str,
    text: &Localized<&'static str>,
    issues: &mut Vec<IntegrityIssue>,
) {
    let empty = match *text {
        Localized::Shared(value) => value.trim().is_empty(),
        Localized::Split { es, en } => es.trim().is_empty() || en.trim().is_empty(),
    };
    if empty {
        issues.push(IntegrityIssue::Empty { key, field });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::facts;

    #[test]
    fn authored_content_is_clean() {
        let issues = check().unwrap();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn flags_uneven_fact_counts() {
        let mut issues = Vec::new();
        let uneven = facts(&["uno", "dos"], &["one"]);
        check_facts(ProjectKey::Lem, "results", &uneven, &mut issues);
        assert_eq!(
            issues,
            vec![IntegrityIssue::FactCountMismatch {
                key: ProjectKey::Lem,
                field: "results",
                es: 2,
                en: 1,
            }]
        );
        assert_eq!(
            issues[0].to_string(),
            "lem: results has 2 Spanish entries but 1 English entries"
        );
    }

    #[test]
    fn flags_empty_lists_and_text() {
        let mut issues = Vec::new();
        check_facts(ProjectKey::Boating, "stack", &facts(&[], &[]), &mut issues);
        check_text(
            ProjectKey::Boating,
            "summary",
            &Localized::Split { es: "algo", en: "  " },
            &mut issues,
        );
        assert_eq!(issues.len(), 2);
        assert!(issues
            .iter()
            .all(|i| matches!(i, IntegrityIssue::Empty { key: ProjectKey::Boating, .. })));
    }
}
