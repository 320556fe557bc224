//! Outbound links: mail, contact anchor, project sites.

use crate::locale::{Locale, Text};

/// `mailto:` link for the "request detailed case" button, subject in the
/// visitor's language.
pub fn request_case_mailto(email: &str, locale: Locale) -> String {
    mailto(email, Text::RequestCaseSubject.get(locale))
}

pub fn mailto(email: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", email, urlencoding::encode(subject))
}
