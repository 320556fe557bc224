//! Site languages and the chrome strings both views share.
//!
//! The site ships in exactly two languages. The active [`Locale`] is never
//! stored in a global: pages are built for an explicit locale, and the
//! [`crate::view::Session`] owns the one value both views read.

mod catalog;

pub use catalog::Text;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported site languages. Spanish is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// ISO 639-1 code, also used as the `lang` query value and the static
    /// tree's top-level directory.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::Es => "es",
            Locale::En => "en",
        }
    }

    /// Parse a language code. Region suffixes (`es-UY`, `en_US`) and case
    /// are ignored.
    pub fn from_code(code: &str) -> Option<Locale> {
        let primary = code
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "es" => Some(Locale::Es),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    /// All supported languages, in display order.
    pub fn all() -> &'static [Locale] {
        &[Locale::Es, Locale::En]
    }

    /// The other language; what the language switch links to.
    pub fn toggled(self) -> Locale {
        match self {
            Locale::Es => Locale::En,
            Locale::En => Locale::Es,
        }
    }

    /// Pick the value for this locale out of a Spanish/English pair.
    pub fn pick<T>(self, es: T, en: T) -> T {
        match self {
            Locale::Es => es,
            Locale::En => en,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Alt text for a project cover image.
pub fn cover_alt(title: &str, locale: Locale) -> String {
    match locale {
        Locale::Es => format!("Imagen del proyecto {title}"),
        Locale::En => format!("Project cover: {title}"),
    }
}

/// Alt text for a highlight logo.
pub fn logo_alt(title: &str, locale: Locale) -> String {
    match locale {
        Locale::Es => format!("Logo de {title}"),
        Locale::En => format!("Logo of {title}"),
    }
}
