//! HTML output. Templates live in `templates/` and are compiled into the
//! binary; files starting with `_` are partials (`_card.hbs` is `{{> card}}`).

use crate::error::SiteError;
use crate::view::{LandingPage, ListingPage};
use handlebars::Handlebars;
use include_dir::{include_dir, Dir};

static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Stylesheet written to the output when the assets directory has none.
pub const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, SiteError> {
        let mut registry = Handlebars::new();
        // A field the page model lacks is a bug, not an empty string.
        registry.set_strict_mode(true);

        for file in TEMPLATES.files() {
            let path = file.path();
            if path.extension().and_then(|e| e.to_str()) != Some("hbs") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let source = file
                .contents_utf8()
                .ok_or_else(|| SiteError::TemplateEncoding(path.display().to_string()))?;
            match stem.strip_prefix('_') {
                Some(partial) => registry.register_partial(partial, source)?,
                None => registry.register_template_string(stem, source)?,
            }
            tracing::debug!(template = stem, "registered template");
        }

        Ok(Self { registry })
    }

    pub fn landing(&self, page: &LandingPage) -> Result<String, SiteError> {
        Ok(self.registry.render("landing", page)?)
    }

    pub fn listing(&self, page: &ListingPage) -> Result<String, SiteError> {
        Ok(self.registry.render("listing", page)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_pages_and_partials() {
        let renderer = Renderer::new().unwrap();
        assert!(renderer.registry.has_template("landing"));
        assert!(renderer.registry.has_template("listing"));
        assert!(!renderer.registry.has_template("_card"));
    }

    #[test]
    fn strict_mode_rejects_missing_fields() {
        let renderer = Renderer::new().unwrap();
        let err = renderer.registry.render("listing", &serde_json::json!({ "lang": "es" }));
        assert!(err.is_err());
    }
}
