use crate::config::SiteConfig;
use crate::content::{integrity, Filter};
use crate::error::SiteError;
use crate::locale::Locale;
use crate::render::{Renderer, DEFAULT_STYLESHEET};
use crate::routes::{self, Routes};
use crate::view::{LandingPage, ListingView, ViewState};
use crate::SiteIndex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Writes the static site: landing and portfolio pages per language, the
/// assets, and `site.json`.
pub struct SiteGenerator {
    config: SiteConfig,
    renderer: Renderer,
    strict: bool,
}

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub pages: usize,
    pub assets: usize,
    pub issues: usize,
}

impl SiteGenerator {
    /// Fails when the output directory sits inside the assets directory,
    /// which would copy every previous build into the next one.
    pub fn new(config: SiteConfig) -> Result<Self, SiteError> {
        let output = std::path::absolute(&config.output_dir)
            .map_err(|e| SiteError::io(&config.output_dir, e))?;
        let assets = std::path::absolute(&config.assets_dir)
            .map_err(|e| SiteError::io(&config.assets_dir, e))?;
        if output.starts_with(&assets) {
            return Err(SiteError::OutputInsideAssets { output, assets });
        }

        Ok(Self {
            config,
            renderer: Renderer::new()?,
            strict: false,
        })
    }

    /// Fail on content integrity issues instead of logging them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.config.output_dir
    }

    pub fn generate(&self) -> Result<GenerationReport, SiteError> {
        let issues = integrity::check()?;
        for issue in &issues {
            tracing::warn!(%issue, "content integrity");
        }
        if self.strict && !issues.is_empty() {
            return Err(SiteError::Integrity(issues));
        }

        let out = &self.config.output_dir;
        fs::create_dir_all(out).map_err(|e| SiteError::io(out, e))?;
        tracing::info!(output = %out.display(), "generating site");

        let assets = self.copy_assets()?;
        let mut pages = 0;

        for &locale in Locale::all() {
            let landing = self.renderer.landing(&LandingPage::new(locale, Routes::Static, &self.config))?;
            self.write(PathBuf::from(locale.code()).join("index.html"), &landing)?;
            pages += 1;

            if locale == self.config.default_locale {
                self.write(PathBuf::from("index.html"), &landing)?;
                pages += 1;
            }

            for filter in Filter::ALL {
                let collapsed = ViewState::new().with_filter(filter);
                pages += self.write_listing(locale, &collapsed)?;

                for record in collapsed.visible() {
                    pages += self.write_listing(locale, &collapsed.with_toggled(record.key))?;
                }
            }
        }

        let index = serde_json::to_string_pretty(&SiteIndex::build())?;
        self.write(PathBuf::from("site.json"), &index)?;

        tracing::info!(pages, assets, issues = issues.len(), "site generated");
        Ok(GenerationReport {
            pages,
            assets,
            issues: issues.len(),
        })
    }

    fn write_listing(&self, locale: Locale, state: &ViewState) -> Result<usize, SiteError> {
        let page = ListingView::with_state(state.clone()).page(locale, Routes::Static, &self.config);
        let html = self.renderer.listing(&page)?;
        self.write(routes::static_file(locale, state), &html)?;
        Ok(1)
    }

    fn write(&self, rel: PathBuf, contents: &str) -> Result<(), SiteError> {
        let path = self.config.output_dir.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| SiteError::io(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| SiteError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "wrote");
        Ok(())
    }

    /// Mirror the assets directory into the output root. A missing
    /// stylesheet is replaced by the built-in one so pages never 404 on it.
    fn copy_assets(&self) -> Result<usize, SiteError> {
        let src = &self.config.assets_dir;
        let out = &self.config.output_dir;
        let mut copied = 0;

        if src.is_dir() {
            for entry in WalkDir::new(src).min_depth(1).follow_links(true) {
                let entry = entry.map_err(|source| SiteError::Walk {
                    path: src.clone(),
                    source,
                })?;
                let Ok(rel) = entry.path().strip_prefix(src) else {
                    continue;
                };
                let dest = out.join(rel);
                if entry.file_type().is_dir() {
                    fs::create_dir_all(&dest).map_err(|e| SiteError::io(&dest, e))?;
                } else if entry.file_type().is_file() {
                    fs::copy(entry.path(), &dest).map_err(|e| SiteError::io(entry.path(), e))?;
                    copied += 1;
                }
            }
        } else {
            tracing::warn!(assets = %src.display(), "assets directory not found");
        }

        let stylesheet = out.join("styles.css");
        if !stylesheet.is_file() {
            fs::write(&stylesheet, DEFAULT_STYLESHEET).map_err(|e| SiteError::io(&stylesheet, e))?;
        }
        Ok(copied)
    }
}
