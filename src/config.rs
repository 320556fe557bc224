use crate::error::SiteError;
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Site settings. Every field has a default, so a config file only needs
/// the values it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Recipient of the "request detailed case" mail.
    pub contact_email: String,
    /// Target of the landing section's contact button.
    pub contact_anchor: String,
    pub default_locale: Locale,
    /// Images and stylesheet, copied into the output and served by the dev
    /// server.
    pub assets_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            contact_email: "r.opalo@icloud.com".to_string(),
            contact_anchor: "/#contacto".to_string(),
            default_locale: Locale::default(),
            assets_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("dist"),
        }
    }
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        let txt = fs::read_to_string(path).map_err(|e| SiteError::io(path, e))?;
        serde_json::from_str(&txt).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` when given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SiteError> {
        match path {
            Some(p) => {
                let config = Self::load(p)?;
                tracing::info!(path = %p.display(), "loaded site config");
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
