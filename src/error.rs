use crate::content::integrity::IntegrityIssue;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("template registration failed: {0}")]
    Template(#[from] handlebars::TemplateError),

    #[error("render failed: {0}")]
    Render(#[from] handlebars::RenderError),

    #[error("embedded template {0} is not valid UTF-8")]
    TemplateEncoding(String),

    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walking {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("output {} is inside the assets directory {}", .output.display(), .assets.display())]
    OutputInsideAssets { output: PathBuf, assets: PathBuf },

    #[error("{} content integrity issue(s)", .0.len())]
    Integrity(Vec<IntegrityIssue>),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}
