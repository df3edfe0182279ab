//! Errors for the outer surfaces (configuration, static build, server).
//!
//! Page composition itself is total and never returns these.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk assets: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    #[error("invalid base path '{0}': must be a plain path such as /personal-site/")]
    InvalidBasePath(String),

    #[error("invalid port '{0}'")]
    InvalidPort(String),
}

impl SiteError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
