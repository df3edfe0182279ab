//! Configuration
//!
//! The deployment path prefix says where the page is published. Links on the
//! page stay exactly as authored; relative ones resolve against the page URL.
//! The remaining settings only affect where the binaries write or listen.
//!
//! Environment variables:
//! - `BASE_PATH` (default `/personal-site/`)
//! - `PORT` (default 3000)
//! - `OUT_DIR` (default `dist`)
//! - `ASSETS_DIR` (default `public`)

use std::fmt;
use std::path::PathBuf;

use chrono::Datelike;

use crate::error::{Result, SiteError};

pub const DEFAULT_BASE_PATH: &str = "/personal-site/";

/// Deployment path prefix, always with a leading and trailing slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BasePath(String);

impl BasePath {
    pub fn new(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.contains("://")
            || trimmed.chars().any(|c| c.is_whitespace() || c == '?' || c == '#')
        {
            return Err(SiteError::InvalidBasePath(raw.to_string()));
        }

        let inner = trimmed.trim_matches('/');
        if inner.is_empty() {
            return Ok(Self("/".to_string()));
        }
        Ok(Self(format!("/{}/", inner)))
    }

    pub fn root() -> Self {
        Self("/".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `path` under this prefix.
    pub fn join(&self, path: &str) -> String {
        format!("{}{}", self.0, path.trim_start_matches('/'))
    }

}

impl Default for BasePath {
    fn default() -> Self {
        Self(DEFAULT_BASE_PATH.to_string())
    }
}

impl fmt::Display for BasePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Inputs to page composition besides the content tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub base_path: BasePath,
    /// Footer copyright year
    pub year: i32,
}

impl RenderOptions {
    /// Options for `base_path`, stamped with the current UTC year.
    pub fn new(base_path: BasePath) -> Self {
        Self {
            base_path,
            year: chrono::Utc::now().year(),
        }
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(BasePath::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub base_path: BasePath,
    pub port: u16,
    pub out_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_path = match lookup("BASE_PATH") {
            Some(raw) => BasePath::new(&raw)?,
            None => BasePath::default(),
        };

        let port: u16 = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| SiteError::InvalidPort(raw.clone()))?,
            None => 3000,
        };

        let out_dir: PathBuf = lookup("OUT_DIR").unwrap_or_else(|| "dist".to_string()).into();
        let assets_dir: PathBuf = lookup("ASSETS_DIR").unwrap_or_else(|| "public".to_string()).into();

        Ok(Self {
            base_path,
            port,
            out_dir,
            assets_dir,
        })
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new(self.base_path.clone())
    }

    pub fn log(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  BASE_PATH: {}", self.base_path);
        tracing::info!("  PORT: {}", self.port);
        tracing::info!("  OUT_DIR: {}", self.out_dir.display());
        tracing::info!("  ASSETS_DIR: {}", self.assets_dir.display());
    }
}
