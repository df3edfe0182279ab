//! Static site build
//!
//! Writes the rendered document to `<out_dir>/index.html` and copies the
//! static assets (resume and friends) next to it, ready to be published under
//! the configured base path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::config::{RenderOptions, SiteConfig};
use crate::content::SiteContent;
use crate::error::{Result, SiteError};
use crate::page::{render_document, PageComposer, PageSummary};

#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub index_path: PathBuf,
    pub assets_copied: usize,
    pub page: PageSummary,
}

pub struct SiteBuilder {
    out_dir: PathBuf,
    assets_dir: PathBuf,
    options: RenderOptions,
}

impl SiteBuilder {
    pub fn new(out_dir: impl Into<PathBuf>, assets_dir: impl Into<PathBuf>, options: RenderOptions) -> Self {
        Self {
            out_dir: out_dir.into(),
            assets_dir: assets_dir.into(),
            options,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.out_dir, &config.assets_dir, config.render_options())
    }

    pub fn build(&self, content: &SiteContent) -> Result<BuildReport> {
        content.log_issues();

        fs::create_dir_all(&self.out_dir).map_err(|e| SiteError::io(&self.out_dir, e))?;

        let html = render_document(content, &self.options)?;
        let index_path = self.out_dir.join("index.html");
        fs::write(&index_path, html).map_err(|e| SiteError::io(&index_path, e))?;
        tracing::info!("Wrote {}", index_path.display());

        let assets_copied = if self.assets_dir.is_dir() {
            copy_dir(&self.assets_dir, &self.out_dir)?
        } else {
            tracing::warn!(
                "Assets directory {} not found, skipping asset copy",
                self.assets_dir.display()
            );
            0
        };

        let page = PageSummary::of(&PageComposer::new(self.options.clone()).compose(content));

        Ok(BuildReport {
            index_path,
            assets_copied,
            page,
        })
    }
}

/// Copy the tree under `from` into `to`, returning the number of files copied.
///
/// Symlinks are not followed into directories. A link to a regular file is
/// copied as that file; any other link is skipped.
fn copy_dir(from: &Path, to: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(from).min_depth(1) {
        let entry = entry?;
        let source = entry.path();
        let relative = match source.strip_prefix(from) {
            Ok(relative) => relative,
            Err(_) => continue,
        };
        let target = to.join(relative);
        let file_type = entry.file_type();

        if file_type.is_dir() {
            fs::create_dir_all(&target).map_err(|e| SiteError::io(&target, e))?;
            continue;
        }

        let is_file = file_type.is_file()
            || (file_type.is_symlink() && fs::metadata(source).map(|m| m.is_file()).unwrap_or(false));
        if !is_file {
            tracing::warn!("Skipping {}: not a regular file", source.display());
            continue;
        }

        fs::copy(source, &target).map_err(|e| SiteError::io(&target, e))?;
        tracing::debug!("Copied {} -> {}", source.display(), target.display());
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BasePath;

    #[test]
    fn test_build_writes_index_and_assets() {
        let out = tempfile::tempdir().unwrap();
        let assets = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("CV.pdf"), b"%PDF-1.4").unwrap();
        fs::create_dir(assets.path().join("img")).unwrap();
        fs::write(assets.path().join("img").join("me.png"), b"png").unwrap();

        let options = RenderOptions::new(BasePath::default()).with_year(2025);
        let report = SiteBuilder::new(out.path(), assets.path(), options)
            .build(&SiteContent::portfolio())
            .unwrap();

        assert_eq!(report.assets_copied, 2);
        assert!(out.path().join("CV.pdf").exists());
        assert!(out.path().join("img").join("me.png").exists());

        let html = fs::read_to_string(&report.index_path).unwrap();
        assert!(html.contains("href=\"CV.pdf\""));
        assert_eq!(report.page.project_cards, SiteContent::portfolio().projects.len());
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_dirs_are_not_followed() {
        let out = tempfile::tempdir().unwrap();
        let assets = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("CV.pdf"), b"%PDF-1.4").unwrap();
        fs::create_dir(assets.path().join("img")).unwrap();
        fs::write(assets.path().join("img").join("me.png"), b"png").unwrap();
        // a cycle back to the assets root, and a link to a real file
        std::os::unix::fs::symlink("..", assets.path().join("img").join("loop")).unwrap();
        std::os::unix::fs::symlink(assets.path().join("CV.pdf"), assets.path().join("resume.pdf")).unwrap();

        let report = SiteBuilder::new(out.path(), assets.path(), RenderOptions::default())
            .build(&SiteContent::portfolio())
            .unwrap();

        assert_eq!(report.assets_copied, 3);
        assert!(out.path().join("img").join("me.png").exists());
        assert_eq!(fs::read(out.path().join("resume.pdf")).unwrap(), b"%PDF-1.4");
        assert!(!out.path().join("img").join("loop").exists());
    }

    #[test]
    fn test_missing_assets_dir_is_not_fatal() {
        let out = tempfile::tempdir().unwrap();
        let missing = out.path().join("does-not-exist");

        let report = SiteBuilder::new(out.path().join("dist"), missing, RenderOptions::default())
            .build(&SiteContent::portfolio())
            .unwrap();

        assert_eq!(report.assets_copied, 0);
        assert!(report.index_path.exists());
    }
}
