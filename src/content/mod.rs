//! Portfolio Content
//!
//! Fixed-shape, read-only records that drive the page. The records are built
//! once from the compiled-in tables in [`data`] and never mutated.
//!
//! ## Records
//! - `Profile` - name, tagline, about text, location, email, summary panel extras
//! - `Links` - optional github / linkedin / resume destinations
//! - `Project` - one card in the projects grid
//! - `ExperienceEntry` - one entry in the experience list

pub mod data;

use thiserror::Error;

/// Identity shown in the hero, summary panel, about and contact sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub tagline: &'static str,
    pub about: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    /// "Open to" entry of the summary panel
    pub open_to: &'static str,
    /// "Focus" entry of the summary panel
    pub focus: &'static str,
}

impl Profile {
    /// `mailto:` URI for the contact controls.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Outbound profile links. A `None` or blank value omits the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Links {
    pub github: Option<&'static str>,
    pub linkedin: Option<&'static str>,
    pub resume: Option<&'static str>,
}

impl Links {
    pub fn github(&self) -> Option<&'static str> {
        present(self.github)
    }

    pub fn linkedin(&self) -> Option<&'static str> {
        present(self.linkedin)
    }

    pub fn resume(&self) -> Option<&'static str> {
        present(self.resume)
    }
}

fn present(value: Option<&'static str>) -> Option<&'static str> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub blurb: &'static str,
    pub tags: &'static [&'static str],
    /// Card destination; `#` is a placeholder anchor
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceEntry {
    pub org: &'static str,
    pub role: &'static str,
    pub time: &'static str,
    pub bullets: &'static [&'static str],
}

/// All tables the page is composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteContent {
    pub profile: Profile,
    pub links: Links,
    pub projects: &'static [Project],
    pub experience: &'static [ExperienceEntry],
    /// Paragraphs following the profile's `about` text
    pub about_paragraphs: &'static [&'static str],
}

/// A content problem that degrades rendering without stopping it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentIssue {
    #[error("profile field '{0}' is blank")]
    BlankProfileField(&'static str),

    #[error("project #{index} has no title, rendering without a heading")]
    UntitledProject { index: usize },

    #[error("experience entry #{index} ({org}) has no bullets and is hidden")]
    EmptyExperience { index: usize, org: &'static str },
}

impl SiteContent {
    /// Scan the tables for values that will render degraded.
    pub fn issues(&self) -> Vec<ContentIssue> {
        let mut issues = Vec::new();

        let p = &self.profile;
        for (field, value) in [
            ("name", p.name),
            ("tagline", p.tagline),
            ("about", p.about),
            ("location", p.location),
            ("email", p.email),
            ("open_to", p.open_to),
            ("focus", p.focus),
        ] {
            if value.trim().is_empty() {
                issues.push(ContentIssue::BlankProfileField(field));
            }
        }

        for (index, project) in self.projects.iter().enumerate() {
            if project.title.trim().is_empty() {
                issues.push(ContentIssue::UntitledProject { index });
            }
        }

        for (index, entry) in self.experience.iter().enumerate() {
            if entry.bullets.is_empty() {
                issues.push(ContentIssue::EmptyExperience { index, org: entry.org });
            }
        }

        issues
    }

    /// Log every content issue as a warning.
    pub fn log_issues(&self) {
        for issue in self.issues() {
            tracing::warn!("Content issue: {}", issue);
        }
    }
}
