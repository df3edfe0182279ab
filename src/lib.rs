//! Portfolio Site
//!
//! Renders a single-page personal portfolio from compiled-in tables.
//!
//! - `content/`: profile, links, projects and experience records plus the tables
//! - `render/`: render tree, destinations, and the generic section and card renderers
//! - `page/`: one module per page section, the composer, and the document shell
//! - `site_builder`: static build into an output directory
//! - `server` (feature `server`): preview server under the deployment base path

pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod page;
pub mod render;
pub mod site_builder;

#[cfg(feature = "server")]
pub mod server;

pub use config::{BasePath, RenderOptions, SiteConfig};
pub use content::{ContentIssue, ExperienceEntry, Links, Profile, Project, SiteContent};
pub use error::SiteError;
pub use page::{compose_default, render_document, PageComposer, PageSummary};
pub use site_builder::{BuildReport, SiteBuilder};

#[cfg(feature = "server")]
pub use server::{create_router, AppState};
