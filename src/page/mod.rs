//! Page composition: sections, composer and the document shell.

pub mod composer;
pub mod document;
pub mod sections;

pub use composer::{compose_default, PageComposer, PageSummary};
pub use document::{render_document, PageTemplate};
