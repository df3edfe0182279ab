//! Page sections, top to bottom.
//!
//! Each module renders one part of the page from the content tables.

pub mod about;
pub mod contact;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod nav;
pub mod projects;
