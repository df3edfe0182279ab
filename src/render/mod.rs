//! Generic renderers: the render tree, destinations, sections and cards.

pub mod card;
pub mod destination;
pub mod icons;
pub mod node;
pub mod section;

pub use card::{card, link, pill, NEW_CONTEXT_REL};
pub use destination::Destination;
pub use node::{Element, Node};
pub use section::section;
