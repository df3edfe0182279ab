//! Section renderer: a titled, anchorable block.
//!
//! The `section` class reserves scroll margin for the sticky navigation bar so
//! anchor jumps do not land underneath it.

use super::node::{Element, Node};

pub fn section(id: &str, title: &str, children: Vec<Node>) -> Element {
    Element::new("section")
        .attr("id", id)
        .attr("aria-label", title)
        .class("section")
        .child(
            Element::new("div")
                .class("container")
                .child(Element::new("h2").class("section-title").text(title))
                .child(Element::new("div").class("section-body").children(children)),
        )
}
