//! Sticky navigation bar with same-page anchors.

use crate::content::Profile;
use crate::render::{icons, Element};

/// In-page anchors in navigation order (label, target).
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("Projects", "#projects"),
    ("Experience", "#experience"),
    ("About", "#about"),
];

pub fn render(profile: &Profile) -> Element {
    let links = NAV_LINKS
        .iter()
        .map(|(label, href)| Element::new("a").attr("href", *href).class("nav-link").text(*label));

    Element::new("header").class("site-header").child(
        Element::new("nav")
            .class("container nav")
            .child(Element::new("a").attr("href", "#home").class("brand").text(profile.name))
            .child(
                Element::new("div")
                    .class("nav-links")
                    .children(links)
                    .child(
                        Element::new("a")
                            .attr("href", "#contact")
                            .class("pill pill-outline pill-small")
                            .child(icons::mail())
                            .text("Contact"),
                    ),
            ),
    )
}
