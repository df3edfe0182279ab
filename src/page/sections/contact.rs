//! Contact: email sentence plus the say-hello / connect / repos controls.

use crate::content::{Links, Profile};
use crate::render::{icons, link, pill, section, Destination, Element, Node};

pub fn render(profile: &Profile, links: &Links) -> Element {
    let mailto = profile.mailto();

    let mut sentence = Element::new("p").text("The fastest way to reach me is ");
    sentence = match Destination::parse(&mailto) {
        Some(dest) => sentence.child(link(&dest).class("inline-link").text("email")),
        None => sentence.text("email"),
    };
    sentence = sentence.text(". I'm open to interesting problems, collaborations, and speaking invites.");

    let controls = [
        pill(Some(mailto.as_str()), "pill-outline", vec![icons::mail(), Node::text("Say hello")]),
        pill(links.linkedin(), "pill-outline", vec![icons::linkedin(), Node::text("Connect")]),
        pill(links.github(), "pill-outline", vec![icons::github(), Node::text("Repos")]),
    ];

    section(
        "contact",
        "Contact",
        vec![Element::new("div")
            .class("panel contact")
            .child(sentence)
            .child(
                Element::new("div")
                    .class("contact-links")
                    .children(controls.into_iter().flatten()),
            )
            .into()],
    )
}
