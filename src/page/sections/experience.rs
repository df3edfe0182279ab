//! Experience list: one entry per record, in table order (never sorted).

use crate::content::ExperienceEntry;
use crate::render::{icons, section, Element};

pub fn render(entries: &[ExperienceEntry]) -> Element {
    let items = entries
        .iter()
        .filter(|entry| !entry.bullets.is_empty())
        .map(render_entry);

    section(
        "experience",
        "Experience",
        vec![Element::new("div").class("experience-list").children(items).into()],
    )
}

fn render_entry(entry: &ExperienceEntry) -> Element {
    let bullets = entry.bullets.iter().map(|bullet| {
        Element::new("li")
            .class("bullet")
            .child(icons::chevron_right())
            .child(Element::new("span").text(*bullet))
    });

    Element::new("div")
        .class("panel experience-entry")
        .child(
            Element::new("div")
                .class("entry-head")
                .child(
                    Element::new("div")
                        .class("entry-title")
                        .text(format!("{} • {}", entry.role, entry.org)),
                )
                .child(Element::new("div").class("entry-time").text(entry.time)),
        )
        .child(Element::new("ul").class("bullets").children(bullets))
}
