//! Projects grid: one card per project, in table order.

use crate::content::Project;
use crate::render::{card, icons, section, Element, Node};

/// Stagger between successive card entrance transitions.
pub const REVEAL_STAGGER_MS: usize = 50;

pub fn render(projects: &[Project]) -> Element {
    let cells = projects.iter().enumerate().map(|(i, project)| {
        Element::new("div")
            .class("reveal")
            .attr("style", format!("--reveal-delay: {}ms", i * REVEAL_STAGGER_MS))
            .child(project_card(project))
    });

    section(
        "projects",
        "Selected Projects",
        vec![Element::new("div").class("project-grid").children(cells).into()],
    )
}

fn project_card(project: &Project) -> Element {
    let mut head = Element::new("div").class("card-head");
    if !project.title.trim().is_empty() {
        head = head.child(Element::new("h3").class("card-title").text(project.title));
    }
    head = head.child(icons::external_link());

    let mut body: Vec<Node> = vec![
        head.into(),
        Element::new("p").class("card-blurb").text(project.blurb).into(),
    ];

    if !project.tags.is_empty() {
        body.push(
            Element::new("div")
                .class("tags")
                .children(
                    project
                        .tags
                        .iter()
                        .map(|tag| Element::new("span").class("tag").text(*tag)),
                )
                .into(),
        );
    }

    card(Some(project.href), body)
}
