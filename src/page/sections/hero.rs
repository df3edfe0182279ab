//! Hero: name, tagline, outbound link row and the profile summary panel.

use crate::content::{Links, Profile};
use crate::render::{icons, pill, Element, Node};

pub fn render(profile: &Profile, links: &Links) -> Element {
    Element::new("section")
        .attr("id", "home")
        .class("hero reveal")
        .child(
            Element::new("div")
                .class("container hero-grid")
                .child(
                    Element::new("div")
                        .child(Element::new("h1").class("hero-name").text(profile.name))
                        .child(Element::new("p").class("tagline").text(profile.tagline))
                        .child(link_row(links)),
                )
                .child(summary_panel(profile)),
        )
}

/// GitHub, LinkedIn, Resume; each only when present, each pointing at the
/// value exactly as supplied.
fn link_row(links: &Links) -> Element {
    let controls = [
        pill(
            links.github(),
            "pill-outline",
            vec![icons::github(), Node::text("GitHub")],
        ),
        pill(
            links.linkedin(),
            "pill-outline",
            vec![icons::linkedin(), Node::text("LinkedIn")],
        ),
        pill(
            links.resume(),
            "pill-solid",
            vec![icons::file_text(), Node::text("Resume"), icons::arrow_up_right()],
        ),
    ];

    Element::new("div")
        .class("hero-links")
        .children(controls.into_iter().flatten())
}

fn summary_panel(profile: &Profile) -> Element {
    let entries = [
        ("Location", profile.location),
        ("Email", profile.email),
        ("Open to", profile.open_to),
        ("Focus", profile.focus),
    ];

    Element::new("div").class("panel").child(
        Element::new("dl").class("summary").children(entries.into_iter().map(|(label, value)| {
            Element::new("div")
                .child(Element::new("dt").text(label))
                .child(Element::new("dd").text(value))
        })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::{LINKS, PROFILE};

    #[test]
    fn test_links_point_at_supplied_values() {
        let hero = render(&PROFILE, &LINKS);
        let row = hero.find_by_class("hero-links")[0];
        let hrefs: Vec<&str> = row.child_elements().filter_map(|a| a.get_attr("href")).collect();
        assert_eq!(
            hrefs,
            vec![
                "https://github.com/Atbcalvo",
                "https://linkedin.com/in/anherutowacalvo",
                "CV.pdf",
            ]
        );
    }

    #[test]
    fn test_summary_panel() {
        let hero = render(&PROFILE, &LINKS);
        let labels: Vec<String> = hero.find_by_tag("dt").iter().map(|e| e.text_content()).collect();
        assert_eq!(labels, vec!["Location", "Email", "Open to", "Focus"]);
        assert_eq!(hero.find_by_tag("dd")[1].text_content(), PROFILE.email);
    }

    #[test]
    fn test_no_links() {
        let hero = render(&PROFILE, &Links::default());
        assert_eq!(hero.find_by_class("hero-links")[0].children.len(), 0);
    }
}
