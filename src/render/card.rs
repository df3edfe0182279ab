//! Card renderer and the pill-shaped link controls.

use super::destination::Destination;
use super::node::{Element, Node};

/// Rel applied to everything opened in a new browsing context.
pub const NEW_CONTEXT_REL: &str = "noopener noreferrer";

/// Anchor element for `destination`, opening a new browsing context unless it
/// is a same-page anchor.
pub fn link(destination: &Destination) -> Element {
    let a = Element::new("a").attr("href", destination.href());
    if destination.opens_new_context() {
        a.attr("target", "_blank").attr("rel", NEW_CONTEXT_REL)
    } else {
        a
    }
}

/// Bordered clickable container. Without a destination the card renders as a
/// plain, non-clickable block.
pub fn card(destination: Option<&str>, children: Vec<Node>) -> Element {
    match destination.and_then(Destination::parse) {
        Some(dest) => link(&dest).class("card card-link").children(children),
        None => Element::new("div").class("card").children(children),
    }
}

/// Rounded link control used in the hero and contact rows. Returns `None` when
/// there is nowhere to go.
pub fn pill(destination: Option<&str>, variant: &str, children: Vec<Node>) -> Option<Element> {
    let dest = destination.and_then(Destination::parse)?;
    Some(link(&dest).class(&format!("pill {}", variant)).children(children))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_card_isolates_opener() {
        let c = card(Some("https://example.org"), vec!["x".into()]);
        assert_eq!(c.tag, "a");
        assert_eq!(c.get_attr("href"), Some("https://example.org"));
        assert_eq!(c.get_attr("target"), Some("_blank"));
        assert_eq!(c.get_attr("rel"), Some(NEW_CONTEXT_REL));
    }

    #[test]
    fn test_mailto_card_opens_new_context() {
        let c = card(Some("mailto:a@b.edu"), Vec::new());
        assert_eq!(c.get_attr("target"), Some("_blank"));
        assert_eq!(c.get_attr("rel"), Some(NEW_CONTEXT_REL));
    }

    #[test]
    fn test_anchor_card_stays_on_page() {
        let c = card(Some("#projects"), Vec::new());
        assert_eq!(c.tag, "a");
        assert_eq!(c.get_attr("target"), None);
    }

    #[test]
    fn test_card_href_matches_input_exactly() {
        let c = card(Some(" https://example.org/a "), Vec::new());
        assert_eq!(c.get_attr("href"), Some(" https://example.org/a "));
        assert_eq!(c.get_attr("target"), Some("_blank"));
    }

    #[test]
    fn test_missing_destination_is_not_clickable() {
        for dest in [None, Some(""), Some("   ")] {
            let c = card(dest, vec!["body".into()]);
            assert_eq!(c.tag, "div");
            assert_eq!(c.get_attr("href"), None);
            assert_eq!(c.text_content(), "body");
        }
    }

    #[test]
    fn test_pill() {
        assert!(pill(None, "pill-outline", Vec::new()).is_none());
        let p = pill(Some("https://github.com/x"), "pill-outline", vec!["GitHub".into()]).unwrap();
        assert!(p.has_class("pill"));
        assert!(p.has_class("pill-outline"));
        assert_eq!(p.text_content(), "GitHub");
    }
}
