//! About: the profile blurb as a lead paragraph, then the extra paragraphs.

use crate::content::Profile;
use crate::render::{section, Element};

pub fn render(profile: &Profile, paragraphs: &[&str]) -> Element {
    let lead = Element::new("p").class("lead").text(profile.about);
    let rest = paragraphs.iter().map(|p| Element::new("p").text(*p));

    section(
        "about",
        "About",
        vec![Element::new("div").class("prose").child(lead).children(rest).into()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::{ABOUT_PARAGRAPHS, PROFILE};

    #[test]
    fn test_every_block_is_a_paragraph() {
        let s = render(&PROFILE, ABOUT_PARAGRAPHS);
        let prose = s.find_by_class("prose")[0];
        assert_eq!(prose.child_elements().count(), 1 + ABOUT_PARAGRAPHS.len());
        assert!(prose.child_elements().all(|e| e.tag == "p"));
        assert_eq!(prose.find_by_class("lead")[0].text_content(), PROFILE.about);
    }
}
