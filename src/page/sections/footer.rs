use crate::content::Profile;
use crate::render::Element;

pub fn render(profile: &Profile, year: i32) -> Element {
    Element::new("footer").class("site-footer").child(
        Element::new("div")
            .class("container")
            .text(format!("© {} {}. Built with ❤️.", year, profile.name)),
    )
}
