//! Page Composer
//!
//! Orchestrates the sections into the full page, in fixed order:
//! navigation bar, hero, projects, experience, about, contact, footer.
//!
//! Composition is pure: the same content and options always produce the same
//! tree. Records are rendered independently, so a degraded record never stops
//! its siblings from rendering.

use serde::Serialize;

use crate::config::RenderOptions;
use crate::content::SiteContent;
use crate::page::sections::{about, contact, experience, footer, hero, nav, projects};
use crate::render::Element;

/// Composes the page from content tables.
#[derive(Debug, Clone, Default)]
pub struct PageComposer {
    options: RenderOptions,
}

impl PageComposer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Compose the complete page body.
    pub fn compose(&self, content: &SiteContent) -> Element {
        let main = Element::new("main")
            .child(hero::render(&content.profile, &content.links))
            .child(projects::render(content.projects))
            .child(experience::render(content.experience))
            .child(about::render(&content.profile, content.about_paragraphs))
            .child(contact::render(&content.profile, &content.links));

        let page = Element::new("div")
            .class("page")
            .child(nav::render(&content.profile))
            .child(main)
            .child(footer::render(&content.profile, self.options.year));

        tracing::debug!(
            "Composed page: {} project cards, {} experience entries",
            content.projects.len(),
            content.experience.len()
        );

        page
    }
}

/// Compose the compiled-in portfolio with default options.
pub fn compose_default() -> Element {
    PageComposer::default().compose(&SiteContent::portfolio())
}

/// Counts read back from a composed page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub sections: Vec<String>,
    pub project_cards: usize,
    pub tags: usize,
    pub experience_entries: usize,
    pub bullets: usize,
    pub outbound_links: usize,
}

impl PageSummary {
    pub fn of(page: &Element) -> Self {
        let sections = page
            .find_by_tag("section")
            .iter()
            .filter_map(|s| s.get_attr("id"))
            .map(str::to_string)
            .collect();

        Self {
            sections,
            project_cards: page.find_by_class("card").len(),
            tags: page.find_by_class("tag").len(),
            experience_entries: page.find_by_class("experience-entry").len(),
            bullets: page.find_by_class("bullet").len(),
            outbound_links: page
                .find_by_tag("a")
                .iter()
                .filter(|a| a.get_attr("target") == Some("_blank"))
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::data::{EXPERIENCE, LINKS, PROJECTS};

    #[test]
    fn test_section_order() {
        let summary = PageSummary::of(&compose_default());
        assert_eq!(
            summary.sections,
            vec!["home", "projects", "experience", "about", "contact"]
        );
    }

    #[test]
    fn test_page_layout() {
        let page = compose_default();
        let tags: Vec<&str> = page.child_elements().map(|e| e.tag).collect();
        assert_eq!(tags, vec!["header", "main", "footer"]);
    }

    #[test]
    fn test_default_page_links_are_literal() {
        let page = compose_default();
        let hero = page.find_by_id("home").unwrap();
        let hrefs: Vec<&str> = hero
            .find_by_class("hero-links")[0]
            .child_elements()
            .filter_map(|a| a.get_attr("href"))
            .collect();
        assert_eq!(hrefs, vec![LINKS.github.unwrap(), LINKS.linkedin.unwrap(), LINKS.resume.unwrap()]);
    }

    #[test]
    fn test_counts_match_tables() {
        let summary = PageSummary::of(&compose_default());
        assert_eq!(summary.project_cards, PROJECTS.len());
        assert_eq!(summary.tags, PROJECTS.iter().map(|p| p.tags.len()).sum::<usize>());
        assert_eq!(summary.experience_entries, EXPERIENCE.len());
        assert_eq!(summary.bullets, EXPERIENCE.iter().map(|e| e.bullets.len()).sum::<usize>());
        // hero: github, linkedin, resume; contact: say hello, connect, repos, inline email
        assert_eq!(summary.outbound_links, 7);
    }
}
