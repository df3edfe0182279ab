//! Document shell rendered with Askama.
//!
//! The composed body is serialised by the render tree (which escapes its own
//! text) and dropped into the template unescaped.

use askama::Template;

use crate::config::RenderOptions;
use crate::content::SiteContent;
use crate::error::Result;
use crate::page::composer::PageComposer;

#[derive(Template)]
#[template(path = "page.html")]
pub struct PageTemplate {
    pub title: String,
    pub description: String,
    pub body: String,
}

/// Render the complete HTML document for `content`.
pub fn render_document(content: &SiteContent, options: &RenderOptions) -> Result<String> {
    let page = PageComposer::new(options.clone()).compose(content);

    let template = PageTemplate {
        title: content.profile.name.to_string(),
        description: content.profile.tagline.to_string(),
        body: crate::render::Node::from(page).to_html(),
    };

    Ok(template.render()?)
}
