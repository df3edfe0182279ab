//! Destination classification for clickable controls.

use url::Url;

/// Where a card or link control points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Same-page anchor (`#projects`, or the `#` placeholder)
    Anchor(String),
    /// `mailto:` URI
    Mailto(String),
    /// Absolute URL with any other scheme (http, https, ...)
    External(String),
    /// Relative document path, resolved by the browser against the page URL (`CV.pdf`)
    Document(String),
}

impl Destination {
    /// Classify a raw destination. Blank input has no destination.
    ///
    /// Surrounding whitespace only matters for classification; the href keeps
    /// the value exactly as supplied.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with('#') {
            return Some(Destination::Anchor(raw.to_string()));
        }
        match Url::parse(trimmed) {
            Ok(url) if url.scheme() == "mailto" => Some(Destination::Mailto(raw.to_string())),
            Ok(_) => Some(Destination::External(raw.to_string())),
            Err(_) => Some(Destination::Document(raw.to_string())),
        }
    }

    pub fn href(&self) -> &str {
        match self {
            Destination::Anchor(h)
            | Destination::Mailto(h)
            | Destination::External(h)
            | Destination::Document(h) => h,
        }
    }

    /// Everything except same-page anchors opens in a new browsing context.
    pub fn opens_new_context(&self) -> bool {
        !matches!(self, Destination::Anchor(_))
    }
}
