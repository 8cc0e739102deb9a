//! Deck root and headmatter definitions

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::slide::Slide;

/// A complete slide deck parsed from one document.
///
/// The deck is read-only once built: slides are exposed by shared reference
/// and there is no way to add, remove, or reorder them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Deck {
    meta: DeckMeta,
    slides: Vec<Slide>,
}

/// Deck-level configuration from the headmatter block
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckMeta {
    /// Headmatter key/value pairs, in authored order
    pub attributes: Attributes,

    /// The headmatter block exactly as written, without its separators
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    /// The document opened with a separator that did not start a headmatter block
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub leading_separator: bool,
}

impl Deck {
    /// Build a deck from its headmatter and slides
    pub fn new(meta: DeckMeta, slides: Vec<Slide>) -> Self {
        Self { meta, slides }
    }

    /// Headmatter configuration
    pub fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    /// Number of slides
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide at a 0-based index
    pub fn slide_at(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Iterate over slides in presentation order
    pub fn slides(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }

    /// Check if the deck has no slides
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Slide bodies in order, joined by the separator line.
    ///
    /// This reproduces the document's narrative with every metadata block
    /// stripped.
    pub fn narrative(&self, separator: &str) -> String {
        let joiner = format!("\n{}\n", separator);
        self.slides
            .iter()
            .map(|s| s.raw_content())
            .collect::<Vec<_>>()
            .join(&joiner)
    }
}

impl DeckMeta {
    /// Create headmatter from attributes
    pub fn new(attributes: Attributes) -> Self {
        Self {
            attributes,
            ..Default::default()
        }
    }

    /// Keep the headmatter block as written
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    /// The `theme` attribute
    pub fn theme(&self) -> Option<&str> {
        self.attributes.get("theme")
    }

    /// The `title` attribute
    pub fn title(&self) -> Option<&str> {
        self.attributes.get("title")
    }

    /// Get any headmatter attribute
    pub fn get_attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }
}
