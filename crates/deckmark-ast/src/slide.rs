//! Slides, regions, and embedded code blocks

use serde::{Deserialize, Serialize};

use crate::attributes::Attributes;
use crate::layout::{Layout, DEFAULT_SLOT};

/// One presentation unit bounded by separators.
///
/// Slides are assembled by the parser with the `with_*` builder methods and
/// are read-only afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Slide {
    number: usize,
    layout: Layout,
    attributes: Attributes,
    own_attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    frontmatter: Option<String>,
    regions: Vec<Region>,
    raw_content: String,
    code_blocks: Vec<CodeBlock>,
    title: Option<String>,
    notes: Option<String>,
    source_line: Option<usize>,
}

/// A named content block inside a slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Slot name (`default`, `left`, `right`, ...)
    pub name: String,
    /// The region's lines, joined with `\n`, marker lines excluded
    pub content: String,
}

/// A fenced code sample, stored verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeBlock {
    /// Language tag (first word of the info string)
    pub lang: Option<String>,
    /// Rest of the info string after the language, e.g. `{2,3}`
    pub info: Option<String>,
    /// Lines between the fences
    pub content: String,
    /// 1-based source line of the opening fence
    pub start_line: usize,
}

impl Region {
    /// Create a region
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Whether the region holds only whitespace
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }
}

impl Slide {
    /// Create a slide with no content and a single empty `default` region
    pub fn new(number: usize, layout: Layout) -> Self {
        Self {
            number,
            layout,
            regions: vec![Region::new(DEFAULT_SLOT, "")],
            ..Default::default()
        }
    }

    /// Set the effective attributes (defaults merged with the slide's own)
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the attributes written in this slide's own frontmatter
    pub fn with_own_attributes(mut self, attributes: Attributes) -> Self {
        self.own_attributes = attributes;
        self
    }

    /// Set the frontmatter block exactly as written, without its separators
    pub fn with_frontmatter(mut self, raw: impl Into<String>) -> Self {
        self.frontmatter = Some(raw.into());
        self
    }

    /// Set the content regions
    pub fn with_regions(mut self, regions: Vec<Region>) -> Self {
        self.regions = regions;
        self
    }

    /// Set the raw body text
    pub fn with_raw_content(mut self, raw: impl Into<String>) -> Self {
        self.raw_content = raw.into();
        self
    }

    /// Set the fenced code blocks
    pub fn with_code_blocks(mut self, code_blocks: Vec<CodeBlock>) -> Self {
        self.code_blocks = code_blocks;
        self
    }

    /// Set the slide title
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    /// Set the speaker notes
    pub fn with_notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Set the source line of the first body line
    pub fn with_source_line(mut self, line: usize) -> Self {
        self.source_line = Some(line);
        self
    }

    /// 1-based position in the deck
    pub fn number(&self) -> usize {
        self.number
    }

    /// The slide's layout
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Effective attributes: deck defaults overlaid with the slide's frontmatter
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Only the attributes from this slide's own frontmatter block
    pub fn own_attributes(&self) -> &Attributes {
        &self.own_attributes
    }

    /// Look up an effective attribute
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key)
    }

    /// The frontmatter block as written, comments and blank lines included
    pub fn frontmatter(&self) -> Option<&str> {
        self.frontmatter.as_deref()
    }

    /// Content regions in slot order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Find a region by slot name
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Number of regions
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// The unprocessed body with frontmatter stripped
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// Fenced code blocks in source order
    pub fn code_blocks(&self) -> &[CodeBlock] {
        &self.code_blocks
    }

    /// Text of the first heading outside any fence
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Speaker notes taken from a trailing HTML comment
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// 1-based source line of the first body line
    pub fn source_line(&self) -> Option<usize> {
        self.source_line
    }

    /// Whether the body holds only whitespace
    pub fn is_blank(&self) -> bool {
        self.raw_content.trim().is_empty()
    }
}
