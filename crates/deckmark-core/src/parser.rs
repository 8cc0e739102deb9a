//! Slide deck parser
//!
//! This module turns a Markdown slide document into a [`Deck`].
//!
//! # Format
//!
//! - Slides are separated by a line holding only `---`.
//! - A `---` on the very first line may open the headmatter: `key: value`
//!   lines up to the next `---`. Headmatter attributes are defaults for every
//!   slide. `---` twice in a row at the top is an empty headmatter.
//! - After any other separator, a block of the same shape is that slide's
//!   frontmatter.
//! - A block only counts as metadata when it opens with a `key: value` line,
//!   is closed by `---`, and holds nothing but blank, comment, or colon lines.
//!   Otherwise those lines are slide content, so prose such as
//!   `Example: counting clicks` is never swallowed. The one exception is an
//!   unclosed headmatter, which is an error.
//! - Multi-column layouts split their body on marker lines such as `::right::`.
//! - Inside fenced code (```` ``` ```` or `~~~`) none of the above applies.
//!
//! # Example
//!
//! ```
//! use deckmark_core::parser;
//!
//! let input = "---\ntheme: default\n---\n\n# Hooks\n\n---\nlayout: two-cols\n---\n\nLeft\n::right::\nRight\n";
//!
//! let deck = parser::parse(input)?;
//! assert_eq!(deck.slide_count(), 2);
//! assert_eq!(deck.meta().theme(), Some("default"));
//! assert_eq!(deck.slide_at(1).map(|s| s.region_count()), Some(2));
//! # Ok::<(), deckmark_core::ParseError>(())
//! ```

use deckmark_ast::{Attributes, CodeBlock, Deck, DeckMeta, Layout, Region, Slide, DEFAULT_SLOT};
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{ParseError, Result};
use crate::metadata;
use crate::scanner::{self, Fence};

/// A source line with its 1-based number
type Line<'a> = (usize, &'a str);

/// A parsed deck together with the non-fatal findings from parsing it
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutput {
    /// The parsed deck
    pub deck: Deck,
    /// Warnings collected along the way
    pub diagnostics: Diagnostics,
}

/// Raw slide text between two separators
#[derive(Debug, Default)]
struct Chunk<'a> {
    /// Lines of the slide's own metadata block, if it has one
    frontmatter: Option<Vec<Line<'a>>>,
    /// Body lines after the metadata block
    body: Vec<Line<'a>>,
    /// Line number where the body starts
    start_line: usize,
}

impl<'a> Chunk<'a> {
    fn starting_at(start_line: usize) -> Self {
        Self {
            start_line,
            ..Default::default()
        }
    }

    /// A chunk with no metadata and nothing but whitespace
    fn is_empty_tail(&self) -> bool {
        self.frontmatter.is_none() && self.body.iter().all(|(_, text)| scanner::is_blank(text))
    }
}

/// A document cut into its headmatter block and slide chunks
#[derive(Debug, Default)]
struct Split<'a> {
    headmatter: Option<Vec<Line<'a>>>,
    /// The first line was a separator that opened no headmatter
    leading_separator: bool,
    chunks: Vec<Chunk<'a>>,
}

/// How a metadata block found by [`metadata_block`] ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockEnd {
    /// Closed by the separator at this line index
    Closed(usize),
    /// Reached the end of the document first
    Unterminated,
}

/// Everything collected from a slide body in one pass
struct BodyScan<'a> {
    markers: Vec<(usize, usize, &'a str)>,
    code_blocks: Vec<CodeBlock>,
    title: Option<String>,
    last_fence_close: Option<usize>,
}

/// Deck parser
pub struct Parser {
    config: ParserConfig,
    diagnostics: Diagnostics,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a parser with a custom configuration
    pub fn with_config(config: ParserConfig) -> Self {
        Self {
            config,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Parse a document into a deck, discarding warnings
    pub fn parse(self, text: &str) -> Result<Deck> {
        self.parse_with_diagnostics(text).map(|output| output.deck)
    }

    /// Parse a document into a deck and return the warnings as well
    pub fn parse_with_diagnostics(mut self, text: &str) -> Result<ParseOutput> {
        let text = text.replace("\r\n", "\n");
        let lines: Vec<Line<'_>> = text.lines().enumerate().map(|(i, l)| (i + 1, l)).collect();

        let split = self.split_chunks(&lines)?;

        let mut meta = match &split.headmatter {
            Some(block) => {
                DeckMeta::new(metadata::parse_block(block, 0, &mut self.diagnostics)?)
                    .with_raw(join(block))
            }
            None => DeckMeta::default(),
        };
        meta.leading_separator = split.leading_separator;
        let defaults = meta.attributes.clone();

        let mut slides = Vec::with_capacity(split.chunks.len());
        for (index, chunk) in split.chunks.iter().enumerate() {
            slides.push(self.build_slide(index + 1, chunk, &defaults)?);
        }

        debug!(
            slides = slides.len(),
            warnings = self.diagnostics.warning_count(),
            "parsed deck"
        );

        Ok(ParseOutput {
            deck: Deck::new(meta, slides),
            diagnostics: self.diagnostics,
        })
    }

    /// Split the document into the headmatter block and per-slide chunks.
    ///
    /// Separators inside open fences are body text. A trailing chunk that is
    /// blank and carries no metadata (a dangling separator) is dropped.
    fn split_chunks<'a>(&self, lines: &[Line<'a>]) -> Result<Split<'a>> {
        let sep = self.config.separator.as_str();
        let mut split = Split::default();
        let mut i = 0;

        if let Some(&(line, text)) = lines.first() {
            if scanner::is_separator(text, sep) {
                let empty_block = lines
                    .get(1)
                    .is_some_and(|&(_, next)| scanner::is_separator(next, sep));

                match metadata_block(lines, 1, sep) {
                    Some(BlockEnd::Closed(close)) => {
                        split.headmatter = Some(lines[1..close].to_vec());
                        i = close + 1;
                    }
                    Some(BlockEnd::Unterminated) => {
                        return Err(ParseError::UnterminatedMetadata { slide: 0, line });
                    }
                    None if empty_block => {
                        split.headmatter = Some(Vec::new());
                        i = 2;
                    }
                    None => {
                        split.leading_separator = true;
                        i = 1;
                    }
                }
            }
        }

        let mut current = Chunk::starting_at(i + 1);
        let mut fence: Option<Fence> = None;

        while i < lines.len() {
            let (line, text) = lines[i];
            i += 1;

            if let Some(open) = &fence {
                if open.closes(text) {
                    fence = None;
                }
                current.body.push((line, text));
                continue;
            }

            if let Some(open) = Fence::open(text, line) {
                fence = Some(open);
                current.body.push((line, text));
                continue;
            }

            if !scanner::is_separator(text, sep) {
                current.body.push((line, text));
                continue;
            }

            split
                .chunks
                .push(std::mem::replace(&mut current, Chunk::starting_at(i + 1)));

            // An unclosed block after a separator is slide content
            if let Some(BlockEnd::Closed(close)) = metadata_block(lines, i, sep) {
                current.frontmatter = Some(lines[i..close].to_vec());
                current.start_line = close + 2;
                i = close + 1;
            }
        }

        if let Some(open) = fence {
            return Err(ParseError::UnterminatedCodeFence {
                slide: split.chunks.len() + 1,
                line: open.line,
            });
        }

        if !current.is_empty_tail() {
            split.chunks.push(current);
        }

        Ok(split)
    }

    /// Turn one chunk into a slide
    fn build_slide(&mut self, number: usize, chunk: &Chunk<'_>, defaults: &Attributes) -> Result<Slide> {
        let own = match &chunk.frontmatter {
            Some(block) => metadata::parse_block(block, number, &mut self.diagnostics)?,
            None => Attributes::new(),
        };

        let effective = if self.config.inherit_headmatter {
            defaults.merged_with(&own)
        } else {
            own.clone()
        };

        let layout = self.resolve_layout(number, effective.get("layout"))?;
        let scan = scan_body(number, &chunk.body)?;
        let regions = split_regions(number, &layout, &chunk.body, &scan.markers)?;

        let notes = if self.config.extract_notes {
            let tail_start = scan.last_fence_close.map_or(0, |idx| idx + 1);
            trailing_comment(&join(&chunk.body[tail_start..]))
        } else {
            None
        };

        debug!(
            slide = number,
            layout = %layout,
            regions = regions.len(),
            code_blocks = scan.code_blocks.len(),
            "parsed slide"
        );

        let mut slide = Slide::new(number, layout)
            .with_attributes(effective)
            .with_own_attributes(own);
        if let Some(block) = &chunk.frontmatter {
            slide = slide.with_frontmatter(join(block));
        }

        Ok(slide
            .with_regions(regions)
            .with_raw_content(join(&chunk.body))
            .with_code_blocks(scan.code_blocks)
            .with_title(scan.title)
            .with_notes(notes)
            .with_source_line(chunk.start_line))
    }

    /// Map the `layout` attribute to a [`Layout`]
    fn resolve_layout(&mut self, number: usize, name: Option<&str>) -> Result<Layout> {
        let layout = Layout::from_name(name.unwrap_or_default());
        if layout.is_known() {
            return Ok(layout);
        }

        if self.config.strict_layouts {
            return Err(ParseError::UnknownLayout {
                slide: number,
                name: layout.name().to_string(),
            });
        }

        warn!(slide = number, layout = %layout, "unknown layout");
        self.diagnostics.push(
            Diagnostic::warning(format!("Unknown layout '{}'", layout))
                .with_code("DECK102")
                .with_slide(number)
                .with_help("The slide is kept with a single region"),
        );
        Ok(layout)
    }
}

/// Find a metadata block starting at line index `from`.
///
/// The block must open with a `key: value` entry. It is rejected as soon as
/// a line is neither a separator nor a [block line](metadata::is_block_line),
/// or a fence opens.
fn metadata_block(lines: &[Line<'_>], from: usize, sep: &str) -> Option<BlockEnd> {
    let &(_, first) = lines.get(from)?;
    if !metadata::looks_like_entry(first) {
        return None;
    }

    for (idx, &(line, text)) in lines.iter().enumerate().skip(from) {
        if scanner::is_separator(text, sep) {
            return Some(BlockEnd::Closed(idx));
        }
        if Fence::open(text, line).is_some() || !metadata::is_block_line(text) {
            return None;
        }
    }

    Some(BlockEnd::Unterminated)
}

/// Collect region markers, code blocks and the title from a slide body
fn scan_body<'a>(number: usize, body: &[Line<'a>]) -> Result<BodyScan<'a>> {
    let mut scan = BodyScan {
        markers: Vec::new(),
        code_blocks: Vec::new(),
        title: None,
        last_fence_close: None,
    };
    let mut fence: Option<(Fence, Vec<&str>)> = None;

    for (idx, &(line, text)) in body.iter().enumerate() {
        if let Some((open, mut content)) = fence.take() {
            if open.closes(text) {
                scan.code_blocks.push(CodeBlock {
                    lang: open.lang().map(str::to_string),
                    info: open.extra_info().map(str::to_string),
                    content: content.join("\n"),
                    start_line: open.line,
                });
                scan.last_fence_close = Some(idx);
            } else {
                content.push(text);
                fence = Some((open, content));
            }
            continue;
        }

        if let Some(open) = Fence::open(text, line) {
            fence = Some((open, Vec::new()));
            continue;
        }

        if let Some(name) = scanner::region_marker(text) {
            scan.markers.push((idx, line, name));
            continue;
        }

        if scan.title.is_none() {
            scan.title = scanner::heading_text(text).map(str::to_string);
        }
    }

    if let Some((open, _)) = fence {
        return Err(ParseError::UnterminatedCodeFence {
            slide: number,
            line: open.line,
        });
    }

    Ok(scan)
}

/// Split a body into the layout's regions.
///
/// `markers` are `(body_index, line, name)` triples found outside fences.
fn split_regions(
    number: usize,
    layout: &Layout,
    body: &[Line<'_>],
    markers: &[(usize, usize, &str)],
) -> Result<Vec<Region>> {
    if !layout.is_multi_region() {
        if let Some(&(_, line, name)) = markers.first() {
            return Err(ParseError::invalid_region_marker(number, line, name));
        }
        return Ok(vec![Region::new(DEFAULT_SLOT, join(body))]);
    }

    let slots = layout.slots();
    let found: Vec<&str> = markers.iter().map(|&(_, _, name)| name).collect();
    if found.as_slice() != &slots[1..] {
        let found: Vec<String> = found.iter().map(|s| s.to_string()).collect();
        return Err(ParseError::region_mismatch(
            number,
            layout.name(),
            &slots[1..],
            &found,
        ));
    }

    let mut regions = Vec::with_capacity(slots.len());
    let mut start = 0;
    for (slot, &(idx, _, _)) in slots.iter().zip(markers) {
        regions.push(Region::new(*slot, join(&body[start..idx])));
        start = idx + 1;
    }
    regions.push(Region::new(slots[markers.len()], join(&body[start..])));

    Ok(regions)
}

/// The contents of an HTML comment that ends the text, if any
fn trailing_comment(text: &str) -> Option<String> {
    let inner = text.trim_end().strip_suffix("-->")?;
    let open = inner.rfind("<!--")?;
    let note = inner[open + 4..].trim();
    (!note.is_empty() && !note.contains("-->")).then(|| note.to_string())
}

fn join(lines: &[Line<'_>]) -> String {
    lines
        .iter()
        .map(|(_, text)| *text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Parse a document with the default configuration.
///
/// # Errors
///
/// Returns a [`ParseError`] for malformed metadata, unterminated metadata
/// blocks or code fences, and region markers that do not fit the slide's
/// layout. No partial deck is produced.
pub fn parse(text: &str) -> Result<Deck> {
    Parser::new().parse(text)
}

/// Parse a document with a custom configuration.
pub fn parse_with_config(text: &str, config: &ParserConfig) -> Result<Deck> {
    Parser::with_config(config.clone()).parse(text)
}
