//! Deck writer
//!
//! Serialises a [`Deck`] back into the slide micro-format. Metadata blocks
//! kept verbatim by the parser are written back as they were, so comments,
//! blank lines, and source line numbers survive a round trip. Decks built in
//! code get their blocks generated from the attributes a slide declared
//! itself, so headmatter defaults are not repeated on every slide.
//!
//! # Example
//!
//! ```
//! use deckmark_core::{parse, write};
//!
//! let source = "---\ntheme: default\n---\n# One\n---\nlayout: center\n---\n# Two\n";
//! let deck = parse(source)?;
//! assert_eq!(parse(&write(&deck))?, deck);
//! # Ok::<(), deckmark_core::ParseError>(())
//! ```

use deckmark_ast::{Attributes, Deck};

use crate::config::DEFAULT_SEPARATOR;

/// Writer configuration
#[derive(Debug, Clone)]
pub struct WriterConfig {
    /// Separator line to emit between slides
    pub separator: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// Writes decks back to text
pub struct DeckWriter {
    config: WriterConfig,
    output: String,
}

impl Default for DeckWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckWriter {
    /// Create a writer with default configuration
    pub fn new() -> Self {
        Self::with_config(WriterConfig::default())
    }

    /// Create a writer with custom configuration
    pub fn with_config(config: WriterConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Write a deck to a string
    pub fn write(&mut self, deck: &Deck) -> String {
        self.output.clear();
        let sep = self.config.separator.as_str();
        let out = &mut self.output;

        let meta = deck.meta();
        if let Some(raw) = &meta.raw {
            push_block(out, sep, raw);
        } else if !meta.attributes.is_empty() {
            push_line(out, sep);
            push_attributes(out, &meta.attributes);
            push_line(out, sep);
        } else if meta.leading_separator {
            push_line(out, sep);
        }

        for (index, slide) in deck.slides().enumerate() {
            if index > 0 {
                push_line(out, sep);
                if let Some(raw) = slide.frontmatter() {
                    push_line(out, raw);
                    push_line(out, sep);
                } else if !slide.own_attributes().is_empty() {
                    push_attributes(out, slide.own_attributes());
                    push_line(out, sep);
                }
            }
            push_line(out, slide.raw_content());
        }

        std::mem::take(&mut self.output)
    }
}

/// A verbatim `---` delimited block; an empty block is two separators
fn push_block(out: &mut String, sep: &str, raw: &str) {
    push_line(out, sep);
    if !raw.is_empty() {
        push_line(out, raw);
    }
    push_line(out, sep);
}

fn push_attributes(out: &mut String, attributes: &Attributes) {
    for (key, value) in attributes.iter() {
        if value.is_empty() {
            push_line(out, &format!("{}:", key));
        } else if needs_quotes(value) {
            push_line(out, &format!("{}: \"{}\"", key, value));
        } else {
            push_line(out, &format!("{}: {}", key, value));
        }
    }
}

fn push_line(out: &mut String, text: &str) {
    out.push_str(text);
    out.push('\n');
}

/// Values that would otherwise lose whitespace or quotes when re-read
fn needs_quotes(value: &str) -> bool {
    value != value.trim()
        || (value.len() >= 2
            && (value.starts_with('"') || value.starts_with('\''))
            && value.ends_with(&value[..1]))
}

/// Write a deck with the default configuration
pub fn write(deck: &Deck) -> String {
    DeckWriter::new().write(deck)
}
