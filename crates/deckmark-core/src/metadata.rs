//! Metadata block parsing
//!
//! A metadata block is a flat list of `key: value` lines between two
//! separators. Blank lines and `#` comments are skipped. Values have their
//! surrounding whitespace trimmed and one pair of matching quotes removed.
//! Nested YAML structures are not part of the format.
//!
//! Whether a block exists at all is decided on shape: it must open with a
//! well-formed entry, and every line up to the closing separator must be
//! blank, a comment, or contain a colon. Anything else is slide content.
//! Inside an accepted block, colon lines that are not well-formed entries
//! are [`MalformedMetadata`](ParseError::MalformedMetadata).

use regex::Regex;
use std::sync::OnceLock;

use deckmark_ast::Attributes;
use tracing::{trace, warn};

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{ParseError, Result};

fn entry_re() -> &'static Regex {
    static ENTRY_RE: OnceLock<Regex> = OnceLock::new();
    ENTRY_RE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_.-]*)[ \t]*:(?:[ \t]+(.*?))?[ \t]*$").unwrap()
    })
}

fn keyish_re() -> &'static Regex {
    static KEYISH_RE: OnceLock<Regex> = OnceLock::new();
    KEYISH_RE.get_or_init(|| Regex::new(r"^[ \t]*[^\s#:][^:]*:").unwrap())
}

/// Split a metadata line into key and raw value
fn split_entry(text: &str) -> Option<(&str, &str)> {
    let caps = entry_re().captures(text)?;
    let key = caps.get(1)?.as_str();
    let value = caps.get(2).map_or("", |m| m.as_str());
    Some((key, value))
}

/// Whether a line has the `key: value` shape that opens a frontmatter block
pub fn looks_like_entry(text: &str) -> bool {
    split_entry(text).is_some()
}

/// Whether a line may appear inside a metadata block: blank, a `#`
/// comment, or something with a key before a colon
pub fn is_block_line(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || keyish_re().is_match(text)
}

/// Remove one pair of matching surrounding quotes
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Parse the lines of one metadata block.
///
/// `lines` are `(line_number, text)` pairs; `slide` is the 1-based slide the
/// block belongs to (0 for the headmatter). Duplicate keys keep the last
/// value and produce a `DECK101` warning.
pub fn parse_block(
    lines: &[(usize, &str)],
    slide: usize,
    diagnostics: &mut Diagnostics,
) -> Result<Attributes> {
    let mut attributes = Attributes::new();

    for &(line, text) in lines {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (key, value) =
            split_entry(text).ok_or_else(|| ParseError::malformed_metadata(slide, line, text))?;

        if attributes.set(key, unquote(value)).is_some() {
            warn!(slide, line, key, "duplicate metadata key");
            diagnostics.push(
                Diagnostic::warning(format!("Duplicate metadata key '{}'", key))
                    .with_code("DECK101")
                    .with_slide(slide)
                    .with_line(line)
                    .with_help("Only the last value is kept"),
            );
        }
    }

    trace!(slide, keys = attributes.len(), "parsed metadata block");
    Ok(attributes)
}
