//! Line classification for the deck micro-format
//!
//! The parser walks the document line by line and asks this module what each
//! line is. Fence tracking lives here too: while a [`Fence`] is open every
//! line is verbatim code, so separators and region markers inside a code
//! sample never split anything.

use regex::Regex;
use std::sync::OnceLock;

/// An open fenced code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fence {
    /// Fence character (`` ` `` or `~`)
    pub marker: char,
    /// Length of the opening run
    pub len: usize,
    /// Text after the opening run, trimmed
    pub info: String,
    /// 1-based line of the opening fence
    pub line: usize,
}

impl Fence {
    /// Try to open a fence on this line.
    ///
    /// A fence is a run of at least three backticks or tildes indented by at
    /// most three spaces. Backtick fences may not carry backticks in their
    /// info string, so a line like ```` ```js``` ```` stays text.
    pub fn open(text: &str, line: usize) -> Option<Self> {
        let rest = strip_indent(text)?;
        let marker = rest.chars().next().filter(|c| *c == '`' || *c == '~')?;
        let len = rest.chars().take_while(|c| *c == marker).count();
        if len < 3 {
            return None;
        }

        let info = rest[len..].trim();
        if marker == '`' && info.contains('`') {
            return None;
        }

        Some(Self {
            marker,
            len,
            info: info.to_string(),
            line,
        })
    }

    /// Whether `text` closes this fence: a run of the same character at least
    /// as long as the opening one, with nothing after it but whitespace.
    pub fn closes(&self, text: &str) -> bool {
        let Some(rest) = strip_indent(text) else {
            return false;
        };
        let run = rest.chars().take_while(|c| *c == self.marker).count();
        run >= self.len && rest[run..].trim().is_empty()
    }

    /// Language tag: the first word of the info string
    pub fn lang(&self) -> Option<&str> {
        self.info.split_whitespace().next()
    }

    /// Everything in the info string after the language tag
    pub fn extra_info(&self) -> Option<&str> {
        let lang = self.lang()?;
        let rest = self.info[lang.len()..].trim();
        (!rest.is_empty()).then_some(rest)
    }
}

/// Up to three leading spaces are allowed before a fence
fn strip_indent(text: &str) -> Option<&str> {
    let indent = text.chars().take_while(|c| *c == ' ').count();
    (indent <= 3).then(|| &text[indent..])
}

/// Whether `text` is a separator line (trailing whitespace ignored)
pub fn is_separator(text: &str, separator: &str) -> bool {
    text.trim_end() == separator
}

/// Whether a line holds only whitespace
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Recognise a region marker line such as `::right::` and return its name
pub fn region_marker(text: &str) -> Option<&str> {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    let re = MARKER_RE.get_or_init(|| Regex::new(r"^::([A-Za-z0-9_-]+)::$").unwrap());

    re.captures(text.trim())
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Text of an ATX heading (`# Title`), without the markers
pub fn heading_text(text: &str) -> Option<&str> {
    static HEADING_RE: OnceLock<Regex> = OnceLock::new();
    let re = HEADING_RE.get_or_init(|| Regex::new(r"^ {0,3}#{1,6}[ \t]+(.+?)[ \t#]*$").unwrap());

    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
}
