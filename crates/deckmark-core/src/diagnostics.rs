//! Parser and lint diagnostics
//!
//! Fatal problems are [`ParseError`](crate::ParseError)s. Everything the parser
//! can recover from (a duplicate metadata key, an unknown layout name) is
//! reported as a [`Diagnostic`] next to the finished deck, and the lint
//! engine in `deckmark-validate` produces the same type. A diagnostic is
//! located by slide number and source line; both are optional because some
//! findings concern the whole deck.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A finding about a deck
///
/// # Example
///
/// ```
/// use deckmark_core::diagnostics::Diagnostic;
///
/// let diag = Diagnostic::warning("Duplicate metadata key 'layout'")
///     .with_code("DECK101")
///     .with_slide(3)
///     .with_line(12);
///
/// assert!(diag.is_warning());
/// assert_eq!(diag.location(), (Some(3), Some(12)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,

    pub message: String,

    /// Stable code such as `DECK101` or `LINT201`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// 1-based slide number, 0 for the headmatter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide: Option<usize>,

    /// 1-based source line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// How to fix it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
}

/// How serious a diagnostic is, least to most
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Stylistic suggestion
    Hint,
    Info,
    /// The deck is usable but probably not what the author meant
    Warning,
    Error,
    /// The document could not be parsed at all
    Fatal,
}

impl Diagnostic {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            code: None,
            slide: None,
            line: None,
            help: None,
        }
    }

    pub fn fatal(message: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn hint(message: impl Into<String>) -> Self {
        Self::new(Severity::Hint, message)
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_slide(mut self, slide: usize) -> Self {
        self.slide = Some(slide);
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Error or fatal
    pub fn is_error(&self) -> bool {
        self.severity >= Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity == Severity::Warning
    }

    /// `(slide, line)`, the key diagnostics are ordered by
    pub fn location(&self) -> (Option<usize>, Option<usize>) {
        (self.slide, self.line)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Hint => "hint",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Diagnostic {
    /// `warning[DECK101]: message`, then the location and help on their own lines
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.severity)?;
        if let Some(code) = &self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)?;

        match self.location() {
            (Some(slide), Some(line)) => write!(f, "\n  --> slide {}, line {}", slide, line)?,
            (Some(slide), None) => write!(f, "\n  --> slide {}", slide)?,
            (None, Some(line)) => write!(f, "\n  --> line {}", line)?,
            (None, None) => {}
        }

        if let Some(help) = &self.help {
            write!(f, "\n  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Diagnostics gathered during one parse or lint run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(Diagnostic::is_error)
    }

    pub fn warning_count(&self) -> usize {
        self.items.iter().filter(|d| d.is_warning()).count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Diagnostics carrying the given code
    pub fn by_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.items
            .iter()
            .filter(move |d| d.code.as_deref() == Some(code))
    }

    /// Order by slide, then line. Deck-wide findings come first and the
    /// order of equal locations is kept.
    pub fn sort_by_location(&mut self) {
        self.items.sort_by_key(Diagnostic::location);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
