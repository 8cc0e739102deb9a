//! Error types for deck parsing.
//!
//! Every error is structural and aborts the parse. `slide` fields carry the
//! 1-based slide number (0 means the headmatter block) and `line` fields the
//! 1-based source line.

use thiserror::Error;

use crate::diagnostics::Diagnostic;

/// Result type for parse operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing a deck
#[derive(Error, Debug)]
pub enum ParseError {
    /// A metadata line that is not `key: value`
    #[error("Malformed metadata in slide {slide} at line {line}: {content:?}")]
    MalformedMetadata {
        slide: usize,
        line: usize,
        content: String,
    },

    /// A metadata block that is never closed by a separator
    #[error("Unterminated metadata block in slide {slide} starting at line {line}")]
    UnterminatedMetadata { slide: usize, line: usize },

    /// A code fence opened but never closed before end of document
    #[error("Unterminated code fence in slide {slide} opened at line {line}")]
    UnterminatedCodeFence { slide: usize, line: usize },

    /// A region marker in a slide whose layout has a single region
    #[error("Region marker '::{marker}::' at line {line} in slide {slide}, whose layout has a single region")]
    InvalidRegionMarker {
        slide: usize,
        line: usize,
        marker: String,
    },

    /// Region markers that do not match the layout's slots
    #[error("Slide {slide} uses layout '{layout}' which expects markers [{expected}] but found [{found}]")]
    RegionMismatch {
        slide: usize,
        layout: String,
        expected: String,
        found: String,
    },

    /// A layout name that is not built in (strict mode only)
    #[error("Unknown layout '{name}' in slide {slide}")]
    UnknownLayout { slide: usize, name: String },

    /// Parser configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

impl ParseError {
    /// Create a malformed metadata error
    pub fn malformed_metadata(slide: usize, line: usize, content: impl Into<String>) -> Self {
        Self::MalformedMetadata {
            slide,
            line,
            content: content.into(),
        }
    }

    /// Create an invalid region marker error
    pub fn invalid_region_marker(slide: usize, line: usize, marker: impl Into<String>) -> Self {
        Self::InvalidRegionMarker {
            slide,
            line,
            marker: marker.into(),
        }
    }

    /// Create a region mismatch error from the expected and found marker names
    pub fn region_mismatch(
        slide: usize,
        layout: impl Into<String>,
        expected: &[&str],
        found: &[String],
    ) -> Self {
        Self::RegionMismatch {
            slide,
            layout: layout.into(),
            expected: expected.join(", "),
            found: found.join(", "),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedMetadata { .. } => "DECK001",
            Self::UnterminatedMetadata { .. } => "DECK002",
            Self::UnterminatedCodeFence { .. } => "DECK003",
            Self::InvalidRegionMarker { .. } => "DECK004",
            Self::RegionMismatch { .. } => "DECK005",
            Self::UnknownLayout { .. } => "DECK006",
            Self::Config(_) => "DECK007",
        }
    }

    /// The slide number the error refers to, if any
    pub fn slide(&self) -> Option<usize> {
        match self {
            Self::MalformedMetadata { slide, .. }
            | Self::UnterminatedMetadata { slide, .. }
            | Self::UnterminatedCodeFence { slide, .. }
            | Self::InvalidRegionMarker { slide, .. }
            | Self::RegionMismatch { slide, .. }
            | Self::UnknownLayout { slide, .. } => Some(*slide),
            Self::Config(_) => None,
        }
    }

    /// The source line the error refers to, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedMetadata { line, .. }
            | Self::UnterminatedMetadata { line, .. }
            | Self::UnterminatedCodeFence { line, .. }
            | Self::InvalidRegionMarker { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Convert into a fatal diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::fatal(self.to_string()).with_code(self.code());
        if let Some(slide) = self.slide() {
            diag = diag.with_slide(slide);
        }
        if let Some(line) = self.line() {
            diag = diag.with_line(line);
        }
        match self {
            Self::InvalidRegionMarker { .. } => diag.with_help(
                "Set `layout: two-cols` (or another multi-column layout) in the slide's frontmatter",
            ),
            Self::UnterminatedCodeFence { .. } => {
                diag.with_help("Close the fence with a line of matching backticks or tildes")
            }
            Self::MalformedMetadata { .. } => {
                diag.with_help("Metadata lines must have the form `key: value`")
            }
            _ => diag,
        }
    }
}
