//! Parser configuration
//!
//! Defaults match the common Markdown slide convention. A config can be
//! loaded from TOML:
//!
//! ```toml
//! separator = "---"
//! strict_layouts = true
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default slide separator line
pub const DEFAULT_SEPARATOR: &str = "---";

/// Options controlling how a deck is parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Line that separates slides and delimits metadata blocks
    pub separator: String,
    /// Reject layout names that are not built in instead of warning
    pub strict_layouts: bool,
    /// Apply headmatter attributes as defaults to every slide
    pub inherit_headmatter: bool,
    /// Take a trailing HTML comment as the slide's speaker notes
    pub extract_notes: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            strict_layouts: false,
            inherit_headmatter: true,
            extract_notes: true,
        }
    }
}

impl ParserConfig {
    /// Parse a config from a TOML string. Missing keys take their defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Enable strict layout checking
    pub fn strict() -> Self {
        Self {
            strict_layouts: true,
            ..Default::default()
        }
    }
}
