//! Slide layout kinds
//!
//! A layout decides how many content regions a slide carries. Most layouts
//! hold a single `default` region; the column layouts declare extra slots
//! that authors fill with `::name::` marker lines.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of the implicit first region of every slide
pub const DEFAULT_SLOT: &str = "default";

/// Layout requested by a slide's `layout` attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Plain content slide
    #[default]
    Default,

    /// Cover / title slide
    Cover,

    /// Content centered on the slide
    Center,

    /// Section divider
    Section,

    /// Two columns; the second is opened with `::right::`
    TwoCols,

    /// Header row over two columns (`::left::` then `::right::`)
    TwoColsHeader,

    /// A layout name this model does not know about, kept verbatim
    Other(String),
}

impl Layout {
    /// Parse a layout from its attribute value.
    ///
    /// Unknown names are preserved as [`Layout::Other`]; use
    /// [`Layout::is_known`] to tell them apart.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "" | "default" => Self::Default,
            "cover" => Self::Cover,
            "center" => Self::Center,
            "section" => Self::Section,
            "two-cols" => Self::TwoCols,
            "two-cols-header" => Self::TwoColsHeader,
            other => Self::Other(other.to_string()),
        }
    }

    /// The attribute value for this layout
    pub fn name(&self) -> &str {
        match self {
            Self::Default => "default",
            Self::Cover => "cover",
            Self::Center => "center",
            Self::Section => "section",
            Self::TwoCols => "two-cols",
            Self::TwoColsHeader => "two-cols-header",
            Self::Other(name) => name,
        }
    }

    /// Region slots in presentation order. The first slot is always
    /// [`DEFAULT_SLOT`] and takes the content before any marker.
    pub fn slots(&self) -> &'static [&'static str] {
        match self {
            Self::TwoCols => &[DEFAULT_SLOT, "right"],
            Self::TwoColsHeader => &[DEFAULT_SLOT, "left", "right"],
            _ => &[DEFAULT_SLOT],
        }
    }

    /// Whether this layout splits content into more than one region
    pub fn is_multi_region(&self) -> bool {
        self.slots().len() > 1
    }

    /// Whether this is one of the built-in layouts
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
