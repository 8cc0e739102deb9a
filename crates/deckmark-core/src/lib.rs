//! deckmark-core - Markdown slide decks as data
//!
//! Core library for deckmark: a fence-aware parser that turns a slide
//! document into an immutable [`Deck`](deckmark_ast::Deck), plus a writer
//! that serialises it back.
//!
//! # Example
//!
//! ```
//! use deckmark_core::parse;
//! use deckmark_ast::Layout;
//!
//! let source = r#"---
//! theme: default
//! ---
//!
//! # React Hooks
//!
//! ---
//! layout: two-cols
//! ---
//!
//! ## useState
//! ::right::
//! ~~~jsx
//! const [count, setCount] = useState(0)
//! ~~~
//! "#;
//!
//! let deck = parse(source).unwrap();
//! assert_eq!(deck.slide_count(), 2);
//!
//! let columns = deck.slide_at(1).unwrap();
//! assert_eq!(columns.layout(), &Layout::TwoCols);
//! assert_eq!(columns.region_count(), 2);
//! assert_eq!(columns.code_blocks()[0].lang.as_deref(), Some("jsx"));
//! ```

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod metadata;
pub mod parser;
pub mod scanner;
pub mod writer;

// Re-export main types and functions
pub use config::ParserConfig;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::{ParseError, Result};
pub use parser::{parse, parse_with_config, ParseOutput, Parser};
pub use writer::{write, DeckWriter, WriterConfig};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
