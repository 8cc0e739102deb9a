//! deckmark-ast - Slide deck document model
//!
//! This crate provides the types a parsed slide deck is made of: an ordered
//! [`Deck`] of [`Slide`]s, each with a [`Layout`], named [`Region`]s, and the
//! verbatim [`CodeBlock`]s found in its body.

pub mod attributes;
pub mod deck;
pub mod layout;
pub mod slide;

pub use attributes::Attributes;
pub use deck::{Deck, DeckMeta};
pub use layout::{Layout, DEFAULT_SLOT};
pub use slide::{CodeBlock, Region, Slide};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_model_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Deck>();
        assert_send_sync::<Slide>();
    }
}
