//! deckmark-validate - Slide deck lint engine
//!
//! Parsing only fails on structural problems. This crate looks for the
//! softer ones: empty columns, code samples without a language, slides
//! without a heading.
//!
//! # Architecture
//!
//! Individual checks implement the [`Validator`] trait. The
//! [`ValidationEngine`] runs every registered validator over a deck and
//! collects their diagnostics.
//!
//! # Example
//!
//! ```
//! use deckmark_validate::ValidationEngine;
//!
//! let deck = deckmark_core::parse("# Hooks\n\n```\nuseState(0)\n```\n").unwrap();
//! let engine = ValidationEngine::with_defaults();
//! let diagnostics = engine.validate(&deck);
//!
//! assert!(diagnostics.iter().any(|d| d.code.as_deref() == Some("LINT201")));
//! ```

pub mod code;
pub mod regions;
pub mod titles;

use deckmark_ast::Deck;
use deckmark_core::diagnostics::{Diagnostic, Diagnostics};
use tracing::debug;

pub use code::CodeLanguageValidator;
pub use regions::EmptyRegionValidator;
pub use titles::SlideTitleValidator;

/// Trait for deck validators
///
/// Each validator has a unique code prefix for its diagnostics.
pub trait Validator: Send + Sync {
    /// The validator's code prefix (e.g., "LINT1")
    fn code(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Check the deck and return any diagnostics
    fn validate(&self, deck: &Deck) -> Vec<Diagnostic>;
}

/// Runs a set of validators over a deck
pub struct ValidationEngine {
    validators: Vec<Box<dyn Validator>>,
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationEngine {
    /// Create an engine with no validators
    pub fn new() -> Self {
        Self {
            validators: Vec::new(),
        }
    }

    /// Create an engine with the built-in validators
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_validator(Box::new(EmptyRegionValidator));
        engine.add_validator(Box::new(CodeLanguageValidator));
        engine.add_validator(Box::new(SlideTitleValidator));
        engine
    }

    /// Register a validator
    pub fn add_validator(&mut self, validator: Box<dyn Validator>) {
        self.validators.push(validator);
    }

    /// Number of registered validators
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Names of all registered validators
    pub fn validator_names(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.name()).collect()
    }

    /// Run every validator and collect the diagnostics, ordered by location
    pub fn validate(&self, deck: &Deck) -> Diagnostics {
        let mut diagnostics = Diagnostics::new();

        for validator in &self.validators {
            let found = validator.validate(deck);
            debug!(validator = validator.name(), found = found.len(), "ran validator");
            diagnostics.extend(found);
        }

        diagnostics.sort_by_location();
        diagnostics
    }

    /// Check if the deck has any error-level findings
    pub fn has_errors(&self, deck: &Deck) -> bool {
        self.validate(deck).has_errors()
    }

    /// Check if the deck has any findings at all
    pub fn has_issues(&self, deck: &Deck) -> bool {
        !self.validate(deck).is_empty()
    }
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
