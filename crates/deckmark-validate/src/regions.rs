//! Empty region validator
//!
//! Flags slides, or columns of multi-column slides, that have no content.

use deckmark_ast::Deck;
use deckmark_core::diagnostics::Diagnostic;

use crate::Validator;

/// Reports blank regions
///
/// # Diagnostic Codes
///
/// - `LINT101`: region (or whole slide) without content
///
/// # Example
///
/// ```
/// use deckmark_validate::{EmptyRegionValidator, Validator};
///
/// let deck = deckmark_core::parse("---\nlayout: two-cols\n---\n# Left\n::right::\n").unwrap();
/// let diagnostics = EmptyRegionValidator.validate(&deck);
///
/// assert_eq!(diagnostics.len(), 1);
/// assert!(diagnostics[0].message.contains("right"));
/// ```
pub struct EmptyRegionValidator;

impl Validator for EmptyRegionValidator {
    fn code(&self) -> &'static str {
        "LINT1"
    }

    fn name(&self) -> &'static str {
        "empty-region"
    }

    fn validate(&self, deck: &Deck) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for slide in deck.slides() {
            let message = if !slide.layout().is_multi_region() {
                slide
                    .is_blank()
                    .then(|| format!("Slide {} is empty", slide.number()))
            } else {
                let blank: Vec<&str> = slide
                    .regions()
                    .iter()
                    .filter(|r| r.is_blank())
                    .map(|r| r.name.as_str())
                    .collect();
                (!blank.is_empty()).then(|| {
                    format!(
                        "Slide {} ({}) has empty region(s): {}",
                        slide.number(),
                        slide.layout(),
                        blank.join(", ")
                    )
                })
            };

            if let Some(message) = message {
                let mut diag = Diagnostic::warning(message)
                    .with_code("LINT101")
                    .with_slide(slide.number());
                if let Some(line) = slide.source_line() {
                    diag = diag.with_line(line);
                }
                diagnostics.push(diag);
            }
        }

        diagnostics
    }
}
