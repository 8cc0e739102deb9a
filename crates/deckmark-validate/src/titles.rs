//! Slide title validator

use deckmark_ast::Deck;
use deckmark_core::diagnostics::Diagnostic;

use crate::Validator;

/// Reports non-empty slides without any heading outside code
///
/// # Diagnostic Codes
///
/// - `LINT301`: slide has no title
pub struct SlideTitleValidator;

impl Validator for SlideTitleValidator {
    fn code(&self) -> &'static str {
        "LINT3"
    }

    fn name(&self) -> &'static str {
        "slide-title"
    }

    fn validate(&self, deck: &Deck) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for slide in deck.slides() {
            // blank slides are reported by the empty-region check
            if slide.title().is_some() || slide.is_blank() {
                continue;
            }

            let mut diag = Diagnostic::info(format!("Slide {} has no title", slide.number()))
                .with_code("LINT301")
                .with_slide(slide.number());
            if let Some(line) = slide.source_line() {
                diag = diag.with_line(line);
            }
            diagnostics.push(diag);
        }

        diagnostics
    }
}
