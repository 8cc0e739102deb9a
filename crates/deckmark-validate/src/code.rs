//! Code language validator

use deckmark_ast::Deck;
use deckmark_core::diagnostics::Diagnostic;

use crate::Validator;

/// Reports fenced code blocks that carry no language tag, which renderers
/// cannot highlight.
///
/// # Diagnostic Codes
///
/// - `LINT201`: code block without a language
pub struct CodeLanguageValidator;

impl Validator for CodeLanguageValidator {
    fn code(&self) -> &'static str {
        "LINT2"
    }

    fn name(&self) -> &'static str {
        "code-language"
    }

    fn validate(&self, deck: &Deck) -> Vec<Diagnostic> {
        deck.slides()
            .flat_map(|slide| {
                slide
                    .code_blocks()
                    .iter()
                    .filter(|block| block.lang.is_none())
                    .map(move |block| {
                        Diagnostic::hint(format!(
                            "Code block in slide {} has no language tag",
                            slide.number()
                        ))
                        .with_code("LINT201")
                        .with_slide(slide.number())
                        .with_line(block.start_line)
                        .with_help("Add a language after the opening fence, e.g. ```jsx")
                    })
            })
            .collect()
    }
}
