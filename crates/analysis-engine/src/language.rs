//! Language detection for incoming documents.

use lease_types::Language;

/// Detect whether text is Kannada or English.
///
/// Counts characters in the Kannada Unicode block (U+0C80..=U+0CFF); more
/// than 10% of all characters marks the document as Kannada.
pub fn detect_language(text: &str) -> Language {
    let mut total = 0usize;
    let mut kannada = 0usize;
    for c in text.chars() {
        total += 1;
        if ('\u{0C80}'..='\u{0CFF}').contains(&c) {
            kannada += 1;
        }
    }

    if total > 0 && kannada * 10 > total {
        Language::Kannada
    } else {
        Language::English
    }
}
