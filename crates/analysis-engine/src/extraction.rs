//! Document text extraction.
//!
//! The pipeline operates on plain text; format parsers sit behind the
//! [`TextExtractor`] trait so PDF and DOCX support can be supplied by a
//! collaborator without touching the analysis stages. The built-in
//! [`PlainTextExtractor`] handles `.txt` uploads.

use lease_types::{ExtractionError, SourceFormat};

/// Turns raw file bytes into analyzable document text.
pub trait TextExtractor: Send + Sync {
    fn supports(&self, format: SourceFormat) -> bool;

    /// Extract plain text. Must yield cleaned text with paragraph breaks
    /// preserved as blank lines.
    fn extract(&self, bytes: &[u8], format: SourceFormat) -> Result<String, ExtractionError>;
}

/// Extractor for plain-text uploads. Invalid UTF-8 sequences are replaced
/// rather than rejected; scanned leases arrive with stray bytes.
#[derive(Debug, Clone, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn supports(&self, format: SourceFormat) -> bool {
        format == SourceFormat::Txt
    }

    fn extract(&self, bytes: &[u8], format: SourceFormat) -> Result<String, ExtractionError> {
        if !self.supports(format) {
            return Err(ExtractionError::UnsupportedFormat(format));
        }
        let text = clean_text(&String::from_utf8_lossy(bytes));
        if text.is_empty() {
            return Err(ExtractionError::NoText(format.to_string()));
        }
        Ok(text)
    }
}

/// Normalize line endings, drop control characters, and collapse runs of
/// blank lines to a single paragraph break. Paragraph structure is what the
/// segmenter keys on, so blank lines are preserved rather than flattened.
pub fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = 0usize;
    for line in raw.replace("\r\n", "\n").replace('\r', "\n").lines() {
        let line: String = line
            .chars()
            .filter(|c| !c.is_control() || *c == '\t')
            .collect();
        if line.trim().is_empty() {
            blank_run += 1;
            continue;
        }
        if !out.is_empty() {
            out.push_str(if blank_run > 0 { "\n\n" } else { "\n" });
        }
        blank_run = 0;
        out.push_str(line.trim_end());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_plain_text() {
        let bytes = b"Rent is due monthly.\n\nDeposit equals two months rent.";
        let text = PlainTextExtractor
            .extract(bytes, SourceFormat::Txt)
            .unwrap();
        assert!(text.starts_with("Rent is due"));
        assert!(text.contains("\n\n"), "Got: {}", text);
    }

    #[test]
    fn test_rejects_unsupported_format() {
        let err = PlainTextExtractor
            .extract(b"%PDF-1.7", SourceFormat::Pdf)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::UnsupportedFormat(SourceFormat::Pdf)));
    }

    #[test]
    fn test_whitespace_only_input_is_no_text() {
        let err = PlainTextExtractor
            .extract(b"  \n\n \t ", SourceFormat::Txt)
            .unwrap_err();
        assert!(matches!(err, ExtractionError::NoText(_)), "Got: {:?}", err);
    }

    #[test]
    fn test_clean_text_normalizes_line_endings_and_blank_runs() {
        let cleaned = clean_text("First clause.\r\n\r\n\r\n\r\nSecond clause.\r\nSame paragraph.");
        assert_eq!(cleaned, "First clause.\n\nSecond clause.\nSame paragraph.");
    }

    #[test]
    fn test_invalid_utf8_is_replaced_not_fatal() {
        let mut bytes = b"Rent is due monthly".to_vec();
        bytes.push(0xFF);
        let text = PlainTextExtractor
            .extract(&bytes, SourceFormat::Txt)
            .unwrap();
        assert!(text.starts_with("Rent is due"), "Got: {}", text);
    }
}
