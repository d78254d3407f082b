//! Plain-language summary generation.
//!
//! Extractive, not generative: the summary is assembled from severity
//! counts, affected category names, and excerpts of the riskiest clauses.
//! The same classified clauses always produce the same summary.

use lease_types::{Category, ClauseRecord, Language, SeverityLabel};

use crate::patterns::truncate_chars;

/// Summary used when nothing rose above Low severity.
pub const NO_MAJOR_RISKS: &str = "No major risks identified in this agreement.";

const MAX_EXCERPTS: usize = 3;
const EXCERPT_CHARS: usize = 160;

#[derive(Debug, Clone)]
pub struct SummaryGenerator {
    max_chars: usize,
}

impl SummaryGenerator {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Summarize classified clauses. `text` must be the document the clause
    /// spans were produced from.
    pub fn generate(&self, text: &str, language: Language, clauses: &[ClauseRecord]) -> String {
        let high: Vec<&ClauseRecord> = clauses
            .iter()
            .filter(|c| c.severity == SeverityLabel::High)
            .collect();
        let medium_count = clauses
            .iter()
            .filter(|c| c.severity == SeverityLabel::Medium)
            .count();

        if high.is_empty() && medium_count == 0 {
            return NO_MAJOR_RISKS.to_string();
        }

        // Affected area names open the summary; at the smallest configured
        // length budget everything after them may be truncated away.
        let mut out = String::new();
        let areas: Vec<&str> = Category::ALL
            .iter()
            .filter(|&&category| high.iter().any(|c| c.category == category))
            .map(|category| category.name())
            .collect();
        if !areas.is_empty() {
            out.push_str(&format!("High-risk areas: {}. ", areas.join(", ")));
        }
        out.push_str(&format!(
            "This agreement contains {} high-risk and {} medium-risk clauses.",
            high.len(),
            medium_count
        ));

        // Most severe clauses first; document order within a severity.
        let mut notable: Vec<&ClauseRecord> = clauses
            .iter()
            .filter(|c| c.severity != SeverityLabel::Low)
            .collect();
        notable.sort_by_key(|c| std::cmp::Reverse(c.severity.risk_rank()));
        for clause in notable.iter().take(MAX_EXCERPTS) {
            let excerpt = truncate_chars(clause.span.slice(text).trim(), EXCERPT_CHARS);
            out.push_str(&format!("\n- [{}] {}", clause.category, excerpt));
            if let Some(rationale) = &clause.rationale {
                out.push_str(&format!(" ({})", rationale));
            }
        }

        if language == Language::Kannada {
            out.push_str("\nSummary derived from the Kannada source text.");
        }

        truncate_chars(&out, self.max_chars)
    }
}
