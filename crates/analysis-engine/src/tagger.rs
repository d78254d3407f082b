//! Exemplar-based category tagging.
//!
//! Each clause is compared against the exemplar phrases of every category
//! and assigned the closest one. Similarity is lexical: the fraction of an
//! exemplar's content tokens that appear in the clause, with a bonus when
//! the clause contains the whole exemplar phrase. Near-ties are resolved by
//! category prior so that frequent clause types win over rare ones.

use std::sync::Arc;

use lease_types::{Category, ClauseSpan, TaggingError};
use tracing::debug;

use crate::config::TaggerConfig;
use crate::patterns::{normalize, tokenize};
use crate::store::ModelStore;

/// A clause span with its assigned category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedSpan {
    pub span: ClauseSpan,
    pub category: Category,
}

#[derive(Clone)]
pub struct CategoryTagger {
    store: Arc<dyn ModelStore>,
    config: TaggerConfig,
}

impl CategoryTagger {
    pub fn new(store: Arc<dyn ModelStore>, config: TaggerConfig) -> Self {
        Self { store, config }
    }

    /// Tag every span against `text`. Spans must have been produced from the
    /// same text; a span that does not lie on char boundaries inside it is
    /// rejected rather than silently skipped.
    pub fn tag(&self, text: &str, spans: &[ClauseSpan]) -> Result<Vec<TaggedSpan>, TaggingError> {
        spans
            .iter()
            .map(|&span| {
                let clause = Self::checked_slice(text, span)?;
                let category = self.best_category(clause);
                Ok(TaggedSpan { span, category })
            })
            .collect()
    }

    fn checked_slice(text: &str, span: ClauseSpan) -> Result<&str, TaggingError> {
        if span.start >= span.end {
            return Err(TaggingError::InvalidSpan {
                start: span.start,
                end: span.end,
            });
        }
        text.get(span.start..span.end)
            .ok_or(TaggingError::SpanOutOfBounds {
                start: span.start,
                end: span.end,
                length: text.len(),
            })
    }

    fn best_category(&self, clause: &str) -> Category {
        let clause_norm = normalize(clause);
        let clause_tokens = tokenize(&clause_norm);

        let mut scored: Vec<(Category, f64, f64)> = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let Some(profile) = self.store.profile(category) else {
                continue;
            };
            let similarity = profile
                .exemplars
                .iter()
                .map(|exemplar| exemplar_similarity(&clause_norm, &clause_tokens, exemplar))
                .fold(0.0_f64, f64::max);
            scored.push((category, similarity, profile.prior));
        }

        let best = scored
            .iter()
            .map(|&(_, similarity, _)| similarity)
            .fold(0.0_f64, f64::max);
        if best < self.config.min_similarity {
            debug!(best, "no category above similarity floor");
            return Category::Uncategorized;
        }

        // Candidates within epsilon of the best score compete on prior. A
        // tie that survives the prior comparison means the clause genuinely
        // fits more than one category, and guessing between them would be
        // arbitrary, so it resolves to Uncategorized.
        let mut winner = Category::Uncategorized;
        let mut winner_prior = f64::NEG_INFINITY;
        let mut contested = false;
        for &(category, similarity, prior) in &scored {
            if best - similarity > self.config.epsilon {
                continue;
            }
            if prior > winner_prior {
                winner = category;
                winner_prior = prior;
                contested = false;
            } else if prior == winner_prior {
                contested = true;
            }
        }
        if contested {
            return Category::Uncategorized;
        }
        winner
    }
}

/// Fraction of the exemplar's tokens found in the clause, plus 0.5 when the
/// clause contains the exemplar verbatim. Scores are compared, never summed,
/// so values above 1.0 are fine.
fn exemplar_similarity(clause_norm: &str, clause_tokens: &[String], exemplar: &str) -> f64 {
    let exemplar_norm = normalize(exemplar);
    let exemplar_tokens = tokenize(&exemplar_norm);
    if exemplar_tokens.is_empty() {
        return 0.0;
    }

    let matched = exemplar_tokens
        .iter()
        .filter(|et| clause_tokens.iter().any(|ct| tokens_match(ct, et)))
        .count();
    let mut score = matched as f64 / exemplar_tokens.len() as f64;

    if clause_norm.contains(&exemplar_norm) {
        score += 0.5;
    }
    score
}

/// Exact match, or a shared stem for longer words so that "terminate"
/// matches "termination" and "repairs" matches "repair".
fn tokens_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }
    let shorter = a.len().min(b.len());
    shorter >= 4 && (a.starts_with(b) || b.starts_with(a))
}
