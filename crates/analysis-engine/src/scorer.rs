//! Favorability scoring.
//!
//! The score starts from a baseline and subtracts a fixed penalty per
//! classified clause, weighted by severity. Only severity counts matter, so
//! reordering clauses can never change the score, and adding a clause can
//! never raise it.

use lease_types::{ClauseRecord, SeverityLabel};

use crate::config::ScoreWeights;

#[derive(Debug, Clone)]
pub struct FavorabilityScorer {
    weights: ScoreWeights,
}

impl FavorabilityScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Score a set of classified clauses on a 0 to 10 scale, rounded to one
    /// decimal place. An empty set scores the baseline.
    pub fn score(&self, clauses: &[ClauseRecord]) -> f64 {
        let mut high = 0usize;
        let mut medium = 0usize;
        let mut low = 0usize;
        for clause in clauses {
            match clause.severity {
                SeverityLabel::High => high += 1,
                SeverityLabel::Medium => medium += 1,
                SeverityLabel::Low => low += 1,
            }
        }

        let raw = self.weights.baseline
            - self.weights.high_penalty * high as f64
            - self.weights.medium_penalty * medium as f64
            - self.weights.low_penalty * low as f64;

        (raw.clamp(0.0, 10.0) * 10.0).round() / 10.0
    }
}
