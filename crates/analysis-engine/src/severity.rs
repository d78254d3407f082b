//! Category-conditioned severity classification.
//!
//! Each category carries its own risk model and discretization thresholds:
//! identical language reads differently in different clause types, so a
//! day-count that is harmless in a notice clause can be high risk in a
//! termination clause.

use std::sync::Arc;

use lease_types::{ClassificationError, ClauseRecord};

use crate::store::ModelStore;
use crate::tagger::TaggedSpan;

/// Continuous risk score in [0, 1] plus the signals that produced it.
#[derive(Debug, Clone, Default)]
pub struct RiskAssessment {
    pub score: f64,
    pub signals: Vec<&'static str>,
}

impl RiskAssessment {
    /// Record a matched signal and add its weight, saturating at 1.0.
    pub fn add(&mut self, weight: f64, signal: &'static str) {
        self.score = (self.score + weight).min(1.0);
        self.signals.push(signal);
    }

    /// Human-readable explanation, or None when nothing matched.
    pub fn rationale(&self) -> Option<String> {
        if self.signals.is_empty() {
            None
        } else {
            Some(self.signals.join("; "))
        }
    }
}

/// Deterministic risk model for one clause category. Implementations are
/// read-only and shared across concurrent analyses.
pub trait RiskModel: Send + Sync {
    fn assess(&self, text: &str) -> RiskAssessment;
}

/// Attaches a severity label to each tagged span.
#[derive(Clone)]
pub struct SeverityClassifier {
    store: Arc<dyn ModelStore>,
}

impl SeverityClassifier {
    pub fn new(store: Arc<dyn ModelStore>) -> Self {
        Self { store }
    }

    /// Classify one tagged span. `text` must be the document the span was
    /// produced from. A missing risk model is a configuration error, not a
    /// per-document failure.
    pub fn classify(
        &self,
        text: &str,
        tagged: TaggedSpan,
    ) -> Result<ClauseRecord, ClassificationError> {
        let profile = self
            .store
            .profile(tagged.category)
            .ok_or(ClassificationError::MissingModel(tagged.category))?;

        let assessment = profile.model.assess(tagged.span.slice(text));
        let severity = profile.thresholds.discretize(assessment.score);

        Ok(ClauseRecord {
            span: tagged.span,
            category: tagged.category,
            severity,
            rationale: assessment.rationale(),
        })
    }
}
