// Fallback risk rules for uncategorized clauses.
use crate::patterns::contains_any;
use crate::severity::{RiskAssessment, RiskModel};

/// High-risk keywords for clauses the tagger could not place.
const HIGH_RISK_KEYWORDS: &[&str] = &[
    "eviction", "penalty", "breach", "terminate", "default", "forfeit", "liable",
];

/// Obligation keywords that mark a clause as more than boilerplate.
const OBLIGATION_KEYWORDS: &[&str] = &[
    "rent", "payment", "maintenance", "repair", "notice", "access", "inspect",
];

pub struct GeneralRisk;

impl RiskModel for GeneralRisk {
    fn assess(&self, text: &str) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let mut assessment = RiskAssessment::default();

        if contains_any(&text_lower, HIGH_RISK_KEYWORDS) {
            assessment.add(0.45, "high-risk obligations");
        }
        if contains_any(&text_lower, OBLIGATION_KEYWORDS) {
            assessment.add(0.25, "general obligations");
        }

        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_risky_uncategorized_text() {
        let a = GeneralRisk.assess("Any breach results in eviction and a penalty.");
        assert!(a.score >= 0.45, "Got: {:?}", a);
    }

    #[test]
    fn test_plain_description_scores_zero() {
        let a = GeneralRisk.assess("The schedule describes the furniture provided.");
        assert!(a.score < f64::EPSILON, "Got: {:?}", a);
        assert!(a.signals.is_empty());
    }
}
