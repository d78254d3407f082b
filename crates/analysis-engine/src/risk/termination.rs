// Risk rules for termination and eviction clauses.
use crate::extractors::numeric::extract_days_near;
use crate::patterns::{
    contains_any, contains_semantic_cluster, DISCRETION_KEYWORDS, NOTICE_KEYWORDS,
    PENALTY_KEYWORDS, TERMINATION_KEYWORDS, WAIVER_KEYWORDS,
};
use crate::severity::{RiskAssessment, RiskModel};

const DAY_CONTEXT: &[&str] = &["notice", "terminate", "termination", "vacate"];

/// Termination clauses carry the heaviest consequences for a renter, so
/// unilateral or under-noticed termination weighs high here.
pub struct TerminationRisk;

impl RiskModel for TerminationRisk {
    fn assess(&self, text: &str) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let mut assessment = RiskAssessment::default();

        if contains_any(&text_lower, TERMINATION_KEYWORDS) {
            assessment.add(0.15, "termination terms");
        }
        if contains_semantic_cluster(&text_lower, &[WAIVER_KEYWORDS, NOTICE_KEYWORDS]) {
            assessment.add(0.5, "waiver of notice before termination");
        }
        if contains_any(&text_lower, DISCRETION_KEYWORDS) {
            assessment.add(0.4, "unilateral or immediate termination");
        }
        if contains_any(&text_lower, PENALTY_KEYWORDS) {
            assessment.add(0.3, "penalty tied to termination");
        }

        match extract_days_near(&text_lower, DAY_CONTEXT) {
            Some(days) if days < 7 => assessment.add(0.45, "termination window under 7 days"),
            Some(days) if days >= 60 => {
                assessment.add(0.4, "notice obligation of 60 days or more")
            }
            Some(_) => assessment.add(0.1, "explicit termination notice period"),
            None => {}
        }

        assessment
    }
}
