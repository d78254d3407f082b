// Risk rules for security deposit clauses.
use crate::extractors::numeric::extract_days_near;
use crate::patterns::{contains_any, DEPOSIT_KEYWORDS, PENALTY_KEYWORDS};
use crate::severity::{RiskAssessment, RiskModel};

const RETURN_CONTEXT: &[&str] = &["return", "returned", "refund", "refunded", "deposit"];

pub struct DepositRisk;

impl RiskModel for DepositRisk {
    fn assess(&self, text: &str) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let mut assessment = RiskAssessment::default();

        if contains_any(&text_lower, DEPOSIT_KEYWORDS) {
            assessment.add(0.1, "security deposit terms");
        }
        if text_lower.contains("non-refundable") || text_lower.contains("nonrefundable") {
            assessment.add(0.55, "non-refundable deposit");
        }
        if contains_any(&text_lower, DEPOSIT_KEYWORDS) && contains_any(&text_lower, PENALTY_KEYWORDS)
        {
            assessment.add(0.4, "deposit forfeiture");
        }

        match extract_days_near(&text_lower, RETURN_CONTEXT) {
            Some(days) if days > 30 => assessment.add(0.45, "deposit return period over 30 days"),
            Some(days) if days > 15 => assessment.add(0.25, "deposit return period over 15 days"),
            Some(_) => {}
            None => {}
        }

        assessment
    }
}
