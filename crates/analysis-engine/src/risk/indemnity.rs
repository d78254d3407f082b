// Risk rules for indemnification and liability clauses.
use crate::patterns::{
    contains_any, contains_semantic_cluster, INDEMNITY_KEYWORDS, LIABILITY_KEYWORDS,
    WAIVER_KEYWORDS,
};
use crate::severity::{RiskAssessment, RiskModel};

pub struct IndemnityRisk;

impl RiskModel for IndemnityRisk {
    fn assess(&self, text: &str) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let mut assessment = RiskAssessment::default();

        if contains_any(&text_lower, INDEMNITY_KEYWORDS) {
            assessment.add(0.3, "indemnification of landlord");
        }
        if text_lower.contains("hold harmless") && text_lower.contains("all claims") {
            assessment.add(0.3, "blanket hold-harmless obligation");
        }
        if contains_semantic_cluster(&text_lower, &[WAIVER_KEYWORDS, LIABILITY_KEYWORDS])
            || text_lower.contains("not be liable")
            || text_lower.contains("not liable")
        {
            assessment.add(0.4, "waiver of landlord liability");
        }
        if text_lower.contains("including negligence")
            || text_lower.contains("even if caused by")
            || text_lower.contains("negligence of the landlord")
        {
            assessment.add(0.3, "covers landlord negligence");
        }
        if contains_any(&text_lower, LIABILITY_KEYWORDS) && assessment.signals.is_empty() {
            assessment.add(0.15, "liability terms");
        }

        assessment
    }
}
