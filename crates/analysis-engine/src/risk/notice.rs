// Risk rules for notice-period clauses.
use crate::extractors::numeric::extract_days_near;
use crate::patterns::{contains_any, contains_semantic_cluster, NOTICE_KEYWORDS, WAIVER_KEYWORDS};
use crate::severity::{RiskAssessment, RiskModel};

const DAY_CONTEXT: &[&str] = &["notice", "notify", "notification", "vacate"];

/// Notice clauses are routine; risk concentrates in waived or very short
/// notice, not in the presence of a notice period itself.
pub struct NoticeRisk;

impl RiskModel for NoticeRisk {
    fn assess(&self, text: &str) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let mut assessment = RiskAssessment::default();

        if contains_any(&text_lower, NOTICE_KEYWORDS) {
            assessment.add(0.1, "notice requirements");
        }
        if contains_semantic_cluster(&text_lower, &[WAIVER_KEYWORDS, NOTICE_KEYWORDS]) {
            assessment.add(0.55, "waiver of notice rights");
        }
        if text_lower.contains("without notice") || text_lower.contains("without prior notice") {
            assessment.add(0.5, "action permitted without notice");
        }

        match extract_days_near(&text_lower, DAY_CONTEXT) {
            Some(days) if days < 7 => assessment.add(0.35, "notice period under 7 days"),
            Some(days) if days < 30 => assessment.add(0.15, "notice period under 30 days"),
            Some(_) => assessment.add(0.05, "stated notice period"),
            None => {}
        }

        assessment
    }
}
