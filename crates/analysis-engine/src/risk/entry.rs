// Risk rules for landlord entry and inspection clauses.
use crate::extractors::numeric::extract_hours_near;
use crate::patterns::{contains_any, ENTRY_KEYWORDS};
use crate::severity::{RiskAssessment, RiskModel};

const HOUR_CONTEXT: &[&str] = &["enter", "entry", "access", "inspect"];

pub struct EntryRisk;

impl RiskModel for EntryRisk {
    fn assess(&self, text: &str) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let mut assessment = RiskAssessment::default();

        if contains_any(&text_lower, ENTRY_KEYWORDS) {
            assessment.add(0.1, "landlord entry terms");
        }
        if contains_any(&text_lower, ENTRY_KEYWORDS)
            && (text_lower.contains("without notice") || text_lower.contains("at any time"))
        {
            assessment.add(0.55, "entry without notice");
        }

        match extract_hours_near(&text_lower, HOUR_CONTEXT) {
            Some(hours) if hours < 24 => assessment.add(0.3, "entry notice under 24 hours"),
            Some(_) => assessment.add(0.05, "stated entry notice"),
            None => {}
        }

        assessment
    }
}
