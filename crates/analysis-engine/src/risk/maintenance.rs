// Risk rules for maintenance and repair clauses.
use crate::patterns::{
    contains_any, AS_IS_KEYWORDS, REPAIR_KEYWORDS, STRUCTURAL_KEYWORDS, TENANT_KEYWORDS,
};
use crate::severity::{RiskAssessment, RiskModel};

pub struct MaintenanceRisk;

impl RiskModel for MaintenanceRisk {
    fn assess(&self, text: &str) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let mut assessment = RiskAssessment::default();

        if contains_any(&text_lower, REPAIR_KEYWORDS) {
            assessment.add(0.1, "maintenance duties");
        }

        // Structural upkeep shifted onto the renter is the main hazard here.
        if contains_any(&text_lower, TENANT_KEYWORDS)
            && contains_any(&text_lower, STRUCTURAL_KEYWORDS)
            && contains_any(&text_lower, REPAIR_KEYWORDS)
        {
            assessment.add(0.5, "tenant responsible for structural repairs");
        }

        if contains_any(&text_lower, AS_IS_KEYWORDS) {
            assessment.add(0.35, "premises accepted as-is");
        }

        if text_lower.contains("all repairs")
            || text_lower.contains("tenant's expense")
            || text_lower.contains("tenant's cost")
        {
            assessment.add(0.3, "repairs at tenant's expense");
        }

        assessment
    }
}
