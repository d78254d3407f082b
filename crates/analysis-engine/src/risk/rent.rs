// Risk rules for rent and rent escalation clauses.
use crate::extractors::numeric::{max_amount, max_percent};
use crate::patterns::{
    contains_any, contains_semantic_cluster, DISCRETION_KEYWORDS, INCREASE_KEYWORDS, RENT_KEYWORDS,
};
use crate::severity::{RiskAssessment, RiskModel};

pub struct RentEscalationRisk;

impl RiskModel for RentEscalationRisk {
    fn assess(&self, text: &str) -> RiskAssessment {
        let text_lower = text.to_lowercase();
        let mut assessment = RiskAssessment::default();

        if contains_semantic_cluster(&text_lower, &[RENT_KEYWORDS, INCREASE_KEYWORDS]) {
            assessment.add(0.15, "rent escalation terms");
        }

        match max_percent(&text_lower) {
            Some(pct) if pct > 10.0 => assessment.add(0.5, "escalation rate above 10%"),
            Some(pct) if pct > 5.0 => assessment.add(0.3, "escalation rate above 5%"),
            Some(_) => assessment.add(0.1, "stated escalation rate"),
            None => {}
        }

        if contains_any(&text_lower, DISCRETION_KEYWORDS)
            && contains_any(&text_lower, INCREASE_KEYWORDS)
        {
            assessment.add(0.45, "rent increase at landlord's discretion");
        }

        if text_lower.contains("late") {
            match max_amount(&text_lower) {
                Some(amount) if amount > 100.0 => assessment.add(0.3, "heavy late-payment charge"),
                Some(_) | None => assessment.add(0.15, "late-payment charges"),
            }
        }

        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_steep_escalation() {
        let a = RentEscalationRisk
            .assess("The monthly rent shall increase by 15% upon each renewal of the lease.");
        assert!(a.score >= 0.6, "Got: {:?}", a);
    }

    #[test]
    fn test_flags_discretionary_increase() {
        let a = RentEscalationRisk
            .assess("Landlord may raise the rent at any time at its sole discretion.");
        assert!(a.score >= 0.6, "Got: {:?}", a);
        assert!(a.signals.contains(&"rent increase at landlord's discretion"));
    }

    #[test]
    fn test_accepts_modest_escalation() {
        let a = RentEscalationRisk
            .assess("Rent shall be increased by 5% annually as agreed by both parties.");
        assert!(a.score < 0.45, "Got: {:?}", a);
    }

    #[test]
    fn test_flags_heavy_late_fee() {
        let a = RentEscalationRisk
            .assess("Late payment of rent attracts a fee of $250 per occurrence.");
        assert!(a.signals.contains(&"heavy late-payment charge"), "Got: {:?}", a);
    }
}
