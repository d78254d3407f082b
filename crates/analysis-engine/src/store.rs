//! Model and category store.
//!
//! The pipeline consumes category profiles (exemplar phrases, prior
//! frequency, severity thresholds, risk model) through the read-only
//! [`ModelStore`] trait. [`BuiltinModelStore`] wires the rule-based models;
//! a collaborator may substitute a store backed by learned models.

use std::collections::HashMap;

use lease_types::{Category, SeverityLabel};

use crate::risk::{
    DepositRisk, EntryRisk, GeneralRisk, IndemnityRisk, MaintenanceRisk, NoticeRisk,
    RentEscalationRisk, TerminationRisk,
};
use crate::severity::RiskModel;

/// Category-specific discretization thresholds for a risk score in [0, 1].
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct SeverityThresholds {
    pub high: f64,
    pub medium: f64,
}

impl SeverityThresholds {
    pub const fn new(high: f64, medium: f64) -> Self {
        Self { high, medium }
    }

    pub fn discretize(&self, score: f64) -> SeverityLabel {
        if score >= self.high {
            SeverityLabel::High
        } else if score >= self.medium {
            SeverityLabel::Medium
        } else {
            SeverityLabel::Low
        }
    }
}

/// Everything the tagger and classifier need to know about one category.
pub struct CategoryProfile {
    pub category: Category,
    /// Phrases that exemplify the category, used for lexical similarity.
    pub exemplars: Vec<String>,
    /// Relative frequency of the category in the labeled training set,
    /// used only to break tagging ties.
    pub prior: f64,
    pub thresholds: SeverityThresholds,
    pub model: Box<dyn RiskModel>,
}

/// Read-only source of category profiles, safe for concurrent reads.
pub trait ModelStore: Send + Sync {
    fn profile(&self, category: Category) -> Option<&CategoryProfile>;
}

/// Built-in store backed by the rule-based risk models.
pub struct BuiltinModelStore {
    profiles: HashMap<Category, CategoryProfile>,
}

impl BuiltinModelStore {
    pub fn new() -> Self {
        let mut profiles: HashMap<Category, CategoryProfile> = HashMap::new();
        let mut insert = |category: Category,
                          exemplars: &[&str],
                          prior: f64,
                          thresholds: SeverityThresholds,
                          model: Box<dyn RiskModel>| {
            profiles.insert(
                category,
                CategoryProfile {
                    category,
                    exemplars: exemplars.iter().map(|s| s.to_string()).collect(),
                    prior,
                    thresholds,
                    model,
                },
            );
        };

        insert(
            Category::Termination,
            &[
                "either party may terminate this agreement",
                "landlord may evict the tenant from the premises",
                "the lease shall stand terminated",
                "tenant must vacate the premises on termination",
                "grounds for eviction and termination",
            ],
            0.13,
            SeverityThresholds::new(0.55, 0.25),
            Box::new(TerminationRisk),
        );
        insert(
            Category::RentEscalation,
            &[
                "the monthly rent shall be increased annually",
                "rent is payable in advance on the first",
                "escalation of five percent on renewal",
                "late payment of rent attracts additional charges",
                "revision of the monthly rent",
            ],
            0.20,
            SeverityThresholds::new(0.65, 0.3),
            Box::new(RentEscalationRisk),
        );
        insert(
            Category::SecurityDeposit,
            &[
                "the security deposit shall be refunded",
                "advance amount paid as interest free deposit",
                "the deposit will be returned after deductions",
                "forfeiture of the security deposit",
            ],
            0.14,
            SeverityThresholds::new(0.6, 0.3),
            Box::new(DepositRisk),
        );
        insert(
            Category::Maintenance,
            &[
                "keep the premises in good repair and condition",
                "responsible for maintenance and upkeep",
                "structural repairs to the roof and plumbing",
                "routine wear and tear excepted",
            ],
            0.16,
            SeverityThresholds::new(0.65, 0.35),
            Box::new(MaintenanceRisk),
        );
        insert(
            Category::Indemnification,
            &[
                "indemnify and hold harmless from all claims",
                "liability for damages losses and expenses",
                "shall not be liable for any loss or injury",
            ],
            0.07,
            SeverityThresholds::new(0.55, 0.3),
            Box::new(IndemnityRisk),
        );
        insert(
            Category::Notice,
            &[
                "written notice of thirty days",
                "serve advance notice before vacating",
                "notification in writing to the other party",
            ],
            0.12,
            SeverityThresholds::new(0.6, 0.3),
            Box::new(NoticeRisk),
        );
        insert(
            Category::Entry,
            &[
                "enter the premises for inspection",
                "right of entry with prior intimation",
                "access to inspect the condition of the unit",
            ],
            0.08,
            SeverityThresholds::new(0.6, 0.35),
            Box::new(EntryRisk),
        );
        insert(
            Category::Uncategorized,
            &[],
            0.10,
            SeverityThresholds::new(0.7, 0.4),
            Box::new(GeneralRisk),
        );

        Self { profiles }
    }
}

impl Default for BuiltinModelStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelStore for BuiltinModelStore {
    fn profile(&self, category: Category) -> Option<&CategoryProfile> {
        self.profiles.get(&category)
    }
}
