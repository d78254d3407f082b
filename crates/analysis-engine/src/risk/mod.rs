//! Rule-based risk models, one per clause category.
//!
//! Each model reads a clause in isolation and produces a continuous risk
//! score in [0, 1] by accumulating weighted signals (keyword clusters and
//! numeric context windows). Discretization into High/Medium/Low happens in
//! the severity classifier with category-specific thresholds.

pub mod deposit;
pub mod entry;
pub mod general;
pub mod indemnity;
pub mod maintenance;
pub mod notice;
pub mod rent;
pub mod termination;

pub use deposit::DepositRisk;
pub use entry::EntryRisk;
pub use general::GeneralRisk;
pub use indemnity::IndemnityRisk;
pub use maintenance::MaintenanceRisk;
pub use notice::NoticeRisk;
pub use rent::RentEscalationRisk;
pub use termination::TerminationRisk;
