//! Lease clause analysis pipeline.
//!
//! Takes extracted lease text and produces clauses classified by legal-risk
//! severity, a plain-language summary, and a 0-10 renter favorability score:
//!
//! ```text
//! text -> segmenter -> tagger -> severity classifier -> scorer
//!                                                    \-> summary
//! ```
//!
//! File format parsing, the UI, and model storage live behind the
//! [`extraction::TextExtractor`] and [`store::ModelStore`] seams.

pub mod analyzer;
pub mod config;
pub mod extraction;
pub mod extractors;
pub mod language;
pub mod patterns;
pub mod risk;
pub mod scorer;
pub mod segmenter;
pub mod severity;
pub mod store;
pub mod summary;
pub mod tagger;

pub use analyzer::Analyzer;
pub use config::{AnalysisConfig, ScoreWeights};
pub use store::{BuiltinModelStore, CategoryProfile, ModelStore, SeverityThresholds};
