//! Error taxonomy for the analysis pipeline.
//!
//! Component-level errors abort the current document's analysis; the
//! orchestrator wraps them in [`AnalysisError`] together with the document
//! id and the stage that failed. No partial result is ever exposed.

use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::types::{Category, SourceFormat};

/// Failures while turning a file into plain document text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(SourceFormat),

    #[error("no text could be extracted from '{0}'")]
    NoText(String),

    #[error("failed to read document: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures while splitting document text into clause spans.
#[derive(Debug, Error)]
pub enum SegmentationError {
    #[error("document text is empty")]
    EmptyText,

    #[error("document text is too short to segment ({length} chars, minimum {minimum})")]
    TooShort { length: usize, minimum: usize },
}

/// Failures while assigning categories. Ambiguous text is never an error;
/// only malformed span input is.
#[derive(Debug, Error)]
pub enum TaggingError {
    #[error("span {start}..{end} lies outside document bounds (text length {length})")]
    SpanOutOfBounds {
        start: usize,
        end: usize,
        length: usize,
    },

    #[error("span {start}..{end} is empty or inverted")]
    InvalidSpan { start: usize, end: usize },
}

/// Configuration-level failures in the severity classifier.
#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("no risk model registered for category '{0}'")]
    MissingModel(Category),
}

/// Any component failure, as carried by the orchestrator.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error(transparent)]
    Segmentation(#[from] SegmentationError),

    #[error(transparent)]
    Tagging(#[from] TaggingError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("analysis timed out after {0:?}")]
    Timeout(Duration),

    #[error("analysis worker failed: {0}")]
    Worker(String),
}

/// Pipeline stage, reported to the caller when a run fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStage {
    Segmenting,
    Tagging,
    Classifying,
    ScoringAndSummarizing,
}

impl fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisStage::Segmenting => write!(f, "segmenting"),
            AnalysisStage::Tagging => write!(f, "tagging"),
            AnalysisStage::Classifying => write!(f, "classifying"),
            AnalysisStage::ScoringAndSummarizing => write!(f, "scoring/summarizing"),
        }
    }
}

/// The single error type surfaced by `analyze`.
#[derive(Debug, Error)]
#[error("analysis of document '{document_id}' failed while {stage}: {source}")]
pub struct AnalysisError {
    pub document_id: String,
    pub stage: AnalysisStage,
    #[source]
    pub source: PipelineError,
}

impl AnalysisError {
    pub fn new(
        document_id: impl Into<String>,
        stage: AnalysisStage,
        source: impl Into<PipelineError>,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            stage,
            source: source.into(),
        }
    }
}
