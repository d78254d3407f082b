pub mod error;
pub mod types;

pub use error::{
    AnalysisError, AnalysisStage, ClassificationError, ExtractionError, PipelineError,
    SegmentationError, TaggingError,
};
pub use types::{
    AnalysisResult, Category, ClauseRecord, ClauseSpan, Document, DocumentStats, Language,
    SeverityLabel, SourceFormat,
};
