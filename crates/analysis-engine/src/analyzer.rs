//! Analysis orchestration.
//!
//! Runs the pipeline stages for one document: segment, tag, classify, then
//! score and summarize in parallel. CPU-bound stages run on the blocking
//! pool so the async runtime stays responsive under concurrent analyses.
//! Each run either produces a complete [`AnalysisResult`] or a single
//! [`AnalysisError`] naming the stage that failed; partial results are
//! never exposed.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use std::time::Duration;

use lease_types::{
    AnalysisError, AnalysisResult, AnalysisStage, Document, PipelineError,
};
use tokio::task;
use tracing::{debug, info, instrument, warn};

use crate::config::AnalysisConfig;
use crate::scorer::FavorabilityScorer;
use crate::segmenter::Segmenter;
use crate::severity::SeverityClassifier;
use crate::store::{BuiltinModelStore, ModelStore};
use crate::summary::SummaryGenerator;
use crate::tagger::CategoryTagger;

pub struct Analyzer {
    timeout: Option<Duration>,
    segmenter: Segmenter,
    tagger: CategoryTagger,
    classifier: SeverityClassifier,
    scorer: FavorabilityScorer,
    summarizer: SummaryGenerator,
}

impl Analyzer {
    /// Build an analyzer from a validated configuration and a model store.
    pub fn new(config: AnalysisConfig, store: Arc<dyn ModelStore>) -> anyhow::Result<Self> {
        config.validate()?;
        Ok(Self::build(config, store))
    }

    /// Default configuration with the built-in rule-based models.
    pub fn with_defaults() -> Self {
        Self::build(
            AnalysisConfig::default(),
            Arc::new(BuiltinModelStore::new()),
        )
    }

    fn build(config: AnalysisConfig, store: Arc<dyn ModelStore>) -> Self {
        Self {
            timeout: config.timeout,
            segmenter: Segmenter::new(&config.segmenter),
            tagger: CategoryTagger::new(Arc::clone(&store), config.tagger),
            classifier: SeverityClassifier::new(store),
            scorer: FavorabilityScorer::new(config.weights),
            summarizer: SummaryGenerator::new(config.max_summary_chars),
        }
    }

    /// Analyze one document, subject to the configured deadline. On timeout
    /// the in-flight blocking work finishes on the pool and its result is
    /// dropped; the caller gets a timeout error naming the stage that was
    /// running.
    pub async fn analyze(&self, document: &Document) -> Result<AnalysisResult, AnalysisError> {
        let stage = Arc::new(AtomicU8::new(AnalysisStage::Segmenting as u8));
        match self.timeout {
            Some(limit) => {
                match tokio::time::timeout(limit, self.run(document, Arc::clone(&stage))).await {
                    Ok(result) => result,
                    Err(_) => {
                        let stage = stage_from_code(stage.load(Ordering::Acquire));
                        warn!(document_id = %document.id, %stage, ?limit,
                            "analysis timed out; in-flight stage result discarded");
                        Err(AnalysisError::new(
                            &document.id,
                            stage,
                            PipelineError::Timeout(limit),
                        ))
                    }
                }
            }
            None => self.run(document, stage).await,
        }
    }

    #[instrument(skip_all, fields(document_id = %document.id))]
    async fn run(
        &self,
        document: &Document,
        stage: Arc<AtomicU8>,
    ) -> Result<AnalysisResult, AnalysisError> {
        let id = document.id.clone();
        let text: Arc<str> = Arc::from(document.text.as_str());

        let segmenter = self.segmenter.clone();
        let spans = {
            let text = Arc::clone(&text);
            run_blocking(&id, AnalysisStage::Segmenting, move || {
                segmenter.segment_all(&text).map_err(PipelineError::from)
            })
            .await?
        };
        debug!(spans = spans.len(), "segmented document");

        stage.store(AnalysisStage::Tagging as u8, Ordering::Release);
        let tagger = self.tagger.clone();
        let tagged = {
            let text = Arc::clone(&text);
            run_blocking(&id, AnalysisStage::Tagging, move || {
                tagger.tag(&text, &spans).map_err(PipelineError::from)
            })
            .await?
        };

        stage.store(AnalysisStage::Classifying as u8, Ordering::Release);
        let classifier = self.classifier.clone();
        let clauses = {
            let text = Arc::clone(&text);
            run_blocking(&id, AnalysisStage::Classifying, move || {
                tagged
                    .into_iter()
                    .map(|t| classifier.classify(&text, t))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(PipelineError::from)
            })
            .await?
        };

        stage.store(AnalysisStage::ScoringAndSummarizing as u8, Ordering::Release);
        let scorer = self.scorer.clone();
        let summarizer = self.summarizer.clone();
        let language = document.language;
        let score_clauses = clauses.clone();
        let summary_clauses = clauses.clone();
        let summary_text = Arc::clone(&text);
        let (score, summary) = tokio::join!(
            run_blocking(&id, AnalysisStage::ScoringAndSummarizing, move || {
                Ok::<_, PipelineError>(scorer.score(&score_clauses))
            }),
            run_blocking(&id, AnalysisStage::ScoringAndSummarizing, move || {
                Ok::<_, PipelineError>(summarizer.generate(
                    &summary_text,
                    language,
                    &summary_clauses,
                ))
            }),
        );
        let favorability_score = score?;
        let summary = summary?;

        info!(
            clauses = clauses.len(),
            favorability_score, "analysis complete"
        );
        Ok(AnalysisResult {
            document_id: id,
            language,
            clauses,
            favorability_score,
            summary,
        })
    }
}

async fn run_blocking<T, F>(
    document_id: &str,
    stage: AnalysisStage,
    work: F,
) -> Result<T, AnalysisError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, PipelineError> + Send + 'static,
{
    match task::spawn_blocking(work).await {
        Ok(result) => result.map_err(|e| AnalysisError::new(document_id, stage, e)),
        Err(join_err) => Err(AnalysisError::new(
            document_id,
            stage,
            PipelineError::Worker(join_err.to_string()),
        )),
    }
}

fn stage_from_code(code: u8) -> AnalysisStage {
    match code {
        0 => AnalysisStage::Segmenting,
        1 => AnalysisStage::Tagging,
        2 => AnalysisStage::Classifying,
        _ => AnalysisStage::ScoringAndSummarizing,
    }
}
