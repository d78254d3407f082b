//! Pipeline configuration.
//!
//! Loaded once at startup (defaults, optionally overridden from `LEASE_*`
//! environment variables) and treated as read-only for the life of the
//! process. Penalty weights and similarity thresholds are deliberately
//! configuration, not constants scattered through the pipeline.

use std::time::Duration;

use anyhow::{bail, Context, Result};

/// Favorability score weights. The score starts at `baseline` and loses a
/// penalty per clause according to severity.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct ScoreWeights {
    pub baseline: f64,
    pub high_penalty: f64,
    pub medium_penalty: f64,
    pub low_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            baseline: 7.0,
            high_penalty: 0.3,
            medium_penalty: 0.1,
            low_penalty: 0.0,
        }
    }
}

/// Category tagger tuning.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct TaggerConfig {
    /// Two categories scoring within this margin are treated as tied.
    pub epsilon: f64,
    /// Best similarity below this resolves to Uncategorized.
    pub min_similarity: f64,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.05,
            min_similarity: 0.12,
        }
    }
}

/// Clause segmenter tuning.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct SegmenterConfig {
    /// Documents shorter than this (in chars, trimmed) fail segmentation.
    pub min_document_chars: usize,
    /// Candidate spans shorter than this are discarded as boilerplate.
    pub min_clause_chars: usize,
    /// Paragraphs longer than this are re-split at sentence boundaries.
    pub max_paragraph_chars: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            min_document_chars: 40,
            min_clause_chars: 20,
            max_paragraph_chars: 200,
        }
    }
}

/// Top-level pipeline configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisConfig {
    pub weights: ScoreWeights,
    pub tagger: TaggerConfig,
    pub segmenter: SegmenterConfig,
    pub max_summary_chars: usize,
    /// Per-document analysis deadline. None disables the timeout.
    pub timeout: Option<Duration>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            tagger: TaggerConfig::default(),
            segmenter: SegmenterConfig::default(),
            max_summary_chars: 1200,
            timeout: None,
        }
    }
}

impl AnalysisConfig {
    /// Defaults overridden by `LEASE_*` environment variables:
    /// `LEASE_BASELINE_SCORE`, `LEASE_HIGH_PENALTY`, `LEASE_MEDIUM_PENALTY`,
    /// `LEASE_LOW_PENALTY`, `LEASE_TAGGER_EPSILON`, `LEASE_MIN_SIMILARITY`,
    /// `LEASE_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(v) = env_f64("LEASE_BASELINE_SCORE")? {
            config.weights.baseline = v;
        }
        if let Some(v) = env_f64("LEASE_HIGH_PENALTY")? {
            config.weights.high_penalty = v;
        }
        if let Some(v) = env_f64("LEASE_MEDIUM_PENALTY")? {
            config.weights.medium_penalty = v;
        }
        if let Some(v) = env_f64("LEASE_LOW_PENALTY")? {
            config.weights.low_penalty = v;
        }
        if let Some(v) = env_f64("LEASE_TAGGER_EPSILON")? {
            config.tagger.epsilon = v;
        }
        if let Some(v) = env_f64("LEASE_MIN_SIMILARITY")? {
            config.tagger.min_similarity = v;
        }
        if let Ok(v) = std::env::var("LEASE_TIMEOUT_SECS") {
            let secs: u64 = v
                .parse()
                .with_context(|| format!("invalid LEASE_TIMEOUT_SECS: {}", v))?;
            config.timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Enforce the invariants the scorer and tagger rely on.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        if !w.baseline.is_finite() || !(0.0..=10.0).contains(&w.baseline) {
            bail!("baseline score must be within [0, 10], got {}", w.baseline);
        }
        for (name, value) in [
            ("high_penalty", w.high_penalty),
            ("medium_penalty", w.medium_penalty),
            ("low_penalty", w.low_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a non-negative finite number, got {}", name, value);
            }
        }
        // A higher-risk label must never cost less than a lower one.
        if w.low_penalty > w.medium_penalty || w.medium_penalty > w.high_penalty {
            bail!(
                "penalties must be ordered low <= medium <= high, got {} / {} / {}",
                w.low_penalty,
                w.medium_penalty,
                w.high_penalty
            );
        }
        if !self.tagger.epsilon.is_finite() || self.tagger.epsilon < 0.0 {
            bail!("tagger epsilon must be non-negative");
        }
        if !(0.0..=1.0).contains(&self.tagger.min_similarity) {
            bail!("min_similarity must be within [0, 1]");
        }
        if self.segmenter.min_clause_chars == 0 {
            bail!("min_clause_chars must be positive");
        }
        if self.segmenter.max_paragraph_chars < self.segmenter.min_clause_chars {
            bail!("max_paragraph_chars must be at least min_clause_chars");
        }
        if self.max_summary_chars < 80 {
            bail!("max_summary_chars must be at least 80");
        }
        Ok(())
    }
}

fn env_f64(name: &str) -> Result<Option<f64>> {
    match std::env::var(name) {
        Ok(v) => {
            let parsed = v
                .parse::<f64>()
                .with_context(|| format!("invalid {}: {}", name, v))?;
            Ok(Some(parsed))
        }
        Err(_) => Ok(None),
    }
}
