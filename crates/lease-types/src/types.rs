//! Shared data model for the lease analysis pipeline.

use std::fmt;

/// File format the document text was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    Pdf,
    Docx,
    Txt,
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceFormat::Pdf => write!(f, "pdf"),
            SourceFormat::Docx => write!(f, "docx"),
            SourceFormat::Txt => write!(f, "txt"),
        }
    }
}

/// Languages the analyzer accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Kannada,
}

/// One lease agreement, immutable for the duration of an analysis run.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
    pub format: SourceFormat,
    pub language: Language,
}

impl Document {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        format: SourceFormat,
        language: Language,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            format,
            language,
        }
    }

    /// Basic size statistics over the extracted text.
    pub fn stats(&self) -> DocumentStats {
        let sentence_count = self
            .text
            .split(['.', '!', '?', '\u{0964}'])
            .filter(|s| s.trim().len() > 10)
            .count();
        DocumentStats {
            character_count: self.text.chars().count(),
            word_count: self.text.split_whitespace().count(),
            sentence_count,
            paragraph_count: self
                .text
                .lines()
                .filter(|line| !line.trim().is_empty())
                .count(),
        }
    }
}

/// Size statistics for a processed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DocumentStats {
    pub character_count: usize,
    pub word_count: usize,
    pub sentence_count: usize,
    pub paragraph_count: usize,
}

/// A contiguous byte range within the document text.
///
/// Spans produced by the segmenter are non-overlapping and ordered by start
/// offset; they do not have to cover the whole document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClauseSpan {
    pub start: usize,
    pub end: usize,
}

impl ClauseSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The text this span covers. Offsets must lie on char boundaries of
    /// `text`, which holds for spans produced by the segmenter.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Topical classification for a clause. Closed set so that category
/// dispatch is exhaustive at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Termination,
    RentEscalation,
    SecurityDeposit,
    Maintenance,
    Indemnification,
    Notice,
    Entry,
    Uncategorized,
}

impl Category {
    /// Every category, including the fallback.
    pub const ALL: [Category; 8] = [
        Category::Termination,
        Category::RentEscalation,
        Category::SecurityDeposit,
        Category::Maintenance,
        Category::Indemnification,
        Category::Notice,
        Category::Entry,
        Category::Uncategorized,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Termination => "termination",
            Category::RentEscalation => "rent escalation",
            Category::SecurityDeposit => "security deposit",
            Category::Maintenance => "maintenance",
            Category::Indemnification => "indemnification",
            Category::Notice => "notice",
            Category::Entry => "entry",
            Category::Uncategorized => "uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Risk level a clause poses to the renter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityLabel {
    High,
    Medium,
    Low,
}

impl SeverityLabel {
    /// Color used by the visual highlighter collaborator.
    pub fn highlight_color(&self) -> &'static str {
        match self {
            SeverityLabel::High => "red",
            SeverityLabel::Medium => "yellow",
            SeverityLabel::Low => "blue",
        }
    }

    /// Ordering rank, Low = 0 up to High = 2.
    pub fn risk_rank(&self) -> u8 {
        match self {
            SeverityLabel::Low => 0,
            SeverityLabel::Medium => 1,
            SeverityLabel::High => 2,
        }
    }
}

impl fmt::Display for SeverityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityLabel::High => write!(f, "high"),
            SeverityLabel::Medium => write!(f, "medium"),
            SeverityLabel::Low => write!(f, "low"),
        }
    }
}

/// One classified clause: span, category, severity, and an optional
/// explanation of why the severity was assigned.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ClauseRecord {
    pub span: ClauseSpan,
    pub category: Category,
    pub severity: SeverityLabel,
    pub rationale: Option<String>,
}

/// Final analysis output for one document. Immutable once assembled.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalysisResult {
    pub document_id: String,
    pub language: Language,
    pub clauses: Vec<ClauseRecord>,
    pub favorability_score: f64,
    pub summary: String,
}

impl AnalysisResult {
    /// Number of clauses carrying the given severity.
    pub fn count_severity(&self, severity: SeverityLabel) -> usize {
        self.clauses
            .iter()
            .filter(|c| c.severity == severity)
            .count()
    }
}
