//! Property-based tests for the analysis pipeline
//!
//! Exercises the segmenter, tagger, scorer, and summary generator over
//! generated inputs using proptest.

use proptest::prelude::*;

use analysis_engine::config::{ScoreWeights, SegmenterConfig, TaggerConfig};
use analysis_engine::scorer::FavorabilityScorer;
use analysis_engine::segmenter::Segmenter;
use analysis_engine::summary::{SummaryGenerator, NO_MAJOR_RISKS};
use analysis_engine::tagger::CategoryTagger;
use analysis_engine::BuiltinModelStore;
use lease_types::{Category, ClauseRecord, ClauseSpan, Language, SeverityLabel};
use std::sync::Arc;

// ============================================================
// Strategies
// ============================================================

fn arb_severity() -> impl Strategy<Value = SeverityLabel> {
    prop_oneof![
        Just(SeverityLabel::High),
        Just(SeverityLabel::Medium),
        Just(SeverityLabel::Low),
    ]
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

fn arb_clause() -> impl Strategy<Value = ClauseRecord> {
    (arb_category(), arb_severity(), 0usize..500).prop_map(|(category, severity, start)| {
        ClauseRecord {
            span: ClauseSpan::new(start, start + 25),
            category,
            severity,
            rationale: None,
        }
    })
}

/// Paragraph-structured lease-like text: a few sentences of plain words
/// separated by blank lines, occasionally in Kannada script.
fn arb_document_text() -> impl Strategy<Value = String> {
    let paragraph = prop_oneof![
        "[a-z]{3,10}( [a-z]{3,10}){4,20}\\.",
        "[\u{0C95}-\u{0CB9}]{3,8}( [\u{0C95}-\u{0CB9}]{3,8}){4,15}\u{0964}",
    ];
    prop::collection::vec(paragraph, 1..6).prop_map(|paragraphs| paragraphs.join("\n\n"))
}

fn default_scorer() -> FavorabilityScorer {
    FavorabilityScorer::new(ScoreWeights::default())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================================
    // Favorability Score Properties
    // ============================================================

    #[test]
    fn score_is_order_independent(mut clauses in prop::collection::vec(arb_clause(), 0..40)) {
        let scorer = default_scorer();
        let forward = scorer.score(&clauses);
        clauses.reverse();
        prop_assert_eq!(scorer.score(&clauses), forward);
    }

    #[test]
    fn score_never_leaves_the_scale(clauses in prop::collection::vec(arb_clause(), 0..200)) {
        let score = default_scorer().score(&clauses);
        prop_assert!((0.0..=10.0).contains(&score), "score out of range: {}", score);
    }

    #[test]
    fn adding_a_clause_never_raises_the_score(
        clauses in prop::collection::vec(arb_clause(), 0..40),
        extra in arb_clause()
    ) {
        let scorer = default_scorer();
        let before = scorer.score(&clauses);
        let mut extended = clauses;
        extended.push(extra);
        prop_assert!(scorer.score(&extended) <= before);
    }

    #[test]
    fn upgrading_a_severity_never_raises_the_score(
        mut clauses in prop::collection::vec(arb_clause(), 1..40),
        index in any::<prop::sample::Index>()
    ) {
        let scorer = default_scorer();
        let before = scorer.score(&clauses);
        let i = index.index(clauses.len());
        clauses[i].severity = match clauses[i].severity {
            SeverityLabel::Low => SeverityLabel::Medium,
            SeverityLabel::Medium | SeverityLabel::High => SeverityLabel::High,
        };
        prop_assert!(scorer.score(&clauses) <= before);
    }

    #[test]
    fn score_has_one_decimal_place(clauses in prop::collection::vec(arb_clause(), 0..60)) {
        let score = default_scorer().score(&clauses);
        let scaled = score * 10.0;
        prop_assert!((scaled - scaled.round()).abs() < 1e-9, "Got: {}", score);
    }

    // ============================================================
    // Segmenter Properties
    // ============================================================

    #[test]
    fn spans_are_ordered_in_bounds_and_on_char_boundaries(text in arb_document_text()) {
        let segmenter = Segmenter::new(&SegmenterConfig::default());
        if let Ok(spans) = segmenter.segment_all(&text) {
            let mut previous_end = 0usize;
            for span in &spans {
                prop_assert!(span.start >= previous_end, "overlap at {:?}", span);
                prop_assert!(span.end <= text.len());
                prop_assert!(text.is_char_boundary(span.start));
                prop_assert!(text.is_char_boundary(span.end));
                prop_assert!(!span.slice(&text).trim().is_empty());
                previous_end = span.end;
            }
        }
    }

    #[test]
    fn segmentation_is_deterministic(text in arb_document_text()) {
        let segmenter = Segmenter::new(&SegmenterConfig::default());
        let first = segmenter.segment_all(&text).ok();
        let second = segmenter.segment_all(&text).ok();
        prop_assert_eq!(first, second);
    }

    // ============================================================
    // Tagger Properties
    // ============================================================

    #[test]
    fn tagging_segmenter_output_never_fails(text in arb_document_text()) {
        let segmenter = Segmenter::new(&SegmenterConfig::default());
        let tagger = CategoryTagger::new(
            Arc::new(BuiltinModelStore::new()),
            TaggerConfig::default(),
        );
        if let Ok(spans) = segmenter.segment_all(&text) {
            let tagged = tagger.tag(&text, &spans);
            prop_assert!(tagged.is_ok(), "Got: {:?}", tagged);
            let tagged = tagged.unwrap();
            prop_assert_eq!(tagged.len(), spans.len());
            prop_assert_eq!(tagger.tag(&text, &spans).unwrap(), tagged);
        }
    }

    // ============================================================
    // Summary Properties
    // ============================================================

    #[test]
    fn fallback_summary_exactly_when_nothing_notable(
        severities in prop::collection::vec(arb_severity(), 0..20)
    ) {
        let text = "x".repeat(600);
        let clauses: Vec<ClauseRecord> = severities
            .iter()
            .enumerate()
            .map(|(i, &severity)| ClauseRecord {
                span: ClauseSpan::new(i * 30, i * 30 + 25),
                category: Category::Uncategorized,
                severity,
                rationale: None,
            })
            .collect();
        let summary = SummaryGenerator::new(1200).generate(&text, Language::English, &clauses);
        let notable = clauses.iter().any(|c| c.severity != SeverityLabel::Low);
        prop_assert_eq!(summary == NO_MAJOR_RISKS, !notable, "Got: {}", summary);
    }

    #[test]
    fn summary_respects_length_limit(
        severities in prop::collection::vec(arb_severity(), 0..20),
        max_chars in 80usize..400
    ) {
        let text = "tenant waives every right the law allows and pays all penalties. ".repeat(12);
        let clauses: Vec<ClauseRecord> = severities
            .iter()
            .enumerate()
            .map(|(i, &severity)| ClauseRecord {
                span: ClauseSpan::new(i * 30, i * 30 + 25),
                category: Category::Termination,
                severity,
                rationale: Some("broad waiver".to_string()),
            })
            .collect();
        let summary = SummaryGenerator::new(max_chars).generate(&text, Language::English, &clauses);
        prop_assert!(summary.chars().count() <= max_chars.max(NO_MAJOR_RISKS.len()));
    }
}
