//! End-to-end pipeline tests over realistic lease text.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use analysis_engine::config::AnalysisConfig;
use analysis_engine::language::detect_language;
use analysis_engine::summary::NO_MAJOR_RISKS;
use analysis_engine::{Analyzer, BuiltinModelStore};
use lease_types::{Category, Document, Language, SeverityLabel, SourceFormat};

const HARSH_LEASE: &str = "\
The landlord may terminate this agreement at any time without notice and evict the tenant, \
and the tenant waives any right to advance notice of termination.\n\
\n\
The monthly rent shall be increased by 15% every year at the sole discretion of the landlord.\n\
\n\
The security deposit is non-refundable and shall be forfeited on any breach of this agreement.\n\
\n\
The tenant shall indemnify and hold harmless the landlord from all claims, even if caused by \
the negligence of the landlord.";

const BENIGN_LEASE: &str = "\
The agreement describes the schedule of furniture and fittings provided with the unit.\n\
\n\
The premises are located at 12 Brigade Road, Bengaluru, and comprise two bedrooms.\n\
\n\
Either occupant may use the shared garden subject to the society guidelines.";

fn document(id: &str, text: &str) -> Document {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let language = detect_language(text);
    Document::new(id, text, SourceFormat::Txt, language)
}

#[tokio::test]
async fn harsh_lease_is_flagged_across_categories() {
    let result = Analyzer::with_defaults()
        .analyze(&document("harsh-1", HARSH_LEASE))
        .await
        .unwrap();

    assert_eq!(result.language, Language::English);
    assert_eq!(result.clauses.len(), 4);
    assert!(
        result.count_severity(SeverityLabel::High) >= 3,
        "Got: {:#?}",
        result.clauses
    );

    let categories: Vec<Category> = result.clauses.iter().map(|c| c.category).collect();
    assert!(categories.contains(&Category::Termination), "Got: {:?}", categories);
    assert!(categories.contains(&Category::RentEscalation), "Got: {:?}", categories);
    assert!(categories.contains(&Category::SecurityDeposit), "Got: {:?}", categories);

    assert!(result.favorability_score < 7.0, "Got: {}", result.favorability_score);
    assert!(result.summary.contains("high-risk"), "Got: {}", result.summary);
}

#[tokio::test]
async fn benign_lease_keeps_baseline_and_fallback_summary() {
    let result = Analyzer::with_defaults()
        .analyze(&document("benign-1", BENIGN_LEASE))
        .await
        .unwrap();

    assert_eq!(result.count_severity(SeverityLabel::High), 0, "Got: {:#?}", result.clauses);
    assert_eq!(result.summary, NO_MAJOR_RISKS);
    assert!(
        (result.favorability_score - 7.0).abs() < 1e-9,
        "Got: {}",
        result.favorability_score
    );
}

#[tokio::test]
async fn repeated_analysis_is_bit_identical() {
    let analyzer = Analyzer::with_defaults();
    let doc = document("repeat-1", HARSH_LEASE);

    let first = analyzer.analyze(&doc).await.unwrap();
    let second = analyzer.analyze(&doc).await.unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[tokio::test]
async fn paragraph_order_does_not_change_the_score() {
    let analyzer = Analyzer::with_defaults();
    let forward = analyzer
        .analyze(&document("order-1", HARSH_LEASE))
        .await
        .unwrap();

    let mut paragraphs: Vec<&str> = HARSH_LEASE.split("\n\n").collect();
    paragraphs.reverse();
    let reversed = analyzer
        .analyze(&document("order-2", &paragraphs.join("\n\n")))
        .await
        .unwrap();

    assert_eq!(forward.favorability_score, reversed.favorability_score);
}

const RISKY_TRIO: &str = "\
The landlord may terminate this agreement at any time without notice and evict the tenant, \
and the tenant waives any right to advance notice of termination.\n\
\n\
The monthly rent shall be increased by 15% every year at the sole discretion of the landlord.\n\
\n\
The security deposit is non-refundable and shall be forfeited on any breach of this agreement.";

const MILD_TRIO: &str = "\
Either party may terminate this agreement by mutual consent.\n\
\n\
The monthly rent shall be increased annually by mutual agreement.\n\
\n\
The security deposit shall be refunded within 14 days of vacating.";

#[tokio::test]
async fn high_severity_trio_scores_below_its_low_severity_twin() {
    let analyzer = Analyzer::with_defaults();
    let risky = analyzer
        .analyze(&document("trio-high", RISKY_TRIO))
        .await
        .unwrap();
    let mild = analyzer
        .analyze(&document("trio-low", MILD_TRIO))
        .await
        .unwrap();

    for result in [&risky, &mild] {
        let categories: Vec<Category> = result.clauses.iter().map(|c| c.category).collect();
        for expected in [
            Category::Termination,
            Category::RentEscalation,
            Category::SecurityDeposit,
        ] {
            assert!(categories.contains(&expected), "Got: {:?}", categories);
        }
    }
    assert_eq!(risky.count_severity(SeverityLabel::High), 3, "Got: {:#?}", risky.clauses);
    assert_eq!(mild.count_severity(SeverityLabel::Low), 3, "Got: {:#?}", mild.clauses);

    assert!(
        risky.favorability_score < mild.favorability_score,
        "Got: {} vs {}",
        risky.favorability_score,
        mild.favorability_score
    );
}

#[tokio::test]
async fn kannada_lease_is_detected_and_analyzed() {
    let clause = "ಬಾಡಿಗೆದಾರರು ಪ್ರತಿ ತಿಂಗಳ ಮೊದಲ ದಿನದೊಳಗೆ ಬಾಡಿಗೆ ಪಾವತಿಸಬೇಕು।";
    let text = format!("{clause}\n\n{clause}\n\n{clause}");
    let doc = document("kannada-1", &text);
    assert_eq!(doc.language, Language::Kannada);

    let result = Analyzer::with_defaults().analyze(&doc).await.unwrap();
    assert_eq!(result.language, Language::Kannada);
    assert!(!result.clauses.is_empty(), "Got: {:#?}", result);
    assert!(
        (0.0..=10.0).contains(&result.favorability_score),
        "Got: {}",
        result.favorability_score
    );
}

#[tokio::test]
async fn custom_store_is_honored() {
    let store = Arc::new(BuiltinModelStore::new());
    let analyzer = Analyzer::new(AnalysisConfig::default(), store).unwrap();
    let result = analyzer
        .analyze(&document("custom-1", HARSH_LEASE))
        .await
        .unwrap();
    assert!(!result.clauses.is_empty());
}
