//! Parse + normalize pipeline properties, independent of the HTTP shell.
use complaint_analyzer::analysis::types::{AnalysisResult, Category, Sentiment, Urgency};
use complaint_analyzer::analysis::{parser, validate};

#[test]
fn parsing_is_idempotent_on_valid_results() {
    let samples = [
        AnalysisResult {
            summary: "Customer has waited three days for a refund".to_string(),
            category: Category::RefundIssue,
            urgency: Urgency::High,
            sentiment: Sentiment::Negative,
        },
        AnalysisResult {
            summary: "General praise for the support team".to_string(),
            category: Category::Other,
            urgency: Urgency::Low,
            sentiment: Sentiment::Positive,
        },
        AnalysisResult {
            summary: "App crashes when uploading photos".to_string(),
            category: Category::TechnicalSupport,
            urgency: Urgency::Medium,
            sentiment: Sentiment::Neutral,
        },
    ];
    for expected in samples {
        let raw = serde_json::to_string(&expected).unwrap();
        let candidate = parser::extract_candidate(&raw);
        let reparsed = validate::normalize(candidate).unwrap();
        assert_eq!(reparsed, expected);
    }
}

#[test]
fn embedded_object_survives_normalization_unchanged() {
    let raw = "Here you go: {\"summary\":\"ok\",\"category\":\"Billing\",\"urgency\":\"Low\",\"sentiment\":\"Neutral\"} thanks";
    let result = validate::normalize(parser::extract_candidate(raw)).unwrap();
    assert_eq!(result.summary, "ok");
    assert_eq!(result.category, Category::Billing);
    assert_eq!(result.urgency, Urgency::Low);
    assert_eq!(result.sentiment, Sentiment::Neutral);
}

#[test]
fn prose_fallback_always_yields_a_wellformed_result() {
    let inputs = [
        "This is urgent, the customer is very angry about a refund.",
        "no terminators no keywords just words",
        "",
        "Summary: the driver threw the package. Sentiment seems negative.",
    ];
    for raw in inputs {
        let result = validate::normalize(parser::extract_candidate(raw)).unwrap();
        assert!(!result.summary.is_empty());
        assert!(Category::from_label(result.category.label()).is_some());
        assert!(Urgency::from_label(result.urgency.label()).is_some());
        assert!(Sentiment::from_label(result.sentiment.label()).is_some());
    }
}
