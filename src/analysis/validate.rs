//! Candidate validation and normalization.
//!
//! Presence is required before coercion: a field that is absent (or an
//! empty string) is rejected, a field that is present but out of domain
//! is silently coerced to its default.
use crate::analysis::types::{AnalysisCandidate, AnalysisResult, Category, Sentiment, Urgency};
use crate::error::{AppError, AppResult};

pub const SUMMARY_MAX_CHARS: usize = 500;
const SUMMARY_CLIP_CHARS: usize = 497;

/// Enforce required fields and enum domains on a parsed candidate.
pub fn normalize(candidate: AnalysisCandidate) -> AppResult<AnalysisResult> {
    let summary = require(candidate.summary, "summary")?;
    let category = require(candidate.category, "category")?;
    let urgency = require(candidate.urgency, "urgency")?;
    let sentiment = require(candidate.sentiment, "sentiment")?;

    Ok(AnalysisResult {
        summary: clamp_summary(summary),
        category: Category::from_label(&category).unwrap_or(Category::Other),
        urgency: Urgency::from_label(&urgency).unwrap_or(Urgency::Medium),
        sentiment: Sentiment::from_label(&sentiment).unwrap_or(Sentiment::Neutral),
    })
}

fn require(field: Option<String>, name: &'static str) -> AppResult<String> {
    field
        .filter(|value| !value.is_empty())
        .ok_or(AppError::MissingField(name))
}

fn clamp_summary(summary: String) -> String {
    if summary.chars().count() <= SUMMARY_MAX_CHARS {
        return summary;
    }
    let mut clipped: String = summary.chars().take(SUMMARY_CLIP_CHARS).collect();
    clipped.push_str("...");
    clipped
}
