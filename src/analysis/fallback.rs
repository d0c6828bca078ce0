//! Heuristic text scraping, used only when no JSON object could be
//! recovered from the completion.
//!
//! This is a low-precision safety net: it guarantees a well-formed
//! candidate for any input, it does not try to be accurate.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::types::{AnalysisCandidate, Category, Sentiment, Urgency};

pub const SUMMARY_PLACEHOLDER: &str = "Unable to generate summary";

static SUMMARY_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)summary[:\s]*([^.\n]*\.?)").unwrap());

/// Scrape all four analysis fields out of unstructured prose.
pub fn scrape(content: &str) -> AnalysisCandidate {
    AnalysisCandidate {
        summary: Some(scrape_summary(content)),
        category: Some(scrape_category(content).label().to_string()),
        urgency: Some(scrape_urgency(content).label().to_string()),
        sentiment: Some(scrape_sentiment(content).label().to_string()),
    }
}

fn scrape_summary(content: &str) -> String {
    if let Some(caps) = SUMMARY_LABEL.captures(content) {
        let labeled = caps[1].trim();
        if !labeled.is_empty() {
            return labeled.to_string();
        }
    }
    let first_sentence = content
        .split(['.', '!', '?'])
        .next()
        .map(str::trim)
        .unwrap_or("");
    if first_sentence.is_empty() {
        SUMMARY_PLACEHOLDER.to_string()
    } else {
        first_sentence.to_string()
    }
}

fn scrape_category(content: &str) -> Category {
    let lowered = content.to_lowercase();
    for category in Category::SCRAPEABLE {
        if lowered.contains(&category.label().to_lowercase()) {
            return category;
        }
    }
    Category::Other
}

fn scrape_urgency(content: &str) -> Urgency {
    let lowered = content.to_lowercase();
    if lowered.contains("high") || lowered.contains("urgent") {
        Urgency::High
    } else if lowered.contains("low") {
        Urgency::Low
    } else {
        Urgency::Medium
    }
}

fn scrape_sentiment(content: &str) -> Sentiment {
    let lowered = content.to_lowercase();
    if lowered.contains("positive") || lowered.contains("happy") || lowered.contains("satisfied") {
        Sentiment::Positive
    } else if lowered.contains("negative")
        || lowered.contains("frustrated")
        || lowered.contains("angry")
    {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgent_angry_prose_scrapes_high_negative() {
        let candidate = scrape("This is urgent, the customer is very angry about a refund.");
        assert_eq!(
            candidate.summary.as_deref(),
            Some("This is urgent, the customer is very angry about a refund")
        );
        // "refund" alone does not match the "Refund Issue" label
        assert_eq!(candidate.category.as_deref(), Some("Other"));
        assert_eq!(candidate.urgency.as_deref(), Some("High"));
        assert_eq!(candidate.sentiment.as_deref(), Some("Negative"));
    }

    #[test]
    fn full_category_label_matches() {
        let candidate = scrape("Sounds like a refund issue to me, low priority.");
        assert_eq!(candidate.category.as_deref(), Some("Refund Issue"));
        assert_eq!(candidate.urgency.as_deref(), Some("Low"));
    }

    #[test]
    fn first_listed_category_wins() {
        let candidate = scrape("Could be billing, could be shipping.");
        // Billing precedes Shipping in the listed order
        assert_eq!(candidate.category.as_deref(), Some("Billing"));
    }

    #[test]
    fn summary_label_takes_priority_over_first_sentence() {
        let candidate = scrape("Ignore this. Summary: package never arrived\nMore text.");
        assert_eq!(candidate.summary.as_deref(), Some("package never arrived"));
    }

    #[test]
    fn high_urgency_takes_precedence_over_low() {
        let candidate = scrape("Low stock but high urgency.");
        assert_eq!(candidate.urgency.as_deref(), Some("High"));
    }

    #[test]
    fn satisfied_prose_scrapes_positive() {
        let candidate = scrape("The customer sounds satisfied with the outcome");
        assert_eq!(candidate.sentiment.as_deref(), Some("Positive"));
    }

    #[test]
    fn empty_content_yields_placeholder_and_defaults() {
        let candidate = scrape("");
        assert_eq!(candidate.summary.as_deref(), Some(SUMMARY_PLACEHOLDER));
        assert_eq!(candidate.category.as_deref(), Some("Other"));
        assert_eq!(candidate.urgency.as_deref(), Some("Medium"));
        assert_eq!(candidate.sentiment.as_deref(), Some("Neutral"));
    }
}
