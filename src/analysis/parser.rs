//! Layered JSON recovery from raw completion text.
//!
//! The upstream model is asked for pure JSON but is not guaranteed to
//! comply; it may wrap the object in prose or markdown fences. Strategies
//! are tried in order and the first one yielding a syntactically valid
//! JSON object wins. Only exhausting every strategy falls through to the
//! heuristic text scraper.
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::analysis::fallback;
use crate::analysis::types::AnalysisCandidate;

/// Ordered recovery strategies. Each is a pure function of the trimmed
/// completion text.
const STRATEGIES: &[fn(&str) -> Option<Value>] = &[
    parse_whole,
    parse_brace_span,
    parse_code_block,
    parse_summary_span,
];

/// Extract a best-effort candidate from raw completion text.
pub fn extract_candidate(raw: &str) -> AnalysisCandidate {
    let text = raw.trim();
    for (index, strategy) in STRATEGIES.iter().enumerate() {
        if let Some(value) = strategy(text) {
            tracing::debug!(strategy = index + 1, "recovered JSON object from completion");
            return AnalysisCandidate::from_value(&value);
        }
    }
    tracing::warn!("no JSON object in completion, falling back to text scraping");
    fallback::scrape(text)
}

fn parse_object(src: &str) -> Option<Value> {
    serde_json::from_str::<Value>(src)
        .ok()
        .filter(Value::is_object)
}

/// Strategy 1: the entire trimmed text is the object.
fn parse_whole(text: &str) -> Option<Value> {
    parse_object(text)
}

/// Strategy 2: greedy brace span, first `{` through last `}`.
fn parse_brace_span(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end <= start {
        return None;
    }
    parse_object(&text[start..=end])
}

static CODE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*(\{[\s\S]*?\})\s*```").unwrap());

/// Strategy 3: fenced code block, optionally tagged `json`.
fn parse_code_block(text: &str) -> Option<Value> {
    let caps = CODE_BLOCK.captures(text)?;
    parse_object(caps.get(1)?.as_str())
}

static SUMMARY_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\{\s*["']?summary["']?\s*:\s*["'][^"']*["'][^}]*\}"#).unwrap());

/// Strategy 4: minimal object span anchored on a `summary` key.
fn parse_summary_span(text: &str) -> Option<Value> {
    parse_object(SUMMARY_SPAN.find(text)?.as_str())
}
