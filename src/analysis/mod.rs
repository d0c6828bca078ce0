//! Complaint analysis pipeline: prompt -> completion -> parse -> normalize.
pub mod fallback;
pub mod parser;
pub mod types;
pub mod validate;

use crate::config::Config;
use crate::error::AppResult;
use crate::llm::client::CompletionClient;
use crate::prompt::builder;
use types::AnalysisResult;

/// Single-instance analysis service.
///
/// Holds only immutable configuration (via the completion client), so one
/// instance is safely shared across concurrent request handlers without
/// synchronization.
#[derive(Clone)]
pub struct ComplaintAnalyzer {
    client: CompletionClient,
}

impl ComplaintAnalyzer {
    pub fn new(config: &Config) -> Self {
        ComplaintAnalyzer {
            client: CompletionClient::new(config),
        }
    }

    /// Run one complaint message through the full pipeline.
    pub async fn analyze(&self, message: &str) -> AppResult<AnalysisResult> {
        let prompt = builder::analysis_prompt(message);
        let completion = self.client.complete(&prompt).await?;
        tracing::debug!(
            preview = %completion.chars().take(200).collect::<String>(),
            "raw completion"
        );
        let candidate = parser::extract_candidate(&completion);
        validate::normalize(candidate)
    }
}
