//! Thin HTTP client for the chat-completion endpoint.
//!
//! One outbound request per `complete` call, no retries. Transport and
//! status failures map to the typed errors the request boundary expects:
//! missing credential or upstream 401 -> `Auth`, 429 -> `RateLimit`,
//! connect/timeout -> `Network`, anything else non-success -> `Upstream`.
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::prompt::builder::SYSTEM_PROMPT;

const TEMPERATURE: f32 = 0.3;
const MAX_TOKENS: u32 = 500;

#[derive(Clone)]
pub struct CompletionClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    timeout: Duration,
    site_url: String,
    site_name: String,
}

impl CompletionClient {
    pub fn new(config: &Config) -> Self {
        CompletionClient {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            site_url: config.site_url.clone(),
            site_name: config.site_name.clone(),
        }
    }

    /// Request a completion for `prompt`, returning the raw message text.
    pub async fn complete(&self, prompt: &str) -> AppResult<String> {
        let api_key = self.api_key.as_deref().ok_or(AppError::Auth)?;
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(%url, model = %self.model, "requesting completion");

        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                ChatMessage { role: "system", content: SYSTEM_PROMPT },
                ChatMessage { role: "user", content: prompt },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(&url)
            .timeout(self.timeout)
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.site_url)
            .header("X-Title", &self.site_name)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    AppError::Network(e)
                } else {
                    AppError::HttpClient(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status {
                StatusCode::UNAUTHORIZED => AppError::Auth,
                StatusCode::TOO_MANY_REQUESTS => AppError::RateLimit,
                _ => {
                    let detail = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unable to read error body".to_string());
                    tracing::error!(status = status.as_u16(), %detail, "completion request failed");
                    AppError::Upstream { status: status.as_u16(), detail }
                }
            });
        }

        let completion: ChatCompletionResponse =
            response.json().await.map_err(AppError::HttpClient)?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::Upstream {
                status: status.as_u16(),
                detail: "completion contained no choices".to_string(),
            })?;

        Ok(content.trim().to_string())
    }
}

// OpenRouter request/response types (OpenAI-compatible Chat Completions)

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}
