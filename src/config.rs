//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment once at startup; `dotenv`
//! is loaded on demand by the binaries. Defaults are provided for
//! convenience during development. A missing API key is warned about but
//! does not prevent startup; the first analysis attempt fails instead.
use std::env;

use dotenv;

pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub site_url: String,
    pub site_name: String,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            api_key: env::var("OPENROUTER_API_KEY").ok().filter(|k| !k.is_empty()),
            model: env::var("OPENROUTER_MODEL")
                .unwrap_or_else(|_| "qwen/qwen3-30b-a3b:free".to_string()),
            base_url: env::var("OPENROUTER_BASE_URL")
                .unwrap_or_else(|_| "https://openrouter.ai/api/v1".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            site_url: env::var("SITE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            site_name: env::var("SITE_NAME")
                .unwrap_or_else(|_| "Customer Complaint Analyzer".to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "3000".to_string()),
        })
    }

    /// Warn once at startup when no upstream credential is present.
    pub fn warn_if_unconfigured(&self) {
        if self.api_key.is_none() {
            tracing::warn!(
                "OpenRouter API key not found. Set OPENROUTER_API_KEY in your .env file"
            );
        }
    }
}
