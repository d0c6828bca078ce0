//! Customer Complaint Analyzer library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the binary.
//! - `llm`: Thin client for the chat-completion endpoint.
//! - `prompt`: Deterministic analysis-prompt construction.
//! - `analysis`: Parsing pipeline, heuristic fallback, and validation.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type, alias, and HTTP status mapping.
//!
//! Re-exports are provided for common types: `Config`, `CompletionClient`,
//! `ComplaintAnalyzer`, and `AnalysisResult`.
pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;

pub use analysis::types::AnalysisResult;
pub use analysis::ComplaintAnalyzer;
pub use config::Config;
pub use llm::client::CompletionClient;
