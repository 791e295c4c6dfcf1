//! Plan generation client module
//!
//! Wraps the external generative-content API behind the [`PlanClient`]
//! trait: one prompt plus one schema descriptor in, one parsed plan out.

use std::sync::Arc;

use eyre::{Context, Result};
use tracing::debug;

pub mod client;
mod error;
mod gemini;

pub use client::{GenerationRequest, PlanClient};
pub use error::GenerationError;
pub use gemini::GeminiClient;

use crate::config::LlmConfig;

/// Create a plan client based on the provider specified in config
///
/// Only "gemini" is supported.
pub fn create_client(config: &LlmConfig) -> Result<Arc<dyn PlanClient>> {
    debug!(provider = %config.provider, model = %config.model, "create_client: called");
    match config.provider.as_str() {
        "gemini" => {
            let client = GeminiClient::from_config(config).context("Failed to create Gemini client")?;
            Ok(Arc::new(client))
        }
        other => Err(eyre::eyre!("Unknown LLM provider: '{}'. Supported: gemini", other)),
    }
}
