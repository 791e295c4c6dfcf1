//! Gemini API client implementation
//!
//! Implements the PlanClient trait against the `generateContent` endpoint
//! with schema-constrained JSON output. One invocation is exactly one HTTP
//! request; timeouts are the transport's (reqwest's) responsibility.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use super::{GenerationError, GenerationRequest, PlanClient};
use crate::config::LlmConfig;
use crate::plan::StudyPlan;

/// Gemini generateContent client
pub struct GeminiClient {
    model: String,
    api_key: String,
    base_url: String,
    http: Client,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Create a new client from configuration
    ///
    /// The API key is read from the environment variable named in config. An
    /// absent key is not an error here: the provider rejects the request and
    /// that failure surfaces like any other API error.
    pub fn from_config(config: &LlmConfig) -> Result<Self, GenerationError> {
        debug!(model = %config.model, "from_config: called");
        let api_key = std::env::var(&config.api_key_env).unwrap_or_default();
        if api_key.is_empty() {
            warn!(env = %config.api_key_env, "from_config: API key env var is unset or empty");
        }

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(GenerationError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key,
            base_url: config.base_url.clone(),
            http,
            max_output_tokens: config.max_output_tokens,
        })
    }

    /// Build the request body for the generateContent API
    fn build_request_body(&self, request: &GenerationRequest) -> serde_json::Value {
        debug!(%self.model, prompt_len = request.prompt.len(), "build_request_body: called");
        serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": request.prompt }],
            }],
            "systemInstruction": {
                "parts": [{ "text": request.system_instruction }],
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": request.schema,
                "maxOutputTokens": self.max_output_tokens,
            },
        })
    }
}

#[async_trait]
impl PlanClient for GeminiClient {
    async fn generate(&self, request: GenerationRequest) -> Result<StudyPlan, GenerationError> {
        debug!(%self.model, "generate: called");
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model);
        let body = self.build_request_body(&request);

        let response = self
            .http
            .post(url)
            .header("x-goog-api-key", self.api_key.clone())
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let text = response.text().await.unwrap_or_default();
            debug!(%status, "generate: API error");
            return Err(GenerationError::ApiError { status, message: text });
        }

        let envelope: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &envelope.usage_metadata {
            debug!(
                prompt_tokens = usage.prompt_token_count,
                output_tokens = usage.candidates_token_count,
                "generate: usage"
            );
        }

        parse_plan(&envelope.text())
    }
}

/// Parse the provider's response text into a typed plan
///
/// Empty text is its own error kind; JSON syntax failures and shape failures
/// stay distinct so logs can tell a truncated reply from a drifting model.
fn parse_plan(text: &str) -> Result<StudyPlan, GenerationError> {
    if text.trim().is_empty() {
        debug!("parse_plan: empty response text");
        return Err(GenerationError::EmptyResponse);
    }

    let document: serde_json::Value = serde_json::from_str(text)?;

    serde_json::from_value(document).map_err(|e| {
        debug!(error = %e, "parse_plan: schema mismatch");
        GenerationError::SchemaMismatch(e.to_string())
    })
}

// Gemini API response envelope types

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UsageMetadata {
    #[serde(rename = "promptTokenCount", default)]
    prompt_token_count: u64,
    #[serde(rename = "candidatesTokenCount", default)]
    candidates_token_count: u64,
}
