//! Generation error types

use thiserror::Error;

/// Errors that can occur during a plan generation round-trip
///
/// The UI collapses all of these into one generic message; the distinction
/// exists for logging and for tests. No variant is retried - the app performs
/// a single request per user action.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// Provider answered but produced no text
    #[error("Provider returned an empty response")]
    EmptyResponse,

    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Response text was not parseable JSON at all
    #[error("Response was not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Response parsed as JSON but did not match the declared plan shape
    #[error("Response did not match the plan schema: {0}")]
    SchemaMismatch(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response_message() {
        let err = GenerationError::EmptyResponse;
        assert_eq!(err.to_string(), "Provider returned an empty response");
    }

    #[test]
    fn test_api_error_message() {
        let err = GenerationError::ApiError {
            status: 403,
            message: "API key not valid".to_string(),
        };
        assert_eq!(err.to_string(), "API error 403: API key not valid");
    }

    #[test]
    fn test_schema_mismatch_is_distinct_from_json() {
        // A JSON syntax failure and a shape failure must stay separate kinds
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = GenerationError::from(json_err);
        assert!(matches!(err, GenerationError::Json(_)));

        let err = GenerationError::SchemaMismatch("missing field `roast`".to_string());
        assert!(err.to_string().contains("plan schema"));
    }
}
