//! PlanClient trait definition

use async_trait::async_trait;
use serde_json::Value;

use super::GenerationError;
use crate::plan::StudyPlan;

/// Everything needed for one generation round-trip
///
/// The prompt varies per request; the system instruction and schema are fixed
/// configuration supplied by the builder on every call.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// Natural-language prompt rendered from the plan template
    pub prompt: String,

    /// Fixed persona steering the model
    pub system_instruction: String,

    /// Output schema descriptor constraining the response shape
    pub schema: Value,
}

/// Stateless plan generation client - each call is independent
///
/// One invocation is one request to the provider: no retries, no caching,
/// no rate limiting. Concurrency is bounded upstream by the session's
/// single-flight guard, never here.
#[async_trait]
pub trait PlanClient: Send + Sync {
    /// Send a single generation request and parse the structured plan
    async fn generate(&self, request: GenerationRequest) -> Result<StudyPlan, GenerationError>;
}

#[cfg(test)]
pub mod mock {
    use std::sync::Mutex;

    use super::*;

    /// Mock plan client for unit tests
    ///
    /// Serves scripted outcomes in order and records every request it saw so
    /// tests can assert on the prompts that reached the adapter.
    pub struct MockPlanClient {
        outcomes: Mutex<Vec<Result<StudyPlan, GenerationError>>>,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl MockPlanClient {
        pub fn new(outcomes: Vec<Result<StudyPlan, GenerationError>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes),
                requests: Mutex::new(Vec::new()),
            }
        }

        /// Requests seen so far, in call order
        pub fn requests(&self) -> Vec<GenerationRequest> {
            self.requests.lock().unwrap().clone()
        }

        pub fn call_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl PlanClient for MockPlanClient {
        async fn generate(&self, request: GenerationRequest) -> Result<StudyPlan, GenerationError> {
            self.requests.lock().unwrap().push(request);

            let mut outcomes = self.outcomes.lock().unwrap();
            if outcomes.is_empty() {
                return Err(GenerationError::EmptyResponse);
            }
            outcomes.remove(0)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn tiny_plan() -> StudyPlan {
            serde_json::from_value(serde_json::json!({
                "roast": "r",
                "motivationalQuote": "q",
                "weeklySchedule": [],
                "resources": [],
                "careerAdvice": "a"
            }))
            .unwrap()
        }

        #[tokio::test]
        async fn test_mock_serves_outcomes_in_order() {
            let client = MockPlanClient::new(vec![Ok(tiny_plan()), Err(GenerationError::EmptyResponse)]);

            let request = GenerationRequest {
                prompt: "p".to_string(),
                system_instruction: "s".to_string(),
                schema: serde_json::json!({}),
            };

            assert!(client.generate(request.clone()).await.is_ok());
            assert!(client.generate(request).await.is_err());
            assert_eq!(client.call_count(), 2);
        }

        #[tokio::test]
        async fn test_mock_records_requests() {
            let client = MockPlanClient::new(vec![Ok(tiny_plan())]);

            let request = GenerationRequest {
                prompt: "remember me".to_string(),
                system_instruction: "s".to_string(),
                schema: serde_json::json!({}),
            };
            client.generate(request).await.unwrap();

            assert_eq!(client.requests()[0].prompt, "remember me");
        }
    }
}
