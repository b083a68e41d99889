use async_trait::async_trait;
use gigachat_relay::{
    Error, Result,
    auth::TokenProvider,
    llm::{ChatCompletionRequest, ChatCompletionResponse, LlmClient},
};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<ChatCompletionResponse>>>,
    pub requests: Arc<Mutex<Vec<(String, ChatCompletionRequest)>>>,
    pub error: Option<fn() -> Error>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_error(mut self, error: fn() -> Error) -> Self {
        self.error = Some(error);
        self
    }

    /// Bearer tokens and requests seen so far, in call order.
    pub fn get_requests(&self) -> Vec<(String, ChatCompletionRequest)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        token: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((token.to_string(), request));

        if let Some(error) = self.error {
            return Err(error());
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

/// Token provider that always returns the same outcome
pub struct MockTokenProvider {
    pub token: Option<String>,
}

impl MockTokenProvider {
    pub fn ok(token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
        }
    }

    pub fn failing() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl TokenProvider for MockTokenProvider {
    async fn fetch_token(&self) -> Result<String> {
        self.token.clone().ok_or(Error::Auth {
            status: 401,
            body: "Can't decode 'Authorization' header".to_string(),
        })
    }
}
