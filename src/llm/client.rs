use super::types::*;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn create_chat_completion(
        &self,
        token: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

pub struct GigaChatClient {
    http: Client,
    api_url: String,
}

impl GigaChatClient {
    pub fn new(http: Client, api_url: impl Into<String>) -> Self {
        Self {
            http,
            api_url: api_url.into(),
        }
    }
}

#[async_trait]
impl LlmClient for GigaChatClient {
    async fn create_chat_completion(
        &self,
        token: &str,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        debug!(
            "Creating chat completion with {} messages",
            request.messages.len()
        );

        let response = self
            .http
            .post(&self.api_url)
            .header(header::ACCEPT, "application/json")
            .bearer_auth(token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&body)?;
        if completion.choices.is_empty() {
            return Err(Error::MissingChoices);
        }

        debug!(
            "Received chat completion response with {} choices",
            completion.choices.len()
        );

        Ok(completion)
    }
}
