use super::mocks::{MockLlmClient, MockTokenProvider};
use axum::{Router, body::Body, http::Request, response::Response};
use gigachat_relay::{
    auth::TokenCache,
    config::{DEFAULT_SOURCES, GigaChatConfig},
    llm::ChatCompletionResponse,
    server::{self, handlers::AppState},
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

/// Build a chat completion response whose first choice carries `content`
pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    serde_json::from_value(json!({
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "created": 1736000000,
        "model": "GigaChat:1.0.26.20",
        "object": "chat.completion"
    }))
    .unwrap()
}

/// Create the application router around the given mocks.
///
/// The token cache is refreshed once, mirroring server startup.
pub async fn create_test_app(provider: MockTokenProvider, llm: Arc<MockLlmClient>) -> Router {
    create_test_app_with_config(provider, llm, create_test_gigachat_config()).await
}

pub async fn create_test_app_with_config(
    provider: MockTokenProvider,
    llm: Arc<MockLlmClient>,
    gigachat: GigaChatConfig,
) -> Router {
    let tokens = Arc::new(TokenCache::new(Arc::new(provider)));
    tokens.initialize().await;

    let state = AppState {
        tokens,
        llm,
        gigachat: Arc::new(gigachat),
        sources: DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect(),
    };

    server::router(state)
}

pub fn create_test_gigachat_config() -> GigaChatConfig {
    GigaChatConfig {
        credentials: Some("dGVzdDp0ZXN0".to_string()),
        ..GigaChatConfig::default()
    }
}

pub fn post_prediction(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/request")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
