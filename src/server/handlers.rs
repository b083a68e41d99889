use super::types::{ErrorResponse, MessageResponse, PredictionRequest, PredictionResponse};
use crate::{
    Error, Result,
    auth::TokenCache,
    config::GigaChatConfig,
    interpreter,
    llm::{ChatCompletionRequest, DEFAULT_SYSTEM_PROMPT, LlmClient, build_messages},
};
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub tokens: Arc<TokenCache>,
    pub llm: Arc<dyn LlmClient>,
    pub gigachat: Arc<GigaChatConfig>,
    pub sources: Arc<[String]>,
}

impl AppState {
    fn system_prompt(&self) -> &str {
        self.gigachat
            .system_prompt
            .as_deref()
            .unwrap_or(DEFAULT_SYSTEM_PROMPT)
    }
}

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Server is up and running".to_string(),
    })
}

pub async fn request_info() -> Json<ErrorResponse> {
    Json(ErrorResponse {
        detail: "This route only supports POST requests.".to_string(),
    })
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictionRequest>,
) -> std::result::Result<Json<PredictionResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Processing prediction request with id: {}", request.id);

    match answer(&state, &request).await {
        Ok(response) => {
            info!("Successfully processed request {}", request.id);
            Ok(Json(response))
        }
        Err(e) => {
            error!("Failed to process request {}: {}", request.id, e);

            let detail = if e.is_client_visible() {
                e.to_string()
            } else {
                "Internal server error".to_string()
            };
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse { detail }),
            ))
        }
    }
}

async fn answer(state: &AppState, request: &PredictionRequest) -> Result<PredictionResponse> {
    let token = state
        .tokens
        .current()
        .await
        .ok_or(Error::TokenNotInitialized)?;

    let messages = build_messages(state.system_prompt(), &request.query);
    let completion = state
        .llm
        .create_chat_completion(&token, ChatCompletionRequest::new(&state.gigachat, messages))
        .await?;

    let text = completion.first_content().ok_or(Error::MissingChoices)?;
    let parsed = interpreter::interpret(text);

    Ok(PredictionResponse {
        id: request.id,
        answer: parsed.answer,
        reasoning: parsed.reasoning,
        sources: state.sources.to_vec(),
    })
}
