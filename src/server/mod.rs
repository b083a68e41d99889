pub mod handlers;
pub mod types;

use crate::{
    Result,
    auth::{OAuthTokenProvider, TokenCache},
    config::Config,
    llm::{GigaChatClient, build_http_client},
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/api/request",
            get(handlers::request_info).post(handlers::predict),
        )
        .route("/favicon.ico", get(handlers::favicon))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let http = build_http_client(&config.gigachat)?;

    // A failed token request is not fatal; predictions fail until restart.
    let provider = OAuthTokenProvider::new(http.clone(), &config.gigachat)?;
    let tokens = Arc::new(TokenCache::new(Arc::new(provider)));
    if !tokens.initialize().await {
        warn!("Serving without a GigaChat token, predictions will fail");
    }

    let app_state = AppState {
        tokens,
        llm: Arc::new(GigaChatClient::new(http, config.gigachat.api_url.clone())),
        sources: config.sources.clone().into(),
        gigachat: Arc::new(config.gigachat),
    };

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
