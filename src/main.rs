use anyhow::Result;
use gigachat_relay::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a log filter, either a bare level or `target=level` directives
fn parse_log_filter(filter: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(filter).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter '{}': {}. Use a level (error, warn, info, debug, trace) or directives like 'gigachat_relay=debug,tower_http=info'",
            filter,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional, real environment variables win
    let _ = dotenvy::dotenv();

    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let env_filter = match parse_log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .init();

    info!("Starting GigaChat relay with log level: {}", log_level);
    info!("Configuration loaded successfully");

    server::run(config).await?;

    Ok(())
}
