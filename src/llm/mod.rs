mod client;
mod prompt;
mod types;

pub use client::{GigaChatClient, LlmClient};
pub use prompt::{DEFAULT_SYSTEM_PROMPT, build_messages};
pub use types::*;

use crate::{Result, config::GigaChatConfig};
use std::time::Duration;

/// HTTP client shared by the token provider and the completion client.
pub fn build_http_client(config: &GigaChatConfig) -> Result<reqwest::Client> {
    let mut builder =
        reqwest::Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}
