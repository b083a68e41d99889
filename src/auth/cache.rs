use super::TokenProvider;
use crate::Result;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Process-lifetime bearer token.
///
/// The token is fetched through [`TokenCache::refresh`], normally once at
/// startup. Nothing tracks expiry and nothing refreshes it behind the
/// caller's back; readers only ever see the last successfully fetched value.
pub struct TokenCache {
    provider: Arc<dyn TokenProvider>,
    token: RwLock<Option<String>>,
}

impl TokenCache {
    pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            provider,
            token: RwLock::new(None),
        }
    }

    /// Fetches a new token and stores it. On failure the cached value is kept.
    pub async fn refresh(&self) -> Result<()> {
        let token = self.provider.fetch_token().await?;
        *self.token.write().await = Some(token);
        Ok(())
    }

    /// Startup variant of [`refresh`](Self::refresh): failures are logged and
    /// the cache stays empty, so requests fail until a token is present.
    pub async fn initialize(&self) -> bool {
        match self.refresh().await {
            Ok(()) => {
                info!("GigaChat token acquired");
                true
            }
            Err(e) => {
                error!("Failed to acquire GigaChat token: {}", e);
                false
            }
        }
    }

    pub async fn current(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
