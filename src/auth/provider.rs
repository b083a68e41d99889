use crate::{Error, Result, config::GigaChatConfig};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Exchanges the static credential for a fresh bearer token.
    async fn fetch_token(&self) -> Result<String>;
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
}

/// Token provider backed by the GigaChat OAuth endpoint.
pub struct OAuthTokenProvider {
    http: Client,
    auth_url: String,
    credentials: String,
    scope: String,
}

impl OAuthTokenProvider {
    pub fn new(http: Client, config: &GigaChatConfig) -> Result<Self> {
        let credentials = config
            .credentials
            .clone()
            .ok_or_else(|| Error::config("GigaChat credentials are missing"))?;

        Ok(Self {
            http,
            auth_url: config.auth_url.clone(),
            credentials,
            scope: config.scope.clone(),
        })
    }
}

#[async_trait]
impl TokenProvider for OAuthTokenProvider {
    async fn fetch_token(&self) -> Result<String> {
        let rq_uid = Uuid::new_v4().to_string();
        debug!("Requesting GigaChat token (RqUID {})", rq_uid);

        let response = self
            .http
            .post(&self.auth_url)
            .header(header::ACCEPT, "application/json")
            .header(header::AUTHORIZATION, format!("Basic {}", self.credentials))
            .header("RqUID", rq_uid)
            .form(&[("scope", self.scope.as_str())])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            return Err(Error::Auth {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body)?;
        token.access_token.ok_or(Error::Auth {
            status: status.as_u16(),
            body: "response has no access_token".to_string(),
        })
    }
}
