use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Token request failed with status {status}: {body}")]
    Auth { status: u16, body: String },

    #[error("GigaChat token is not initialized")]
    TokenNotInitialized,

    #[error("GigaChat error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("GigaChat response has no 'choices' field")]
    MissingChoices,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether the error message is safe to hand back to API callers.
    ///
    /// Token and upstream failures carry a meaningful detail; everything else
    /// is reported as an opaque internal error.
    pub fn is_client_visible(&self) -> bool {
        matches!(
            self,
            Self::TokenNotInitialized | Self::Upstream { .. } | Self::MissingChoices
        )
    }
}
