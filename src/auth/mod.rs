mod cache;
mod provider;

pub use cache::TokenCache;
pub use provider::{OAuthTokenProvider, TokenProvider};
