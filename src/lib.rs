pub mod auth;
pub mod config;
pub mod error;
pub mod interpreter;
pub mod llm;
pub mod server;

pub use error::{Error, Result};
