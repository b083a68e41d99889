use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCES: [&str; 2] = ["https://itmo.ru/ru/", "https://abit.itmo.ru/"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub gigachat: GigaChatConfig,
    #[serde(default = "default_sources")]
    pub sources: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GigaChatConfig {
    /// Base64 client credential. `SBER_AUTH` takes precedence.
    #[serde(default)]
    pub credentials: Option<String>,
    #[serde(default = "default_auth_url")]
    pub auth_url: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub system_prompt: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_repetition_penalty")]
    pub repetition_penalty: f32,
    /// GigaChat endpoints are signed by a CA most trust stores lack.
    #[serde(default)]
    pub accept_invalid_certs: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            gigachat: GigaChatConfig::default(),
            sources: default_sources(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for GigaChatConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            auth_url: default_auth_url(),
            api_url: default_api_url(),
            scope: default_scope(),
            model: default_model(),
            system_prompt: None,
            temperature: default_temperature(),
            top_p: default_top_p(),
            max_tokens: default_max_tokens(),
            repetition_penalty: default_repetition_penalty(),
            accept_invalid_certs: false,
            timeout_secs: None,
        }
    }
}

fn default_sources() -> Vec<String> {
    DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_auth_url() -> String {
    "https://ngw.devices.sberbank.ru:9443/api/v2/oauth".to_string()
}

fn default_api_url() -> String {
    "https://gigachat.devices.sberbank.ru/api/v1/chat/completions".to_string()
}

fn default_scope() -> String {
    "GIGACHAT_API_PERS".to_string()
}

fn default_model() -> String {
    "GigaChat".to_string()
}

fn default_temperature() -> f32 {
    1.0
}

fn default_top_p() -> f32 {
    0.1
}

fn default_max_tokens() -> u32 {
    512
}

fn default_repetition_penalty() -> f32 {
    1.0
}
