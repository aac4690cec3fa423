//! Application configuration loaded from environment variables.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Market-Data Provider ===
    /// Base URL of the Yahoo Finance chart API.
    #[serde(default = "default_provider_base_url")]
    pub provider_base_url: String,

    /// Outbound request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Connection pool size per host for the provider client.
    #[serde(default = "default_http_pool_size")]
    pub http_pool_size: usize,

    // === Server Configuration ===
    /// HTTP server port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_provider_base_url() -> String {
    "https://query1.finance.yahoo.com".to_string()
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

fn default_http_pool_size() -> usize {
    10
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        if self.provider_base_url.is_empty() {
            return Err("PROVIDER_BASE_URL is required".to_string());
        }

        if !self.provider_base_url.starts_with("http") {
            return Err("PROVIDER_BASE_URL must be an http(s) URL".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider_base_url: default_provider_base_url(),
            http_timeout_ms: default_http_timeout_ms(),
            http_pool_size: default_http_pool_size(),
            port: default_port(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}
