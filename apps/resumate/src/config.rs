use std::path::PathBuf;

use anyhow::{Context, Result};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STORE_PATH: &str = "resumate-store.json";

/// Client configuration loaded from environment variables.
/// Fails at startup if the API base URL is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub store_path: PathBuf,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            api_base_url: require_env("RESUMATE_API_URL")?,
            request_timeout_secs: std::env::var("RESUMATE_REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .context("RESUMATE_REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            store_path: std::env::var("RESUMATE_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH)),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Config pointing at `api_base_url` with every other value defaulted.
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Config {
            api_base_url: api_base_url.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            rust_log: "info".to_string(),
        }
    }

    /// Joins `path` onto the base URL, tolerating a trailing slash on either side.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
