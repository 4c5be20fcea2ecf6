use anyhow::{Context, Result};

use crate::catalog::worknet::DEFAULT_BASE_URL;
use crate::session::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_TTL_MINS};

/// Application configuration loaded from environment variables.
/// Every variable has a default; an absent `WORKNET_API_KEY` means sample-data mode.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub worknet_api_key: Option<String>,
    pub worknet_base_url: String,
    pub worknet_timeout_secs: u64,
    pub session_ttl_mins: i64,
    pub max_sessions: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            worknet_api_key: optional_env("WORKNET_API_KEY"),
            worknet_base_url: optional_env("WORKNET_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            worknet_timeout_secs: std::env::var("WORKNET_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<u64>()
                .context("WORKNET_TIMEOUT_SECS must be a whole number of seconds")?,
            session_ttl_mins: optional_env("SESSION_TTL_MINS")
                .map(|v| v.parse::<i64>())
                .transpose()
                .context("SESSION_TTL_MINS must be a whole number of minutes")?
                .unwrap_or(DEFAULT_SESSION_TTL_MINS),
            max_sessions: optional_env("MAX_SESSIONS")
                .map(|v| v.parse::<usize>())
                .transpose()
                .context("MAX_SESSIONS must be a positive whole number")?
                .unwrap_or(DEFAULT_MAX_SESSIONS),
        })
    }
}

/// Unset and blank are both treated as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
