use anyhow::{Context, Result};

use crate::llm_client::DEFAULT_API_BASE;

/// Application configuration loaded from environment variables.
///
/// A missing Gemini key is not an error here; it surfaces when the first
/// gateway call is rejected.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY")
                .or_else(|| optional_env("API_KEY"))
                .unwrap_or_default(),
            gemini_api_base: optional_env("GEMINI_API_BASE")
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
