use anyhow::{Context, Result};

use crate::jobs::sources::{adzuna, remoteok};

/// Application configuration loaded from environment variables.
/// Everything has a default; endpoint overrides exist for local testing
/// against stub servers.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub adzuna_app_id: String,
    pub adzuna_app_key: String,
    pub adzuna_endpoint: String,
    pub remoteok_endpoint: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            // the demo credentials work for low-volume requests
            adzuna_app_id: env_or("ADZUNA_APP_ID", "demo"),
            adzuna_app_key: env_or("ADZUNA_APP_KEY", "demo"),
            adzuna_endpoint: env_or("ADZUNA_ENDPOINT", adzuna::SEARCH_URL),
            remoteok_endpoint: env_or("REMOTEOK_ENDPOINT", remoteok::FEED_URL),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
