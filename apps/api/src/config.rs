use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Deployment is optional: without `VERCEL_TOKEN` the service still
/// parses and generates, and only the deploy endpoints refuse.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub vercel_token: Option<String>,
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
            vercel_token: std::env::var("VERCEL_TOKEN")
                .ok()
                .filter(|token| !token.trim().is_empty()),
        })
    }
}
