use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_max_connections(std::env::var("DATABASE_MAX_CONNECTIONS").ok())?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.unwrap_or_else(|| "8080".to_string())
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

fn parse_max_connections(raw: Option<String>) -> Result<u32> {
    match raw {
        None => Ok(10),
        Some(value) => {
            let parsed = value
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
            anyhow::ensure!(parsed > 0, "DATABASE_MAX_CONNECTIONS must be at least 1");
            Ok(parsed)
        }
    }
}
