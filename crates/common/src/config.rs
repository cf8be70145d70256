//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Database name, applied over the connection URL
    pub database_name: String,

    /// Session token signing secret
    pub jwt_secret: String,

    /// Session token lifetime in minutes
    pub token_ttl_minutes: i64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,
            database_name: env::var("DB_NAME")
                .unwrap_or_else(|_| "future_furniture_db".to_string()),

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,
            token_ttl_minutes: Self::parse_token_ttl(env::var("TOKEN_TTL_MINUTES").ok())?,

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "furniture=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .unwrap_or(8000),
        };

        Ok(config)
    }

    /// Parse the session TTL, defaulting to 30 minutes when unset.
    ///
    /// Malformed or non-positive values are rejected at load: a negative
    /// TTL would otherwise wrap into a far-future token expiry.
    fn parse_token_ttl(raw: Option<String>) -> Result<i64> {
        let ttl = match raw {
            Some(s) => s
                .parse::<i64>()
                .map_err(|_| anyhow::anyhow!("TOKEN_TTL_MINUTES must be an integer, got {s:?}"))?,
            None => 30,
        };
        anyhow::ensure!(ttl > 0, "TOKEN_TTL_MINUTES must be positive, got {ttl}");
        Ok(ttl)
    }
}
