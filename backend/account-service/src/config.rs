//! Configuration management for Account Service
//!
//! Loads settings from environment variables, with a `.env` file in
//! development. Every piece of configuration is injected explicitly into the
//! component that needs it; nothing here is ambient global state.

use anyhow::{Context, Result};
use std::env;
use std::fmt;

/// Application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub database: db_pool::DbConfig,
    pub auth: AuthSettings,
    pub server: ServerSettings,
}

impl Settings {
    /// Load settings from the environment (and `.env` in debug builds)
    pub fn load() -> Result<Self> {
        if cfg!(debug_assertions) {
            dotenvy::dotenv().ok();
        }

        Ok(Settings {
            database: db_pool::DbConfig::from_env("account-service")
                .map_err(anyhow::Error::msg)
                .context("Failed to load database configuration")?,
            auth: AuthSettings::from_env()?,
            server: ServerSettings::from_env()?,
        })
    }
}

/// Token signing settings
#[derive(Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub token_expiry_seconds: u64,
}

impl AuthSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            jwt_secret: env::var("JWT_SECRET").context("JWT_SECRET must be set")?,
            token_expiry_seconds: env::var("TOKEN_EXPIRY_SECONDS")
                .unwrap_or_else(|_| "1800".to_string())
                .parse()
                .context("Invalid TOKEN_EXPIRY_SECONDS")?,
        })
    }
}

impl fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSettings")
            .field("jwt_secret", &"[REDACTED]")
            .field("token_expiry_seconds", &self.token_expiry_seconds)
            .finish()
    }
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl ServerSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Invalid SERVER_PORT")?,
        })
    }
}
