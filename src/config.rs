//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup; the only secret is the session
//! cookie signing key.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream recipe API (no trailing slash)
    pub recipe_api_url: String,
    /// Origin of the web shell, used for CORS and cookie security
    pub web_origin: String,
    /// Server port
    pub port: u16,
    /// Signing key for the session cookie (raw bytes)
    pub session_signing_key: Vec<u8>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            recipe_api_url: "http://localhost:3000".to_string(),
            web_origin: "http://localhost:5173".to_string(),
            port: 8080,
            session_signing_key: b"test_session_key_32_bytes_min!!!".to_vec(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `RECIPE_API_URL` and `SESSION_SIGNING_KEY` are required; the rest
    /// fall back to local-development defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            recipe_api_url: env::var("RECIPE_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .map_err(|_| ConfigError::Missing("RECIPE_API_URL"))?,
            web_origin: env::var("WEB_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            session_signing_key: env::var("SESSION_SIGNING_KEY")
                .map_err(|_| ConfigError::Missing("SESSION_SIGNING_KEY"))?
                .into_bytes(),
        })
    }

    /// Whether cookies should carry the `Secure` attribute.
    ///
    /// Mirrors the deployment: an https shell origin means an https gateway.
    pub fn secure_cookies(&self) -> bool {
        self.web_origin.starts_with("https://")
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
