//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `LAVKA_API_BASE_URL` - Origin of the shop backend JSON API
//!   (e.g., `http://127.0.0.1:5000`)
//!
//! ## Optional
//! - `LAVKA_HOST` - Bind address (default: 127.0.0.1)
//! - `LAVKA_PORT` - Listen port (default: 3000)
//! - `LAVKA_MESSAGE_TTL_SECS` - Lifetime of transient user messages (default: 3)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL of the shop backend JSON API
    pub api_base_url: Url,
    /// Checkout page on the backend, navigated to after a created order
    pub checkout_url: Url,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// How long a transient user message stays visible
    pub message_ttl: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_required_env("LAVKA_API_BASE_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LAVKA_API_BASE_URL".to_string(), e.to_string())
            })?;
        let checkout_url = checkout_url(&api_base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("LAVKA_API_BASE_URL".to_string(), e))?;
        let host = get_env_or_default("LAVKA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("LAVKA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("LAVKA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("LAVKA_PORT".to_string(), e.to_string()))?;
        let message_ttl_secs = get_env_or_default("LAVKA_MESSAGE_TTL_SECS", "3")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("LAVKA_MESSAGE_TTL_SECS".to_string(), e.to_string())
            })?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            api_base_url,
            checkout_url,
            host,
            port,
            message_ttl: Duration::from_secs(message_ttl_secs),
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// The checkout page lives on the backend origin.
fn checkout_url(api_base_url: &Url) -> Result<Url, String> {
    api_base_url.join("/checkout").map_err(|e| e.to_string())
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> StorefrontConfig {
        let api_base_url = Url::parse("http://127.0.0.1:5000").unwrap();
        StorefrontConfig {
            checkout_url: checkout_url(&api_base_url).unwrap(),
            api_base_url,
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            message_ttl: Duration::from_secs(3),
            sentry_dsn: None,
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = config().socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_checkout_url_on_backend_origin() {
        assert_eq!(
            config().checkout_url.as_str(),
            "http://127.0.0.1:5000/checkout"
        );
    }

    #[test]
    fn test_checkout_url_ignores_base_path() {
        let base = Url::parse("http://shop.example/api/").unwrap();
        assert_eq!(
            checkout_url(&base).unwrap().as_str(),
            "http://shop.example/checkout"
        );
    }
}
