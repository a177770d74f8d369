//! Web configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CARE_API_URL` - Upstream care API GraphQL endpoint
//! - `ZORGLOG_ADMIN_USER` - Expected admin username for the panel gate
//! - `ZORGLOG_ADMIN_PASSWORD` - Expected admin password for the panel gate
//!
//! ## Optional
//! - `ZORGLOG_HOST` - Bind address (default: 127.0.0.1)
//! - `ZORGLOG_PORT` - Listen port (default: 3000)
//! - `ZORGLOG_BASE_URL` - Public URL (default: derived from host/port; an
//!   `https://` prefix turns on secure session cookies)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (0.0 to 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Sentry traces sample rate (0.0 to 1.0)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
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

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the front-end
    pub base_url: String,
    /// Upstream care API configuration
    pub api: ApiConfig,
    /// Expected admin credential pair for the panel gate
    pub admin: ExpectedCredential,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// Upstream care API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GraphQL endpoint of the upstream care API
    pub endpoint: Url,
}

/// The configured admin credential pair the session gate compares against.
///
/// The observed deployment uses a fixed pair; it is configuration here so it
/// can be swapped for a real auth provider without touching route code.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct ExpectedCredential {
    /// Expected admin username.
    pub username: String,
    /// Expected admin password.
    pub password: SecretString,
}

impl std::fmt::Debug for ExpectedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpectedCredential")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl WebConfig {
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

        let host = get_env_or_default("ZORGLOG_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ZORGLOG_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ZORGLOG_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ZORGLOG_PORT".to_string(), e.to_string()))?;
        let base_url =
            get_optional_env("ZORGLOG_BASE_URL").unwrap_or_else(|| format!("http://{host}:{port}"));

        let api = ApiConfig {
            endpoint: parse_endpoint("CARE_API_URL", &get_required_env("CARE_API_URL")?)?,
        };

        let admin = ExpectedCredential {
            username: get_required_env("ZORGLOG_ADMIN_USER")?,
            password: SecretString::from(get_required_env("ZORGLOG_ADMIN_PASSWORD")?),
        };

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            host,
            port,
            base_url,
            api,
            admin,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the front-end is served over HTTPS (controls secure cookies).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
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

/// Parse an endpoint URL, rejecting non-HTTP schemes.
fn parse_endpoint(var_name: &str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("expected an http(s) URL, got scheme '{}'", url.scheme()),
        ));
    }

    Ok(url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> WebConfig {
        WebConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            api: ApiConfig {
                endpoint: Url::parse("http://localhost:4000/graphql").unwrap(),
            },
            admin: ExpectedCredential {
                username: "admin".to_string(),
                password: SecretString::from("1234"),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }

    #[test]
    fn test_socket_addr() {
        let config = test_config();
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure() {
        let mut config = test_config();
        assert!(!config.is_secure());
        config.base_url = "https://zorglog.example".to_string();
        assert!(config.is_secure());
    }

    #[test]
    fn test_parse_endpoint_valid() {
        let url = parse_endpoint("CARE_API_URL", "https://api.zorg.example/graphql").unwrap();
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_parse_endpoint_invalid_url() {
        let result = parse_endpoint("CARE_API_URL", "not a url");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_parse_endpoint_rejects_non_http_scheme() {
        let result = parse_endpoint("CARE_API_URL", "ftp://api.zorg.example");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_expected_credential_debug_redacts_password() {
        let config = test_config();
        let debug_output = format!("{:?}", config.admin);

        assert!(debug_output.contains("admin"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("1234"));
    }
}
