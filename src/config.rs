//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::store::{describe_endpoint, DEFAULT_REDIS_URL};

/// Which store backend the gateway talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackendKind {
    /// External Redis server at `REDIS_URL`
    #[default]
    Redis,
    /// Process-local databases, lost on restart
    Memory,
}

impl FromStr for BackendKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(BackendKind::Redis),
            "memory" => Ok(BackendKind::Memory),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Clone)]
pub struct Config {
    /// Shared secret every request must present
    pub api_password: String,
    /// Store endpoint; the database index is chosen per request
    pub redis_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Store backend selection
    pub backend: BackendKind,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_API_PASSWORD` - Shared secret (default: empty)
    /// - `REDIS_URL` - Store endpoint (default: redis://127.0.0.1:6379)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `STORE_BACKEND` - `redis` or `memory` (default: redis)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_password: env::var("REDIS_API_PASSWORD").unwrap_or(defaults.api_password),
            redis_url: env::var("REDIS_URL").unwrap_or(defaults.redis_url),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            backend: env::var("STORE_BACKEND")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.backend),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_password: String::new(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            server_port: 8000,
            backend: BackendKind::Redis,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_password", &"<redacted>")
            .field("redis_url", &describe_endpoint(&self.redis_url))
            .field("server_port", &self.server_port)
            .field("backend", &self.backend)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_password, "");
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.backend, BackendKind::Redis);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("REDIS_API_PASSWORD");
        env::remove_var("REDIS_URL");
        env::remove_var("SERVER_PORT");
        env::remove_var("STORE_BACKEND");

        let config = Config::from_env();
        assert_eq!(config.api_password, "");
        assert_eq!(config.redis_url, DEFAULT_REDIS_URL);
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.backend, BackendKind::Redis);

        env::set_var("REDIS_API_PASSWORD", "s3cret");
        env::set_var("SERVER_PORT", "not-a-port");
        env::set_var("STORE_BACKEND", "Memory");

        let config = Config::from_env();
        assert_eq!(config.api_password, "s3cret");
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.backend, BackendKind::Memory);

        env::remove_var("REDIS_API_PASSWORD");
        env::remove_var("SERVER_PORT");
        env::remove_var("STORE_BACKEND");
    }

    #[test]
    fn test_backend_kind_parse() {
        assert_eq!("redis".parse::<BackendKind>(), Ok(BackendKind::Redis));
        assert_eq!(" MEMORY ".parse::<BackendKind>(), Ok(BackendKind::Memory));
        assert!("postgres".parse::<BackendKind>().is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = Config {
            api_password: "hunter2".to_string(),
            ..Config::default()
        };
        assert!(!format!("{:?}", config).contains("hunter2"));
    }

    #[test]
    fn test_debug_redacts_redis_credentials() {
        let config = Config {
            redis_url: "redis://:pw@h:6379".to_string(),
            ..Config::default()
        };
        let output = format!("{:?}", config);

        assert!(!output.contains("pw"));
        assert!(output.contains("h:6379"));
    }
}
