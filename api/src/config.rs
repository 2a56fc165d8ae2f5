//! Application configuration loaded from environment variables.

use std::time::Duration;

use crate::errors::ConfigError;

/// Server configuration
///
/// Reads from environment variables:
/// - `HOST`: bind address (default: `"0.0.0.0"`)
/// - `PORT`: listen port (default: `3000`)
/// - `HEALTH_ROUTE_PREFIX`: where the health check is mounted, a literal absolute path (default: `"/health"`)
/// - `REQUEST_TIMEOUT_SECS`: per-request timeout (default: `10`)
/// - `CONCURRENCY_LIMIT`: max in-flight requests per route (default: `1024`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub health_prefix: String,
    pub request_timeout: Duration,
    pub concurrency_limit: usize,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, falling back to defaults for missing keys.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => defaults.port,
        };

        let health_prefix = match lookup("HEALTH_ROUTE_PREFIX") {
            Some(raw) if is_static_path(&raw) => raw,
            Some(raw) => return Err(ConfigError::InvalidRoutePrefix(raw)),
            None => defaults.health_prefix,
        };

        let request_timeout = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => defaults.request_timeout,
        };

        let concurrency_limit = match lookup("CONCURRENCY_LIMIT") {
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => limit,
                _ => return Err(ConfigError::InvalidConcurrencyLimit(raw)),
            },
            None => defaults.concurrency_limit,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            health_prefix,
            request_timeout,
            concurrency_limit,
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// An absolute path with no capture or wildcard syntax, so the router takes it literally.
fn is_static_path(path: &str) -> bool {
    path.starts_with('/')
        && path.split('/').all(|segment| {
            !segment.starts_with(':')
                && !segment.starts_with('*')
                && !segment.contains(['{', '}'])
        })
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            health_prefix: "/health".to_string(),
            request_timeout: Duration::from_secs(10),
            concurrency_limit: 1024,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_values() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.health_prefix, "/health");
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.concurrency_limit, 1024);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("HEALTH_ROUTE_PREFIX", "/api/healthchecker"),
            ("REQUEST_TIMEOUT_SECS", "3"),
            ("CONCURRENCY_LIMIT", "16"),
            ("RUST_LOG", "debug"),
        ])
        .unwrap();

        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.health_prefix, "/api/healthchecker");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.concurrency_limit, 16);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port() {
        let err = load(&[("PORT", "http")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(raw) if raw == "http"));

        let err = load(&[("PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort(_)));
    }

    #[test]
    fn test_prefix_must_be_absolute() {
        let err = load(&[("HEALTH_ROUTE_PREFIX", "health")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRoutePrefix(_)));

        for prefix in ["/:svc", "/health/*", "/health/*rest", "/{id}", "/api/v{n}/health"] {
            let err = load(&[("HEALTH_ROUTE_PREFIX", prefix)]).unwrap_err();
            assert!(
                matches!(&err, ConfigError::InvalidRoutePrefix(raw) if raw == prefix),
                "{prefix} should be rejected"
            );
        }

        let config = load(&[("HEALTH_ROUTE_PREFIX", "/api/v1/health-check")]).unwrap();
        assert_eq!(config.health_prefix, "/api/v1/health-check");
    }

    #[test]
    fn test_zero_timeout_and_limit_rejected() {
        let err = load(&[("REQUEST_TIMEOUT_SECS", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(_)));

        let err = load(&[("CONCURRENCY_LIMIT", "0")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConcurrencyLimit(_)));
    }

    #[test]
    fn test_addr_default() {
        assert_eq!(Config::default().addr(), "0.0.0.0:3000");
    }
}
