//! Configuration utilities

use serde::{Deserialize, Serialize};
use std::env;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub log_level: String,
    pub database_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "proeventos".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            debug: false,
            log_level: "info".to_string(),
            database_url: "sqlite:proeventos.db".to_string(),
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the environment
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => log::warn!("Ignoring .env: {}", e),
        }
        Self::from_env()
    }

    /// Load config from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build config from a variable lookup; missing or unparseable values
    /// fall back to the defaults
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            debug: lookup("DEBUG")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.debug),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
        }
    }

    /// Full bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default log filter: `debug` when DEBUG is set, otherwise LOG_LEVEL
    pub fn log_filter(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.log_level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
        assert_eq!(config.database_url, "sqlite:proeventos.db");
    }

    #[test]
    fn test_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "127.0.0.1:5000");
    }

    #[test]
    fn test_log_filter() {
        let mut config = AppConfig {
            log_level: "warn".to_string(),
            ..AppConfig::default()
        };
        config.debug = false;
        assert_eq!(config.log_filter(), "warn");

        config.debug = true;
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_from_vars() {
        let vars: HashMap<&str, &str> = [
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("DEBUG", "true"),
            ("DATABASE_URL", "sqlite::memory:"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_vars(|key| vars.get(key).map(|v| v.to_string()));
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.debug);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.app_name, "proeventos");
    }

    #[test]
    fn test_bad_values_fall_back() {
        let config = AppConfig::from_vars(|key| match key {
            "PORT" => Some("not-a-port".to_string()),
            "DEBUG" => Some("yes".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 5000);
        assert!(!config.debug);
    }
}
