//! Application configuration loaded from environment variables.

use serde::Deserialize;

use crate::catalog::EventState;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Smarkets API ===
    /// Base URL for the Smarkets REST API.
    #[serde(default = "default_api_url")]
    pub smarkets_api_url: String,

    // === Catalog Listing ===
    /// Lifecycle state filter for the events listing.
    #[serde(default)]
    pub event_state: EventState,

    /// Maximum number of events to fetch per listing call.
    #[serde(default = "default_event_limit")]
    pub event_limit: u32,

    // === HTTP Tuning ===
    /// Overall HTTP request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub http_timeout_ms: u64,

    /// Per-probe timeout for order-book requests in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    // === Logging ===
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub rust_log: String,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_api_url() -> String {
    "https://api.smarkets.com/v3".to_string()
}

fn default_event_limit() -> u32 {
    50
}

fn default_http_timeout_ms() -> u64 {
    10_000
}

fn default_probe_timeout_ms() -> u64 {
    5_000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> Result<(), String> {
        let base = url::Url::parse(&self.smarkets_api_url)
            .map_err(|e| format!("SMARKETS_API_URL is not a valid URL: {}", e))?;

        if base.scheme() != "http" && base.scheme() != "https" {
            return Err("SMARKETS_API_URL must use http or https".to_string());
        }

        if self.event_limit == 0 {
            return Err("EVENT_LIMIT must be at least 1".to_string());
        }

        if self.http_timeout_ms == 0 {
            return Err("HTTP_TIMEOUT_MS must be greater than 0".to_string());
        }

        if self.probe_timeout_ms == 0 {
            return Err("PROBE_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Base URL with any trailing slash removed, for joining paths.
    pub fn api_base(&self) -> &str {
        self.smarkets_api_url.trim_end_matches('/')
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smarkets_api_url: default_api_url(),
            event_state: EventState::default(),
            event_limit: default_event_limit(),
            http_timeout_ms: default_http_timeout_ms(),
            probe_timeout_ms: default_probe_timeout_ms(),
            rust_log: default_log_level(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values_are_sensible() {
        assert_eq!(default_api_url(), "https://api.smarkets.com/v3");
        assert_eq!(default_event_limit(), 50);
        assert_eq!(default_log_level(), "info");
        assert!(default_probe_timeout_ms() > 0);
    }

    #[test]
    fn defaults_pass_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_rejects_malformed_base_url() {
        let config = Config {
            smarkets_api_url: "not a url".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let config = Config {
            smarkets_api_url: "ftp://api.smarkets.com/v3".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_limit() {
        let config = Config {
            event_limit: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn api_base_strips_trailing_slash() {
        let config = Config {
            smarkets_api_url: "https://api.smarkets.com/v3/".to_string(),
            ..Config::default()
        };

        assert_eq!(config.api_base(), "https://api.smarkets.com/v3");
    }
}
