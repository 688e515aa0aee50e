//! Configuration management for the MCP server.
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file) and then shared read-only with every tool call.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default root of the LTA DataMall REST API.
pub const DEFAULT_LTA_BASE_URL: &str = "https://datamall2.mytransport.sg/ltaodataservice";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Upstream DataMall configuration.
    pub lta: LtaConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the LTA DataMall API.
#[derive(Clone, Serialize, Deserialize)]
pub struct LtaConfig {
    /// DataMall account key, sent as the `AccountKey` header.
    /// Request one at: https://datamall.lta.gov.sg/content/datamall/en/request-for-api.html
    pub api_key: Option<String>,

    /// Root URL every endpoint path is appended to.
    pub base_url: String,
}

/// Custom Debug implementation to redact the account key from logs.
impl std::fmt::Debug for LtaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LtaConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for LtaConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_LTA_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "lta-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            lta: LtaConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `LTA_API_KEY` and `LTA_BASE_URL` for the upstream service and
    /// `MCP_SERVER_NAME` / `MCP_LOG_LEVEL` for the server itself.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("LTA_BASE_URL") {
            config.lta.base_url = base_url.trim_end_matches('/').to_string();
        }

        // Absence is not fatal: DataMall rejects the call and the caller sees it.
        match std::env::var("LTA_API_KEY") {
            Ok(api_key) if !api_key.is_empty() => config.lta.api_key = Some(api_key),
            _ => config.lta.api_key = None,
        }

        config
    }

    /// Log the parts of the configuration worth knowing at startup.
    ///
    /// Kept separate from [`Config::from_env`] because logging is only
    /// initialized once the log level has been read.
    pub fn log_summary(&self) {
        info!("LTA DataMall endpoint: {}", self.lta.base_url);
        if self.lta.api_key.is_some() {
            info!("LTA API key loaded from environment");
        } else {
            warn!("LTA_API_KEY not set - DataMall will reject every request");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("LTA_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.lta.api_key.as_deref(), Some("test_key_12345"));
        unsafe {
            std::env::remove_var("LTA_API_KEY");
        }
    }

    #[test]
    fn test_empty_api_key_is_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("LTA_API_KEY", "");
        }
        let config = Config::from_env();
        assert!(config.lta.api_key.is_none());
        unsafe {
            std::env::remove_var("LTA_API_KEY");
        }
    }

    #[test]
    fn test_base_url_override_strips_trailing_slash() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("LTA_BASE_URL", "http://localhost:9999/lta/");
        }
        let config = Config::from_env();
        assert_eq!(config.lta.base_url, "http://localhost:9999/lta");
        unsafe {
            std::env::remove_var("LTA_BASE_URL");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let lta = LtaConfig {
            api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", lta);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_config_default_points_at_datamall() {
        let config = Config::default();
        assert_eq!(config.lta.base_url, DEFAULT_LTA_BASE_URL);
        assert!(config.lta.api_key.is_none());
    }
}
