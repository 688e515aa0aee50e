//! DataMall HTTP client.
//!
//! A thin wrapper over an async `reqwest::Client` that knows the DataMall
//! root URL and account key. One GET per call, no retries.

use reqwest::{StatusCode, Url, header::ACCEPT};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::core::config::LtaConfig;
use crate::core::{Error, Result};

/// Header DataMall reads the account key from.
const ACCOUNT_KEY_HEADER: &str = "AccountKey";

/// Failures reported by (or on the way to) DataMall.
///
/// These are surfaced to the caller as flagged tool results, never as
/// protocol errors.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// DataMall answered with a non-2xx status.
    #[error("{message}")]
    Status { status: StatusCode, message: String },

    /// No usable response (connection refused, DNS, TLS, body read).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl UpstreamError {
    /// Build a status error, preferring the `Message` field of a JSON body.
    fn from_status(status: StatusCode, body: &str) -> Self {
        let message = upstream_message(body)
            .unwrap_or_else(|| format!("Request failed with status code {}", status.as_u16()));

        Self::Status { status, message }
    }
}

/// Extract DataMall's own error text (`{"Message": "..."}`) from a body.
fn upstream_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["Message", "message"]
        .iter()
        .find_map(|key| value.get(key)?.as_str())
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Client for the LTA DataMall REST API.
#[derive(Clone)]
pub struct LtaClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl std::fmt::Debug for LtaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LtaClient")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl LtaClient {
    /// Create a client from the DataMall configuration.
    pub fn new(config: &LtaConfig) -> Result<Self> {
        Url::parse(&config.base_url)
            .map_err(|e| Error::config(format!("Invalid LTA base URL {}: {}", config.base_url, e)))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET an endpoint and return its body on 2xx.
    #[instrument(skip(self, query), fields(params = query.len()))]
    pub async fn get(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> std::result::Result<String, UpstreamError> {
        let mut request = self
            .http
            .get(self.url(path))
            .header(ACCEPT, "application/json");

        if let Some(api_key) = &self.api_key {
            request = request.header(ACCOUNT_KEY_HEADER, api_key);
        }

        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("DataMall responded {} ({} bytes)", status, body.len());

        if !status.is_success() {
            return Err(UpstreamError::from_status(status, &body));
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_prefers_message_field() {
        assert_eq!(
            upstream_message(r#"{"Message":"Invalid Account Key"}"#).as_deref(),
            Some("Invalid Account Key")
        );
        assert_eq!(
            upstream_message(r#"{"message":"Not Found"}"#).as_deref(),
            Some("Not Found")
        );
    }

    #[test]
    fn test_upstream_message_absent() {
        assert!(upstream_message("<html>Bad Gateway</html>").is_none());
        assert!(upstream_message(r#"{"odata.error":{}}"#).is_none());
        assert!(upstream_message(r#"{"Message":""}"#).is_none());
    }

    #[test]
    fn test_status_error_falls_back_to_generic_text() {
        let err = UpstreamError::from_status(StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[test]
    fn test_url_joins_path() {
        let client = LtaClient::new(&LtaConfig {
            api_key: None,
            base_url: "http://localhost:1234/lta/".to_string(),
        })
        .unwrap();
        assert_eq!(client.url("/PCDRealTime"), "http://localhost:1234/lta/PCDRealTime");
    }

    #[test]
    fn test_debug_redacts_key() {
        let client = LtaClient::new(&LtaConfig {
            api_key: Some("secret".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert!(!format!("{:?}", client).contains("secret"));
    }
}
