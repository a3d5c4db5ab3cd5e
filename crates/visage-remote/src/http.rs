//! reqwest-backed remote analyzer.

use std::time::Duration;

use visage_core::config::RemoteConfig;
use visage_core::constants::REMOTE_ANALYZE_PATH;
use visage_core::errors::RemoteError;
use visage_core::traits::IRemoteAnalyzer;
use visage_core::{Profile, SignalBag};

use crate::protocol::{parse_response, REQUEST_ID_HEADER};

/// Calls `POST <base>/api/analyze` with a bounded per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpAnalyzer {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RemoteError> {
        let base = base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(RemoteError::Network {
                reason: "empty base URL".to_string(),
            });
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Network {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            endpoint: format!("{base}{REMOTE_ANALYZE_PATH}"),
            timeout,
        })
    }

    /// Analyzer for the configured collaborator, or `Disabled`.
    pub fn from_config(config: &RemoteConfig) -> Result<Self, RemoteError> {
        if !config.effective_enabled() {
            return Err(RemoteError::Disabled);
        }
        let base = config.base_url.as_deref().ok_or(RemoteError::Disabled)?;
        Self::new(base, Duration::from_millis(config.effective_timeout_ms()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_error(&self, e: reqwest::Error) -> RemoteError {
        if e.is_timeout() {
            RemoteError::Timeout {
                timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
            }
        } else {
            RemoteError::Network {
                reason: e.to_string(),
            }
        }
    }
}

impl IRemoteAnalyzer for HttpAnalyzer {
    fn name(&self) -> &str {
        "http"
    }

    async fn analyze(&self, bag: &SignalBag) -> Result<Profile, RemoteError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        tracing::debug!(endpoint = %self.endpoint, %request_id, "sending remote analysis");

        let response = self
            .client
            .post(&self.endpoint)
            .header(REQUEST_ID_HEADER, &request_id)
            .json(bag)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.map_error(e))?;

        let result = parse_response(status, &body);
        if let Err(ref e) = result {
            tracing::debug!(%request_id, status, error = %e, "remote analysis unusable");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        let analyzer = HttpAnalyzer::new("http://localhost:8080/", Duration::from_secs(1)).unwrap();
        assert_eq!(analyzer.endpoint(), "http://localhost:8080/api/analyze");
    }

    #[test]
    fn disabled_config_is_refused() {
        let err = HttpAnalyzer::from_config(&RemoteConfig::default()).unwrap_err();
        assert_eq!(err, RemoteError::Disabled);
    }

    #[test]
    fn blank_base_url_is_refused() {
        assert!(HttpAnalyzer::new("  ", Duration::from_secs(1)).is_err());
    }
}
