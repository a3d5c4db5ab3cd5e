//! Remote inference configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Settings for the optional remote `/api/analyze` collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RemoteConfig {
    /// Attempt the remote analysis before the local pipeline. Default: false.
    pub enabled: Option<bool>,
    /// Base URL, e.g. `https://profile.example.com`.
    pub base_url: Option<String>,
    /// Bounded timeout for the whole remote call. Default: 3000.
    pub timeout_ms: Option<u64>,
}

impl RemoteConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(defaults::DEFAULT_REMOTE_ENABLED)
    }

    pub fn effective_timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(defaults::DEFAULT_REMOTE_TIMEOUT_MS)
    }
}
