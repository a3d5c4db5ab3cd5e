//! Logging configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Default filter directive when `VISAGE_LOG` is unset. Default: "info".
    pub log_level: Option<String>,
    /// Emit JSON lines instead of the human format. Default: false.
    pub json_logs: Option<bool>,
}

impl TelemetryConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn effective_json_logs(&self) -> bool {
        self.json_logs.unwrap_or(defaults::DEFAULT_JSON_LOGS)
    }
}
