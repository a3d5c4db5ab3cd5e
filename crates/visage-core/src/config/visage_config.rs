//! Top-level Visage configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CacheConfig, ConfidenceConfig, InsightsConfig, RemoteConfig, TelemetryConfig};
use crate::constants::{CONFIG_FILE_NAME, MAX_INSIGHTS_CEILING};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`VISAGE_*`)
/// 2. Project config (`visage.toml` in the config root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VisageConfig {
    pub remote: RemoteConfig,
    pub insights: InsightsConfig,
    pub confidence: ConfidenceConfig,
    pub cache: CacheConfig,
    pub telemetry: TelemetryConfig,
}

impl VisageConfig {
    /// Load configuration from `root/visage.toml` plus the process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit environment lookup.
    pub fn load_with_env<F>(root: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config, env);

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &VisageConfig) -> Result<(), ConfigError> {
        if config.remote.effective_timeout_ms() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "remote.timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.remote.effective_enabled()
            && config
                .remote
                .base_url
                .as_deref()
                .map_or(true, |u| u.trim().is_empty())
        {
            return Err(ConfigError::ValidationFailed {
                field: "remote.base_url".to_string(),
                message: "required when remote.enabled is true".to_string(),
            });
        }

        let max = config.insights.effective_max_insights();
        if !(1..=MAX_INSIGHTS_CEILING).contains(&max) {
            return Err(ConfigError::ValidationFailed {
                field: "insights.max_insights".to_string(),
                message: format!("must be between 1 and {MAX_INSIGHTS_CEILING}"),
            });
        }
        if config.insights.effective_min_insights() > max {
            return Err(ConfigError::ValidationFailed {
                field: "insights.min_insights".to_string(),
                message: "must not exceed insights.max_insights".to_string(),
            });
        }

        let cap = config.confidence.effective_cap();
        if cap > 100 {
            return Err(ConfigError::ValidationFailed {
                field: "confidence.cap".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        if config.confidence.effective_base() > cap {
            return Err(ConfigError::ValidationFailed {
                field: "confidence.base".to_string(),
                message: "must not exceed confidence.cap".to_string(),
            });
        }
        if config.confidence.effective_overall_cap() > 100 {
            return Err(ConfigError::ValidationFailed {
                field: "confidence.overall_cap".to_string(),
                message: "must be between 0 and 100".to_string(),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut VisageConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: VisageConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; a leaf in `other` wins only when it is `Some`.
    fn merge(base: &mut VisageConfig, other: &VisageConfig) {
        // Remote
        if other.remote.enabled.is_some() {
            base.remote.enabled = other.remote.enabled;
        }
        if other.remote.base_url.is_some() {
            base.remote.base_url = other.remote.base_url.clone();
        }
        if other.remote.timeout_ms.is_some() {
            base.remote.timeout_ms = other.remote.timeout_ms;
        }

        // Insights
        if other.insights.max_insights.is_some() {
            base.insights.max_insights = other.insights.max_insights;
        }
        if other.insights.min_insights.is_some() {
            base.insights.min_insights = other.insights.min_insights;
        }

        // Confidence
        if other.confidence.base.is_some() {
            base.confidence.base = other.confidence.base;
        }
        if other.confidence.per_signal_gain.is_some() {
            base.confidence.per_signal_gain = other.confidence.per_signal_gain;
        }
        if other.confidence.cap.is_some() {
            base.confidence.cap = other.confidence.cap;
        }
        if other.confidence.overall_per_signal_gain.is_some() {
            base.confidence.overall_per_signal_gain = other.confidence.overall_per_signal_gain;
        }
        if other.confidence.overall_cap.is_some() {
            base.confidence.overall_cap = other.confidence.overall_cap;
        }

        // Cache
        if other.cache.enabled.is_some() {
            base.cache.enabled = other.cache.enabled;
        }
        if other.cache.max_entries.is_some() {
            base.cache.max_entries = other.cache.max_entries;
        }
        if other.cache.ttl_secs.is_some() {
            base.cache.ttl_secs = other.cache.ttl_secs;
        }

        // Telemetry
        if other.telemetry.log_level.is_some() {
            base.telemetry.log_level = other.telemetry.log_level.clone();
        }
        if other.telemetry.json_logs.is_some() {
            base.telemetry.json_logs = other.telemetry.json_logs;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `VISAGE_REMOTE_BASE_URL`, `VISAGE_MAX_INSIGHTS`, etc.
    fn apply_env_overrides<F>(config: &mut VisageConfig, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = env("VISAGE_REMOTE_ENABLED").and_then(|v| v.parse::<bool>().ok()) {
            config.remote.enabled = Some(v);
        }
        if let Some(v) = env("VISAGE_REMOTE_BASE_URL") {
            config.remote.base_url = Some(v);
        }
        if let Some(v) = env("VISAGE_REMOTE_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok()) {
            config.remote.timeout_ms = Some(v);
        }
        if let Some(v) = env("VISAGE_MAX_INSIGHTS").and_then(|v| v.parse::<usize>().ok()) {
            config.insights.max_insights = Some(v);
        }
        if let Some(v) = env("VISAGE_CACHE_ENABLED").and_then(|v| v.parse::<bool>().ok()) {
            config.cache.enabled = Some(v);
        }
        if let Some(v) = env("VISAGE_LOG_LEVEL") {
            config.telemetry.log_level = Some(v);
        }
        if let Some(v) = env("VISAGE_JSON_LOGS").and_then(|v| v.parse::<bool>().ok()) {
            config.telemetry.json_logs = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
