//! Confidence curve configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Parameters of the saturating confidence function
/// `min(cap, base + dataPoints × per_signal_gain)`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Confidence granted by the first consulted signal. Default: 20.
    pub base: Option<u8>,
    /// Confidence added per consulted signal. Default: 10.
    pub per_signal_gain: Option<u8>,
    /// Ceiling for any single attribute. Default: 95.
    pub cap: Option<u8>,
    /// Per-signal gain of the profile-wide confidence. Default: 2.
    pub overall_per_signal_gain: Option<u8>,
    /// Ceiling of the profile-wide confidence. Default: 95.
    pub overall_cap: Option<u8>,
}

impl ConfidenceConfig {
    pub fn effective_base(&self) -> u8 {
        self.base.unwrap_or(defaults::DEFAULT_CONFIDENCE_BASE)
    }

    pub fn effective_per_signal_gain(&self) -> u8 {
        self.per_signal_gain
            .unwrap_or(defaults::DEFAULT_CONFIDENCE_PER_SIGNAL_GAIN)
    }

    pub fn effective_cap(&self) -> u8 {
        self.cap.unwrap_or(defaults::DEFAULT_CONFIDENCE_CAP)
    }

    pub fn effective_overall_per_signal_gain(&self) -> u8 {
        self.overall_per_signal_gain
            .unwrap_or(defaults::DEFAULT_OVERALL_PER_SIGNAL_GAIN)
    }

    pub fn effective_overall_cap(&self) -> u8 {
        self.overall_cap.unwrap_or(defaults::DEFAULT_OVERALL_CAP)
    }
}
