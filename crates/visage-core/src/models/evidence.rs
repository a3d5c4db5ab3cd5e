use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// One signal's scored contribution plus its human-readable justification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Evidence {
    pub delta: f64,
    pub reason: String,
}

impl Evidence {
    pub fn new(delta: f64, reason: impl Into<String>) -> Self {
        Self {
            delta,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delta = if self.delta == 0.0 { 0.0 } else { self.delta };
        write!(f, "{:+} {}", (delta * 10.0).round() / 10.0, self.reason)
    }
}

/// Output of one domain scorer before bucketing.
///
/// `data_points` counts only signals that were present and consulted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub raw_score: f64,
    pub data_points: u32,
    pub evidence: Vec<Evidence>,
}

impl ScoreResult {
    /// Evidence rendered as reasoning lines, in accumulation order.
    pub fn reasoning(&self) -> Vec<String> {
        self.evidence.iter().map(ToString::to_string).collect()
    }
}
