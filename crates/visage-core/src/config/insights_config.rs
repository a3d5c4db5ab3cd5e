//! Insight generator configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InsightsConfig {
    /// Maximum insights kept after dedup. Default: 5.
    pub max_insights: Option<usize>,
    /// Below this many candidates a summary insight is appended. Default: 5.
    pub min_insights: Option<usize>,
}

impl InsightsConfig {
    pub fn effective_max_insights(&self) -> usize {
        self.max_insights.unwrap_or(defaults::DEFAULT_MAX_INSIGHTS)
    }

    pub fn effective_min_insights(&self) -> usize {
        self.min_insights.unwrap_or(defaults::DEFAULT_MIN_INSIGHTS)
    }
}
