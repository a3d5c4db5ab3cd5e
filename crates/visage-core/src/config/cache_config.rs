//! Session cache configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CacheConfig {
    /// Reuse profiles for byte-identical bags. Default: true.
    pub enabled: Option<bool>,
    /// Maximum cached profiles. Default: 1024.
    pub max_entries: Option<u64>,
    /// Time-to-live of a cached profile, in seconds. Default: 3600.
    pub ttl_secs: Option<u64>,
}

impl CacheConfig {
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(defaults::DEFAULT_CACHE_ENABLED)
    }

    pub fn effective_max_entries(&self) -> u64 {
        self.max_entries.unwrap_or(defaults::DEFAULT_CACHE_MAX_ENTRIES)
    }

    pub fn effective_ttl_secs(&self) -> u64 {
        self.ttl_secs.unwrap_or(defaults::DEFAULT_CACHE_TTL_SECS)
    }
}
