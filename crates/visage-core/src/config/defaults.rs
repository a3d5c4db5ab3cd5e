//! Compiled defaults for every config leaf.

pub const DEFAULT_REMOTE_ENABLED: bool = false;
pub const DEFAULT_REMOTE_TIMEOUT_MS: u64 = 3_000;

pub const DEFAULT_MAX_INSIGHTS: usize = 5;
pub const DEFAULT_MIN_INSIGHTS: usize = 5;

pub const DEFAULT_CONFIDENCE_BASE: u8 = 20;
pub const DEFAULT_CONFIDENCE_PER_SIGNAL_GAIN: u8 = 10;
pub const DEFAULT_CONFIDENCE_CAP: u8 = 95;
pub const DEFAULT_OVERALL_PER_SIGNAL_GAIN: u8 = 2;
pub const DEFAULT_OVERALL_CAP: u8 = 95;

pub const DEFAULT_CACHE_ENABLED: bool = true;
pub const DEFAULT_CACHE_MAX_ENTRIES: u64 = 1_024;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3_600;

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
