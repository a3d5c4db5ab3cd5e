/// Visage engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Value every attribute falls back to when nothing could be inferred.
pub const UNKNOWN: &str = "Unknown";

/// Reasoning line attached to a dimension whose scorer errored or panicked.
pub const SCORER_FAILED: &str = "scorer failed";

/// Year used for hardware age when the bag carries no `temporal.year`.
pub const REFERENCE_YEAR: i32 = 2025;

/// Hard upper bound on the insight list, whatever the config says.
pub const MAX_INSIGHTS_CEILING: usize = 20;

/// Path of the remote inference endpoint, relative to the configured base URL.
pub const REMOTE_ANALYZE_PATH: &str = "/api/analyze";

/// Project config file name looked up in the config root.
pub const CONFIG_FILE_NAME: &str = "visage.toml";
