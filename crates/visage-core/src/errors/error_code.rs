//! Stable machine-readable error codes.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REMOTE_DISABLED: &str = "REMOTE_DISABLED";
pub const REMOTE_NETWORK: &str = "REMOTE_NETWORK";
pub const REMOTE_TIMEOUT: &str = "REMOTE_TIMEOUT";
pub const REMOTE_STATUS: &str = "REMOTE_STATUS";
pub const REMOTE_REJECTED: &str = "REMOTE_REJECTED";
pub const REMOTE_MALFORMED: &str = "REMOTE_MALFORMED";
pub const SCORING_ERROR: &str = "SCORING_ERROR";
pub const SCORER_PANIC: &str = "SCORER_PANIC";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Implemented by every Visage error so callers can branch on a stable code
/// rather than on display strings.
pub trait VisageErrorCode {
    fn error_code(&self) -> &'static str;
}
