//! Remote inference errors. Every variant triggers the local fallback.

use super::error_code::{self, VisageErrorCode};

/// Failure modes of the remote `POST /api/analyze` collaborator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoteError {
    #[error("remote analysis is disabled")]
    Disabled,

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("remote analysis timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("remote returned HTTP {status}")]
    Status { status: u16 },

    #[error("remote rejected the request: {reason}")]
    Rejected { reason: String },

    #[error("malformed remote payload: {reason}")]
    Malformed { reason: String },
}

impl VisageErrorCode for RemoteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Disabled => error_code::REMOTE_DISABLED,
            Self::Network { .. } => error_code::REMOTE_NETWORK,
            Self::Timeout { .. } => error_code::REMOTE_TIMEOUT,
            Self::Status { .. } => error_code::REMOTE_STATUS,
            Self::Rejected { .. } => error_code::REMOTE_REJECTED,
            Self::Malformed { .. } => error_code::REMOTE_MALFORMED,
        }
    }
}
