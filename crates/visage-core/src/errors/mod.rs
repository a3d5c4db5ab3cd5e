//! Error handling for Visage.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod remote_error;
pub mod scoring_error;

pub use config_error::ConfigError;
pub use error_code::VisageErrorCode;
pub use remote_error::RemoteError;
pub use scoring_error::ScoringError;

/// Top-level error aggregating every subsystem error.
#[derive(Debug, thiserror::Error)]
pub enum VisageError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("remote analysis error: {0}")]
    Remote(#[from] RemoteError),

    #[error("scoring error: {0}")]
    Scoring(#[from] ScoringError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl VisageErrorCode for VisageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Remote(e) => e.error_code(),
            Self::Scoring(e) => e.error_code(),
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used across the workspace.
pub type VisageResult<T> = Result<T, VisageError>;
