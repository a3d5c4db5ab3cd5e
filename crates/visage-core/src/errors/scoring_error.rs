//! Scorer errors. Never surfaced to callers of the pipeline; each one
//! degrades a single dimension to Unknown.

use super::error_code::{self, VisageErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("scorer {scorer} requires {dependency}, which was not computed")]
    MissingDependency {
        scorer: &'static str,
        dependency: &'static str,
    },

    #[error("invalid signal {signal}: {reason}")]
    InvalidSignal { signal: String, reason: String },

    #[error("scorer {scorer} panicked: {message}")]
    ScorerPanic { scorer: String, message: String },
}

impl VisageErrorCode for ScoringError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ScorerPanic { .. } => error_code::SCORER_PANIC,
            _ => error_code::SCORING_ERROR,
        }
    }
}
