use visage_core::errors::{
    ConfigError, RemoteError, ScoringError, VisageError, VisageErrorCode,
};

#[test]
fn remote_errors_have_distinct_codes() {
    let codes = [
        RemoteError::Disabled.error_code(),
        RemoteError::Network { reason: "refused".into() }.error_code(),
        RemoteError::Timeout { timeout_ms: 10 }.error_code(),
        RemoteError::Status { status: 502 }.error_code(),
        RemoteError::Rejected { reason: "quota".into() }.error_code(),
        RemoteError::Malformed { reason: "missing analysis".into() }.error_code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn top_level_error_forwards_codes() {
    let err: VisageError = RemoteError::Timeout { timeout_ms: 3000 }.into();
    assert_eq!(err.error_code(), "REMOTE_TIMEOUT");
    assert!(err.to_string().contains("3000ms"));

    let err: VisageError = ConfigError::FileNotFound { path: "visage.toml".into() }.into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");

    let err: VisageError = ScoringError::ScorerPanic {
        scorer: "income".into(),
        message: "boom".into(),
    }
    .into();
    assert_eq!(err.error_code(), "SCORER_PANIC");
}
