//! Tracing initialization and span definitions.

use tracing_subscriber::EnvFilter;
use visage_core::config::TelemetryConfig;

/// Environment variable holding the filter directive, e.g.
/// `VISAGE_LOG=visage_scoring=debug,visage_engine=info`.
pub const LOG_ENV: &str = "VISAGE_LOG";

/// Initialize the global subscriber.
///
/// `VISAGE_LOG` wins over `telemetry.log_level`. Idempotent: a second call,
/// or a subscriber installed by the host, leaves the existing one in place.
pub fn init_tracing(config: &TelemetryConfig) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(config.effective_log_level()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    let _ = if config.effective_json_logs() {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

/// Span wrapping one profile computation, tagged with the reference data
/// version so a logged profile can be traced back to the tables that scored it.
#[macro_export]
macro_rules! profile_span {
    ($bag_hash:expr) => {
        tracing::info_span!(
            "visage.profile",
            bag_hash = %$bag_hash,
            tables = $crate::TABLES_VERSION,
            source = tracing::field::Empty
        )
    };
}

/// Span wrapping one remote attempt.
#[macro_export]
macro_rules! remote_span {
    ($analyzer:expr, $timeout_ms:expr) => {
        tracing::info_span!("visage.remote", analyzer = %$analyzer, timeout_ms = $timeout_ms)
    };
}

/// Span wrapping one fenced scorer step.
#[macro_export]
macro_rules! scorer_span {
    ($scorer:expr) => {
        tracing::debug_span!("visage.scorer", scorer = %$scorer)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = TelemetryConfig::default();
        init_tracing(&config);
        init_tracing(&config);
    }

    #[test]
    fn profile_span_carries_tables_version() {
        init_tracing(&TelemetryConfig::default());
        let span = crate::profile_span!("0af3");
        span.record("source", "local");
        assert!(!crate::TABLES_VERSION.is_empty());
    }
}
