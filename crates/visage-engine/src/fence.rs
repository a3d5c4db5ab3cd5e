//! Per-step fault isolation.
//!
//! A scorer that errors or panics degrades only its own dimension; the event
//! is recorded and the pipeline moves on.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use visage_core::constants::SCORER_FAILED;
use visage_core::errors::ScoringError;
use visage_core::DegradationEvent;

use crate::scorer_span;

/// Run `step`, converting an error or a panic into a degradation event.
pub fn run_fenced<T>(
    scorer: &'static str,
    degradations: &mut Vec<DegradationEvent>,
    step: impl FnOnce() -> Result<T, ScoringError>,
) -> Option<T> {
    let _span = scorer_span!(scorer).entered();
    let error = match catch_unwind(AssertUnwindSafe(step)) {
        Ok(Ok(value)) => return Some(value),
        Ok(Err(e)) => e,
        Err(payload) => ScoringError::ScorerPanic {
            scorer: scorer.to_string(),
            message: panic_message(payload.as_ref()),
        },
    };
    tracing::error!(
        event = "scorer_failed",
        scorer,
        error = %error,
        "scorer failed, dimension degraded to Unknown"
    );
    degradations.push(DegradationEvent::now(
        format!("scorer.{scorer}"),
        error.to_string(),
        SCORER_FAILED,
    ));
    None
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_passes_through() {
        let mut events = Vec::new();
        assert_eq!(run_fenced("age", &mut events, || Ok(7)), Some(7));
        assert!(events.is_empty());
    }

    #[test]
    fn error_is_recorded() {
        let mut events = Vec::new();
        let out: Option<u8> = run_fenced("income", &mut events, || {
            Err(ScoringError::InvalidSignal {
                signal: "ram".into(),
                reason: "NaN".into(),
            })
        });
        assert!(out.is_none());
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].component, "scorer.income");
        assert_eq!(events[0].fallback_used, SCORER_FAILED);
    }

    #[test]
    fn panic_is_contained() {
        let mut events = Vec::new();
        let out: Option<u8> = run_fenced("parental", &mut events, || panic!("index out of range"));
        assert!(out.is_none());
        assert!(events[0].failure.contains("index out of range"));
        assert!(events[0].failure.contains("parental"));
    }
}
