//! Normalizer / bucketizer and the saturating confidence curve.

use visage_core::config::ConfidenceConfig;
use visage_core::errors::ScoringError;
use visage_core::{BucketedAttribute, ScoreResult};

/// Ordered breakpoints over a valid range. `labels.len()` must be
/// `breakpoints.len() + 1`; a score equal to a breakpoint falls in the
/// upper bucket.
#[derive(Debug, Clone, Copy)]
pub struct BucketTable {
    pub range: (f64, f64),
    pub breakpoints: &'static [f64],
    pub labels: &'static [&'static str],
}

impl BucketTable {
    pub fn select(&self, raw: f64) -> Result<&'static str, ScoringError> {
        bucketize(raw, self.range, self.breakpoints, self.labels)
    }

    /// Index of the bucket selected for `raw`.
    pub fn index(&self, raw: f64) -> Result<usize, ScoringError> {
        let label = self.select(raw)?;
        Ok(self
            .labels
            .iter()
            .position(|l| *l == label)
            .unwrap_or_default())
    }
}

/// Clamp `raw` into `range`, then binary-search `breakpoints` for its label.
pub fn bucketize(
    raw: f64,
    range: (f64, f64),
    breakpoints: &[f64],
    labels: &[&'static str],
) -> Result<&'static str, ScoringError> {
    if labels.len() != breakpoints.len() + 1 {
        return Err(ScoringError::InvalidSignal {
            signal: "bucket table".to_string(),
            reason: format!(
                "{} labels for {} breakpoints",
                labels.len(),
                breakpoints.len()
            ),
        });
    }
    if !raw.is_finite() {
        return Err(ScoringError::InvalidSignal {
            signal: "raw score".to_string(),
            reason: format!("non-finite value {raw}"),
        });
    }
    let clamped = raw.clamp(range.0, range.1);
    let idx = breakpoints.partition_point(|b| *b <= clamped);
    Ok(labels[idx])
}

/// `0` when nothing was consulted, else `min(cap, base + dataPoints × gain)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfidenceCurve {
    pub base: u8,
    pub per_signal_gain: u8,
    pub cap: u8,
}

impl ConfidenceCurve {
    pub fn from_config(config: &ConfidenceConfig) -> Self {
        Self {
            base: config.effective_base(),
            per_signal_gain: config.effective_per_signal_gain(),
            cap: config.effective_cap().min(100),
        }
    }

    /// Profile-wide curve: no base, its own gain and cap.
    pub fn overall_from_config(config: &ConfidenceConfig) -> Self {
        Self {
            base: 0,
            per_signal_gain: config.effective_overall_per_signal_gain(),
            cap: config.effective_overall_cap().min(100),
        }
    }

    pub fn confidence(&self, data_points: u32) -> u8 {
        if data_points == 0 {
            return 0;
        }
        let raw = u64::from(self.base) + u64::from(data_points) * u64::from(self.per_signal_gain);
        raw.min(u64::from(self.cap)) as u8
    }

    /// Bucketed attribute for `label`, with reasoning rendered from evidence.
    pub fn attribute(&self, label: &str, result: &ScoreResult) -> BucketedAttribute {
        BucketedAttribute::new(label, self.confidence(result.data_points), result.reasoning())
    }
}

impl Default for ConfidenceCurve {
    fn default() -> Self {
        Self::from_config(&ConfidenceConfig::default())
    }
}
