//! Per-run inputs shared by every scorer.

use visage_core::config::ConfidenceConfig;
use visage_core::constants::REFERENCE_YEAR;
use visage_core::{BucketedAttribute, Dimension, SignalBag};

use crate::normalizer::ConfidenceCurve;

#[derive(Debug, Clone, Copy)]
pub struct ScoringContext {
    /// Year used for GPU depreciation: the bag's own `temporal.year`, else
    /// the compiled reference year. Never the wall clock.
    pub reference_year: i32,
    pub curve: ConfidenceCurve,
}

impl ScoringContext {
    pub fn new(bag: &SignalBag, confidence: &ConfidenceConfig) -> Self {
        Self {
            reference_year: bag.year().unwrap_or(REFERENCE_YEAR),
            curve: ConfidenceCurve::from_config(confidence),
        }
    }

    pub fn for_bag(bag: &SignalBag) -> Self {
        Self::new(bag, &ConfidenceConfig::default())
    }
}

/// Unknown bucket for a dimension that consulted no signal.
pub fn no_signals(dimension: Dimension) -> BucketedAttribute {
    BucketedAttribute::unknown(format!("no {dimension} signals available"))
}
