use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::{SCORER_FAILED, UNKNOWN};

/// One bucketed profile dimension.
///
/// `value` is always drawn from the dimension's closed label set (or
/// `"Unknown"`). Free text such as a currency range or a time-pattern suffix
/// lives in `detail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BucketedAttribute {
    pub value: String,
    /// 0..=100.
    pub confidence: u8,
    pub reasoning: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub detail: Option<String>,
}

impl BucketedAttribute {
    pub fn new(value: impl Into<String>, confidence: u8, reasoning: Vec<String>) -> Self {
        Self {
            value: value.into(),
            confidence: confidence.min(100),
            reasoning,
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// The Unknown bucket with zero confidence and one explanatory line.
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self::new(UNKNOWN, 0, vec![reason.into()])
    }

    /// What a dimension degrades to when its scorer errors or panics.
    pub fn failed() -> Self {
        Self::unknown(SCORER_FAILED)
    }

    pub fn is_unknown(&self) -> bool {
        self.value == UNKNOWN
    }
}

impl Default for BucketedAttribute {
    fn default() -> Self {
        Self::unknown("no signals available")
    }
}
