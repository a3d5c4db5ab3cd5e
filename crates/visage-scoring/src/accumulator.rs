//! Weighted evidence accumulation shared by every scorer.

use visage_core::{Evidence, ScoreResult};

/// Running score for one dimension.
///
/// [`consult`](Self::consult) is for signals that were present and read;
/// it is the only way `data_points` grows. [`adjust`](Self::adjust) records
/// compound adjustments derived from signals already consulted.
#[derive(Debug, Clone)]
pub struct Accumulator {
    score: f64,
    data_points: u32,
    evidence: Vec<Evidence>,
}

impl Accumulator {
    pub fn new(baseline: f64) -> Self {
        Self {
            score: baseline,
            data_points: 0,
            evidence: Vec::new(),
        }
    }

    pub fn consult(&mut self, delta: f64, reason: impl Into<String>) {
        self.data_points += 1;
        self.push(delta, reason);
    }

    pub fn adjust(&mut self, delta: f64, reason: impl Into<String>) {
        self.push(delta, reason);
    }

    fn push(&mut self, delta: f64, reason: impl Into<String>) {
        let delta = if delta.is_finite() { delta } else { 0.0 };
        self.score += delta;
        self.evidence.push(Evidence::new(delta, reason));
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn data_points(&self) -> u32 {
        self.data_points
    }

    /// Clamp into `[min, max]` and emit the result.
    pub fn finish(self, min: f64, max: f64) -> ScoreResult {
        ScoreResult {
            raw_score: self.score.clamp(min, max),
            data_points: self.data_points,
            evidence: self.evidence,
        }
    }
}

/// One accumulating score per candidate label, sharing a single
/// data-point counter.
#[derive(Debug, Clone)]
pub struct MultiAccumulator<const N: usize> {
    scores: [f64; N],
    data_points: u32,
    evidence: Vec<Evidence>,
}

impl<const N: usize> MultiAccumulator<N> {
    pub fn new() -> Self {
        Self {
            scores: [0.0; N],
            data_points: 0,
            evidence: Vec::new(),
        }
    }

    /// Consult one signal, crediting every `(candidate, delta)` pair.
    pub fn consult(&mut self, labels: &[&str; N], credits: &[(usize, f64)], reason: &str) {
        self.data_points += 1;
        self.credit(labels, credits, reason);
    }

    /// Credit candidates without counting a new signal.
    pub fn adjust(&mut self, labels: &[&str; N], credits: &[(usize, f64)], reason: &str) {
        self.credit(labels, credits, reason);
    }

    fn credit(&mut self, labels: &[&str; N], credits: &[(usize, f64)], reason: &str) {
        for &(idx, delta) in credits {
            if let Some(slot) = self.scores.get_mut(idx) {
                *slot = (*slot + delta).max(0.0);
                self.evidence
                    .push(Evidence::new(delta, format!("{}: {reason}", labels[idx])));
            }
        }
    }

    pub fn scores(&self) -> &[f64; N] {
        &self.scores
    }

    pub fn data_points(&self) -> u32 {
        self.data_points
    }

    pub fn into_parts(self) -> ([f64; N], u32, Vec<Evidence>) {
        (self.scores, self.data_points, self.evidence)
    }
}

impl<const N: usize> Default for MultiAccumulator<N> {
    fn default() -> Self {
        Self::new()
    }
}
