//! # visage-scoring
//!
//! Domain scorers for every profile dimension. Each scorer is a pure function
//! of the signal bag (plus, for occupation, parental status and lifestyle,
//! the estimates they depend on) that accumulates weighted [`Evidence`] and
//! is then mapped to a closed label set by the [`normalizer`].
//!
//! Dependency order: age and income first, then device, occupation,
//! parental status, state, lifestyle, personality and interests.
//!
//! [`Evidence`]: visage_core::Evidence

pub mod accumulator;
pub mod age;
pub mod context;
pub mod device;
pub mod income;
pub mod labels;
pub mod lifestyle;
pub mod normalizer;
pub mod occupation;
pub mod parental;
pub mod personality;
pub mod state;
pub mod weights;

pub use accumulator::Accumulator;
pub use age::AgeEstimate;
pub use context::ScoringContext;
pub use device::DeviceEstimate;
pub use income::IncomeEstimate;
pub use labels::{is_valid_label, labels_for};
pub use lifestyle::LifestyleInputs;
pub use normalizer::{bucketize, BucketTable, ConfidenceCurve};
pub use occupation::OccupationEstimate;
pub use state::StateEstimate;
pub use visage_tables::TABLES_VERSION;
