//! # visage-core
//!
//! Foundation crate for the Visage profile inference engine.
//! Defines the signal bag, the profile output contract, errors, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::VisageConfig;
pub use errors::{VisageError, VisageResult};
pub use models::{
    BucketedAttribute, DegradationEvent, Dimension, Evidence, LifestyleHabits, Profile,
    ScoreResult, SignalBag,
};
