//! # visage-engine
//!
//! Profile assembly and orchestration. [`ProfileEngine::compute`] serves a
//! cached profile for a byte-identical bag, else tries the remote analyzer
//! under a bounded timeout, else runs the local [`ProfileAssembler`].
//! [`compute_profile`] is the pure local pipeline with compiled defaults.

pub mod assembler;
pub mod cache;
pub mod fence;
pub mod orchestrator;
pub mod tracing_setup;

pub use assembler::{Assembly, ProfileAssembler};
pub use cache::ProfileCache;
pub use orchestrator::{ProfileEngine, ProfileOutcome, ProfileSource};
pub use tracing_setup::init_tracing;
pub use visage_scoring::TABLES_VERSION;

use visage_core::{Profile, SignalBag};

/// Local pipeline with default configuration. Deterministic in `bag`.
pub fn compute_profile(bag: &SignalBag) -> Profile {
    ProfileAssembler::default().assemble(bag).profile
}
