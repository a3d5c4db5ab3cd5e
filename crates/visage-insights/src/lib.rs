//! # visage-insights
//!
//! Natural-language insights over an assembled [`Profile`]: a template
//! catalog keyed by signal combinations, rendered in an enhanced pass and a
//! base pass, then deduplicated, ranked and capped.
//!
//! [`Profile`]: visage_core::Profile

pub mod catalog;
pub mod generator;
pub mod referrer;

pub use catalog::{InsightContext, Pass, CATALOG};
pub use generator::{summarize, InsightGenerator};
pub use referrer::{classify, Referrer, ReferrerKind};
