//! # visage-tables
//!
//! Versioned, read-only reference data consumed by the domain scorers.
//!
//! Lookup contract:
//! - free-text fields (GPU renderer, ISP name, wallet name) use a
//!   case-insensitive substring match; the longest matching pattern wins,
//!   ties go to the earlier table row;
//! - structured keys (city, language tag, screen `WxH`, country) use an exact
//!   match after trimming and lower-casing;
//! - a miss returns the table's documented default entry with
//!   `matched == false`. Lookups never panic and never return nothing.

pub mod city;
pub mod gpu;
pub mod isp;
pub mod language;
pub mod lookup;
pub mod region;
pub mod screen;
pub mod wallet;

pub use city::CityEntry;
pub use gpu::{GpuEntry, GpuTier};
pub use isp::{IspEntry, IspTier};
pub use language::LanguageEntry;
pub use lookup::Lookup;
pub use region::{CultureLevel, RegionEntry};
pub use screen::{ScreenClass, ScreenEntry};
pub use wallet::{WalletEcosystem, WalletEntry};

/// Version of the bundled reference data. Bump whenever a table changes.
pub const TABLES_VERSION: &str = "2025.1";
