//! Configuration system for Visage.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod cache_config;
pub mod confidence_config;
pub mod defaults;
pub mod insights_config;
pub mod remote_config;
pub mod telemetry_config;
pub mod visage_config;

pub use cache_config::CacheConfig;
pub use confidence_config::ConfidenceConfig;
pub use insights_config::InsightsConfig;
pub use remote_config::RemoteConfig;
pub use telemetry_config::TelemetryConfig;
pub use visage_config::VisageConfig;
