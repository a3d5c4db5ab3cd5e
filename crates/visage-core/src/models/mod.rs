//! Data model: the signal bag in, the profile out, and the evidence between.

pub mod attribute;
pub mod degradation_event;
pub mod dimension;
pub mod evidence;
pub mod profile;
pub mod signal_bag;

pub use attribute::BucketedAttribute;
pub use degradation_event::DegradationEvent;
pub use dimension::Dimension;
pub use evidence::{Evidence, ScoreResult};
pub use profile::{LifestyleHabits, Profile};
pub use signal_bag::{
    BehavioralSignals, BotDetection, BrowserSignals, CryptoSignals, FingerprintSummary,
    HardwareSignals, NetworkSignals, PreferenceSignals, SignalBag, SocialLogins, StorageSignals,
    TemporalSignals, TrackingSignals, VpnSignals,
};
