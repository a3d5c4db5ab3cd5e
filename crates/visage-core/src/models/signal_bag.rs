//! The canonical input: a namespaced bag of optional facts about one client.
//!
//! Every leaf is optional. Absence means "no evidence", never a negative
//! signal. A leaf of the wrong JSON type deserializes to `None` without
//! affecting its siblings, and out-of-range values are discarded by the
//! validated accessors on [`SignalBag`], so scorers never see either.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Device hardware as reported by the collection layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HardwareSignals {
    /// Unmasked renderer string, e.g. "NVIDIA GeForce RTX 4090".
    #[serde(deserialize_with = "lenient")]
    pub gpu: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub gpu_vendor: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub cpu_cores: Option<u32>,
    /// Device memory in GB.
    #[serde(deserialize_with = "lenient")]
    pub ram: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub screen_width: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub screen_height: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub pixel_ratio: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub touch_points: Option<u32>,
    /// Battery charge in [0, 1].
    #[serde(deserialize_with = "lenient")]
    pub battery_level: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub battery_charging: Option<bool>,
    /// `navigator.platform`, e.g. "MacIntel", "Win32", "iPhone".
    #[serde(deserialize_with = "lenient")]
    pub platform: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub apple_silicon: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NetworkSignals {
    #[serde(deserialize_with = "lenient")]
    pub isp: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub region: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub country: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub timezone: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub connection_type: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub downlink_mbps: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrowserSignals {
    #[serde(deserialize_with = "lenient")]
    pub user_agent: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub version: Option<String>,
    /// `navigator.languages`, most preferred first.
    #[serde(deserialize_with = "lenient_strings")]
    pub languages: Option<Vec<String>>,
    #[serde(deserialize_with = "lenient")]
    pub do_not_track: Option<bool>,
    /// Developer Edition, Canary, Nightly and similar builds.
    #[serde(deserialize_with = "lenient")]
    pub developer_variant: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub referrer: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FingerprintSummary {
    /// Estimated identifying entropy of the combined fingerprint.
    #[serde(deserialize_with = "lenient")]
    pub uniqueness_bits: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub canvas_hash: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub unique: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BotDetection {
    #[serde(deserialize_with = "lenient")]
    pub is_bot: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub headless: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub automation_score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BehavioralSignals {
    #[serde(deserialize_with = "lenient")]
    pub typing_speed_wpm: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub rage_clicks: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub erratic_movements: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub tab_switches: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub afk_count: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub long_key_holds: Option<u32>,
    #[serde(deserialize_with = "lenient")]
    pub dev_tools_open: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackingSignals {
    #[serde(deserialize_with = "lenient")]
    pub ad_blocker: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub trackers_blocked: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CryptoSignals {
    /// Detected wallet extensions, e.g. "MetaMask", "Phantom".
    #[serde(deserialize_with = "lenient_strings")]
    pub wallets: Option<Vec<String>>,
}

/// Platforms the visitor appears to be logged into.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLogins {
    #[serde(deserialize_with = "lenient")]
    pub facebook: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub google: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub twitter: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub github: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub linkedin: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub reddit: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub discord: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub twitch: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub instagram: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub tiktok: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub youtube: Option<bool>,
}

impl SocialLogins {
    /// Display names of every platform reported as logged in, in a fixed order.
    pub fn logged_in(&self) -> Vec<&'static str> {
        [
            ("Facebook", self.facebook),
            ("Google", self.google),
            ("Twitter", self.twitter),
            ("GitHub", self.github),
            ("LinkedIn", self.linkedin),
            ("Reddit", self.reddit),
            ("Discord", self.discord),
            ("Twitch", self.twitch),
            ("Instagram", self.instagram),
            ("TikTok", self.tiktok),
            ("YouTube", self.youtube),
        ]
        .into_iter()
        .filter_map(|(name, flag)| (flag == Some(true)).then_some(name))
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VpnSignals {
    #[serde(deserialize_with = "lenient")]
    pub detected: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub provider: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tor: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceSignals {
    /// "dark" or "light".
    #[serde(deserialize_with = "lenient")]
    pub color_scheme: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub reduced_motion: Option<bool>,
    /// "srgb", "p3" or "rec2020".
    #[serde(deserialize_with = "lenient")]
    pub color_gamut: Option<String>,
}

/// Local wall-clock facts at collection time. The engine never reads a clock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TemporalSignals {
    #[serde(deserialize_with = "lenient")]
    pub hour: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub minute: Option<u8>,
    /// 0 = Sunday … 6 = Saturday.
    #[serde(deserialize_with = "lenient")]
    pub day_of_week: Option<u8>,
    /// 1 = January … 12 = December.
    #[serde(deserialize_with = "lenient")]
    pub month: Option<u8>,
    #[serde(deserialize_with = "lenient")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSignals {
    #[serde(deserialize_with = "lenient")]
    pub quota_gb: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub persistent: Option<bool>,
}

/// The full signal bag. Built once per session by the collection layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignalBag {
    #[serde(deserialize_with = "lenient_section")]
    pub hardware: HardwareSignals,
    #[serde(deserialize_with = "lenient_section")]
    pub network: NetworkSignals,
    #[serde(deserialize_with = "lenient_section")]
    pub browser: BrowserSignals,
    #[serde(deserialize_with = "lenient_section")]
    pub fingerprint_summary: FingerprintSummary,
    #[serde(deserialize_with = "lenient_section")]
    pub bot_detection: BotDetection,
    #[serde(deserialize_with = "lenient_section")]
    pub behavioral: BehavioralSignals,
    #[serde(deserialize_with = "lenient_section")]
    pub tracking: TrackingSignals,
    #[serde(deserialize_with = "lenient_section")]
    pub crypto: CryptoSignals,
    #[serde(deserialize_with = "lenient_section")]
    pub social_logins: SocialLogins,
    #[serde(deserialize_with = "lenient_section")]
    pub vpn: VpnSignals,
    #[serde(deserialize_with = "lenient_section")]
    pub preferences: PreferenceSignals,
    #[serde(deserialize_with = "lenient_section")]
    pub temporal: TemporalSignals,
    #[serde(deserialize_with = "lenient_section")]
    pub storage: StorageSignals,
}

impl SignalBag {
    /// True when no leaf carries a value.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// blake3 hash of the canonical JSON form, used as the session cache key.
    ///
    /// Struct fields serialize in declaration order, so equal bags always
    /// produce equal hashes.
    pub fn content_hash(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        blake3::hash(&bytes).to_hex().to_string()
    }

    // ── Validated accessors ────────────────────────────────────────────
    // Each returns `None` for absent *and* for malformed values.

    pub fn hour(&self) -> Option<u8> {
        self.temporal.hour.filter(|h| *h < 24)
    }

    pub fn minute(&self) -> Option<u8> {
        self.temporal.minute.filter(|m| *m < 60)
    }

    pub fn day_of_week(&self) -> Option<u8> {
        self.temporal.day_of_week.filter(|d| *d < 7)
    }

    pub fn month(&self) -> Option<u8> {
        self.temporal.month.filter(|m| (1..=12).contains(m))
    }

    pub fn year(&self) -> Option<i32> {
        self.temporal.year.filter(|y| (1990..=2100).contains(y))
    }

    pub fn is_weekend(&self) -> Option<bool> {
        self.day_of_week().map(|d| d == 0 || d == 6)
    }

    pub fn gpu(&self) -> Option<&str> {
        non_blank(self.hardware.gpu.as_deref())
    }

    pub fn cpu_cores(&self) -> Option<u32> {
        self.hardware.cpu_cores.filter(|c| (1..=256).contains(c))
    }

    pub fn ram_gb(&self) -> Option<f64> {
        self.hardware
            .ram
            .filter(|r| r.is_finite() && *r > 0.0 && *r <= 4096.0)
    }

    /// Screen size as `(width, height)` when both sides are plausible.
    pub fn screen(&self) -> Option<(u32, u32)> {
        match (self.hardware.screen_width, self.hardware.screen_height) {
            (Some(w), Some(h)) if (1..=16_384).contains(&w) && (1..=16_384).contains(&h) => {
                Some((w, h))
            }
            _ => None,
        }
    }

    pub fn touch_capable(&self) -> Option<bool> {
        self.hardware.touch_points.map(|t| t > 0)
    }

    pub fn battery_level(&self) -> Option<f64> {
        self.hardware
            .battery_level
            .filter(|b| b.is_finite() && (0.0..=1.0).contains(b))
    }

    pub fn platform(&self) -> Option<&str> {
        non_blank(self.hardware.platform.as_deref())
    }

    /// Apple hardware or OS, from the explicit flag or the platform string.
    pub fn is_apple(&self) -> Option<bool> {
        if self.hardware.apple_silicon == Some(true) {
            return Some(true);
        }
        self.platform().map(|p| {
            let p = p.to_ascii_lowercase();
            p.starts_with("mac") || p.contains("iphone") || p.contains("ipad")
        })
    }

    pub fn isp(&self) -> Option<&str> {
        non_blank(self.network.isp.as_deref())
    }

    pub fn city(&self) -> Option<&str> {
        non_blank(self.network.city.as_deref())
    }

    pub fn country(&self) -> Option<&str> {
        non_blank(self.network.country.as_deref())
    }

    /// Distinct, non-blank language tags in preference order.
    pub fn languages(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for lang in self.browser.languages.iter().flatten() {
            let lang = lang.trim();
            if !lang.is_empty() && !seen.iter().any(|s| s.eq_ignore_ascii_case(lang)) {
                seen.push(lang);
            }
        }
        seen
    }

    pub fn referrer(&self) -> Option<&str> {
        non_blank(self.browser.referrer.as_deref())
    }

    pub fn typing_speed_wpm(&self) -> Option<f64> {
        self.behavioral
            .typing_speed_wpm
            .filter(|w| w.is_finite() && *w >= 0.0 && *w <= 300.0)
    }

    /// Non-blank wallet names in reported order.
    pub fn wallets(&self) -> Vec<&str> {
        self.crypto
            .wallets
            .iter()
            .flatten()
            .map(|w| w.trim())
            .filter(|w| !w.is_empty())
            .collect()
    }

    pub fn uniqueness_bits(&self) -> Option<f64> {
        self.fingerprint_summary
            .uniqueness_bits
            .filter(|b| b.is_finite() && *b >= 0.0)
    }

    /// Any automation signal: explicit bot flag, headless browser, or a
    /// high automation score.
    pub fn looks_automated(&self) -> bool {
        self.bot_detection.is_bot == Some(true)
            || self.bot_detection.headless == Some(true)
            || self
                .bot_detection
                .automation_score
                .is_some_and(|s| s.is_finite() && s >= 0.8)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// ── Lenient leaves ─────────────────────────────────────────────────────
// Collectors run in hostile environments; a value of the wrong type is
// dropped on its own instead of failing the whole bag.

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

/// String lists keep their string entries and drop the rest.
fn lenient_strings<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        )),
        _ => Ok(None),
    }
}

/// A category that is not an object at all reads as empty.
fn lenient_section<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).unwrap_or_default())
}
