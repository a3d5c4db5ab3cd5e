//! proptest strategies for arbitrary signal bags.
//!
//! Values deliberately include out-of-range and blank inputs so properties
//! cover the discard paths of the validated accessors.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;
use visage_core::models::{
    BehavioralSignals, BotDetection, BrowserSignals, CryptoSignals, FingerprintSummary,
    HardwareSignals, NetworkSignals, PreferenceSignals, SocialLogins, TemporalSignals,
    TrackingSignals, VpnSignals,
};
use visage_core::SignalBag;

const GPUS: &[&str] = &[
    "NVIDIA GeForce RTX 4090",
    "NVIDIA GeForce GTX 1060",
    "AMD Radeon RX 7900 XTX",
    "Intel(R) UHD Graphics 620",
    "Apple M2",
    "Mali-G78",
    "Mystery Accelerator",
    "",
];
const ISPS: &[&str] = &["Comcast", "Verizon Fios", "T-Mobile", "University of Oslo", "AWS", "Acme Net"];
const CITIES: &[&str] = &["San Francisco", "Naperville", "Bangalore", "Zurich", "Springfield", ""];
const COUNTRIES: &[&str] = &["United States", "Saudi Arabia", "Ireland", "Japan", "UK", "Atlantis"];
const LANGUAGES: &[&str] = &["en-US", "de-DE", "fr", "ja", "pt-BR", "xx"];
const WALLETS: &[&str] = &["MetaMask", "Phantom", "Coinbase Wallet", "Unknown Wallet"];
const REFERRERS: &[&str] = &[
    "https://www.google.com/search?q=x",
    "https://t.co/abc",
    "https://news.ycombinator.com/",
    "",
];

fn pick(options: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    option::of(proptest::sample::select(options).prop_map(str::to_string))
}

fn flag() -> impl Strategy<Value = Option<bool>> {
    option::of(any::<bool>())
}

fn hardware() -> impl Strategy<Value = HardwareSignals> {
    (
        pick(GPUS),
        option::of(0u32..300),
        option::of(-4.0f64..256.0),
        option::of((0u32..6000, 0u32..6000)),
        option::of(0u32..11),
        option::of(-0.5f64..1.5),
        flag(),
        pick(&["MacIntel", "Win32", "iPhone", "Linux x86_64"]),
        flag(),
    )
        .prop_map(
            |(gpu, cpu_cores, ram, screen, touch_points, battery_level, battery_charging, platform, apple_silicon)| {
                HardwareSignals {
                    gpu,
                    cpu_cores,
                    ram,
                    screen_width: screen.map(|(w, _)| w),
                    screen_height: screen.map(|(_, h)| h),
                    touch_points,
                    battery_level,
                    battery_charging,
                    platform,
                    apple_silicon,
                    ..Default::default()
                }
            },
        )
}

fn network() -> impl Strategy<Value = NetworkSignals> {
    (
        pick(ISPS),
        pick(CITIES),
        pick(COUNTRIES),
        pick(&["wifi", "4g", "cellular", "ethernet"]),
    )
        .prop_map(|(isp, city, country, connection_type)| NetworkSignals {
            isp,
            city,
            country,
            connection_type,
            ..Default::default()
        })
}

fn browser() -> impl Strategy<Value = BrowserSignals> {
    (
        option::of(vec(proptest::sample::select(LANGUAGES).prop_map(str::to_string), 0..5)),
        flag(),
        flag(),
        pick(REFERRERS),
    )
        .prop_map(|(languages, do_not_track, developer_variant, referrer)| BrowserSignals {
            languages,
            do_not_track,
            developer_variant,
            referrer,
            ..Default::default()
        })
}

fn behavioral() -> impl Strategy<Value = BehavioralSignals> {
    (
        option::of(-10.0f64..400.0),
        option::of(0u32..20),
        option::of(0u32..40),
        option::of(0u32..40),
        option::of(0u32..10),
        option::of(0u32..20),
        flag(),
    )
        .prop_map(
            |(typing_speed_wpm, rage_clicks, erratic_movements, tab_switches, afk_count, long_key_holds, dev_tools_open)| {
                BehavioralSignals {
                    typing_speed_wpm,
                    rage_clicks,
                    erratic_movements,
                    tab_switches,
                    afk_count,
                    long_key_holds,
                    dev_tools_open,
                }
            },
        )
}

fn temporal() -> impl Strategy<Value = TemporalSignals> {
    (
        option::of(0u8..30),
        option::of(0u8..70),
        option::of(0u8..9),
        option::of(0u8..14),
        option::of(1980i32..2110),
    )
        .prop_map(|(hour, minute, day_of_week, month, year)| TemporalSignals {
            hour,
            minute,
            day_of_week,
            month,
            year,
        })
}

fn social() -> impl Strategy<Value = SocialLogins> {
    (flag(), flag(), flag(), flag(), flag(), flag(), flag(), flag()).prop_map(
        |(facebook, google, github, linkedin, discord, twitch, tiktok, youtube)| SocialLogins {
            facebook,
            google,
            github,
            linkedin,
            discord,
            twitch,
            tiktok,
            youtube,
            ..Default::default()
        },
    )
}

fn misc() -> impl Strategy<Value = (TrackingSignals, CryptoSignals, VpnSignals, BotDetection, FingerprintSummary, PreferenceSignals)> {
    (
        flag(),
        option::of(0u32..50),
        option::of(vec(proptest::sample::select(WALLETS).prop_map(str::to_string), 0..3)),
        flag(),
        flag(),
        flag(),
        option::of(0.0f64..1.0),
        option::of(0.0f64..40.0),
        flag(),
        pick(&["p3", "srgb", "rec2020"]),
    )
        .prop_map(
            |(ad_blocker, trackers_blocked, wallets, vpn, tor, is_bot, automation_score, bits, reduced_motion, color_gamut)| {
                (
                    TrackingSignals {
                        ad_blocker,
                        trackers_blocked,
                    },
                    CryptoSignals { wallets },
                    VpnSignals {
                        detected: vpn,
                        tor,
                        ..Default::default()
                    },
                    BotDetection {
                        is_bot,
                        automation_score,
                        ..Default::default()
                    },
                    FingerprintSummary {
                        uniqueness_bits: bits,
                        ..Default::default()
                    },
                    PreferenceSignals {
                        reduced_motion,
                        color_gamut,
                        ..Default::default()
                    },
                )
            },
        )
}

/// Arbitrary bag, including blank, absent and out-of-range leaves.
pub fn arb_signal_bag() -> impl Strategy<Value = SignalBag> {
    (
        hardware(),
        network(),
        browser(),
        behavioral(),
        temporal(),
        social(),
        misc(),
    )
        .prop_map(
            |(hardware, network, browser, behavioral, temporal, social_logins, misc)| {
                let (tracking, crypto, vpn, bot_detection, fingerprint_summary, preferences) = misc;
                SignalBag {
                    hardware,
                    network,
                    browser,
                    behavioral,
                    temporal,
                    social_logins,
                    tracking,
                    crypto,
                    vpn,
                    bot_detection,
                    fingerprint_summary,
                    preferences,
                    ..Default::default()
                }
            },
        )
}

/// Arbitrary bag guaranteed to carry at least one signal.
pub fn arb_non_empty_signal_bag() -> impl Strategy<Value = SignalBag> {
    arb_signal_bag().prop_filter("bag must carry at least one signal", |bag| !bag.is_empty())
}
