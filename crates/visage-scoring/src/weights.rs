//! Hand-calibrated scoring weights.
//!
//! These constants are empirical and have no derivation beyond the
//! calibration they were tuned against. Change them here, never inline in
//! scorer logic.

/// Signed age bias: negative leans younger, positive leans older.
pub mod age {
    pub const LATE_NIGHT: f64 = -6.0;
    pub const EARLY_MORNING: f64 = 5.0;
    pub const DAYTIME: f64 = 2.0;
    pub const EVENING: f64 = 0.0;
    pub const LATE_EVENING: f64 = -2.0;

    pub const CURRENT_GAMING_GPU: f64 = -6.0;
    pub const OLDER_GAMING_GPU: f64 = -3.0;
    pub const WORKSTATION_GPU: f64 = 4.0;
    pub const INTEGRATED_GPU: f64 = 3.0;
    pub const OTHER_GPU: f64 = 0.0;

    pub const APPLE: f64 = 3.0;

    pub const MANY_LANGUAGES: f64 = 3.0;
    pub const TWO_LANGUAGES: f64 = 1.0;
    /// Primary-language regions whose online population skews young or old.
    pub const HIGH_TECH_ADOPTION: f64 = -1.0;
    pub const LOW_TECH_ADOPTION: f64 = 1.0;

    pub const CRYPTO_WALLET: f64 = -10.0;
    pub const SOLANA_WALLET: f64 = -5.0;

    pub const AD_BLOCKER: f64 = -4.0;
    pub const NO_AD_BLOCKER: f64 = 2.0;
    pub const DEVTOOLS_OPEN: f64 = -3.0;
    pub const DEVELOPER_BROWSER: f64 = -2.0;

    pub const SCREEN_MOBILE: f64 = -3.0;
    pub const SCREEN_TABLET: f64 = 4.0;
    pub const SCREEN_LOW_RES: f64 = 5.0;
    pub const SCREEN_HIGH_END: f64 = -2.0;
    pub const SCREEN_4K: f64 = -1.0;

    pub const FAST_TYPIST: f64 = -4.0;
    pub const AVERAGE_TYPIST: f64 = -1.0;
    pub const SLOW_TYPIST: f64 = 6.0;
    pub const FAST_TYPING_WPM: f64 = 70.0;
    pub const AVERAGE_TYPING_WPM: f64 = 40.0;
    pub const SLOW_TYPING_WPM: f64 = 25.0;

    pub const TOUCH: f64 = -2.0;
    pub const NO_TOUCH: f64 = 1.0;

    /// Normalized (score / max(dataPoints, 1)) breakpoints.
    pub const BREAKPOINTS: &[f64] = &[-6.0, -3.5, -1.5, 0.5, 2.5, 4.5];
    pub const RANGE: (f64, f64) = (-20.0, 20.0);
}

/// Income on a 0..=100 scale, baseline 50.
pub mod income {
    pub const BASELINE: f64 = 50.0;

    pub const GPU_FLAGSHIP: f64 = 15.0;
    pub const GPU_WORKSTATION: f64 = 12.0;
    pub const GPU_HIGH: f64 = 10.0;
    pub const GPU_MID: f64 = 3.0;
    pub const GPU_ENTRY: f64 = -5.0;
    pub const GPU_INTEGRATED: f64 = -6.0;

    pub const SCREEN_4K: f64 = 8.0;
    pub const SCREEN_HIGH_END: f64 = 5.0;
    pub const SCREEN_DESKTOP: f64 = 2.0;
    pub const SCREEN_LOW_RES: f64 = -6.0;
    pub const SCREEN_MOBILE: f64 = -2.0;

    pub const CORES_16: f64 = 8.0;
    pub const CORES_8: f64 = 3.0;
    pub const CORES_2: f64 = -6.0;

    pub const RAM_32: f64 = 8.0;
    pub const RAM_16: f64 = 3.0;
    pub const RAM_4: f64 = -8.0;

    pub const ISP_PREMIUM: f64 = 8.0;
    pub const ISP_BUSINESS: f64 = 5.0;
    pub const ISP_BUDGET: f64 = -8.0;
    pub const ISP_MOBILE: f64 = -2.0;
    pub const ISP_EDUCATION: f64 = -6.0;

    pub const APPLE: f64 = 8.0;
    pub const PRIVACY_COMBO: f64 = 4.0;
    /// Per step of the primary language's income tier away from the middle (3).
    pub const LANGUAGE_INCOME_STEP: f64 = 2.0;

    /// The city multiplier only applies above this score.
    pub const CITY_TREND_THRESHOLD: f64 = 55.0;

    pub const BREAKPOINTS: &[f64] = &[30.0, 42.0, 50.0, 58.0, 68.0, 80.0];
    pub const RANGE: (f64, f64) = (0.0, 100.0);
}

/// Per-candidate credits for the occupation scorer.
pub mod occupation {
    pub const DEVTOOLS: f64 = 30.0;
    pub const DEVELOPER_BROWSER: f64 = 20.0;
    pub const GITHUB: f64 = 25.0;
    pub const REDDIT: f64 = 5.0;
    pub const LINKEDIN_OFFICE: f64 = 10.0;
    pub const LINKEDIN_FREELANCE: f64 = 5.0;
    pub const TWITCH: f64 = 20.0;
    pub const DISCORD_GAMER: f64 = 10.0;
    pub const DISCORD_STUDENT: f64 = 5.0;
    pub const INSTAGRAM: f64 = 8.0;
    pub const TIKTOK: f64 = 8.0;
    pub const WALLET: f64 = 25.0;
    pub const SOLANA_WALLET: f64 = 10.0;
    pub const GAMING_GPU: f64 = 15.0;
    pub const WORKSTATION_DESIGNER: f64 = 12.0;
    pub const WORKSTATION_DEVELOPER: f64 = 5.0;
    pub const APPLE_DESIGNER: f64 = 10.0;
    pub const WIDE_GAMUT: f64 = 8.0;
    pub const ULTRAWIDE: f64 = 5.0;
    pub const SCREEN_4K_DESIGNER: f64 = 6.0;
    pub const MANY_CORES: f64 = 5.0;
    pub const BUSINESS_HOURS: f64 = 10.0;
    pub const WEEKEND_WORK: f64 = 6.0;
    pub const LATE_NIGHT: f64 = 5.0;
    pub const POLYGLOT: f64 = 6.0;
    pub const LANGUAGE_PROFESSION: f64 = 4.0;
    pub const TECH_HUB: f64 = 6.0;
    /// City tech-hub score (0..=10) at which the Developer credit applies.
    pub const TECH_HUB_MIN_SCORE: u8 = 8;
    pub const ISP_EDUCATION: f64 = 25.0;
    pub const ISP_BUSINESS: f64 = 10.0;
    pub const AGE_STUDENT: f64 = 20.0;
    pub const AGE_YOUNG_ADULT: f64 = 5.0;
    pub const AGE_MATURE: f64 = -10.0;
    pub const FAST_TYPING_DEVELOPER: f64 = 5.0;
    pub const FAST_TYPING_OFFICE: f64 = 3.0;
    pub const AD_BLOCKER: f64 = 3.0;

    /// Runner-up at or above this share of the winner is a tie.
    pub const TIE_RATIO: f64 = 0.8;
    /// Winner below this gets a "Likely " qualifier.
    pub const LOW_CONFIDENCE: f64 = 20.0;
}

/// Device value in USD.
pub mod device {
    pub const BASE_SYSTEM: f64 = 400.0;
    pub const PER_CORE_OVER_4: f64 = 40.0;
    pub const PER_GB_RAM: f64 = 8.0;
    pub const DISPLAY_4K: f64 = 400.0;
    pub const DISPLAY_HIGH_END: f64 = 200.0;
    pub const DISPLAY_FHD: f64 = 50.0;
    pub const APPLE_MULTIPLIER: f64 = 1.3;

    /// Residual value by GPU age in years; the last entry covers 5+.
    pub const DEPRECIATION: &[f64] = &[1.0, 0.85, 0.7, 0.6, 0.5, 0.4];

    pub const BREAKPOINTS: &[f64] = &[500.0, 1000.0, 2000.0];
    pub const RANGE: (f64, f64) = (0.0, 100_000.0);

    /// Device-age breakpoints in years: ≤1 new, ≤3 recent, ≤6 older.
    pub const AGE_BREAKPOINTS: &[f64] = &[2.0, 4.0, 7.0];
    pub const AGE_RANGE: (f64, f64) = (0.0, 50.0);
}

/// Parental likelihood on a signed -100..=100 scale.
pub mod parental {
    pub const AGE_TEEN: f64 = -60.0;
    pub const AGE_STUDENT: f64 = -35.0;
    pub const AGE_YOUNG_ADULT: f64 = -10.0;
    pub const AGE_EARLY_THIRTIES: f64 = 10.0;
    pub const AGE_PRIME: f64 = 25.0;
    pub const AGE_LATE_FORTIES: f64 = 20.0;
    pub const AGE_FIFTY_PLUS: f64 = 5.0;

    pub const INCOME_AGE_COMPOUND: f64 = 10.0;

    pub const SCHOOL_HOURS: f64 = 5.0;
    pub const POST_BEDTIME: f64 = 12.0;
    pub const EARLY_MORNING: f64 = 8.0;
    pub const WEEKEND_EARLY_RISING: f64 = 10.0;
    pub const WEEKEND_INTERRUPTED: f64 = 6.0;
    pub const FRIDAY_EVENING: f64 = 4.0;
    pub const AFTER_SCHOOL: f64 = -3.0;
    pub const LATE_NIGHT: f64 = -10.0;
    pub const WEEKEND_NIGHTLIFE: f64 = -8.0;

    pub const SUMMER_BREAK: f64 = 4.0;
    pub const BACK_TO_SCHOOL: f64 = 3.0;
    pub const HOLIDAY_SEASON: f64 = 2.0;

    pub const INTERRUPTIONS: f64 = 8.0;
    pub const INTERRUPTION_TAB_SWITCHES: u32 = 5;
    pub const INTERRUPTION_AFK: u32 = 2;

    pub const TABLET: f64 = 6.0;
    pub const LOW_BATTERY: f64 = 3.0;
    pub const LOW_BATTERY_LEVEL: f64 = 0.2;

    pub const FACEBOOK_28_PLUS: f64 = 12.0;
    pub const FACEBOOK: f64 = 4.0;
    pub const YOUTH_PLATFORMS: f64 = -5.0;

    pub const FAMILY_AREA: f64 = 8.0;
    pub const SINGLE_AREA: f64 = -8.0;

    pub const BREAKPOINTS: &[f64] = &[-40.0, -15.0, 10.0, 30.0, 55.0];
    pub const RANGE: (f64, f64) = (-100.0, 100.0);
}

/// Stress points per behavioral event.
pub mod state {
    pub const RAGE_CLICK: f64 = 15.0;
    pub const ERRATIC_MOVEMENT: f64 = 5.0;
    pub const TAB_SWITCH: f64 = 2.0;
    pub const LONG_KEY_HOLD: f64 = 4.0;

    pub const MEDIUM: f64 = 20.0;
    pub const HIGH: f64 = 45.0;
    pub const RANGE: (f64, f64) = (0.0, 200.0);
}

/// Lifestyle habit scores on a 0..=100 probability-like scale.
pub mod lifestyle {
    /// Ceiling of alcohol likelihood in low-alcohol-culture regions.
    pub const LOW_CULTURE_ALCOHOL_CAP: f64 = 25.0;

    pub const AGE_MINOR_MULTIPLIER: f64 = 0.2;
    pub const AGE_STUDENT_MULTIPLIER: f64 = 1.1;
    pub const AGE_MIDLIFE_MULTIPLIER: f64 = 0.95;
    pub const AGE_SENIOR_MULTIPLIER: f64 = 0.9;
    pub const SMOKING_MINOR_MULTIPLIER: f64 = 0.3;

    pub const WEEKEND_NIGHT_ALCOHOL: f64 = 8.0;
    pub const FINANCE_ALCOHOL: f64 = 5.0;

    pub const EARLY_SESSION_CAFFEINE: f64 = 10.0;
    pub const LATE_SESSION_CAFFEINE: f64 = 8.0;
    pub const DEVELOPER_CAFFEINE: f64 = 10.0;
    pub const STRESS_CAFFEINE: f64 = 5.0;
    pub const FAST_TYPING_CAFFEINE: f64 = 5.0;

    pub const STRESS_SMOKING: f64 = 5.0;
    pub const LATE_NIGHT_SMOKING: f64 = 3.0;
    pub const SENIOR_SMOKING: f64 = -3.0;

    pub const HIGH_INCOME_TRAVEL: f64 = 15.0;
    pub const UPPER_INCOME_TRAVEL: f64 = 8.0;
    pub const LOW_INCOME_TRAVEL: f64 = -10.0;
    pub const VPN_TRAVEL: f64 = 5.0;
    pub const POLYGLOT_TRAVEL: f64 = 8.0;
    pub const MOBILE_TRAVEL: f64 = 3.0;

    pub const BREAKPOINTS: &[f64] = &[30.0, 50.0, 70.0];
    pub const RANGE: (f64, f64) = (0.0, 100.0);
}

/// Rule thresholds shared by the personality and interest scorers.
pub mod traits {
    pub const IMPATIENT_RAGE_CLICKS: u32 = 2;
    pub const MULTITASKER_TAB_SWITCHES: u32 = 8;
    pub const SOCIAL_LOGINS: usize = 4;
    pub const TRACKERS_BLOCKED: u32 = 10;
    pub const UNIQUE_FINGERPRINT_BITS: f64 = 30.0;
    pub const TOP_INTERESTS: usize = 3;
}
