//! Parental-status likelihood on a signed -100..=100 scale.

use visage_core::errors::ScoringError;
use visage_core::{BucketedAttribute, Dimension, ScoreResult, SignalBag};
use visage_tables::{city, screen, ScreenClass};

use crate::accumulator::Accumulator;
use crate::age::AgeEstimate;
use crate::context::{no_signals, ScoringContext};
use crate::income::UPPER_MIDDLE;
use crate::normalizer::BucketTable;
use crate::weights::parental as w;

pub const PARENTAL_LABELS: &[&str] = &[
    "Very unlikely a parent",
    "Unlikely a parent",
    "Possibly a parent",
    "Somewhat likely a parent",
    "Likely a parent",
    "Very likely a parent",
];

const PARENTAL_TABLE: BucketTable = BucketTable {
    range: w::RANGE,
    breakpoints: w::BREAKPOINTS,
    labels: PARENTAL_LABELS,
};

/// Day-of-week / hour-of-day routines. Day 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePattern {
    /// Weekday 09:00-14:59.
    SchoolHours,
    /// Any day 20:00-22:30.
    PostBedtime,
    /// Weekday 05:00-06:59.
    EarlyMorning,
    /// Weekend 06:00-07:59.
    WeekendEarlyRising,
    /// Weekend 13:00-17:59 with idle gaps or frequent tab switches.
    WeekendInterrupted,
    /// Friday 18:00-19:59.
    FridayEvening,
    /// Weekday 16:00-18:59.
    AfterSchool,
    /// 00:00-03:59 outside weekend nights.
    LateNight,
    /// Friday/Saturday after 22:30, or Saturday/Sunday before 04:00.
    WeekendNightlife,
}

impl TimePattern {
    pub fn weight(&self) -> f64 {
        match self {
            Self::SchoolHours => w::SCHOOL_HOURS,
            Self::PostBedtime => w::POST_BEDTIME,
            Self::EarlyMorning => w::EARLY_MORNING,
            Self::WeekendEarlyRising => w::WEEKEND_EARLY_RISING,
            Self::WeekendInterrupted => w::WEEKEND_INTERRUPTED,
            Self::FridayEvening => w::FRIDAY_EVENING,
            Self::AfterSchool => w::AFTER_SCHOOL,
            Self::LateNight => w::LATE_NIGHT,
            Self::WeekendNightlife => w::WEEKEND_NIGHTLIFE,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Self::SchoolHours => "weekday school-hours session (09:00-14:59)",
            Self::PostBedtime => "post-bedtime window (20:00-22:30)",
            Self::EarlyMorning => "early-morning window before the school run (05:00-06:59)",
            Self::WeekendEarlyRising => "early weekend start (06:00-07:59)",
            Self::WeekendInterrupted => "interrupted weekend afternoon",
            Self::FridayEvening => "Friday evening at home (18:00-19:59)",
            Self::AfterSchool => "online during after-school hours (16:00-18:59)",
            Self::LateNight => "late-night session (00:00-03:59)",
            Self::WeekendNightlife => "weekend nightlife hours",
        }
    }

    /// Contextual phrase attached to the status when the pattern matched.
    pub fn suffix(&self) -> Option<&'static str> {
        match self {
            Self::SchoolHours => Some("active while kids are at school"),
            Self::PostBedtime => Some("browsing after kids' bedtime"),
            Self::EarlyMorning => Some("up before the school run"),
            Self::WeekendEarlyRising => Some("early weekend mornings"),
            Self::WeekendInterrupted => Some("frequently interrupted on weekends"),
            Self::FridayEvening => Some("home on Friday evening"),
            _ => None,
        }
    }
}

/// Every routine the bag's temporal signals match, in declaration order.
pub fn time_patterns(bag: &SignalBag) -> Vec<TimePattern> {
    let Some(hour) = bag.hour() else {
        return Vec::new();
    };
    let minute = bag.minute().unwrap_or(0);
    let minutes = u32::from(hour) * 60 + u32::from(minute);
    let day = bag.day_of_week();
    let weekday = day.map(|d| (1..=5).contains(&d));
    let weekend = day.map(|d| d == 0 || d == 6);

    let interrupted = bag.behavioral.afk_count.unwrap_or(0) >= w::INTERRUPTION_AFK
        || bag.behavioral.tab_switches.unwrap_or(0) >= w::INTERRUPTION_TAB_SWITCHES;
    let late_friday_or_saturday = matches!(day, Some(5 | 6)) && minutes > 22 * 60 + 30;
    let weekend_small_hours = matches!(day, Some(0 | 6)) && hour < 4;
    let nightlife = late_friday_or_saturday || weekend_small_hours;

    let mut matched = Vec::new();
    if weekday == Some(true) && (9..15).contains(&hour) {
        matched.push(TimePattern::SchoolHours);
    }
    if (20 * 60..=22 * 60 + 30).contains(&minutes) {
        matched.push(TimePattern::PostBedtime);
    }
    if weekday == Some(true) && (5..7).contains(&hour) {
        matched.push(TimePattern::EarlyMorning);
    }
    if weekend == Some(true) && (6..8).contains(&hour) {
        matched.push(TimePattern::WeekendEarlyRising);
    }
    if weekend == Some(true) && (13..18).contains(&hour) && interrupted {
        matched.push(TimePattern::WeekendInterrupted);
    }
    if day == Some(5) && (18..20).contains(&hour) {
        matched.push(TimePattern::FridayEvening);
    }
    if weekday == Some(true) && (16..19).contains(&hour) {
        matched.push(TimePattern::AfterSchool);
    }
    if hour < 4 && !nightlife {
        matched.push(TimePattern::LateNight);
    }
    if nightlife {
        matched.push(TimePattern::WeekendNightlife);
    }
    matched
}

pub fn score(
    bag: &SignalBag,
    age: Option<&AgeEstimate>,
    income_level: Option<usize>,
) -> ScoreResult {
    let mut acc = Accumulator::new(0.0);
    let midpoint = age.and_then(|a| a.midpoint);

    if let (Some(mid), Some(age)) = (midpoint, age) {
        let delta = match mid {
            0..=17 => w::AGE_TEEN,
            18..=22 => w::AGE_STUDENT,
            23..=27 => w::AGE_YOUNG_ADULT,
            28..=34 => w::AGE_EARLY_THIRTIES,
            35..=42 => w::AGE_PRIME,
            43..=49 => w::AGE_LATE_FORTIES,
            _ => w::AGE_FIFTY_PLUS,
        };
        acc.consult(delta, format!("age band {}", age.attribute.value));
    }

    // Income and age together say more than either alone.
    if let (Some(mid), Some(level)) = (midpoint, income_level) {
        if level >= UPPER_MIDDLE && (30..=50).contains(&mid) {
            acc.adjust(
                w::INCOME_AGE_COMPOUND,
                "high income in prime parenting years (30-50)",
            );
        }
    }

    let patterns = time_patterns(bag);
    for pattern in &patterns {
        acc.consult(pattern.weight(), pattern.reason());
    }

    if let Some(month) = bag.month() {
        let weekday_daytime = bag.day_of_week().is_some_and(|d| (1..=5).contains(&d))
            && bag.hour().is_some_and(|h| (9..16).contains(&h));
        match month {
            6..=8 if weekday_daytime => {
                acc.consult(w::SUMMER_BREAK, "summer break: weekday daytime at home")
            }
            9 => acc.consult(w::BACK_TO_SCHOOL, "back-to-school season"),
            12 => acc.consult(w::HOLIDAY_SEASON, "holiday season"),
            _ => {}
        }
    }

    let behavioral = &bag.behavioral;
    if let (Some(tabs), Some(afk)) = (behavioral.tab_switches, behavioral.afk_count) {
        if tabs >= w::INTERRUPTION_TAB_SWITCHES && afk >= w::INTERRUPTION_AFK {
            acc.consult(
                w::INTERRUPTIONS,
                format!("frequent interruptions ({tabs} tab switches, {afk} idle gaps)"),
            );
        }
    }

    if let Some((width, height)) = bag.screen() {
        if screen::lookup(width, height).entry.class == ScreenClass::Tablet {
            acc.consult(w::TABLET, "tablet-class screen (shared family device)");
        }
    }

    if let Some(level) = bag.battery_level() {
        if level < w::LOW_BATTERY_LEVEL && bag.hardware.battery_charging == Some(false) {
            acc.consult(
                w::LOW_BATTERY,
                format!("battery at {:.0}% and unplugged", level * 100.0),
            );
        }
    }

    let social = &bag.social_logins;
    if social.facebook == Some(true) {
        if midpoint.is_some_and(|m| m >= 28) {
            acc.consult(w::FACEBOOK_28_PLUS, "Facebook login at 28+");
        } else {
            acc.consult(w::FACEBOOK, "Facebook login");
        }
    }
    let youth: Vec<&str> = [
        ("TikTok", social.tiktok),
        ("Discord", social.discord),
        ("Twitch", social.twitch),
    ]
    .into_iter()
    .filter_map(|(name, flag)| (flag == Some(true)).then_some(name))
    .collect();
    if !youth.is_empty() {
        acc.consult(
            w::YOUTH_PLATFORMS,
            format!("youth-skewed platforms ({})", youth.join(", ")),
        );
    }

    let location = bag.city().or_else(|| {
        bag.network
            .region
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
    });
    if let Some(location) = location {
        if let Some(keyword) = city::family_keyword(location) {
            acc.consult(w::FAMILY_AREA, format!("family-oriented area ({keyword})"));
        } else if let Some(keyword) = city::single_keyword(location) {
            acc.consult(w::SINGLE_AREA, format!("single-dominated urban core ({keyword})"));
        } else {
            acc.adjust(0.0, format!("{location}: no family or single area keyword"));
        }
    }

    acc.finish(w::RANGE.0, w::RANGE.1)
}

pub fn estimate(
    bag: &SignalBag,
    ctx: &ScoringContext,
    age: Option<&AgeEstimate>,
    income_level: Option<usize>,
) -> Result<BucketedAttribute, ScoringError> {
    let result = score(bag, age, income_level);
    if result.data_points == 0 {
        return Ok(no_signals(Dimension::ParentalStatus));
    }
    let label = PARENTAL_TABLE.select(result.raw_score)?;
    let mut attribute = ctx.curve.attribute(label, &result);
    let suffixes: Vec<&str> = time_patterns(bag)
        .iter()
        .filter_map(TimePattern::suffix)
        .collect();
    if !suffixes.is_empty() {
        attribute = attribute.with_detail(suffixes.join("; "));
    }
    tracing::debug!(raw = result.raw_score, status = label, "parental status scored");
    Ok(attribute)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(day: u8, hour: u8, minute: u8) -> SignalBag {
        let mut bag = SignalBag::default();
        bag.temporal.day_of_week = Some(day);
        bag.temporal.hour = Some(hour);
        bag.temporal.minute = Some(minute);
        bag
    }

    fn age(label: &str, midpoint: u32) -> AgeEstimate {
        AgeEstimate {
            attribute: BucketedAttribute::new(label, 50, vec![]),
            midpoint: Some(midpoint),
        }
    }

    #[test]
    fn post_bedtime_window_boundaries() {
        assert!(time_patterns(&at(3, 20, 0)).contains(&TimePattern::PostBedtime));
        assert!(time_patterns(&at(3, 22, 30)).contains(&TimePattern::PostBedtime));
        assert!(!time_patterns(&at(3, 22, 31)).contains(&TimePattern::PostBedtime));
        assert!(!time_patterns(&at(3, 19, 59)).contains(&TimePattern::PostBedtime));
    }

    #[test]
    fn wednesday_evening_cites_post_bedtime() {
        let bag = at(3, 21, 0);
        let result = score(&bag, None, None);
        assert!(result
            .evidence
            .iter()
            .any(|e| e.reason.contains("post-bedtime") && e.delta > 0.0));
        let attr = estimate(&bag, &ScoringContext::for_bag(&bag), None, None).unwrap();
        assert!(attr.reasoning.iter().any(|r| r.starts_with("+12 post-bedtime")));
        assert_eq!(attr.detail.as_deref(), Some("browsing after kids' bedtime"));
    }

    #[test]
    fn weekend_late_night_is_nightlife_not_late_night() {
        let patterns = time_patterns(&at(6, 1, 0));
        assert_eq!(patterns, vec![TimePattern::WeekendNightlife]);
        let patterns = time_patterns(&at(2, 1, 0));
        assert_eq!(patterns, vec![TimePattern::LateNight]);
    }

    #[test]
    fn income_age_compound_is_explicit() {
        let bag = SignalBag::default();
        let prime = age("35-42", 38);
        let with = score(&bag, Some(&prime), Some(5));
        let without = score(&bag, Some(&prime), Some(2));
        assert_eq!(with.raw_score - without.raw_score, w::INCOME_AGE_COMPOUND);
        assert_eq!(with.data_points, without.data_points);
    }

    #[test]
    fn family_profile_is_likely_parent() {
        let mut bag = at(6, 7, 0);
        bag.social_logins.facebook = Some(true);
        bag.network.city = Some("Naperville".into());
        bag.hardware.screen_width = Some(810);
        bag.hardware.screen_height = Some(1080);
        let prime = age("35-42", 38);
        let attr = estimate(&bag, &ScoringContext::for_bag(&bag), Some(&prime), Some(4)).unwrap();
        // 25 + 10 + 10 + 6 + 12 + 8
        assert_eq!(attr.value, "Very likely a parent");
    }

    #[test]
    fn teen_in_single_city_is_very_unlikely() {
        let mut bag = at(6, 1, 0);
        bag.social_logins.tiktok = Some(true);
        bag.network.city = Some("Las Vegas".into());
        let teen = age("13-17", 15);
        let attr = estimate(&bag, &ScoringContext::for_bag(&bag), Some(&teen), None).unwrap();
        assert_eq!(attr.value, "Very unlikely a parent");
        assert_eq!(attr.detail, None);
    }

    #[test]
    fn unlisted_area_is_cited_without_effect() {
        let mut bag = at(3, 21, 0);
        let baseline = score(&bag, None, None);
        bag.network.city = Some("Zurich".into());
        let result = score(&bag, None, None);
        assert_eq!(result.raw_score, baseline.raw_score);
        assert_eq!(result.data_points, baseline.data_points);
        assert!(result
            .reasoning()
            .iter()
            .any(|r| r == "+0 Zurich: no family or single area keyword"));
    }

    #[test]
    fn empty_bag_is_unknown() {
        let bag = SignalBag::default();
        let attr = estimate(&bag, &ScoringContext::for_bag(&bag), None, None).unwrap();
        assert!(attr.is_unknown());
    }
}
