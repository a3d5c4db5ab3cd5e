//! Caffeine, alcohol, smoking and travel habits.
//!
//! The regional reference table is the dominant prior; age bands, behavior
//! and occupation adjust it. Scores are probability-like (0..=100) and the
//! detail phrase names the one or two strongest contributions.

use visage_core::errors::ScoringError;
use visage_core::{BucketedAttribute, Dimension, LifestyleHabits, ScoreResult, SignalBag};
use visage_tables::{region, CultureLevel, RegionEntry};

use crate::accumulator::Accumulator;
use crate::age::AgeEstimate;
use crate::context::{no_signals, ScoringContext};
use crate::normalizer::BucketTable;
use crate::occupation::OccupationEstimate;
use crate::weights::lifestyle as w;

pub const HABIT_LABELS: &[&str] = &["Unlikely", "Possibly", "Likely", "Very likely"];

const HABIT_TABLE: BucketTable = BucketTable {
    range: w::RANGE,
    breakpoints: w::BREAKPOINTS,
    labels: HABIT_LABELS,
};

/// Estimates the habit scorers depend on.
#[derive(Debug, Clone, Copy, Default)]
pub struct LifestyleInputs<'a> {
    pub age: Option<&'a AgeEstimate>,
    pub income_level: Option<usize>,
    pub occupation: Option<&'a OccupationEstimate>,
    pub stress_level: Option<usize>,
}

impl LifestyleInputs<'_> {
    fn midpoint(&self) -> Option<u32> {
        self.age.and_then(|a| a.midpoint)
    }

    fn age_label(&self) -> &str {
        self.age.map_or("", |a| a.attribute.value.as_str())
    }

    fn high_stress(&self) -> bool {
        self.stress_level == Some(2)
    }

    fn occupation_includes(&self, label: &str) -> bool {
        self.occupation.is_some_and(|o| o.includes(label))
    }
}

/// Seed the accumulator with the regional prior. A known country counts as
/// a consulted signal; the global-average fallback does not.
fn regional_prior(
    acc: &mut Accumulator,
    bag: &SignalBag,
    prior: impl Fn(&RegionEntry) -> (f64, String),
) -> &'static RegionEntry {
    match bag.country() {
        Some(country) => {
            let hit = region::lookup(country);
            let (value, what) = prior(hit.entry);
            if hit.matched {
                acc.consult(value, format!("{what} in {} (regional table)", hit.entry.country));
            } else {
                acc.consult(
                    value,
                    format!("{what}, {country} not in regional table ({hit})"),
                );
            }
            hit.entry
        }
        None => {
            let entry = &region::DEFAULT_REGION;
            let (value, what) = prior(entry);
            acc.adjust(value, format!("{what}, {} (no country)", entry.country));
            entry
        }
    }
}

fn culture(level: CultureLevel, what: &str) -> (f64, String) {
    (level.prior(), format!("{level} {what} culture"))
}

fn apply_multiplier(acc: &mut Accumulator, factor: f64, reason: String) {
    let delta = acc.score() * (factor - 1.0);
    acc.consult(delta, reason);
}

pub fn score_alcohol(bag: &SignalBag, inputs: &LifestyleInputs<'_>) -> ScoreResult {
    let mut acc = Accumulator::new(0.0);
    let entry = regional_prior(&mut acc, bag, |e| culture(e.alcohol_culture, "alcohol"));

    if let Some(mid) = inputs.midpoint() {
        let factor = match mid {
            0..=17 => w::AGE_MINOR_MULTIPLIER,
            18..=22 => w::AGE_STUDENT_MULTIPLIER,
            23..=34 => 1.0,
            35..=49 => w::AGE_MIDLIFE_MULTIPLIER,
            _ => w::AGE_SENIOR_MULTIPLIER,
        };
        apply_multiplier(
            &mut acc,
            factor,
            format!("age band {} (x{factor})", inputs.age_label()),
        );
    }

    if let (Some(day), Some(hour)) = (bag.day_of_week(), bag.hour()) {
        let weekend_night =
            (matches!(day, 5 | 6) && hour >= 21) || (matches!(day, 6 | 0) && hour < 3);
        if weekend_night {
            acc.consult(w::WEEKEND_NIGHT_ALCOHOL, "online on a weekend night");
        }
    }

    if inputs.occupation_includes("Crypto/Finance") {
        acc.consult(w::FINANCE_ALCOHOL, "finance occupation");
    }

    if entry.alcohol_culture == CultureLevel::Low && acc.score() > w::LOW_CULTURE_ALCOHOL_CAP {
        let over = acc.score() - w::LOW_CULTURE_ALCOHOL_CAP;
        acc.adjust(-over, "capped by regional low alcohol culture");
    }

    acc.finish(w::RANGE.0, w::RANGE.1)
}

pub fn score_caffeine(bag: &SignalBag, inputs: &LifestyleInputs<'_>) -> ScoreResult {
    let mut acc = Accumulator::new(0.0);
    regional_prior(&mut acc, bag, |e| culture(e.coffee_culture, "coffee"));

    match bag.hour() {
        Some(hour @ 5..=9) => acc.consult(
            w::EARLY_SESSION_CAFFEINE,
            format!("early session ({hour:02}:00)"),
        ),
        Some(hour @ 0..=4) => acc.consult(
            w::LATE_SESSION_CAFFEINE,
            format!("late-night session ({hour:02}:00)"),
        ),
        _ => {}
    }

    if inputs.occupation_includes("Software Developer") {
        acc.consult(w::DEVELOPER_CAFFEINE, "developer occupation");
    }
    if inputs.high_stress() {
        acc.consult(w::STRESS_CAFFEINE, "high stress");
    }
    if let Some(wpm) = bag
        .typing_speed_wpm()
        .filter(|wpm| *wpm >= crate::weights::age::FAST_TYPING_WPM)
    {
        acc.consult(w::FAST_TYPING_CAFFEINE, format!("fast typing ({wpm:.0} wpm)"));
    }

    acc.finish(w::RANGE.0, w::RANGE.1)
}

pub fn score_smoking(bag: &SignalBag, inputs: &LifestyleInputs<'_>) -> ScoreResult {
    let mut acc = Accumulator::new(0.0);
    regional_prior(&mut acc, bag, |e| {
        (e.smoking_rate, format!("{}% adult smoking rate", e.smoking_rate))
    });

    match inputs.midpoint() {
        Some(0..=17) => apply_multiplier(
            &mut acc,
            w::SMOKING_MINOR_MULTIPLIER,
            format!("age band {} (x{})", inputs.age_label(), w::SMOKING_MINOR_MULTIPLIER),
        ),
        Some(50..) => acc.consult(
            w::SENIOR_SMOKING,
            format!("age band {}", inputs.age_label()),
        ),
        _ => {}
    }

    if inputs.high_stress() {
        acc.consult(w::STRESS_SMOKING, "high stress");
    }
    if bag.hour().is_some_and(|h| h < 4) {
        acc.consult(w::LATE_NIGHT_SMOKING, "late-night session");
    }

    acc.finish(w::RANGE.0, w::RANGE.1)
}

pub fn score_travel(bag: &SignalBag, inputs: &LifestyleInputs<'_>) -> ScoreResult {
    let mut acc = Accumulator::new(0.0);
    regional_prior(&mut acc, bag, |e| culture(e.travel_propensity, "travel"));

    match inputs.income_level {
        Some(level @ 5..) => acc.consult(
            w::HIGH_INCOME_TRAVEL,
            format!("income level {}", level + 1),
        ),
        Some(4) => acc.consult(w::UPPER_INCOME_TRAVEL, "upper-middle income"),
        Some(level @ 0..=1) => acc.consult(
            w::LOW_INCOME_TRAVEL,
            format!("income level {}", level + 1),
        ),
        _ => {}
    }

    if bag.vpn.detected == Some(true) {
        acc.consult(w::VPN_TRAVEL, "VPN in use");
    }
    let languages = bag.languages().len();
    if languages >= 3 {
        acc.consult(w::POLYGLOT_TRAVEL, format!("{languages} browser languages"));
    }
    if let Some(kind) = bag.network.connection_type.as_deref() {
        let kind = kind.trim().to_ascii_lowercase();
        if kind == "cellular" || kind.ends_with('g') {
            acc.consult(w::MOBILE_TRAVEL, format!("mobile connection ({kind})"));
        }
    }

    acc.finish(w::RANGE.0, w::RANGE.1)
}

/// Bucket a habit score; the detail names the strongest contributions.
fn habit_attribute(
    dimension: Dimension,
    result: &ScoreResult,
    ctx: &ScoringContext,
) -> Result<BucketedAttribute, ScoringError> {
    if result.data_points == 0 {
        return Ok(no_signals(dimension));
    }
    let label = HABIT_TABLE.select(result.raw_score)?;
    let mut strongest: Vec<_> = result.evidence.iter().collect();
    strongest.sort_by(|a, b| b.delta.abs().total_cmp(&a.delta.abs()));
    let named: Vec<&str> = strongest
        .iter()
        .take(2)
        .map(|e| e.reason.as_str())
        .collect();
    let detail = format!("{label}, mainly {}", named.join(" and "));
    Ok(ctx.curve.attribute(label, result).with_detail(detail))
}

pub fn estimate(
    bag: &SignalBag,
    ctx: &ScoringContext,
    inputs: &LifestyleInputs<'_>,
) -> Result<LifestyleHabits, ScoringError> {
    Ok(LifestyleHabits {
        drinks_caffeine: habit_attribute(
            Dimension::DrinksCaffeine,
            &score_caffeine(bag, inputs),
            ctx,
        )?,
        drinks_alcohol: habit_attribute(
            Dimension::DrinksAlcohol,
            &score_alcohol(bag, inputs),
            ctx,
        )?,
        smokes: habit_attribute(Dimension::Smokes, &score_smoking(bag, inputs), ctx)?,
        travel_frequency: habit_attribute(
            Dimension::TravelFrequency,
            &score_travel(bag, inputs),
            ctx,
        )?,
    })
}
