//! Mental and physical state: stress, mood, sleep schedule, fitness.

use visage_core::errors::ScoringError;
use visage_core::{BucketedAttribute, Dimension, ScoreResult, SignalBag};

use crate::accumulator::Accumulator;
use crate::context::{no_signals, ScoringContext};
use crate::normalizer::BucketTable;
use crate::weights::state as w;

pub const STRESS_LABELS: &[&str] = &["Low", "Medium", "High"];
pub const MOOD_LABELS: &[&str] = &["Calm", "Focused", "Tired", "Distracted", "Frustrated"];
pub const SLEEP_LABELS: &[&str] = &["Early Bird", "Regular", "Night Owl", "Very Late Sleeper"];

const STRESS_TABLE: BucketTable = BucketTable {
    range: w::RANGE,
    breakpoints: &[w::MEDIUM, w::HIGH],
    labels: STRESS_LABELS,
};

pub const FITNESS_REASON: &str = "fitness cannot be inferred from device or browsing signals";

#[derive(Debug, Clone)]
pub struct StateEstimate {
    pub stress: BucketedAttribute,
    pub mood: BucketedAttribute,
    pub sleep: BucketedAttribute,
    pub fitness: BucketedAttribute,
    /// Index into [`STRESS_LABELS`]; `None` when Unknown.
    pub stress_level: Option<usize>,
}

/// Stress total: each behavioral counter times its weight.
pub fn score_stress(bag: &SignalBag) -> ScoreResult {
    let mut acc = Accumulator::new(0.0);
    let b = &bag.behavioral;
    let counters = [
        (b.rage_clicks, w::RAGE_CLICK, "rage clicks"),
        (b.erratic_movements, w::ERRATIC_MOVEMENT, "erratic mouse movements"),
        (b.tab_switches, w::TAB_SWITCH, "tab switches"),
        (b.long_key_holds, w::LONG_KEY_HOLD, "long key holds"),
    ];
    for (count, weight, what) in counters {
        if let Some(count) = count {
            acc.consult(f64::from(count) * weight, format!("{count} {what}"));
        }
    }
    acc.finish(w::RANGE.0, w::RANGE.1)
}

pub fn sleep_label(hour: u8) -> &'static str {
    match hour {
        5..=8 => SLEEP_LABELS[0],
        9..=20 => SLEEP_LABELS[1],
        21..=23 => SLEEP_LABELS[2],
        _ => SLEEP_LABELS[3],
    }
}

pub fn estimate(bag: &SignalBag, ctx: &ScoringContext) -> Result<StateEstimate, ScoringError> {
    let stress_result = score_stress(bag);
    let (stress, stress_level) = if stress_result.data_points == 0 {
        (no_signals(Dimension::StressLevel), None)
    } else {
        let idx = STRESS_TABLE.index(stress_result.raw_score)?;
        (
            ctx.curve.attribute(STRESS_LABELS[idx], &stress_result),
            Some(idx),
        )
    };

    let mood = mood(bag, ctx, stress_level);

    let sleep = match bag.hour() {
        Some(hour) => {
            let mut acc = Accumulator::new(0.0);
            acc.consult(0.0, format!("session at {hour:02}:00"));
            ctx.curve.attribute(sleep_label(hour), &acc.finish(0.0, 0.0))
        }
        None => no_signals(Dimension::SleepSchedule),
    };

    tracing::debug!(stress = %stress.value, mood = %mood.value, "state scored");
    Ok(StateEstimate {
        stress,
        mood,
        sleep,
        fitness: BucketedAttribute::unknown(FITNESS_REASON),
        stress_level,
    })
}

fn mood(bag: &SignalBag, ctx: &ScoringContext, stress_level: Option<usize>) -> BucketedAttribute {
    let mut acc = Accumulator::new(0.0);
    if let Some(level) = stress_level {
        acc.consult(0.0, format!("{} stress", STRESS_LABELS[level]));
    }
    let late = bag.hour().filter(|h| *h < 5);
    if let Some(hour) = late {
        acc.consult(0.0, format!("awake at {hour:02}:00"));
    }
    let typing = bag.typing_speed_wpm().filter(|wpm| *wpm >= 40.0);
    if let Some(wpm) = typing {
        acc.consult(0.0, format!("steady typing ({wpm:.0} wpm)"));
    }
    let result = acc.finish(0.0, 0.0);
    if result.data_points == 0 {
        return no_signals(Dimension::Mood);
    }

    let label = match stress_level {
        Some(2) => "Frustrated",
        Some(1) => "Distracted",
        _ if late.is_some() => "Tired",
        _ if typing.is_some() => "Focused",
        _ => "Calm",
    };
    ctx.curve.attribute(label, &result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ScoringContext {
        ScoringContext::for_bag(&SignalBag::default())
    }

    #[test]
    fn stress_thresholds() {
        let mut bag = SignalBag::default();
        bag.behavioral.tab_switches = Some(5);
        let est = estimate(&bag, &ctx()).unwrap();
        assert_eq!(est.stress.value, "Low");

        bag.behavioral.rage_clicks = Some(1);
        bag.behavioral.erratic_movements = Some(1);
        // 15 + 5 + 10
        assert_eq!(estimate(&bag, &ctx()).unwrap().stress.value, "Medium");

        bag.behavioral.rage_clicks = Some(3);
        let est = estimate(&bag, &ctx()).unwrap();
        assert_eq!(est.stress.value, "High");
        assert_eq!(est.mood.value, "Frustrated");
    }

    #[test]
    fn zero_counts_are_consulted_but_calm() {
        let mut bag = SignalBag::default();
        bag.behavioral.rage_clicks = Some(0);
        let est = estimate(&bag, &ctx()).unwrap();
        assert_eq!(est.stress.value, "Low");
        assert_eq!(est.stress.confidence, 30);
        assert_eq!(est.mood.value, "Calm");
    }

    #[test]
    fn sleep_schedule_from_hour() {
        assert_eq!(sleep_label(6), "Early Bird");
        assert_eq!(sleep_label(12), "Regular");
        assert_eq!(sleep_label(22), "Night Owl");
        assert_eq!(sleep_label(3), "Very Late Sleeper");
    }

    #[test]
    fn fitness_is_never_guessed() {
        let mut bag = SignalBag::default();
        bag.temporal.hour = Some(6);
        bag.behavioral.typing_speed_wpm = Some(90.0);
        let est = estimate(&bag, &ctx()).unwrap();
        assert!(est.fitness.is_unknown());
        assert_eq!(est.fitness.confidence, 0);
        assert_eq!(est.fitness.reasoning, vec![FITNESS_REASON.to_string()]);
        assert_eq!(est.mood.value, "Focused");
    }

    #[test]
    fn empty_bag_is_unknown() {
        let est = estimate(&SignalBag::default(), &ctx()).unwrap();
        assert!(est.stress.is_unknown());
        assert!(est.mood.is_unknown());
        assert!(est.sleep.is_unknown());
        assert_eq!(est.stress_level, None);
    }
}
