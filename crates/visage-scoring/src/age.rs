//! Age range from a signed youth/maturity bias.

use visage_core::errors::ScoringError;
use visage_core::{BucketedAttribute, Dimension, ScoreResult, SignalBag};
use visage_tables::{gpu, language, screen, wallet, GpuTier, ScreenClass};

use crate::accumulator::Accumulator;
use crate::context::{no_signals, ScoringContext};
use crate::normalizer::BucketTable;
use crate::weights::age as w;

pub const AGE_LABELS: &[&str] = &["13-17", "18-22", "23-27", "28-34", "35-42", "43-49", "50+"];

/// Representative age of each bucket, used by dependent scorers.
const AGE_MIDPOINTS: &[u32] = &[15, 20, 25, 31, 38, 46, 55];

const AGE_TABLE: BucketTable = BucketTable {
    range: w::RANGE,
    breakpoints: w::BREAKPOINTS,
    labels: AGE_LABELS,
};

#[derive(Debug, Clone)]
pub struct AgeEstimate {
    pub attribute: BucketedAttribute,
    /// Bucket midpoint in years; `None` when the bucket is Unknown.
    pub midpoint: Option<u32>,
}

/// Accumulate the signed bias. The raw score is the sum of deltas; bucketing
/// divides it by `max(dataPoints, 1)`.
pub fn score(bag: &SignalBag, ctx: &ScoringContext) -> ScoreResult {
    let mut acc = Accumulator::new(0.0);

    if let Some(hour) = bag.hour() {
        let (delta, reason) = match hour {
            0..=4 => (w::LATE_NIGHT, "late-night session (00:00-04:59)"),
            5..=8 => (w::EARLY_MORNING, "early-morning session (05:00-08:59)"),
            9..=16 => (w::DAYTIME, "daytime session (09:00-16:59)"),
            17..=20 => (w::EVENING, "evening session (17:00-20:59)"),
            _ => (w::LATE_EVENING, "late-evening session (21:00-23:59)"),
        };
        acc.consult(delta, reason);
    }

    if let Some(renderer) = bag.gpu() {
        let hit = gpu::lookup(renderer);
        let entry = hit.entry;
        let recent = entry.age_years(ctx.reference_year) <= 1;
        let delta = match entry.tier {
            t if t.is_gaming() && recent => w::CURRENT_GAMING_GPU,
            t if t.is_gaming() => w::OLDER_GAMING_GPU,
            GpuTier::Workstation => w::WORKSTATION_GPU,
            GpuTier::Integrated => w::INTEGRATED_GPU,
            _ => w::OTHER_GPU,
        };
        acc.consult(
            delta,
            format!("{} GPU from {} ({hit})", entry.tier, entry.release_year),
        );
    }

    if bag.is_apple() == Some(true) {
        acc.consult(w::APPLE, "Apple hardware");
    }

    let languages = bag.languages();
    if let Some(primary) = languages.first() {
        let (count_delta, count_reason) = match languages.len() {
            1 => (0.0, "single browser language".to_string()),
            2 => (w::TWO_LANGUAGES, "2 browser languages".to_string()),
            n => (w::MANY_LANGUAGES, format!("{n} browser languages (multilingual)")),
        };
        let hit = language::lookup(primary);
        let adoption = hit.entry.tech_adoption;
        let adoption_delta = match adoption {
            9.. => w::HIGH_TECH_ADOPTION,
            0..=5 => w::LOW_TECH_ADOPTION,
            _ => 0.0,
        };
        acc.consult(
            count_delta + adoption_delta,
            format!(
                "{count_reason}, {} tech adoption {adoption}/10 ({hit})",
                hit.entry.region
            ),
        );
    }

    let wallets = bag.wallets();
    if !wallets.is_empty() {
        acc.consult(w::CRYPTO_WALLET, "crypto wallet installed");
        if let Some(solana) = wallets
            .iter()
            .map(|name| wallet::lookup(name))
            .find(|hit| hit.entry.is_solana_family())
        {
            acc.adjust(w::SOLANA_WALLET, format!("Solana-family wallet ({})", solana.key));
        }
    }

    match bag.tracking.ad_blocker {
        Some(true) => acc.consult(w::AD_BLOCKER, "ad blocker active"),
        Some(false) => acc.consult(w::NO_AD_BLOCKER, "no ad blocker"),
        None => {}
    }

    if bag.behavioral.dev_tools_open == Some(true) {
        acc.consult(w::DEVTOOLS_OPEN, "DevTools open");
    }

    if bag.browser.developer_variant == Some(true) {
        acc.consult(w::DEVELOPER_BROWSER, "developer browser edition");
    }

    if let Some((width, height)) = bag.screen() {
        let hit = screen::lookup(width, height);
        let delta = match hit.entry.class {
            ScreenClass::Mobile => w::SCREEN_MOBILE,
            ScreenClass::Tablet => w::SCREEN_TABLET,
            ScreenClass::LowRes => w::SCREEN_LOW_RES,
            ScreenClass::Qhd | ScreenClass::UltraWide => w::SCREEN_HIGH_END,
            ScreenClass::FourK => w::SCREEN_4K,
            _ => 0.0,
        };
        acc.consult(
            delta,
            format!("{width}x{height} {} screen ({hit})", hit.entry.class),
        );
    }

    if let Some(wpm) = bag.typing_speed_wpm() {
        if wpm >= w::FAST_TYPING_WPM {
            acc.consult(w::FAST_TYPIST, format!("fast typing ({wpm:.0} wpm)"));
        } else if wpm >= w::AVERAGE_TYPING_WPM {
            acc.consult(w::AVERAGE_TYPIST, format!("average typing ({wpm:.0} wpm)"));
        } else if wpm < w::SLOW_TYPING_WPM {
            acc.consult(w::SLOW_TYPIST, format!("slow typing ({wpm:.0} wpm)"));
        } else {
            acc.consult(0.0, format!("below-average typing ({wpm:.0} wpm)"));
        }
    }

    match bag.touch_capable() {
        Some(true) => acc.consult(w::TOUCH, "touch-capable device"),
        Some(false) => acc.consult(w::NO_TOUCH, "no touch support"),
        None => {}
    }

    acc.finish(f64::MIN, f64::MAX)
}

pub fn estimate(bag: &SignalBag, ctx: &ScoringContext) -> Result<AgeEstimate, ScoringError> {
    let result = score(bag, ctx);
    if result.data_points == 0 {
        return Ok(AgeEstimate {
            attribute: no_signals(Dimension::Age),
            midpoint: None,
        });
    }
    let normalized = result.raw_score / f64::from(result.data_points.max(1));
    let idx = AGE_TABLE.index(normalized)?;
    tracing::debug!(normalized, bucket = AGE_LABELS[idx], "age scored");
    Ok(AgeEstimate {
        attribute: ctx.curve.attribute(AGE_LABELS[idx], &result),
        midpoint: AGE_MIDPOINTS.get(idx).copied(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(bag: &SignalBag) -> ScoringContext {
        ScoringContext::for_bag(bag)
    }

    #[test]
    fn empty_bag_is_unknown() {
        let bag = SignalBag::default();
        let est = estimate(&bag, &ctx(&bag)).unwrap();
        assert!(est.attribute.is_unknown());
        assert_eq!(est.attribute.confidence, 0);
        assert_eq!(est.midpoint, None);
    }

    #[test]
    fn crypto_night_owl_leans_young() {
        let mut bag = SignalBag::default();
        bag.temporal.hour = Some(2);
        bag.crypto.wallets = Some(vec!["Phantom".into()]);
        bag.behavioral.dev_tools_open = Some(true);
        let result = score(&bag, &ctx(&bag));
        // -6 late night, -10 wallet, -5 Solana, -3 devtools over 3 signals
        assert_eq!(result.raw_score, -24.0);
        assert_eq!(result.data_points, 3);
        let est = estimate(&bag, &ctx(&bag)).unwrap();
        assert_eq!(est.attribute.value, "13-17");
    }

    #[test]
    fn primary_language_tech_adoption_shifts_age() {
        let mut bag = SignalBag::default();
        bag.browser.languages = Some(vec!["en-US".into()]);
        assert_eq!(score(&bag, &ctx(&bag)).raw_score, 0.0);

        bag.browser.languages = Some(vec!["ko".into()]);
        let result = score(&bag, &ctx(&bag));
        assert_eq!(result.raw_score, w::HIGH_TECH_ADOPTION);
        assert_eq!(result.data_points, 1);
        assert!(result.evidence[0].reason.contains("East Asia tech adoption 9/10"));

        bag.browser.languages = Some(vec!["hi".into(), "en".into()]);
        let result = score(&bag, &ctx(&bag));
        assert_eq!(result.raw_score, w::TWO_LANGUAGES + w::LOW_TECH_ADOPTION);
    }

    #[test]
    fn slow_typist_on_low_res_screen_leans_older() {
        let mut bag = SignalBag::default();
        bag.behavioral.typing_speed_wpm = Some(18.0);
        bag.hardware.screen_width = Some(1024);
        bag.hardware.screen_height = Some(768);
        bag.temporal.hour = Some(6);
        let est = estimate(&bag, &ctx(&bag)).unwrap();
        assert_eq!(est.attribute.value, "50+");
        assert_eq!(est.midpoint, Some(55));
    }

    #[test]
    fn unmatched_gpu_is_visible_in_reasoning() {
        let mut bag = SignalBag::default();
        bag.hardware.gpu = Some("Mystery Accelerator".into());
        let result = score(&bag, &ctx(&bag));
        assert_eq!(result.data_points, 1);
        assert!(result.reasoning()[0].contains("default"));
    }
}
