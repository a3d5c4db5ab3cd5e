//! Device value in USD and device age from the GPU release year.

use visage_core::errors::ScoringError;
use visage_core::{BucketedAttribute, Dimension, ScoreResult, SignalBag};
use visage_tables::{gpu, screen, ScreenClass};

use crate::accumulator::Accumulator;
use crate::context::{no_signals, ScoringContext};
use crate::normalizer::BucketTable;
use crate::weights::device as w;

pub const DEVICE_TIER_LABELS: &[&str] = &["budget", "mid-range", "high-end", "premium"];
pub const DEVICE_AGE_LABELS: &[&str] = &["new", "recent", "older", "legacy"];

const TIER_TABLE: BucketTable = BucketTable {
    range: w::RANGE,
    breakpoints: w::BREAKPOINTS,
    labels: DEVICE_TIER_LABELS,
};

const AGE_TABLE: BucketTable = BucketTable {
    range: w::AGE_RANGE,
    breakpoints: w::AGE_BREAKPOINTS,
    labels: DEVICE_AGE_LABELS,
};

#[derive(Debug, Clone)]
pub struct DeviceEstimate {
    pub tier: BucketedAttribute,
    pub age: BucketedAttribute,
    /// Estimated replacement value; `None` when nothing was consulted.
    pub value_usd: Option<f64>,
}

/// Residual share of launch price after `age_years`.
pub fn depreciation(age_years: u32) -> f64 {
    let idx = (age_years as usize).min(w::DEPRECIATION.len() - 1);
    w::DEPRECIATION[idx]
}

/// Additive dollar estimate: depreciated GPU + base system + Apple markup.
pub fn score(bag: &SignalBag, ctx: &ScoringContext) -> ScoreResult {
    let mut acc = Accumulator::new(0.0);

    if let Some(renderer) = bag.gpu() {
        let hit = gpu::lookup(renderer);
        let entry = hit.entry;
        let age = entry.age_years(ctx.reference_year);
        let factor = depreciation(age);
        acc.consult(
            f64::from(entry.msrp) * factor,
            format!(
                "GPU ${} MSRP x{factor} after {age} years ({hit})",
                entry.msrp
            ),
        );
    }

    if let Some(cores) = bag.cpu_cores() {
        let extra = cores.saturating_sub(4);
        acc.consult(
            f64::from(extra) * w::PER_CORE_OVER_4,
            format!("{cores} CPU cores"),
        );
    }

    if let Some(ram) = bag.ram_gb() {
        acc.consult(ram * w::PER_GB_RAM, format!("{ram} GB RAM"));
    }

    if let Some((width, height)) = bag.screen() {
        let hit = screen::lookup(width, height);
        let bonus = match hit.entry.class {
            ScreenClass::FourK => w::DISPLAY_4K,
            ScreenClass::Qhd | ScreenClass::UltraWide => w::DISPLAY_HIGH_END,
            ScreenClass::Desktop => w::DISPLAY_FHD,
            _ => 0.0,
        };
        acc.consult(bonus, format!("{} display ({hit})", hit.entry.class));
    }

    // An Apple platform alone still implies a whole machine to mark up.
    let apple = bag.is_apple() == Some(true);
    if acc.data_points() > 0 || apple {
        acc.adjust(w::BASE_SYSTEM, "base system cost");
    }

    if apple {
        let markup = acc.score() * (w::APPLE_MULTIPLIER - 1.0);
        acc.consult(markup, format!("Apple markup x{}", w::APPLE_MULTIPLIER));
    }

    acc.finish(w::RANGE.0, w::RANGE.1)
}

pub fn estimate(bag: &SignalBag, ctx: &ScoringContext) -> Result<DeviceEstimate, ScoringError> {
    let result = score(bag, ctx);
    let (tier, value_usd) = if result.data_points == 0 {
        (no_signals(Dimension::DeviceTier), None)
    } else {
        let label = TIER_TABLE.select(result.raw_score)?;
        let value = result.raw_score;
        (
            ctx.curve
                .attribute(label, &result)
                .with_detail(format!("~${value:.0} estimated")),
            Some(value),
        )
    };

    let age = match bag.gpu() {
        Some(renderer) => {
            let hit = gpu::lookup(renderer);
            let years = hit.entry.age_years(ctx.reference_year);
            let label = AGE_TABLE.select(f64::from(years))?;
            BucketedAttribute::new(
                label,
                ctx.curve.confidence(1),
                vec![format!(
                    "GPU released {}, {years} years old ({hit})",
                    hit.entry.release_year
                )],
            )
        }
        None => no_signals(Dimension::DeviceAge),
    };

    tracing::debug!(value = ?value_usd, tier = %tier.value, "device scored");
    Ok(DeviceEstimate {
        tier,
        age,
        value_usd,
    })
}
