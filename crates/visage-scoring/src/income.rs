//! Income bracket on a 0..=100 scale, with a currency range in `detail`.

use visage_core::errors::ScoringError;
use visage_core::{BucketedAttribute, Dimension, ScoreResult, SignalBag};
use visage_tables::{city, gpu, isp, language, screen, GpuTier, IspTier, ScreenClass};

use crate::accumulator::Accumulator;
use crate::context::{no_signals, ScoringContext};
use crate::device::depreciation;
use crate::normalizer::BucketTable;
use crate::weights::income as w;

pub const INCOME_LABELS: &[&str] = &[
    "Very Low",
    "Low",
    "Lower-Middle",
    "Middle",
    "Upper-Middle",
    "High",
    "Very High",
];

const CURRENCY_RANGES: &[&str] = &[
    "<$25k",
    "$25k-$40k",
    "$40k-$60k",
    "$60k-$85k",
    "$85k-$120k",
    "$120k-$200k",
    "$200k+",
];

const INCOME_TABLE: BucketTable = BucketTable {
    range: w::RANGE,
    breakpoints: w::BREAKPOINTS,
    labels: INCOME_LABELS,
};

/// Index of "Upper-Middle" in [`INCOME_LABELS`].
pub const UPPER_MIDDLE: usize = 4;

#[derive(Debug, Clone)]
pub struct IncomeEstimate {
    pub attribute: BucketedAttribute,
    /// Index into [`INCOME_LABELS`]; `None` when Unknown.
    pub level: Option<usize>,
}

pub fn score(bag: &SignalBag, ctx: &ScoringContext) -> ScoreResult {
    let mut acc = Accumulator::new(w::BASELINE);

    if let Some(renderer) = bag.gpu() {
        let hit = gpu::lookup(renderer);
        let entry = hit.entry;
        let base = match entry.tier {
            GpuTier::Flagship => w::GPU_FLAGSHIP,
            GpuTier::Workstation => w::GPU_WORKSTATION,
            GpuTier::High => w::GPU_HIGH,
            GpuTier::Mid => w::GPU_MID,
            GpuTier::Entry => w::GPU_ENTRY,
            GpuTier::Integrated => w::GPU_INTEGRATED,
        };
        let age = entry.age_years(ctx.reference_year);
        // Depreciation only erodes a premium, never a penalty.
        let delta = if base > 0.0 { base * depreciation(age) } else { base };
        acc.consult(
            delta,
            format!("{} GPU, {age} years old ({hit})", entry.tier),
        );
    }

    if let Some((width, height)) = bag.screen() {
        let hit = screen::lookup(width, height);
        let delta = match hit.entry.class {
            ScreenClass::FourK => w::SCREEN_4K,
            ScreenClass::Qhd | ScreenClass::UltraWide => w::SCREEN_HIGH_END,
            ScreenClass::Desktop => w::SCREEN_DESKTOP,
            ScreenClass::LowRes => w::SCREEN_LOW_RES,
            ScreenClass::Mobile => w::SCREEN_MOBILE,
            _ => 0.0,
        };
        acc.consult(delta, format!("{} screen ({hit})", hit.entry.class));
    }

    if let Some(cores) = bag.cpu_cores() {
        let delta = match cores {
            16.. => w::CORES_16,
            8..=15 => w::CORES_8,
            0..=2 => w::CORES_2,
            _ => 0.0,
        };
        acc.consult(delta, format!("{cores} CPU cores"));
    }

    if let Some(ram) = bag.ram_gb() {
        let delta = if ram >= 32.0 {
            w::RAM_32
        } else if ram >= 16.0 {
            w::RAM_16
        } else if ram <= 4.0 {
            w::RAM_4
        } else {
            0.0
        };
        acc.consult(delta, format!("{ram} GB RAM"));
    }

    if let Some(name) = bag.isp() {
        let hit = isp::lookup(name);
        let delta = match hit.entry.tier {
            IspTier::Premium => w::ISP_PREMIUM,
            IspTier::Business => w::ISP_BUSINESS,
            IspTier::Budget => w::ISP_BUDGET,
            IspTier::Mobile => w::ISP_MOBILE,
            IspTier::Education => w::ISP_EDUCATION,
            IspTier::Standard | IspTier::Hosting => 0.0,
        };
        acc.consult(delta, format!("{} ISP ({hit})", hit.entry.tier));
    }

    if bag.is_apple() == Some(true) {
        acc.consult(w::APPLE, "Apple ecosystem");
    }

    if bag.tracking.ad_blocker == Some(true) && bag.vpn.detected == Some(true) {
        acc.adjust(w::PRIVACY_COMBO, "ad blocker + VPN (paid privacy tooling)");
    }

    if let Some(primary) = bag.languages().first() {
        let hit = language::lookup(primary);
        let tier = hit.entry.avg_income_tier;
        acc.consult(
            (f64::from(tier) - 3.0) * w::LANGUAGE_INCOME_STEP,
            format!("primary language income tier {tier}/5 ({hit})"),
        );
    }

    // Cost of living only stretches a score that already trends high, so a
    // cheap device in an expensive city is not double-counted.
    if let Some(name) = bag.city() {
        let hit = city::lookup(name);
        let current = acc.score();
        if !hit.matched {
            acc.adjust(0.0, format!("{name}: no cost-of-living adjustment ({hit})"));
        } else if current > w::CITY_TREND_THRESHOLD {
            let multiplier = hit.entry.avg_income_multiplier;
            let adjusted = w::BASELINE + (current - w::BASELINE) * multiplier;
            acc.consult(
                adjusted - current,
                format!(
                    "cost-of-living index {} multiplier x{multiplier} ({name})",
                    hit.entry.cost_of_living_index
                ),
            );
        }
    }

    acc.finish(w::RANGE.0, w::RANGE.1)
}

pub fn estimate(bag: &SignalBag, ctx: &ScoringContext) -> Result<IncomeEstimate, ScoringError> {
    let result = score(bag, ctx);
    if result.data_points == 0 {
        return Ok(IncomeEstimate {
            attribute: no_signals(Dimension::Income),
            level: None,
        });
    }
    let level = INCOME_TABLE.index(result.raw_score)?;
    let mut range = CURRENCY_RANGES[level].to_string();
    if let Some(name) = bag.city() {
        let hit = city::lookup(name);
        if hit.matched && hit.entry.avg_income_multiplier > 1.0 {
            range.push_str(&format!(" (adjusted for {})", name));
        }
    }
    tracing::debug!(raw = result.raw_score, bucket = INCOME_LABELS[level], "income scored");
    Ok(IncomeEstimate {
        attribute: ctx
            .curve
            .attribute(INCOME_LABELS[level], &result)
            .with_detail(range),
        level: Some(level),
    })
}
