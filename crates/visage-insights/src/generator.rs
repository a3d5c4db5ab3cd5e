//! Two-pass insight generation with dedup, capping and a summary fallback.

use visage_core::config::InsightsConfig;
use visage_core::{Dimension, Profile, SignalBag};

use crate::catalog::{templates_for, InsightContext, Pass};
use crate::referrer::classify;

/// Dimensions the summary may cite, in tie-break order.
const SUMMARY_DIMENSIONS: &[Dimension] = &[
    Dimension::Occupation,
    Dimension::Age,
    Dimension::Income,
    Dimension::DeviceTier,
    Dimension::ParentalStatus,
    Dimension::SleepSchedule,
    Dimension::Education,
    Dimension::Interests,
];

const SUMMARY_LEN: usize = 3;

pub const NOT_ENOUGH_SIGNALS: &str = "Not enough signals yet for a confident profile";

#[derive(Debug, Clone, Copy)]
pub struct InsightGenerator {
    max_insights: usize,
    min_insights: usize,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::from_config(&InsightsConfig::default())
    }
}

impl InsightGenerator {
    pub fn new(max_insights: usize, min_insights: usize) -> Self {
        Self {
            max_insights: max_insights.max(1),
            min_insights,
        }
    }

    pub fn from_config(config: &InsightsConfig) -> Self {
        Self::new(config.effective_max_insights(), config.effective_min_insights())
    }

    pub fn max_insights(&self) -> usize {
        self.max_insights
    }

    /// Rendered candidates of one pass, ranked.
    pub fn candidates(&self, ctx: &InsightContext<'_>, pass: Pass) -> Vec<String> {
        templates_for(pass)
            .into_iter()
            .filter_map(|template| {
                let rendered = template.render(ctx);
                if rendered.is_some() {
                    tracing::trace!(template = template.id, "insight template matched");
                }
                rendered
            })
            .collect()
    }

    /// Insights for an assembled profile: enhanced then base candidates,
    /// deduplicated by exact string, summary appended when short, capped.
    ///
    /// Never empty.
    pub fn generate(&self, bag: &SignalBag, profile: &Profile) -> Vec<String> {
        let ctx = InsightContext {
            bag,
            profile,
            referrer: classify(bag.referrer()),
        };

        let mut insights: Vec<String> = Vec::new();
        for pass in [Pass::Enhanced, Pass::Base] {
            for candidate in self.candidates(&ctx, pass) {
                if !insights.contains(&candidate) {
                    insights.push(candidate);
                }
            }
        }

        if insights.len() < self.min_insights || insights.is_empty() {
            let summary = summarize(profile);
            if !insights.contains(&summary) {
                insights.push(summary);
            }
        }
        insights.truncate(self.max_insights);

        tracing::debug!(
            count = insights.len(),
            referrer = ctx.referrer.kind.name(),
            "insights generated"
        );
        insights
    }
}

/// Deterministic one-line summary of the strongest known attributes.
///
/// Attributes are ranked by confidence, ties broken by [`SUMMARY_DIMENSIONS`]
/// order.
pub fn summarize(profile: &Profile) -> String {
    let mut known: Vec<(usize, Dimension, u8)> = SUMMARY_DIMENSIONS
        .iter()
        .enumerate()
        .filter_map(|(order, dim)| {
            let attr = profile.attribute(*dim);
            (!attr.is_unknown()).then_some((order, *dim, attr.confidence))
        })
        .collect();
    if known.is_empty() {
        return NOT_ENOUGH_SIGNALS.to_string();
    }
    known.sort_by(|a, b| b.2.cmp(&a.2).then(a.0.cmp(&b.0)));

    let parts: Vec<String> = known
        .iter()
        .take(SUMMARY_LEN)
        .map(|(_, dim, _)| format!("{} {}", phrase(*dim), profile.attribute(*dim).value))
        .collect();
    format!(
        "Profile summary: {} ({}% overall confidence)",
        parts.join("; "),
        profile.overall_confidence
    )
}

fn phrase(dimension: Dimension) -> &'static str {
    match dimension {
        Dimension::Occupation => "works as",
        Dimension::Age => "aged",
        Dimension::Income => "income",
        Dimension::DeviceTier => "device",
        Dimension::ParentalStatus => "parent status",
        Dimension::SleepSchedule => "sleep",
        Dimension::Education => "education",
        Dimension::Interests => "into",
        _ => dimension.name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use visage_core::BucketedAttribute;

    #[test]
    fn empty_inputs_still_yield_one_insight() {
        let insights = InsightGenerator::default().generate(&SignalBag::default(), &Profile::unknown());
        assert_eq!(insights, vec![NOT_ENOUGH_SIGNALS.to_string()]);
    }

    #[test]
    fn summary_ranks_by_confidence_then_order() {
        let mut profile = Profile::unknown();
        profile.age = BucketedAttribute::new("28-34", 60, vec![]);
        profile.income = BucketedAttribute::new("High", 60, vec![]);
        profile.occupation = BucketedAttribute::new("Software Developer", 40, vec![]);
        profile.device_tier = BucketedAttribute::new("premium", 90, vec![]);
        profile.overall_confidence = 55;
        assert_eq!(
            summarize(&profile),
            "Profile summary: device premium; aged 28-34; income High (55% overall confidence)"
        );
    }

    #[test]
    fn output_is_capped() {
        let mut bag = SignalBag::default();
        bag.bot_detection.is_bot = Some(true);
        bag.browser.referrer = Some("https://www.google.com/".into());
        bag.tracking.ad_blocker = Some(true);
        bag.vpn.detected = Some(true);
        bag.crypto.wallets = Some(vec!["MetaMask".into()]);
        bag.browser.languages = Some(vec!["en-US".into(), "de-DE".into()]);
        bag.network.city = Some("Berlin".into());
        bag.social_logins.github = Some(true);
        bag.social_logins.reddit = Some(true);

        let generator = InsightGenerator::new(3, 5);
        let insights = generator.generate(&bag, &Profile::unknown());
        assert_eq!(insights.len(), 3);
        assert!(insights[0].starts_with("Automated or headless"));
    }

    #[test]
    fn summary_appended_when_short() {
        let mut bag = SignalBag::default();
        bag.network.country = Some("Japan".into());
        let insights = InsightGenerator::default().generate(&bag, &Profile::unknown());
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0], "Connecting from Japan");
        assert_eq!(insights[1], NOT_ENOUGH_SIGNALS);
    }

    #[test]
    fn no_summary_when_minimum_met() {
        let mut bag = SignalBag::default();
        bag.network.country = Some("Japan".into());
        let insights = InsightGenerator::new(5, 1).generate(&bag, &Profile::unknown());
        assert_eq!(insights, vec!["Connecting from Japan".to_string()]);
    }
}
