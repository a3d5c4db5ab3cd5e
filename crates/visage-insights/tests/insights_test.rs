//! Insight generator bounds over fixture and arbitrary bags.

use proptest::prelude::*;
use test_fixtures::strategies::arb_signal_bag;
use test_fixtures::{all_signal_bags, load_signal_bag};
use visage_core::{BucketedAttribute, Profile};
use visage_insights::{classify, InsightGenerator, ReferrerKind};

fn assert_bounded(insights: &[String], max: usize) {
    assert!(!insights.is_empty());
    assert!(insights.len() <= max);
    for (i, a) in insights.iter().enumerate() {
        assert!(!a.trim().is_empty());
        assert!(!insights[i + 1..].contains(a), "duplicate insight {a:?}");
    }
}

#[test]
fn every_fixture_yields_bounded_insights() {
    let generator = InsightGenerator::default();
    for (name, bag) in all_signal_bags() {
        let insights = generator.generate(&bag, &Profile::unknown());
        assert_bounded(&insights, 5);
        assert!(!insights.is_empty(), "{name} produced no insights");
    }
}

#[test]
fn headless_bot_leads_with_automation() {
    let bag = load_signal_bag("headless_bot");
    let insights = InsightGenerator::default().generate(&bag, &Profile::unknown());
    assert!(insights[0].contains("headless"));
}

#[test]
fn european_traveler_came_from_linkedin() {
    let bag = load_signal_bag("european_traveler");
    assert_eq!(classify(bag.referrer()).kind, ReferrerKind::Social);
    let insights = InsightGenerator::default().generate(&bag, &Profile::unknown());
    assert!(insights.iter().any(|i| i.contains("LinkedIn")));
}

#[test]
fn premium_device_insight_uses_estimate() {
    let bag = load_signal_bag("developer_workstation");
    let mut profile = Profile::unknown();
    profile.device_tier = BucketedAttribute::new("premium", 50, vec![]).with_detail("~$2351 estimated");
    let insights = InsightGenerator::default().generate(&bag, &profile);
    assert!(insights.contains(&"Runs a premium setup (~$2351 estimated)".to_string()));
}

proptest! {
    #[test]
    fn insights_are_bounded_and_unique(bag in arb_signal_bag(), max in 1usize..8, min in 0usize..8) {
        let generator = InsightGenerator::new(max, min.min(max));
        let insights = generator.generate(&bag, &Profile::unknown());
        prop_assert!(!insights.is_empty());
        prop_assert!(insights.len() <= max);
        let mut sorted = insights.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(sorted.len(), insights.len());
    }

    #[test]
    fn generation_is_deterministic(bag in arb_signal_bag()) {
        let generator = InsightGenerator::default();
        prop_assert_eq!(
            generator.generate(&bag, &Profile::unknown()),
            generator.generate(&bag, &Profile::unknown())
        );
    }
}
