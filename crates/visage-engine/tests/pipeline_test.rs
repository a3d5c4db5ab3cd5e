//! Local pipeline over fixture bags and arbitrary bags.

use proptest::prelude::*;
use test_fixtures::strategies::{arb_non_empty_signal_bag, arb_signal_bag};
use test_fixtures::{all_signal_bags, load_signal_bag};
use visage_core::constants::UNKNOWN;
use visage_core::{Dimension, SignalBag};
use visage_engine::{compute_profile, ProfileAssembler};
use visage_scoring::is_valid_label;

#[test]
fn developer_workstation_reference_scenario() {
    let profile = compute_profile(&load_signal_bag("developer_workstation"));

    assert_eq!(profile.device_tier.value, "premium");
    assert!(
        profile.occupation.value.contains("Software Developer"),
        "occupation was {}",
        profile.occupation.value
    );
    let post_bedtime = profile
        .parental_status
        .reasoning
        .iter()
        .find(|line| line.contains("post-bedtime"))
        .expect("post-bedtime evidence");
    assert!(post_bedtime.starts_with('+'), "{post_bedtime}");
}

#[test]
fn saudi_arabia_alone_is_unlikely_to_drink() {
    let profile = compute_profile(&load_signal_bag("saudi_arabia_only"));
    let alcohol = &profile.lifestyle_habits.drinks_alcohol;
    assert_eq!(alcohol.value, "Unlikely");
    assert!(alcohol
        .reasoning
        .iter()
        .any(|line| line.contains("low alcohol culture in Saudi Arabia (regional table)")));
}

#[test]
fn empty_bag_is_all_unknown_with_zero_confidence() {
    let assembly = ProfileAssembler::default().assemble(&load_signal_bag("empty"));
    assert!(assembly.degradations.is_empty());
    for (dimension, attr) in assembly.profile.attributes() {
        assert_eq!(attr.value, UNKNOWN, "{dimension}");
        assert_eq!(attr.confidence, 0, "{dimension}");
    }
    assert_eq!(assembly.profile.overall_confidence, 0);
    assert!(!assembly.profile.insights.is_empty());
}

#[test]
fn malformed_values_behave_like_missing_ones() {
    let malformed = compute_profile(&load_signal_bag("malformed_values"));
    let empty = compute_profile(&SignalBag::default());
    assert_eq!(malformed, empty);
}

#[test]
fn headless_bot_has_reduced_confidence_and_an_insight() {
    let mut bag = load_signal_bag("headless_bot");
    let bot = compute_profile(&bag);
    bag.bot_detection = Default::default();
    let human = compute_profile(&bag);
    assert_eq!(bot.overall_confidence, human.overall_confidence / 2);
    assert!(bot.insights[0].contains("headless"));
}

#[test]
fn family_suburb_leans_parent() {
    let profile = compute_profile(&load_signal_bag("family_suburb"));
    assert!(
        profile.parental_status.value.contains("likely a parent")
            && !profile.parental_status.value.contains("nlikely"),
        "parental status was {}",
        profile.parental_status.value
    );
    // 160 cores + 128 RAM + 400 base, x1.3 for iPad.
    assert_eq!(profile.device_tier.value, "mid-range");
}

#[test]
fn crypto_night_owl_is_crypto_and_late() {
    let profile = compute_profile(&load_signal_bag("crypto_night_owl"));
    assert!(profile.personality_flags.value.contains("Crypto enthusiast"));
    assert!(matches!(
        profile.sleep_schedule.value.as_str(),
        "Night Owl" | "Very Late Sleeper"
    ));
    assert!(profile.insights.iter().any(|i| i.contains("crypto wallets")));
}

#[test]
fn fixtures_serialize_identically_across_runs() {
    for (name, bag) in all_signal_bags() {
        let a = serde_json::to_string(&compute_profile(&bag)).unwrap();
        let b = serde_json::to_string(&compute_profile(&bag.clone())).unwrap();
        assert_eq!(a, b, "{name} is not deterministic");
    }
}

#[test]
fn every_fixture_respects_the_output_contract() {
    for (name, bag) in all_signal_bags() {
        let profile = compute_profile(&bag);
        for (dimension, attr) in profile.attributes() {
            assert!(
                is_valid_label(dimension, &attr.value),
                "{name}: {dimension} = {:?}",
                attr.value
            );
            assert!(attr.confidence <= 100);
        }
        assert!((1..=5).contains(&profile.insights.len()), "{name}");
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn every_value_is_in_its_closed_set(bag in arb_signal_bag()) {
        let profile = compute_profile(&bag);
        for (dimension, attr) in profile.attributes() {
            prop_assert!(is_valid_label(dimension, &attr.value), "{} = {:?}", dimension, attr.value);
            prop_assert!(attr.confidence <= 100);
            if attr.value == UNKNOWN {
                prop_assert_eq!(attr.confidence, 0);
            }
        }
        prop_assert!(profile.overall_confidence <= 100);
    }

    #[test]
    fn insights_are_bounded_and_unique(bag in arb_non_empty_signal_bag()) {
        let insights = compute_profile(&bag).insights;
        prop_assert!((1..=5).contains(&insights.len()));
        for (i, a) in insights.iter().enumerate() {
            prop_assert!(!insights[i + 1..].contains(a));
        }
    }

    #[test]
    fn local_pipeline_is_deterministic(bag in arb_signal_bag()) {
        let a = serde_json::to_vec(&compute_profile(&bag)).unwrap();
        let b = serde_json::to_vec(&compute_profile(&bag)).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn adding_devtools_never_lowers_occupation_confidence(bag in arb_signal_bag()) {
        let mut with = bag.clone();
        with.behavioral.dev_tools_open = Some(true);
        let mut without = bag;
        without.behavioral.dev_tools_open = None;
        let before = compute_profile(&without).attribute(Dimension::Occupation).confidence;
        let after = compute_profile(&with).attribute(Dimension::Occupation).confidence;
        prop_assert!(after >= before);
    }
}
