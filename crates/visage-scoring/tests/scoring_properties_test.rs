//! Properties shared by every scorer.

use proptest::prelude::*;
use test_fixtures::strategies::arb_signal_bag;
use visage_core::config::ConfidenceConfig;
use visage_core::SignalBag;
use visage_scoring::{age, device, income, occupation, parental, state, ConfidenceCurve, ScoringContext};

fn data_points(bag: &SignalBag) -> [u32; 6] {
    let ctx = ScoringContext::for_bag(bag);
    [
        age::score(bag, &ctx).data_points,
        income::score(bag, &ctx).data_points,
        device::score(bag, &ctx).data_points,
        occupation::score(bag, None).data_points,
        parental::score(bag, None, None).data_points,
        state::score_stress(bag).data_points,
    ]
}

#[test]
fn empty_bag_consults_nothing() {
    assert_eq!(data_points(&SignalBag::default()), [0; 6]);
}

#[test]
fn confidence_curve_matches_config() {
    let curve = ConfidenceCurve::from_config(&ConfidenceConfig::default());
    assert_eq!(curve.confidence(0), 0);
    assert_eq!(curve.confidence(1), 30);
    assert_eq!(curve.confidence(5), 70);
    assert_eq!(curve.confidence(50), 95);
}

proptest! {
    #[test]
    fn confidence_is_monotonic(base in 0u8..=100, gain in 0u8..=50, cap in 0u8..=100, n in 0u32..200) {
        let curve = ConfidenceCurve { base: base.min(cap), per_signal_gain: gain, cap };
        prop_assert!(curve.confidence(n) <= curve.confidence(n + 1));
        prop_assert!(curve.confidence(n + 1) <= cap);
    }

    #[test]
    fn raw_scores_are_finite(bag in arb_signal_bag()) {
        let ctx = ScoringContext::for_bag(&bag);
        for result in [
            age::score(&bag, &ctx),
            income::score(&bag, &ctx),
            device::score(&bag, &ctx),
            parental::score(&bag, None, None),
            state::score_stress(&bag),
        ] {
            prop_assert!(result.raw_score.is_finite());
            prop_assert!(result.evidence.iter().all(|e| e.delta.is_finite()));
        }
    }

    #[test]
    fn a_present_signal_never_lowers_data_points(bag in arb_signal_bag()) {
        let before = data_points(&bag);
        let mut richer = bag.clone();
        richer.behavioral.dev_tools_open = Some(true);
        richer.social_logins.github = Some(true);
        let after = data_points(&richer);
        for (b, a) in before.iter().zip(after.iter()) {
            prop_assert!(a >= b);
        }
    }

    #[test]
    fn every_consulted_signal_leaves_a_reason(bag in arb_signal_bag()) {
        let ctx = ScoringContext::for_bag(&bag);
        for result in [age::score(&bag, &ctx), income::score(&bag, &ctx), device::score(&bag, &ctx)] {
            prop_assert!(result.evidence.len() >= result.data_points as usize);
            prop_assert!(result.evidence.iter().all(|e| !e.reason.is_empty()));
        }
    }
}
