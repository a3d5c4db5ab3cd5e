use proptest::prelude::*;
use visage_core::{BucketedAttribute, Dimension, Profile};

fn arb_attribute() -> impl Strategy<Value = BucketedAttribute> {
    (
        prop_oneof![
            Just(String::new()),
            Just("  ".to_string()),
            Just("banana".to_string()),
            Just("Unknown".to_string()),
            "[A-Za-z ]{1,12}",
        ],
        any::<u8>(),
    )
        .prop_map(|(value, confidence)| BucketedAttribute::new(value, confidence, vec![]))
}

proptest! {
    #[test]
    fn sanitized_profile_honours_contract(
        attrs in prop::collection::vec(arb_attribute(), Dimension::ALL.len()),
        overall in any::<u8>(),
        insights in prop::collection::vec("[a-c ]{0,3}", 0..12),
        max in 1usize..8,
    ) {
        let mut profile = Profile::unknown();
        for (dimension, attr) in Dimension::ALL.iter().zip(attrs) {
            *profile.attribute_mut(*dimension) = attr;
        }
        profile.overall_confidence = overall;
        profile.insights = insights;

        profile.sanitize(max, |_, value| value != "banana");

        for (_, attr) in profile.attributes() {
            prop_assert!(attr.confidence <= 100);
            prop_assert!(!attr.value.trim().is_empty());
            prop_assert!(attr.value != "banana");
            if attr.is_unknown() {
                prop_assert_eq!(attr.confidence, 0);
            }
        }
        prop_assert!(profile.overall_confidence <= 100);
        prop_assert!(profile.insights.len() <= max);
        for (i, a) in profile.insights.iter().enumerate() {
            prop_assert!(!a.is_empty());
            prop_assert!(!profile.insights[i + 1..].contains(a));
        }
    }
}

#[test]
fn content_hash_changes_with_content() {
    let mut bag = visage_core::SignalBag::default();
    let empty = bag.content_hash();
    bag.behavioral.dev_tools_open = Some(true);
    assert_ne!(bag.content_hash(), empty);
    assert_eq!(bag.content_hash(), bag.clone().content_hash());
}
