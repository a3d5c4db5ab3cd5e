//! Personality flags and interests.
//!
//! Flags are an ordered, deduplicated set drawn from a fixed rule list;
//! interests are the top three of a multi-candidate accumulation.

use visage_core::{BucketedAttribute, Dimension, Evidence, SignalBag};
use visage_tables::{gpu, wallet};

use crate::accumulator::MultiAccumulator;
use crate::context::{no_signals, ScoringContext};
use crate::weights::traits as w;

/// Canonical flag order; the value lists matched flags in this order.
pub const FLAG_LABELS: &[&str] = &[
    "Privacy-conscious",
    "Tech-savvy",
    "Early adopter",
    "Night owl",
    "Impatient",
    "Multitasker",
    "Crypto enthusiast",
    "Socially connected",
    "Security-minded",
    "Accessibility-minded",
    "Highly fingerprintable",
];

pub const INTEREST_LABELS: [&str; 9] = [
    "Technology",
    "Gaming",
    "Crypto",
    "Design & Art",
    "Social Media",
    "Finance",
    "Privacy & Security",
    "Streaming & Video",
    "Professional Networking",
];

pub const LIST_SEPARATOR: &str = ", ";

/// Each matched rule as `(flag, why)`, in canonical order.
pub fn matched_flags(bag: &SignalBag, ctx: &ScoringContext) -> Vec<(&'static str, String)> {
    let mut flags: Vec<(&'static str, String)> = Vec::new();

    let mut privacy = Vec::new();
    if bag.tracking.ad_blocker == Some(true) {
        privacy.push("ad blocker".to_string());
    }
    if bag.browser.do_not_track == Some(true) {
        privacy.push("Do Not Track".to_string());
    }
    if bag.vpn.detected == Some(true) {
        privacy.push("VPN".to_string());
    }
    if let Some(blocked) = bag
        .tracking
        .trackers_blocked
        .filter(|n| *n >= w::TRACKERS_BLOCKED)
    {
        privacy.push(format!("{blocked} trackers blocked"));
    }
    if !privacy.is_empty() {
        flags.push((FLAG_LABELS[0], privacy.join(", ")));
    }

    if bag.behavioral.dev_tools_open == Some(true) {
        flags.push((FLAG_LABELS[1], "DevTools open".into()));
    } else if bag.browser.developer_variant == Some(true) {
        flags.push((FLAG_LABELS[1], "developer browser edition".into()));
    } else if bag.social_logins.github == Some(true) {
        flags.push((FLAG_LABELS[1], "GitHub login".into()));
    }

    let fresh_gpu = bag
        .gpu()
        .map(gpu::lookup)
        .filter(|hit| hit.matched && hit.entry.age_years(ctx.reference_year) <= 1);
    if let Some(hit) = fresh_gpu {
        flags.push((FLAG_LABELS[2], format!("current-generation GPU ({})", hit.key)));
    } else if bag.hardware.apple_silicon == Some(true) {
        flags.push((FLAG_LABELS[2], "Apple Silicon".into()));
    }

    if let Some(hour) = bag.hour().filter(|h| *h < 5 || *h == 23) {
        flags.push((FLAG_LABELS[3], format!("active at {hour:02}:00")));
    }

    if let Some(n) = bag
        .behavioral
        .rage_clicks
        .filter(|n| *n >= w::IMPATIENT_RAGE_CLICKS)
    {
        flags.push((FLAG_LABELS[4], format!("{n} rage clicks")));
    }

    if let Some(n) = bag
        .behavioral
        .tab_switches
        .filter(|n| *n >= w::MULTITASKER_TAB_SWITCHES)
    {
        flags.push((FLAG_LABELS[5], format!("{n} tab switches")));
    }

    let wallets = bag.wallets();
    if let Some(first) = wallets.first() {
        flags.push((FLAG_LABELS[6], format!("{} wallet", wallet::lookup(first).key)));
    }

    let logins = bag.social_logins.logged_in();
    if logins.len() >= w::SOCIAL_LOGINS {
        flags.push((FLAG_LABELS[7], format!("{} social logins", logins.len())));
    }

    if bag.vpn.tor == Some(true) {
        flags.push((FLAG_LABELS[8], "Tor".into()));
    }

    if bag.preferences.reduced_motion == Some(true) {
        flags.push((FLAG_LABELS[9], "reduced motion preference".into()));
    }

    if let Some(bits) = bag
        .uniqueness_bits()
        .filter(|b| *b >= w::UNIQUE_FINGERPRINT_BITS)
    {
        flags.push((FLAG_LABELS[10], format!("{bits:.1} bits of fingerprint entropy")));
    }

    flags
}

pub fn flags(bag: &SignalBag, ctx: &ScoringContext) -> BucketedAttribute {
    let matched = matched_flags(bag, ctx);
    if matched.is_empty() {
        return no_signals(Dimension::PersonalityFlags);
    }
    let value = matched
        .iter()
        .map(|(flag, _)| *flag)
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR);
    let reasoning = matched
        .iter()
        .map(|(flag, why)| Evidence::new(1.0, format!("{flag}: {why}")).to_string())
        .collect();
    BucketedAttribute::new(
        value,
        ctx.curve.confidence(matched.len() as u32),
        reasoning,
    )
}

pub fn interests(bag: &SignalBag, ctx: &ScoringContext) -> BucketedAttribute {
    const TECH: usize = 0;
    const GAMING: usize = 1;
    const CRYPTO: usize = 2;
    const DESIGN: usize = 3;
    const SOCIAL: usize = 4;
    const FINANCE: usize = 5;
    const PRIVACY: usize = 6;
    const STREAMING: usize = 7;
    const NETWORKING: usize = 8;

    let labels = &INTEREST_LABELS;
    let mut acc = MultiAccumulator::<9>::new();

    if bag.behavioral.dev_tools_open == Some(true) {
        acc.consult(labels, &[(TECH, 3.0)], "DevTools open");
    }
    if bag.browser.developer_variant == Some(true) {
        acc.consult(labels, &[(TECH, 3.0)], "developer browser edition");
    }
    let social = &bag.social_logins;
    if social.github == Some(true) {
        acc.consult(labels, &[(TECH, 3.0)], "GitHub login");
    }
    if bag.gpu().is_some_and(|r| gpu::lookup(r).entry.tier.is_gaming()) {
        acc.consult(labels, &[(GAMING, 3.0)], "gaming GPU");
    }
    if social.twitch == Some(true) {
        acc.consult(labels, &[(GAMING, 2.0), (STREAMING, 3.0)], "Twitch login");
    }
    if social.discord == Some(true) {
        acc.consult(labels, &[(GAMING, 2.0)], "Discord login");
    }
    if !bag.wallets().is_empty() {
        acc.consult(labels, &[(CRYPTO, 4.0), (FINANCE, 1.0)], "crypto wallet");
    }
    if let Some(gamut) = bag
        .preferences
        .color_gamut
        .as_deref()
        .map(|g| g.trim().to_ascii_lowercase())
        .filter(|g| g == "p3" || g == "rec2020")
    {
        acc.consult(labels, &[(DESIGN, 2.0)], &format!("{gamut} color gamut"));
    }
    if bag.hardware.apple_silicon == Some(true) {
        acc.consult(labels, &[(DESIGN, 1.0)], "Apple Silicon");
    }
    for (name, flag) in [
        ("Instagram", social.instagram),
        ("TikTok", social.tiktok),
        ("Facebook", social.facebook),
        ("Twitter", social.twitter),
    ] {
        if flag == Some(true) {
            acc.consult(labels, &[(SOCIAL, 1.0)], &format!("{name} login"));
        }
    }
    if social.youtube == Some(true) {
        acc.consult(labels, &[(STREAMING, 2.0)], "YouTube login");
    }
    if social.linkedin == Some(true) {
        acc.consult(labels, &[(NETWORKING, 3.0), (FINANCE, 1.0)], "LinkedIn login");
    }
    for (what, on) in [
        ("ad blocker", bag.tracking.ad_blocker),
        ("VPN", bag.vpn.detected),
        ("Tor", bag.vpn.tor),
    ] {
        if on == Some(true) {
            acc.consult(labels, &[(PRIVACY, 2.0)], what);
        }
    }

    let data_points = acc.data_points();
    if data_points == 0 {
        return no_signals(Dimension::Interests);
    }
    let (scores, _, evidence) = acc.into_parts();
    let mut order: Vec<usize> = (0..INTEREST_LABELS.len()).collect();
    order.sort_by(|a, b| scores[*b].total_cmp(&scores[*a]).then(a.cmp(b)));
    let top: Vec<&str> = order
        .into_iter()
        .filter(|i| scores[*i] > 0.0)
        .take(w::TOP_INTERESTS)
        .map(|i| INTEREST_LABELS[i])
        .collect();
    let reasoning = evidence.iter().map(ToString::to_string).collect();
    BucketedAttribute::new(
        top.join(LIST_SEPARATOR),
        ctx.curve.confidence(data_points),
        reasoning,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> ScoringContext {
        ScoringContext::for_bag(&SignalBag::default())
    }

    #[test]
    fn flags_follow_canonical_order() {
        let mut bag = SignalBag::default();
        bag.vpn.tor = Some(true);
        bag.behavioral.dev_tools_open = Some(true);
        bag.tracking.ad_blocker = Some(true);
        let attr = flags(&bag, &ctx());
        assert_eq!(attr.value, "Privacy-conscious, Tech-savvy, Security-minded");
        assert_eq!(attr.reasoning[0], "+1 Privacy-conscious: ad blocker");
    }

    #[test]
    fn privacy_reasons_are_merged_into_one_flag() {
        let mut bag = SignalBag::default();
        bag.tracking.ad_blocker = Some(true);
        bag.vpn.detected = Some(true);
        let attr = flags(&bag, &ctx());
        assert_eq!(attr.value, "Privacy-conscious");
        assert_eq!(attr.reasoning, vec!["+1 Privacy-conscious: ad blocker, VPN"]);
    }

    #[test]
    fn interests_keep_top_three() {
        let mut bag = SignalBag::default();
        bag.behavioral.dev_tools_open = Some(true);
        bag.social_logins.github = Some(true);
        bag.social_logins.twitch = Some(true);
        bag.crypto.wallets = Some(vec!["MetaMask".into()]);
        bag.tracking.ad_blocker = Some(true);
        let attr = interests(&bag, &ctx());
        // Technology 6, Crypto 4, Streaming 3, Gaming 2, Privacy 2
        assert_eq!(attr.value, "Technology, Crypto, Streaming & Video");
    }

    #[test]
    fn empty_bag_is_unknown() {
        let bag = SignalBag::default();
        assert!(flags(&bag, &ctx()).is_unknown());
        assert!(interests(&bag, &ctx()).is_unknown());
    }
}
