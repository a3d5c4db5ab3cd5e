//! Insight template catalog.
//!
//! Each template pairs a trigger over the assembled profile and the bag with a
//! rendered sentence. Templates belong to one of two passes: the enhanced pass
//! reads signal combinations, the base pass restates single attributes.

use visage_core::{Profile, SignalBag};
use visage_scoring::lifestyle::HABIT_LABELS;
use visage_scoring::parental::PARENTAL_LABELS;

use crate::referrer::{Referrer, ReferrerKind};

/// Everything a template may read.
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    pub bag: &'a SignalBag,
    pub profile: &'a Profile,
    pub referrer: Referrer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Enhanced,
    Base,
}

pub struct InsightTemplate {
    pub id: &'static str,
    pub pass: Pass,
    /// Higher ranks first within a pass.
    pub priority: u8,
    render: fn(&InsightContext<'_>) -> Option<String>,
}

impl InsightTemplate {
    /// The rendered sentence, or `None` when the trigger does not match.
    pub fn render(&self, ctx: &InsightContext<'_>) -> Option<String> {
        (self.render)(ctx).filter(|s| !s.trim().is_empty())
    }
}

impl std::fmt::Debug for InsightTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightTemplate")
            .field("id", &self.id)
            .field("pass", &self.pass)
            .field("priority", &self.priority)
            .finish()
    }
}

pub const CATALOG: &[InsightTemplate] = &[
    // ── Enhanced ───────────────────────────────────────────────────────
    InsightTemplate { id: "automation", pass: Pass::Enhanced, priority: 100, render: automation },
    InsightTemplate { id: "social_arrival", pass: Pass::Enhanced, priority: 90, render: social_arrival },
    InsightTemplate { id: "search_arrival", pass: Pass::Enhanced, priority: 85, render: search_arrival },
    InsightTemplate { id: "device_spend", pass: Pass::Enhanced, priority: 80, render: device_spend },
    InsightTemplate { id: "privacy_stack", pass: Pass::Enhanced, priority: 75, render: privacy_stack },
    InsightTemplate { id: "parent_routine", pass: Pass::Enhanced, priority: 70, render: parent_routine },
    InsightTemplate { id: "crypto_holder", pass: Pass::Enhanced, priority: 65, render: crypto_holder },
    InsightTemplate { id: "multilingual", pass: Pass::Enhanced, priority: 60, render: multilingual },
    InsightTemplate { id: "late_worker", pass: Pass::Enhanced, priority: 55, render: late_worker },
    // ── Base ───────────────────────────────────────────────────────────
    InsightTemplate { id: "occupation", pass: Pass::Base, priority: 40, render: occupation },
    InsightTemplate { id: "age_income", pass: Pass::Base, priority: 35, render: age_income },
    InsightTemplate { id: "location", pass: Pass::Base, priority: 30, render: location },
    InsightTemplate { id: "frustration", pass: Pass::Base, priority: 25, render: frustration },
    InsightTemplate { id: "sleep", pass: Pass::Base, priority: 20, render: sleep },
    InsightTemplate { id: "social_presence", pass: Pass::Base, priority: 15, render: social_presence },
    InsightTemplate { id: "habits", pass: Pass::Base, priority: 10, render: habits },
];

/// Templates of one pass, highest priority first (catalog order on ties).
pub fn templates_for(pass: Pass) -> Vec<&'static InsightTemplate> {
    let mut out: Vec<&'static InsightTemplate> = CATALOG.iter().filter(|t| t.pass == pass).collect();
    out.sort_by(|a, b| b.priority.cmp(&a.priority));
    out
}

fn known(value: &str) -> Option<&str> {
    (value != visage_core::constants::UNKNOWN).then_some(value)
}

fn label_rank(labels: &[&str], value: &str) -> Option<usize> {
    labels.iter().position(|l| *l == value)
}

fn automation(ctx: &InsightContext<'_>) -> Option<String> {
    ctx.bag
        .looks_automated()
        .then(|| "Automated or headless browser detected, so this profile is low confidence".to_string())
}

fn social_arrival(ctx: &InsightContext<'_>) -> Option<String> {
    if ctx.referrer.kind != ReferrerKind::Social {
        return None;
    }
    let source = ctx.referrer.source?;
    if ctx.bag.social_logins.logged_in().contains(&source) {
        Some(format!("Arrived from {source} and is still logged in there"))
    } else {
        Some(format!("Arrived from a link shared on {source}"))
    }
}

fn search_arrival(ctx: &InsightContext<'_>) -> Option<String> {
    if ctx.referrer.kind != ReferrerKind::Search {
        return None;
    }
    let source = ctx.referrer.source?;
    Some(format!("Found this page through a {source} search"))
}

fn device_spend(ctx: &InsightContext<'_>) -> Option<String> {
    let tier = &ctx.profile.device_tier;
    if !matches!(tier.value.as_str(), "premium" | "high-end") {
        return None;
    }
    Some(match tier.detail.as_deref() {
        Some(detail) => format!("Runs a {} setup ({detail})", tier.value),
        None => format!("Runs a {} setup", tier.value),
    })
}

fn privacy_stack(ctx: &InsightContext<'_>) -> Option<String> {
    let bag = ctx.bag;
    let tools: Vec<&str> = [
        ("an ad blocker", bag.tracking.ad_blocker),
        ("a VPN", bag.vpn.detected),
        ("Tor", bag.vpn.tor),
        ("Do Not Track", bag.browser.do_not_track),
    ]
    .into_iter()
    .filter_map(|(name, on)| (on == Some(true)).then_some(name))
    .collect();
    (tools.len() >= 2).then(|| format!("Privacy-conscious: uses {}", join_words(&tools)))
}

fn parent_routine(ctx: &InsightContext<'_>) -> Option<String> {
    let status = &ctx.profile.parental_status;
    // "Somewhat likely a parent" and above.
    if label_rank(PARENTAL_LABELS, &status.value)? < 3 {
        return None;
    }
    Some(match status.detail.as_deref() {
        Some(detail) => format!("{}: {detail}", status.value),
        None => format!("{} based on when they browse", status.value),
    })
}

fn crypto_holder(ctx: &InsightContext<'_>) -> Option<String> {
    let wallets = ctx.bag.wallets();
    match wallets.len() {
        0 => None,
        1 => Some(format!("Has the {} crypto wallet installed", wallets[0])),
        _ => Some(format!("Has {} crypto wallets installed ({})", wallets.len(), wallets.join(", "))),
    }
}

fn multilingual(ctx: &InsightContext<'_>) -> Option<String> {
    let languages = ctx.bag.languages();
    (languages.len() >= 2).then(|| {
        format!(
            "Browser is set up for {} languages, led by {}",
            languages.len(),
            join_words(&languages[..2])
        )
    })
}

fn late_worker(ctx: &InsightContext<'_>) -> Option<String> {
    let occupation = known(&ctx.profile.occupation.value)?;
    let sleep = known(&ctx.profile.sleep_schedule.value)?;
    if !matches!(sleep, "Night Owl" | "Very Late Sleeper") {
        return None;
    }
    let hour = ctx.bag.hour()?;
    let minute = ctx.bag.minute().unwrap_or(0);
    Some(format!("{occupation} still online at {hour:02}:{minute:02}"))
}

fn occupation(ctx: &InsightContext<'_>) -> Option<String> {
    let occupation = known(&ctx.profile.occupation.value)?;
    Some(format!("Occupation guess: {occupation}"))
}

fn age_income(ctx: &InsightContext<'_>) -> Option<String> {
    let age = known(&ctx.profile.age.value)?;
    let income = &ctx.profile.income;
    let level = known(&income.value)?;
    Some(match income.detail.as_deref() {
        Some(range) => format!("Probably aged {age} with {level} income ({range})"),
        None => format!("Probably aged {age} with {level} income"),
    })
}

fn location(ctx: &InsightContext<'_>) -> Option<String> {
    match (ctx.bag.city(), ctx.bag.country()) {
        (Some(city), Some(country)) => Some(format!("Connecting from {city}, {country}")),
        (Some(place), None) | (None, Some(place)) => Some(format!("Connecting from {place}")),
        (None, None) => None,
    }
}

fn frustration(ctx: &InsightContext<'_>) -> Option<String> {
    (ctx.profile.stress_level.value == "High").then(|| {
        format!(
            "Showing signs of frustration right now (mood: {})",
            ctx.profile.mood.value
        )
    })
}

fn sleep(ctx: &InsightContext<'_>) -> Option<String> {
    let sleep = known(&ctx.profile.sleep_schedule.value)?;
    Some(format!("Sleep pattern: {sleep}"))
}

fn social_presence(ctx: &InsightContext<'_>) -> Option<String> {
    let platforms = ctx.bag.social_logins.logged_in();
    (platforms.len() >= 2)
        .then(|| format!("Logged into {} platforms: {}", platforms.len(), platforms.join(", ")))
}

fn habits(ctx: &InsightContext<'_>) -> Option<String> {
    let habits = &ctx.profile.lifestyle_habits;
    // "Likely" and above.
    let strong = |attr: &visage_core::BucketedAttribute| {
        label_rank(HABIT_LABELS, &attr.value).is_some_and(|rank| rank >= 2)
    };
    [
        ("Coffee drinker", &habits.drinks_caffeine),
        ("Frequent traveler", &habits.travel_frequency),
    ]
    .into_iter()
    .find(|(_, attr)| strong(attr))
    .map(|(what, attr)| match attr.detail.as_deref() {
        Some(detail) => format!("{what}: {detail}"),
        None => format!("{what}: {}", attr.value),
    })
}

/// "a", "a and b", "a, b and c".
fn join_words(words: &[&str]) -> String {
    match words {
        [] => String::new(),
        [one] => one.to_string(),
        [init @ .., last] => format!("{} and {last}", init.join(", ")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::referrer::classify;
    use visage_core::BucketedAttribute;

    fn ctx<'a>(bag: &'a SignalBag, profile: &'a Profile) -> InsightContext<'a> {
        InsightContext {
            bag,
            profile,
            referrer: classify(bag.referrer()),
        }
    }

    #[test]
    fn template_ids_are_unique() {
        let mut ids: Vec<&str> = CATALOG.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), CATALOG.len());
    }

    #[test]
    fn passes_are_ranked_by_priority() {
        for pass in [Pass::Enhanced, Pass::Base] {
            let ranked = templates_for(pass);
            assert!(!ranked.is_empty());
            assert!(ranked.windows(2).all(|w| w[0].priority >= w[1].priority));
        }
    }

    #[test]
    fn nothing_matches_an_empty_bag_and_unknown_profile() {
        let bag = SignalBag::default();
        let profile = Profile::unknown();
        let c = ctx(&bag, &profile);
        assert!(CATALOG.iter().all(|t| t.render(&c).is_none()));
    }

    #[test]
    fn social_arrival_notices_open_session() {
        let mut bag = SignalBag::default();
        bag.browser.referrer = Some("https://www.linkedin.com/feed/".into());
        bag.social_logins.linkedin = Some(true);
        let profile = Profile::unknown();
        assert_eq!(
            social_arrival(&ctx(&bag, &profile)).as_deref(),
            Some("Arrived from LinkedIn and is still logged in there")
        );
    }

    #[test]
    fn privacy_stack_needs_two_tools() {
        let mut bag = SignalBag::default();
        let profile = Profile::unknown();
        bag.tracking.ad_blocker = Some(true);
        assert!(privacy_stack(&ctx(&bag, &profile)).is_none());
        bag.vpn.detected = Some(true);
        assert_eq!(
            privacy_stack(&ctx(&bag, &profile)).as_deref(),
            Some("Privacy-conscious: uses an ad blocker and a VPN")
        );
    }

    #[test]
    fn parent_routine_uses_detail() {
        let bag = SignalBag::default();
        let mut profile = Profile::unknown();
        profile.parental_status = BucketedAttribute::new("Likely a parent", 60, vec![])
            .with_detail("browsing after kids' bedtime");
        assert_eq!(
            parent_routine(&ctx(&bag, &profile)).as_deref(),
            Some("Likely a parent: browsing after kids' bedtime")
        );
        profile.parental_status = BucketedAttribute::new("Unlikely a parent", 60, vec![]);
        assert!(parent_routine(&ctx(&bag, &profile)).is_none());
    }

    #[test]
    fn join_words_reads_naturally() {
        assert_eq!(join_words(&["a"]), "a");
        assert_eq!(join_words(&["a", "b"]), "a and b");
        assert_eq!(join_words(&["a", "b", "c"]), "a, b and c");
    }
}
