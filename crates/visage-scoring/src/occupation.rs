//! Multi-class occupation scorer with its education co-output.
//!
//! Every candidate keeps its own score. The winner is the argmax, with ties
//! broken by declaration order in [`OCCUPATION_LABELS`]. A runner-up within
//! 20% of the winner is reported alongside it.

use visage_core::{BucketedAttribute, Dimension, Evidence, SignalBag};
use visage_tables::{city, gpu, isp, language, screen, wallet, GpuTier, IspTier, ScreenClass};

use crate::accumulator::MultiAccumulator;
use crate::age::AgeEstimate;
use crate::context::{no_signals, ScoringContext};
use crate::income::INCOME_LABELS;
use crate::weights::occupation as w;

pub const OCCUPATION_LABELS: [&str; 7] = [
    "Software Developer",
    "Designer",
    "Gamer/Streamer",
    "Crypto/Finance",
    "Office Worker",
    "Student",
    "Freelancer",
];

pub const GENERAL_PROFESSIONAL: &str = "General Professional";
pub const TIE_SEPARATOR: &str = " or ";
pub const LIKELY_PREFIX: &str = "Likely ";

pub const EDUCATION_LABELS: &[&str] = &[
    "High school",
    "Some college",
    "Currently enrolled",
    "Bachelor's degree",
    "Graduate degree",
];

const DEVELOPER: usize = 0;
const DESIGNER: usize = 1;
const GAMER: usize = 2;
const CRYPTO: usize = 3;
const OFFICE: usize = 4;
const STUDENT: usize = 5;
const FREELANCER: usize = 6;

/// Income levels (indices into the income labels) each candidate plausibly
/// earns. Used only to settle ties.
const INCOME_AFFINITY: [(usize, usize); 7] = [
    (3, 6), // developer
    (2, 5), // designer
    (0, 4), // gamer
    (3, 6), // crypto/finance
    (2, 4), // office
    (0, 2), // student
    (1, 5), // freelancer
];

/// Raw per-candidate accumulation.
#[derive(Debug, Clone)]
pub struct OccupationScores {
    pub scores: [f64; 7],
    pub data_points: u32,
    pub evidence: Vec<Evidence>,
}

#[derive(Debug, Clone)]
pub struct OccupationEstimate {
    pub attribute: BucketedAttribute,
    pub education: BucketedAttribute,
    /// Candidate index listed first; `None` for Unknown or General Professional.
    pub primary: Option<usize>,
    /// Second candidate when the result is a tie.
    pub runner_up: Option<usize>,
}

impl OccupationEstimate {
    pub fn primary_label(&self) -> Option<&'static str> {
        self.primary.map(|i| OCCUPATION_LABELS[i])
    }

    /// True when either reported candidate is `label`.
    pub fn includes(&self, label: &str) -> bool {
        [self.primary, self.runner_up]
            .into_iter()
            .flatten()
            .any(|i| OCCUPATION_LABELS[i] == label)
    }
}

pub fn score(bag: &SignalBag, age: Option<&AgeEstimate>) -> OccupationScores {
    let labels = &OCCUPATION_LABELS;
    let mut acc = MultiAccumulator::<7>::new();

    if bag.behavioral.dev_tools_open == Some(true) {
        acc.consult(labels, &[(DEVELOPER, w::DEVTOOLS)], "DevTools open");
    }
    if bag.browser.developer_variant == Some(true) {
        acc.consult(labels, &[(DEVELOPER, w::DEVELOPER_BROWSER)], "developer browser edition");
    }

    let social = &bag.social_logins;
    if social.github == Some(true) {
        acc.consult(labels, &[(DEVELOPER, w::GITHUB)], "GitHub login");
    }
    if social.reddit == Some(true) {
        acc.consult(labels, &[(DEVELOPER, w::REDDIT)], "Reddit login");
    }
    if social.linkedin == Some(true) {
        acc.consult(
            labels,
            &[(OFFICE, w::LINKEDIN_OFFICE), (FREELANCER, w::LINKEDIN_FREELANCE)],
            "LinkedIn login",
        );
    }
    if social.twitch == Some(true) {
        acc.consult(labels, &[(GAMER, w::TWITCH)], "Twitch login");
    }
    if social.discord == Some(true) {
        acc.consult(
            labels,
            &[(GAMER, w::DISCORD_GAMER), (STUDENT, w::DISCORD_STUDENT)],
            "Discord login",
        );
    }
    if social.instagram == Some(true) {
        acc.consult(labels, &[(DESIGNER, w::INSTAGRAM)], "Instagram login");
    }
    if social.tiktok == Some(true) {
        acc.consult(labels, &[(STUDENT, w::TIKTOK)], "TikTok login");
    }

    let wallets = bag.wallets();
    if !wallets.is_empty() {
        acc.consult(labels, &[(CRYPTO, w::WALLET)], "crypto wallet installed");
        if wallets
            .iter()
            .any(|name| wallet::lookup(name).entry.is_solana_family())
        {
            acc.adjust(labels, &[(CRYPTO, w::SOLANA_WALLET)], "Solana-family wallet");
        }
    }

    if let Some(renderer) = bag.gpu() {
        let entry = gpu::lookup(renderer).entry;
        if entry.tier.is_gaming() {
            acc.consult(
                labels,
                &[(GAMER, w::GAMING_GPU)],
                &format!("{} gaming GPU", entry.tier),
            );
        } else if entry.tier == GpuTier::Workstation {
            acc.consult(
                labels,
                &[
                    (DESIGNER, w::WORKSTATION_DESIGNER),
                    (DEVELOPER, w::WORKSTATION_DEVELOPER),
                ],
                "workstation-class GPU",
            );
        }
    }

    if bag.is_apple() == Some(true) {
        acc.consult(labels, &[(DESIGNER, w::APPLE_DESIGNER)], "Apple hardware");
    }

    if let Some(gamut) = bag.preferences.color_gamut.as_deref() {
        let gamut = gamut.trim().to_ascii_lowercase();
        if gamut == "p3" || gamut == "rec2020" {
            acc.consult(
                labels,
                &[(DESIGNER, w::WIDE_GAMUT)],
                &format!("wide color gamut display ({gamut})"),
            );
        }
    }

    if let Some((width, height)) = bag.screen() {
        match screen::lookup(width, height).entry.class {
            ScreenClass::UltraWide => acc.consult(
                labels,
                &[(GAMER, w::ULTRAWIDE), (DEVELOPER, w::ULTRAWIDE)],
                "ultrawide monitor",
            ),
            ScreenClass::FourK => {
                acc.consult(labels, &[(DESIGNER, w::SCREEN_4K_DESIGNER)], "4K display")
            }
            _ => {}
        }
    }

    if let Some(cores) = bag.cpu_cores().filter(|c| *c >= 12) {
        acc.consult(
            labels,
            &[(DEVELOPER, w::MANY_CORES)],
            &format!("{cores}-core CPU"),
        );
    }

    if let (Some(hour), Some(weekend)) = (bag.hour(), bag.is_weekend()) {
        match (hour, weekend) {
            (9..=17, false) => {
                acc.consult(labels, &[(OFFICE, w::BUSINESS_HOURS)], "weekday business hours")
            }
            (9..=17, true) => acc.consult(
                labels,
                &[(FREELANCER, w::WEEKEND_WORK)],
                "weekend working hours",
            ),
            _ => {}
        }
    }
    if let Some(0..=4) = bag.hour() {
        acc.consult(
            labels,
            &[(GAMER, w::LATE_NIGHT), (DEVELOPER, w::LATE_NIGHT)],
            "late-night session",
        );
    }

    let languages = bag.languages().len();
    if languages >= 3 {
        acc.consult(
            labels,
            &[(FREELANCER, w::POLYGLOT)],
            &format!("{languages} browser languages"),
        );
    }

    if let Some(primary) = bag.languages().first() {
        let hit = language::lookup(primary);
        let credits: Vec<(usize, f64)> = hit
            .entry
            .likely_professions
            .iter()
            .filter_map(|p| labels.iter().position(|l| l == p))
            .map(|idx| (idx, w::LANGUAGE_PROFESSION))
            .collect();
        if !credits.is_empty() {
            acc.consult(
                labels,
                &credits,
                &format!("common among {} speakers ({hit})", hit.entry.region),
            );
        }
    }

    if let Some(name) = bag.city() {
        let hit = city::lookup(name);
        let hub = hit.entry.tech_hub_score;
        if hit.matched && hub >= w::TECH_HUB_MIN_SCORE {
            acc.consult(
                labels,
                &[(DEVELOPER, w::TECH_HUB)],
                &format!("tech hub {hub}/10 ({hit})"),
            );
        }
    }

    if let Some(name) = bag.isp() {
        match isp::lookup(name).entry.tier {
            IspTier::Education => {
                acc.consult(labels, &[(STUDENT, w::ISP_EDUCATION)], "university network")
            }
            IspTier::Business => {
                acc.consult(labels, &[(OFFICE, w::ISP_BUSINESS)], "business network")
            }
            _ => {}
        }
    }

    if let Some(mid) = age.and_then(|a| a.midpoint) {
        let reason = format!("estimated age {}", age.map_or("", |a| a.attribute.value.as_str()));
        match mid {
            0..=22 => acc.consult(labels, &[(STUDENT, w::AGE_STUDENT)], &reason),
            23..=27 => acc.consult(labels, &[(STUDENT, w::AGE_YOUNG_ADULT)], &reason),
            35.. => acc.consult(labels, &[(STUDENT, w::AGE_MATURE)], &reason),
            _ => {}
        }
    }

    if let Some(wpm) = bag
        .typing_speed_wpm()
        .filter(|w| *w >= crate::weights::age::FAST_TYPING_WPM)
    {
        acc.consult(
            labels,
            &[
                (DEVELOPER, w::FAST_TYPING_DEVELOPER),
                (OFFICE, w::FAST_TYPING_OFFICE),
            ],
            &format!("fast typing ({wpm:.0} wpm)"),
        );
    }

    if bag.tracking.ad_blocker == Some(true) {
        acc.consult(labels, &[(DEVELOPER, w::AD_BLOCKER)], "ad blocker active");
    }

    let (scores, data_points, evidence) = acc.into_parts();
    OccupationScores {
        scores,
        data_points,
        evidence,
    }
}

/// Candidate indices ordered by score, descending; equal scores keep
/// declaration order.
fn ranked(scores: &[f64; 7]) -> [usize; 7] {
    let mut order = [0, 1, 2, 3, 4, 5, 6];
    order.sort_by(|a, b| scores[*b].total_cmp(&scores[*a]).then(a.cmp(b)));
    order
}

/// Pick the label: argmax, tie pair, "Likely" qualifier or generic fallback.
pub fn resolve(
    scores: &OccupationScores,
    bag: &SignalBag,
    ctx: &ScoringContext,
    age: Option<&AgeEstimate>,
) -> OccupationEstimate {
    if scores.data_points == 0 {
        return OccupationEstimate {
            attribute: no_signals(Dimension::Occupation),
            education: no_signals(Dimension::Education),
            primary: None,
            runner_up: None,
        };
    }

    let order = ranked(&scores.scores);
    let (winner, second) = (order[0], order[1]);
    let (top, next) = (scores.scores[winner], scores.scores[second]);

    let (label, primary, runner_up) = if top <= 0.0 {
        (GENERAL_PROFESSIONAL.to_string(), None, None)
    } else if next > 0.0 && next >= top * w::TIE_RATIO {
        (
            format!(
                "{}{TIE_SEPARATOR}{}",
                OCCUPATION_LABELS[winner], OCCUPATION_LABELS[second]
            ),
            Some(winner),
            Some(second),
        )
    } else if top < w::LOW_CONFIDENCE {
        (
            format!("{LIKELY_PREFIX}{}", OCCUPATION_LABELS[winner]),
            Some(winner),
            None,
        )
    } else {
        (OCCUPATION_LABELS[winner].to_string(), Some(winner), None)
    };

    let reasoning = scores.evidence.iter().map(ToString::to_string).collect();
    let attribute =
        BucketedAttribute::new(label, ctx.curve.confidence(scores.data_points), reasoning);
    let education = education_for(primary, &attribute, bag, age, None);
    tracing::debug!(occupation = %attribute.value, "occupation scored");

    OccupationEstimate {
        attribute,
        education,
        primary,
        runner_up,
    }
}

/// Let the income bracket settle an ambiguous tie: when only the runner-up
/// fits the bracket, it is listed first and drives the education co-output.
pub fn reconcile_with_income(
    estimate: &mut OccupationEstimate,
    income_level: Option<usize>,
    bag: &SignalBag,
    age: Option<&AgeEstimate>,
) {
    let Some(level) = income_level else {
        return;
    };
    if let (Some(first), Some(second)) = (estimate.primary, estimate.runner_up) {
        if !fits_income(first, level) && fits_income(second, level) {
            estimate.primary = Some(second);
            estimate.runner_up = Some(first);
            estimate.attribute.value = format!(
                "{}{TIE_SEPARATOR}{}",
                OCCUPATION_LABELS[second], OCCUPATION_LABELS[first]
            );
            estimate.attribute.reasoning.push(
                Evidence::new(
                    0.0,
                    format!(
                        "{} income bracket favours {}",
                        INCOME_LABELS[level], OCCUPATION_LABELS[second]
                    ),
                )
                .to_string(),
            );
        }
    }
    estimate.education =
        education_for(estimate.primary, &estimate.attribute, bag, age, Some(level));
}

fn fits_income(candidate: usize, level: usize) -> bool {
    let (lo, hi) = INCOME_AFFINITY[candidate];
    (lo..=hi).contains(&level)
}

fn education_for(
    primary: Option<usize>,
    occupation: &BucketedAttribute,
    bag: &SignalBag,
    age: Option<&AgeEstimate>,
    income_level: Option<usize>,
) -> BucketedAttribute {
    if occupation.is_unknown() {
        return no_signals(Dimension::Education);
    }
    let on_campus = bag
        .isp()
        .is_some_and(|name| isp::lookup(name).entry.tier == IspTier::Education);
    let teen = age.and_then(|a| a.midpoint).is_some_and(|m| m < 18);

    let (label, why) = if teen {
        ("High school", "estimated age under 18".to_string())
    } else if on_campus || primary == Some(STUDENT) {
        ("Currently enrolled", "student signals".to_string())
    } else {
        let label = match primary {
            Some(DEVELOPER | CRYPTO) if income_level.is_some_and(|l| l >= 5) => "Graduate degree",
            Some(DEVELOPER | DESIGNER | CRYPTO | OFFICE) | None => "Bachelor's degree",
            _ => "Some college",
        };
        (label, format!("derived from occupation {}", occupation.value))
    };

    let confidence = (f64::from(occupation.confidence) * 0.8).round() as u8;
    BucketedAttribute::new(label, confidence, vec![why])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: [f64; 7]) -> OccupationScores {
        OccupationScores {
            scores: values,
            data_points: 3,
            evidence: Vec::new(),
        }
    }

    fn resolve_plain(values: [f64; 7]) -> OccupationEstimate {
        let bag = SignalBag::default();
        resolve(&scores(values), &bag, &ScoringContext::for_bag(&bag), None)
    }

    #[test]
    fn clear_winner_stands_alone() {
        let est = resolve_plain([50.0, 0.0, 39.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(est.attribute.value, "Software Developer");
        assert_eq!(est.runner_up, None);
    }

    #[test]
    fn runner_up_within_twenty_percent_is_concatenated() {
        let est = resolve_plain([50.0, 0.0, 40.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(est.attribute.value, "Software Developer or Gamer/Streamer");
    }

    #[test]
    fn equal_scores_follow_declaration_order() {
        let est = resolve_plain([0.0, 0.0, 0.0, 30.0, 30.0, 0.0, 0.0]);
        assert_eq!(est.attribute.value, "Crypto/Finance or Office Worker");
    }

    #[test]
    fn weak_winner_is_qualified() {
        let est = resolve_plain([0.0, 10.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(est.attribute.value, "Likely Designer");
    }

    #[test]
    fn evidence_without_winner_is_general_professional() {
        let est = resolve_plain([0.0; 7]);
        assert_eq!(est.attribute.value, GENERAL_PROFESSIONAL);
        assert_eq!(est.education.value, "Bachelor's degree");
    }

    #[test]
    fn income_reorders_an_ambiguous_tie() {
        let bag = SignalBag::default();
        let mut est = resolve_plain([0.0, 0.0, 0.0, 0.0, 0.0, 30.0, 28.0]);
        assert_eq!(est.attribute.value, "Student or Freelancer");
        reconcile_with_income(&mut est, Some(4), &bag, None);
        assert_eq!(est.attribute.value, "Freelancer or Student");
        assert!(est.includes("Student"));
        assert!(est.attribute.reasoning.last().unwrap().contains("favours Freelancer"));
    }

    #[test]
    fn developer_signals_score_developer() {
        let mut bag = SignalBag::default();
        bag.behavioral.dev_tools_open = Some(true);
        bag.social_logins.github = Some(true);
        let ctx = ScoringContext::for_bag(&bag);
        let raw = score(&bag, None);
        assert_eq!(raw.data_points, 2);
        assert_eq!(raw.scores[DEVELOPER], 55.0);
        let est = resolve(&raw, &bag, &ctx, None);
        assert_eq!(est.attribute.value, "Software Developer");
        assert_eq!(est.attribute.reasoning[0], "+30 Software Developer: DevTools open");
    }

    #[test]
    fn primary_language_and_tech_hub_credit_candidates() {
        let mut bag = SignalBag::default();
        bag.browser.languages = Some(vec!["sv".into()]);
        let raw = score(&bag, None);
        assert_eq!(raw.data_points, 1);
        assert_eq!(raw.scores[DEVELOPER], w::LANGUAGE_PROFESSION);

        bag.browser.languages = Some(vec!["de-CH".into()]);
        let raw = score(&bag, None);
        assert_eq!(raw.scores[DEVELOPER], w::LANGUAGE_PROFESSION);
        assert_eq!(raw.scores[CRYPTO], w::LANGUAGE_PROFESSION);

        bag.network.city = Some("Seattle".into());
        let raw = score(&bag, None);
        assert_eq!(raw.data_points, 2);
        assert_eq!(raw.scores[DEVELOPER], w::LANGUAGE_PROFESSION + w::TECH_HUB);
        assert!(raw
            .evidence
            .iter()
            .any(|e| e.reason == "Software Developer: tech hub 9/10 (matched 'seattle')"));
    }

    #[test]
    fn language_without_listed_roles_consults_nothing() {
        let mut bag = SignalBag::default();
        bag.browser.languages = Some(vec!["ko".into()]);
        bag.network.city = Some("Miami".into());
        assert_eq!(score(&bag, None).data_points, 0);
    }

    #[test]
    fn empty_bag_is_unknown() {
        let bag = SignalBag::default();
        let ctx = ScoringContext::for_bag(&bag);
        let est = resolve(&score(&bag, None), &bag, &ctx, None);
        assert!(est.attribute.is_unknown());
        assert!(est.education.is_unknown());
    }
}
