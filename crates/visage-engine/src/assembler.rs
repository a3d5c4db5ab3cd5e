//! Local pipeline: runs every scorer in dependency order and assembles the
//! profile.
//!
//! Order: age, income, device, occupation (reconciled against income),
//! parental status, state, lifestyle, personality flags, interests, overall
//! confidence, insights. Each step is fenced; a failed step leaves its
//! dimensions at `Unknown` with reasoning `["scorer failed"]`.

use visage_core::config::{ConfidenceConfig, VisageConfig};
use visage_core::errors::ScoringError;
use visage_core::{BucketedAttribute, DegradationEvent, Profile, SignalBag};
use visage_insights::{summarize, InsightGenerator};
use visage_scoring::{
    age, device, income, lifestyle, occupation, parental, personality, state, ConfidenceCurve,
    LifestyleInputs, ScoringContext,
};

use crate::fence::run_fenced;

/// A locally assembled profile plus every degradation hit on the way.
#[derive(Debug, Clone)]
pub struct Assembly {
    pub profile: Profile,
    pub degradations: Vec<DegradationEvent>,
}

#[derive(Debug, Clone)]
pub struct ProfileAssembler {
    confidence: ConfidenceConfig,
    insights: InsightGenerator,
}

impl Default for ProfileAssembler {
    fn default() -> Self {
        Self::new(&VisageConfig::default())
    }
}

impl ProfileAssembler {
    pub fn new(config: &VisageConfig) -> Self {
        Self {
            confidence: config.confidence.clone(),
            insights: InsightGenerator::from_config(&config.insights),
        }
    }

    /// Never fails: the worst case is an all-Unknown profile.
    pub fn assemble(&self, bag: &SignalBag) -> Assembly {
        let ctx = ScoringContext::new(bag, &self.confidence);
        let mut profile = Profile::unknown();
        let mut degradations = Vec::new();

        let age = run_fenced("age", &mut degradations, || age::estimate(bag, &ctx));
        profile.age = attribute_or_failed(age.as_ref().map(|a| &a.attribute));

        let income = run_fenced("income", &mut degradations, || income::estimate(bag, &ctx));
        profile.income = attribute_or_failed(income.as_ref().map(|i| &i.attribute));
        let income_level = income.as_ref().and_then(|i| i.level);

        match run_fenced("device", &mut degradations, || device::estimate(bag, &ctx)) {
            Some(est) => {
                profile.device_tier = est.tier;
                profile.device_age = est.age;
            }
            None => {
                profile.device_tier = BucketedAttribute::failed();
                profile.device_age = BucketedAttribute::failed();
            }
        }

        if age.is_none() {
            note_missing(&mut degradations, "occupation", "age");
        }
        if income.is_none() {
            note_missing(&mut degradations, "occupation", "income");
        }
        let occupation = run_fenced("occupation", &mut degradations, || {
            let scores = occupation::score(bag, age.as_ref());
            let mut est = occupation::resolve(&scores, bag, &ctx, age.as_ref());
            occupation::reconcile_with_income(&mut est, income_level, bag, age.as_ref());
            Ok(est)
        });
        match occupation.as_ref() {
            Some(est) => {
                profile.occupation = est.attribute.clone();
                profile.education = est.education.clone();
            }
            None => {
                profile.occupation = BucketedAttribute::failed();
                profile.education = BucketedAttribute::failed();
            }
        }

        profile.parental_status = run_fenced("parental", &mut degradations, || {
            parental::estimate(bag, &ctx, age.as_ref(), income_level)
        })
        .unwrap_or_else(BucketedAttribute::failed);

        let stress_level = match run_fenced("state", &mut degradations, || state::estimate(bag, &ctx)) {
            Some(est) => {
                profile.stress_level = est.stress;
                profile.mood = est.mood;
                profile.sleep_schedule = est.sleep;
                profile.fitness_level = est.fitness;
                est.stress_level
            }
            None => {
                profile.stress_level = BucketedAttribute::failed();
                profile.mood = BucketedAttribute::failed();
                profile.sleep_schedule = BucketedAttribute::failed();
                profile.fitness_level = BucketedAttribute::failed();
                None
            }
        };

        let inputs = LifestyleInputs {
            age: age.as_ref(),
            income_level,
            occupation: occupation.as_ref(),
            stress_level,
        };
        match run_fenced("lifestyle", &mut degradations, || lifestyle::estimate(bag, &ctx, &inputs)) {
            Some(habits) => profile.lifestyle_habits = habits,
            None => {
                let habits = &mut profile.lifestyle_habits;
                habits.drinks_caffeine = BucketedAttribute::failed();
                habits.drinks_alcohol = BucketedAttribute::failed();
                habits.smokes = BucketedAttribute::failed();
                habits.travel_frequency = BucketedAttribute::failed();
            }
        }

        profile.personality_flags =
            run_fenced("personality", &mut degradations, || Ok(personality::flags(bag, &ctx)))
                .unwrap_or_else(BucketedAttribute::failed);
        profile.interests =
            run_fenced("interests", &mut degradations, || Ok(personality::interests(bag, &ctx)))
                .unwrap_or_else(BucketedAttribute::failed);

        profile.overall_confidence = run_fenced("overall", &mut degradations, || {
            Ok(self.overall_confidence(bag, &ctx))
        })
        .unwrap_or(0);

        let generated = run_fenced("insights", &mut degradations, || {
            Ok(self.insights.generate(bag, &profile))
        });
        profile.insights = generated.unwrap_or_else(|| vec![summarize(&profile)]);

        tracing::debug!(
            overall = profile.overall_confidence,
            degraded = degradations.len(),
            "profile assembled"
        );
        Assembly {
            profile,
            degradations,
        }
    }

    /// Overall curve over the evidence tallied by the core scorers, halved
    /// for automated clients.
    fn overall_confidence(&self, bag: &SignalBag, ctx: &ScoringContext) -> u8 {
        let total = evidence_tally(bag, ctx);
        let confidence = ConfidenceCurve::overall_from_config(&self.confidence).confidence(total);
        if bag.looks_automated() {
            confidence / 2
        } else {
            confidence
        }
    }
}

/// Data points consulted across the age, income, device, occupation,
/// parental and stress scorers. Adding a signal never lowers it.
pub fn evidence_tally(bag: &SignalBag, ctx: &ScoringContext) -> u32 {
    let age_points = age::score(bag, ctx).data_points;
    [
        age_points,
        income::score(bag, ctx).data_points,
        device::score(bag, ctx).data_points,
        occupation::score(bag, None).data_points,
        parental::score(bag, None, None).data_points,
        state::score_stress(bag).data_points,
    ]
    .into_iter()
    .sum()
}

fn attribute_or_failed(attribute: Option<&BucketedAttribute>) -> BucketedAttribute {
    attribute.cloned().unwrap_or_else(BucketedAttribute::failed)
}

fn note_missing(
    degradations: &mut Vec<DegradationEvent>,
    scorer: &'static str,
    dependency: &'static str,
) {
    let error = ScoringError::MissingDependency { scorer, dependency };
    tracing::warn!(scorer, dependency, "scoring without a failed dependency");
    degradations.push(DegradationEvent::now(
        format!("scorer.{scorer}"),
        error.to_string(),
        format!("scored without {dependency}"),
    ));
}
