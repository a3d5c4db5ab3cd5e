use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{BucketedAttribute, Dimension};
use crate::constants::UNKNOWN;

/// Habit estimates layered on regional reference statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LifestyleHabits {
    pub drinks_caffeine: BucketedAttribute,
    pub drinks_alcohol: BucketedAttribute,
    pub smokes: BucketedAttribute,
    pub travel_frequency: BucketedAttribute,
}

/// The assembled, explainable profile handed to presentation collaborators.
///
/// Every attribute is always present; absent data yields `"Unknown"` with
/// zero confidence. Deserialization is strict (no field defaults) so a remote
/// payload missing a key is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Profile {
    pub age: BucketedAttribute,
    pub income: BucketedAttribute,
    pub occupation: BucketedAttribute,
    pub education: BucketedAttribute,
    pub device_tier: BucketedAttribute,
    pub device_age: BucketedAttribute,
    pub parental_status: BucketedAttribute,
    pub stress_level: BucketedAttribute,
    pub mood: BucketedAttribute,
    pub sleep_schedule: BucketedAttribute,
    pub fitness_level: BucketedAttribute,
    pub lifestyle_habits: LifestyleHabits,
    pub personality_flags: BucketedAttribute,
    pub interests: BucketedAttribute,
    /// 0..=100, a function of total evidence across all dimensions.
    pub overall_confidence: u8,
    /// Ranked, deduplicated, capped.
    pub insights: Vec<String>,
}

impl Profile {
    /// Profile with every dimension Unknown, zero confidence, no insights.
    pub fn unknown() -> Self {
        Self {
            age: BucketedAttribute::default(),
            income: BucketedAttribute::default(),
            occupation: BucketedAttribute::default(),
            education: BucketedAttribute::default(),
            device_tier: BucketedAttribute::default(),
            device_age: BucketedAttribute::default(),
            parental_status: BucketedAttribute::default(),
            stress_level: BucketedAttribute::default(),
            mood: BucketedAttribute::default(),
            sleep_schedule: BucketedAttribute::default(),
            fitness_level: BucketedAttribute::default(),
            lifestyle_habits: LifestyleHabits::default(),
            personality_flags: BucketedAttribute::default(),
            interests: BucketedAttribute::default(),
            overall_confidence: 0,
            insights: Vec::new(),
        }
    }

    pub fn attribute(&self, dimension: Dimension) -> &BucketedAttribute {
        match dimension {
            Dimension::Age => &self.age,
            Dimension::Income => &self.income,
            Dimension::Occupation => &self.occupation,
            Dimension::Education => &self.education,
            Dimension::DeviceTier => &self.device_tier,
            Dimension::DeviceAge => &self.device_age,
            Dimension::ParentalStatus => &self.parental_status,
            Dimension::StressLevel => &self.stress_level,
            Dimension::Mood => &self.mood,
            Dimension::SleepSchedule => &self.sleep_schedule,
            Dimension::FitnessLevel => &self.fitness_level,
            Dimension::DrinksCaffeine => &self.lifestyle_habits.drinks_caffeine,
            Dimension::DrinksAlcohol => &self.lifestyle_habits.drinks_alcohol,
            Dimension::Smokes => &self.lifestyle_habits.smokes,
            Dimension::TravelFrequency => &self.lifestyle_habits.travel_frequency,
            Dimension::PersonalityFlags => &self.personality_flags,
            Dimension::Interests => &self.interests,
        }
    }

    pub fn attribute_mut(&mut self, dimension: Dimension) -> &mut BucketedAttribute {
        match dimension {
            Dimension::Age => &mut self.age,
            Dimension::Income => &mut self.income,
            Dimension::Occupation => &mut self.occupation,
            Dimension::Education => &mut self.education,
            Dimension::DeviceTier => &mut self.device_tier,
            Dimension::DeviceAge => &mut self.device_age,
            Dimension::ParentalStatus => &mut self.parental_status,
            Dimension::StressLevel => &mut self.stress_level,
            Dimension::Mood => &mut self.mood,
            Dimension::SleepSchedule => &mut self.sleep_schedule,
            Dimension::FitnessLevel => &mut self.fitness_level,
            Dimension::DrinksCaffeine => &mut self.lifestyle_habits.drinks_caffeine,
            Dimension::DrinksAlcohol => &mut self.lifestyle_habits.drinks_alcohol,
            Dimension::Smokes => &mut self.lifestyle_habits.smokes,
            Dimension::TravelFrequency => &mut self.lifestyle_habits.travel_frequency,
            Dimension::PersonalityFlags => &mut self.personality_flags,
            Dimension::Interests => &mut self.interests,
        }
    }

    /// Every dimension paired with its attribute, in contract order.
    pub fn attributes(&self) -> Vec<(Dimension, &BucketedAttribute)> {
        Dimension::ALL
            .iter()
            .map(|d| (*d, self.attribute(*d)))
            .collect()
    }

    /// Force the output contract onto a profile from an untrusted source.
    ///
    /// Values rejected by `is_valid` (and blank values) become Unknown with
    /// zero confidence, Unknown always carries zero confidence, confidences
    /// are clamped to 100, and insights are trimmed, deduplicated and capped
    /// at `max_insights`. An empty insight list is left for the caller to
    /// fill, since synthesizing one needs the insight generator.
    pub fn sanitize<F>(&mut self, max_insights: usize, is_valid: F)
    where
        F: Fn(Dimension, &str) -> bool,
    {
        for dimension in Dimension::ALL {
            let attr = self.attribute_mut(dimension);
            let value = attr.value.trim().to_string();
            if value.is_empty() {
                *attr = BucketedAttribute::unknown("remote value was blank");
            } else if !is_valid(dimension, &value) {
                *attr = BucketedAttribute::unknown(format!(
                    "remote value {value:?} is not a recognised {dimension} label"
                ));
            } else {
                attr.value = value;
                attr.confidence = if attr.is_unknown() {
                    0
                } else {
                    attr.confidence.min(100)
                };
            }
        }
        self.overall_confidence = self.overall_confidence.min(100);

        let mut seen: Vec<String> = Vec::with_capacity(self.insights.len());
        for insight in self.insights.drain(..) {
            let insight = insight.trim().to_string();
            if !insight.is_empty() && !seen.contains(&insight) {
                seen.push(insight);
            }
        }
        seen.truncate(max_insights);
        self.insights = seen;
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::unknown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_has_every_key() {
        let json = serde_json::to_value(Profile::unknown()).unwrap();
        for key in [
            "age",
            "income",
            "occupation",
            "education",
            "deviceTier",
            "deviceAge",
            "parentalStatus",
            "stressLevel",
            "mood",
            "sleepSchedule",
            "fitnessLevel",
            "lifestyleHabits",
            "personalityFlags",
            "interests",
            "overallConfidence",
            "insights",
        ] {
            assert!(json.get(key).is_some(), "missing key {key}");
        }
        assert!(json["lifestyleHabits"].get("drinksAlcohol").is_some());
    }

    #[test]
    fn strict_deserialization_rejects_missing_keys() {
        let mut json = serde_json::to_value(Profile::unknown()).unwrap();
        json.as_object_mut().unwrap().remove("income");
        assert!(serde_json::from_value::<Profile>(json).is_err());
    }

    #[test]
    fn sanitize_enforces_contract() {
        let mut profile = Profile::unknown();
        profile.age = BucketedAttribute {
            value: "  ".into(),
            confidence: 250,
            reasoning: vec![],
            detail: None,
        };
        profile.income.confidence = 180;
        profile.overall_confidence = 101;
        profile.insights = vec![
            "a".into(),
            "a".into(),
            " ".into(),
            "b".into(),
            "c".into(),
            "d".into(),
            "e".into(),
            "f".into(),
        ];
        profile.occupation = BucketedAttribute::new("Astronaut", 90, vec![]);
        profile.mood = BucketedAttribute::new(UNKNOWN, 60, vec![]);
        profile.sanitize(5, |dimension, value| {
            dimension != Dimension::Occupation || value != "Astronaut"
        });

        assert_eq!(profile.age.value, UNKNOWN);
        assert_eq!(profile.age.confidence, 0);
        assert_eq!(profile.income.confidence, 100);
        assert_eq!(profile.overall_confidence, 100);
        assert_eq!(profile.insights, vec!["a", "b", "c", "d", "e"]);
        assert!(profile.occupation.is_unknown());
        assert_eq!(profile.occupation.confidence, 0);
        assert_eq!(profile.mood.confidence, 0);
    }
}
