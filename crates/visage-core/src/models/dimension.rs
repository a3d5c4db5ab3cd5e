use serde::{Deserialize, Serialize};
use std::fmt;

/// Every output dimension of a [`crate::Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Age,
    Income,
    Occupation,
    Education,
    DeviceTier,
    DeviceAge,
    ParentalStatus,
    StressLevel,
    Mood,
    SleepSchedule,
    FitnessLevel,
    DrinksCaffeine,
    DrinksAlcohol,
    Smokes,
    TravelFrequency,
    PersonalityFlags,
    Interests,
}

impl Dimension {
    pub const ALL: [Dimension; 17] = [
        Self::Age,
        Self::Income,
        Self::Occupation,
        Self::Education,
        Self::DeviceTier,
        Self::DeviceAge,
        Self::ParentalStatus,
        Self::StressLevel,
        Self::Mood,
        Self::SleepSchedule,
        Self::FitnessLevel,
        Self::DrinksCaffeine,
        Self::DrinksAlcohol,
        Self::Smokes,
        Self::TravelFrequency,
        Self::PersonalityFlags,
        Self::Interests,
    ];

    /// Field name in the output contract.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Income => "income",
            Self::Occupation => "occupation",
            Self::Education => "education",
            Self::DeviceTier => "deviceTier",
            Self::DeviceAge => "deviceAge",
            Self::ParentalStatus => "parentalStatus",
            Self::StressLevel => "stressLevel",
            Self::Mood => "mood",
            Self::SleepSchedule => "sleepSchedule",
            Self::FitnessLevel => "fitnessLevel",
            Self::DrinksCaffeine => "drinksCaffeine",
            Self::DrinksAlcohol => "drinksAlcohol",
            Self::Smokes => "smokes",
            Self::TravelFrequency => "travelFrequency",
            Self::PersonalityFlags => "personalityFlags",
            Self::Interests => "interests",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
