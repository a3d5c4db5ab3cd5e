//! Closed label sets per dimension.

use visage_core::constants::UNKNOWN;
use visage_core::Dimension;

use crate::age::AGE_LABELS;
use crate::device::{DEVICE_AGE_LABELS, DEVICE_TIER_LABELS};
use crate::income::INCOME_LABELS;
use crate::lifestyle::HABIT_LABELS;
use crate::occupation::{
    EDUCATION_LABELS, GENERAL_PROFESSIONAL, LIKELY_PREFIX, OCCUPATION_LABELS, TIE_SEPARATOR,
};
use crate::parental::PARENTAL_LABELS;
use crate::personality::{FLAG_LABELS, INTEREST_LABELS, LIST_SEPARATOR};
use crate::state::{MOOD_LABELS, SLEEP_LABELS, STRESS_LABELS};

/// Atomic labels a dimension may take, excluding `"Unknown"`.
///
/// Occupation includes every qualified and paired form. Personality flags and
/// interests are set-valued; their values join atomic labels with `", "`.
pub fn labels_for(dimension: Dimension) -> Vec<String> {
    let atoms: &[&str] = match dimension {
        Dimension::Age => AGE_LABELS,
        Dimension::Income => INCOME_LABELS,
        Dimension::Occupation => return occupation_labels(),
        Dimension::Education => EDUCATION_LABELS,
        Dimension::DeviceTier => DEVICE_TIER_LABELS,
        Dimension::DeviceAge => DEVICE_AGE_LABELS,
        Dimension::ParentalStatus => PARENTAL_LABELS,
        Dimension::StressLevel => STRESS_LABELS,
        Dimension::Mood => MOOD_LABELS,
        Dimension::SleepSchedule => SLEEP_LABELS,
        Dimension::FitnessLevel => &[],
        Dimension::DrinksCaffeine
        | Dimension::DrinksAlcohol
        | Dimension::Smokes
        | Dimension::TravelFrequency => HABIT_LABELS,
        Dimension::PersonalityFlags => FLAG_LABELS,
        Dimension::Interests => &INTEREST_LABELS,
    };
    atoms.iter().map(|s| s.to_string()).collect()
}

fn occupation_labels() -> Vec<String> {
    let mut out: Vec<String> = OCCUPATION_LABELS.iter().map(|s| s.to_string()).collect();
    out.extend(
        OCCUPATION_LABELS
            .iter()
            .map(|s| format!("{LIKELY_PREFIX}{s}")),
    );
    for a in OCCUPATION_LABELS {
        for b in OCCUPATION_LABELS {
            if a != b {
                out.push(format!("{a}{TIE_SEPARATOR}{b}"));
            }
        }
    }
    out.push(GENERAL_PROFESSIONAL.to_string());
    out
}

/// Whether `value` belongs to the dimension's closed set.
pub fn is_valid_label(dimension: Dimension, value: &str) -> bool {
    if value == UNKNOWN {
        return true;
    }
    let allowed = labels_for(dimension);
    match dimension {
        Dimension::PersonalityFlags | Dimension::Interests => {
            let parts: Vec<&str> = value.split(LIST_SEPARATOR).collect();
            let mut seen: Vec<&str> = Vec::with_capacity(parts.len());
            for part in parts {
                if seen.contains(&part) || !allowed.iter().any(|a| a == part) {
                    return false;
                }
                seen.push(part);
            }
            !seen.is_empty()
        }
        _ => allowed.iter().any(|a| a == value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_is_always_valid() {
        for dimension in Dimension::ALL {
            assert!(is_valid_label(dimension, UNKNOWN));
        }
    }

    #[test]
    fn occupation_forms() {
        assert!(is_valid_label(Dimension::Occupation, "Software Developer"));
        assert!(is_valid_label(Dimension::Occupation, "Likely Designer"));
        assert!(is_valid_label(Dimension::Occupation, "Student or Freelancer"));
        assert!(is_valid_label(Dimension::Occupation, "General Professional"));
        assert!(!is_valid_label(Dimension::Occupation, "Student or Student"));
        assert!(!is_valid_label(Dimension::Occupation, "Astronaut"));
    }

    #[test]
    fn set_valued_dimensions() {
        assert!(is_valid_label(Dimension::Interests, "Technology, Gaming"));
        assert!(!is_valid_label(Dimension::Interests, "Technology, Technology"));
        assert!(!is_valid_label(Dimension::PersonalityFlags, "Grumpy"));
    }

    #[test]
    fn fitness_only_admits_unknown() {
        assert!(labels_for(Dimension::FitnessLevel).is_empty());
        assert!(!is_valid_label(Dimension::FitnessLevel, "Athletic"));
    }
}
