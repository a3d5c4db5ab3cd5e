//! Country → lifestyle reference statistics (smoking rate, alcohol, coffee
//! and travel culture tiers).

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::lookup::{normalize_key, Lookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CultureLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl CultureLevel {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }

    /// Prior probability-like score (0..=100) contributed by this tier.
    pub fn prior(&self) -> f64 {
        match self {
            Self::Low => 10.0,
            Self::Moderate => 45.0,
            Self::High => 65.0,
            Self::VeryHigh => 80.0,
        }
    }
}

impl fmt::Display for CultureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegionEntry {
    /// Display name; lower-cased for indexing.
    pub country: &'static str,
    /// Adult daily smokers, percent.
    pub smoking_rate: f64,
    pub alcohol_culture: CultureLevel,
    pub coffee_culture: CultureLevel,
    pub travel_propensity: CultureLevel,
}

const fn region(
    country: &'static str,
    smoking_rate: f64,
    alcohol_culture: CultureLevel,
    coffee_culture: CultureLevel,
    travel_propensity: CultureLevel,
) -> RegionEntry {
    RegionEntry {
        country,
        smoking_rate,
        alcohol_culture,
        coffee_culture,
        travel_propensity,
    }
}

use CultureLevel::*;

pub static REGION_TABLE: &[RegionEntry] = &[
    region("United States", 11.5, Moderate, High, High),
    region("Canada", 10.0, Moderate, High, High),
    region("Mexico", 13.0, Moderate, Moderate, Moderate),
    region("Brazil", 12.0, Moderate, VeryHigh, Moderate),
    region("Argentina", 22.0, Moderate, Moderate, Moderate),
    region("United Kingdom", 13.0, High, Moderate, VeryHigh),
    region("Ireland", 16.0, VeryHigh, Moderate, High),
    region("Germany", 22.0, High, High, VeryHigh),
    region("France", 25.0, High, High, High),
    region("Spain", 23.0, High, High, High),
    region("Italy", 20.0, High, VeryHigh, High),
    region("Netherlands", 17.0, High, VeryHigh, VeryHigh),
    region("Sweden", 10.0, Moderate, VeryHigh, VeryHigh),
    region("Finland", 13.0, High, VeryHigh, High),
    region("Norway", 9.0, Moderate, VeryHigh, VeryHigh),
    region("Denmark", 14.0, High, VeryHigh, VeryHigh),
    region("Switzerland", 20.0, High, VeryHigh, VeryHigh),
    region("Poland", 24.0, High, Moderate, Moderate),
    region("Czech Republic", 29.0, VeryHigh, Moderate, Moderate),
    region("Russia", 28.0, High, Low, Moderate),
    region("Ukraine", 24.0, High, Moderate, Low),
    region("Turkey", 30.0, Low, High, Moderate),
    region("Greece", 33.0, Moderate, High, Moderate),
    region("Israel", 20.0, Moderate, High, High),
    region("Saudi Arabia", 14.0, Low, High, Moderate),
    region("United Arab Emirates", 9.0, Low, High, VeryHigh),
    region("Qatar", 12.0, Low, High, VeryHigh),
    region("Iran", 11.0, Low, Low, Low),
    region("Pakistan", 20.0, Low, Low, Low),
    region("India", 10.0, Low, Low, Moderate),
    region("China", 25.0, Moderate, Low, Moderate),
    region("Japan", 17.0, High, High, Moderate),
    region("South Korea", 19.0, VeryHigh, VeryHigh, High),
    region("Indonesia", 37.0, Low, Moderate, Low),
    region("Vietnam", 23.0, High, High, Low),
    region("Australia", 11.0, High, High, VeryHigh),
    region("New Zealand", 9.5, High, High, VeryHigh),
    region("South Africa", 20.0, Moderate, Moderate, Low),
    region("Nigeria", 5.0, Moderate, Low, Low),
    region("Egypt", 22.0, Low, Moderate, Low),
];

pub static DEFAULT_REGION: RegionEntry =
    region("Global average", 20.0, Moderate, Moderate, Moderate);

/// Common alternate spellings and codes → canonical lower-case country key.
static REGION_ALIASES: &[(&str, &str)] = &[
    ("usa", "united states"),
    ("us", "united states"),
    ("united states of america", "united states"),
    ("uk", "united kingdom"),
    ("gb", "united kingdom"),
    ("great britain", "united kingdom"),
    ("england", "united kingdom"),
    ("uae", "united arab emirates"),
    ("ksa", "saudi arabia"),
    ("korea", "south korea"),
    ("republic of korea", "south korea"),
    ("czechia", "czech republic"),
    ("russian federation", "russia"),
    ("türkiye", "turkey"),
    ("holland", "netherlands"),
];

static REGION_INDEX: Lazy<FxHashMap<String, &'static RegionEntry>> = Lazy::new(|| {
    let mut index: FxHashMap<String, &'static RegionEntry> = REGION_TABLE
        .iter()
        .map(|e| (e.country.to_lowercase(), e))
        .collect();
    for (alias, canonical) in REGION_ALIASES {
        if let Some(entry) = index.get(*canonical).copied() {
            index.insert((*alias).to_string(), entry);
        }
    }
    index
});

/// Exact (case-insensitive) country lookup, aliases included.
pub fn lookup(country: &str) -> Lookup<RegionEntry> {
    match REGION_INDEX.get(&normalize_key(country)) {
        Some(entry) => Lookup::hit(entry, entry.country),
        None => Lookup::miss(&DEFAULT_REGION, DEFAULT_REGION.country),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saudi_arabia_has_low_alcohol_culture() {
        let hit = lookup("Saudi Arabia");
        assert!(hit.matched);
        assert_eq!(hit.entry.alcohol_culture, CultureLevel::Low);
    }

    #[test]
    fn aliases_resolve_to_canonical_rows() {
        assert_eq!(lookup("USA").entry.country, "United States");
        assert_eq!(lookup("uk").entry.country, "United Kingdom");
        assert_eq!(lookup("UAE").entry.alcohol_culture, CultureLevel::Low);
    }

    #[test]
    fn unknown_country_uses_global_average() {
        let miss = lookup("Atlantis");
        assert!(!miss.matched);
        assert_eq!(miss.entry.country, "Global average");
        assert_eq!(miss.entry.alcohol_culture, CultureLevel::Moderate);
    }

    #[test]
    fn culture_priors_are_ordered() {
        assert!(CultureLevel::Low.prior() < CultureLevel::Moderate.prior());
        assert!(CultureLevel::High.prior() < CultureLevel::VeryHigh.prior());
    }
}
