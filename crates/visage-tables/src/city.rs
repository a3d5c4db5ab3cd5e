//! City name → cost of living, tech-hub score and income multiplier, plus the
//! keyword lists used to read family-oriented versus single-oriented areas.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::lookup::{normalize_key, Lookup};

#[derive(Debug, Clone, PartialEq)]
pub struct CityEntry {
    /// Lower-case canonical name.
    pub name: &'static str,
    /// 100 = US national average.
    pub cost_of_living_index: f64,
    /// 0..=10.
    pub tech_hub_score: u8,
    pub avg_income_multiplier: f64,
}

const fn city(
    name: &'static str,
    cost_of_living_index: f64,
    tech_hub_score: u8,
    avg_income_multiplier: f64,
) -> CityEntry {
    CityEntry {
        name,
        cost_of_living_index,
        tech_hub_score,
        avg_income_multiplier,
    }
}

pub static CITY_TABLE: &[CityEntry] = &[
    // North America
    city("san francisco", 190.0, 10, 1.5),
    city("san jose", 180.0, 10, 1.45),
    city("palo alto", 200.0, 10, 1.6),
    city("seattle", 170.0, 9, 1.35),
    city("new york", 185.0, 8, 1.4),
    city("boston", 160.0, 8, 1.3),
    city("washington", 150.0, 6, 1.3),
    city("los angeles", 165.0, 7, 1.25),
    city("san diego", 155.0, 6, 1.2),
    city("austin", 125.0, 8, 1.15),
    city("denver", 130.0, 6, 1.1),
    city("chicago", 120.0, 6, 1.05),
    city("miami", 135.0, 4, 1.0),
    city("atlanta", 110.0, 5, 1.0),
    city("dallas", 105.0, 5, 1.0),
    city("houston", 100.0, 4, 0.98),
    city("phoenix", 105.0, 4, 0.95),
    city("detroit", 85.0, 3, 0.8),
    city("cleveland", 80.0, 2, 0.78),
    city("memphis", 78.0, 2, 0.75),
    city("toronto", 135.0, 7, 1.05),
    city("vancouver", 145.0, 6, 1.05),
    city("mexico city", 50.0, 4, 0.4),
    // Europe
    city("london", 175.0, 9, 1.35),
    city("zurich", 210.0, 7, 1.6),
    city("geneva", 200.0, 5, 1.55),
    city("dublin", 150.0, 8, 1.25),
    city("amsterdam", 150.0, 7, 1.2),
    city("paris", 150.0, 7, 1.15),
    city("munich", 135.0, 7, 1.2),
    city("berlin", 110.0, 8, 1.0),
    city("stockholm", 135.0, 8, 1.15),
    city("warsaw", 70.0, 6, 0.6),
    city("kyiv", 45.0, 6, 0.35),
    // Middle East, Asia, Oceania, Africa, South America
    city("tel aviv", 165.0, 9, 1.25),
    city("dubai", 130.0, 6, 1.2),
    city("riyadh", 85.0, 3, 0.9),
    city("singapore", 180.0, 9, 1.4),
    city("tokyo", 145.0, 8, 1.1),
    city("seoul", 130.0, 8, 1.0),
    city("sydney", 150.0, 6, 1.2),
    city("bangalore", 40.0, 8, 0.35),
    city("mumbai", 45.0, 5, 0.4),
    city("lagos", 40.0, 4, 0.25),
    city("sao paulo", 55.0, 5, 0.45),
];

pub static DEFAULT_CITY: CityEntry = city("unlisted city", 100.0, 3, 1.0);

/// Substrings marking suburbs and areas with high household-with-children share.
pub static FAMILY_CITY_KEYWORDS: &[&str] = &[
    "naperville",
    "plano",
    "irvine",
    "frisco",
    "cary",
    "round rock",
    "gilbert",
    "sugar land",
    "overland park",
    "fishers",
    "carmel",
    "olathe",
    "surrey",
    "mississauga",
    "milton keynes",
    "suburb",
    "township",
    "heights",
];

/// Substrings marking dense urban cores dominated by single households.
pub static SINGLE_CITY_KEYWORDS: &[&str] = &[
    "san francisco",
    "manhattan",
    "new york",
    "brooklyn",
    "las vegas",
    "austin",
    "seattle",
    "berlin",
    "amsterdam",
    "london",
    "tel aviv",
];

static CITY_INDEX: Lazy<FxHashMap<&'static str, &'static CityEntry>> =
    Lazy::new(|| CITY_TABLE.iter().map(|e| (e.name, e)).collect());

/// Exact (case-insensitive) city lookup.
pub fn lookup(name: &str) -> Lookup<CityEntry> {
    let key = normalize_key(name);
    match CITY_INDEX.get(key.as_str()) {
        Some(entry) => Lookup::hit(entry, entry.name),
        None => Lookup::miss(&DEFAULT_CITY, DEFAULT_CITY.name),
    }
}

/// First family-oriented keyword contained in `location`, if any.
pub fn family_keyword(location: &str) -> Option<&'static str> {
    let location = normalize_key(location);
    FAMILY_CITY_KEYWORDS
        .iter()
        .copied()
        .find(|k| location.contains(k))
}

/// First single-oriented keyword contained in `location`, if any.
pub fn single_keyword(location: &str) -> Option<&'static str> {
    let location = normalize_key(location);
    SINGLE_CITY_KEYWORDS
        .iter()
        .copied()
        .find(|k| location.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_ignores_case_and_padding() {
        let hit = lookup("  San Francisco ");
        assert!(hit.matched);
        assert_eq!(hit.entry.avg_income_multiplier, 1.5);
    }

    #[test]
    fn partial_names_do_not_match() {
        assert!(!lookup("San").matched);
        assert_eq!(lookup("Springfield").entry, &DEFAULT_CITY);
    }

    #[test]
    fn keyword_lists_detect_area_type() {
        assert_eq!(family_keyword("Naperville"), Some("naperville"));
        assert_eq!(single_keyword("Manhattan"), Some("manhattan"));
        assert_eq!(family_keyword("Paris"), None);
    }
}
