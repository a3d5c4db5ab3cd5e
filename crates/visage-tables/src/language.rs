//! BCP-47 language tag → region, tech adoption, income tier and
//! professions that are over-represented among its speakers online.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::lookup::{normalize_key, Lookup};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Lower-case tag.
    pub tag: &'static str,
    pub region: &'static str,
    /// 0..=10.
    pub tech_adoption: u8,
    /// 1 (lowest) ..= 5 (highest).
    pub avg_income_tier: u8,
    pub likely_professions: &'static [&'static str],
}

const fn lang(
    tag: &'static str,
    region: &'static str,
    tech_adoption: u8,
    avg_income_tier: u8,
    likely_professions: &'static [&'static str],
) -> LanguageEntry {
    LanguageEntry {
        tag,
        region,
        tech_adoption,
        avg_income_tier,
        likely_professions,
    }
}

const DEV: &[&str] = &["Software Developer"];
const DEV_FIN: &[&str] = &["Software Developer", "Crypto/Finance"];
const OFFICE: &[&str] = &["Office Worker"];
const DESIGN: &[&str] = &["Designer"];
const NONE: &[&str] = &[];

pub static LANGUAGE_TABLE: &[LanguageEntry] = &[
    lang("en-us", "North America", 8, 4, OFFICE),
    lang("en-ca", "North America", 8, 4, OFFICE),
    lang("en-gb", "Western Europe", 8, 4, OFFICE),
    lang("en-au", "Oceania", 8, 4, OFFICE),
    lang("en-in", "South Asia", 7, 2, DEV),
    lang("en", "Anglosphere", 7, 3, NONE),
    lang("de-de", "Western Europe", 8, 4, OFFICE),
    lang("de-ch", "Western Europe", 9, 5, DEV_FIN),
    lang("de", "Western Europe", 8, 4, NONE),
    lang("fr-fr", "Western Europe", 7, 4, DESIGN),
    lang("fr-ca", "North America", 7, 4, NONE),
    lang("fr", "Francophonie", 6, 3, NONE),
    lang("es-es", "Southern Europe", 6, 3, NONE),
    lang("es-mx", "Latin America", 5, 2, NONE),
    lang("es", "Hispanophone", 5, 2, NONE),
    lang("pt-br", "Latin America", 6, 2, DEV),
    lang("pt", "Lusophone", 5, 2, NONE),
    lang("it", "Southern Europe", 6, 3, DESIGN),
    lang("nl", "Western Europe", 9, 4, DEV),
    lang("sv", "Nordics", 9, 4, DEV),
    lang("nb", "Nordics", 9, 5, NONE),
    lang("da", "Nordics", 9, 4, DESIGN),
    lang("fi", "Nordics", 9, 4, DEV),
    lang("pl", "Central Europe", 7, 3, DEV),
    lang("uk", "Eastern Europe", 7, 2, DEV),
    lang("ru", "Eastern Europe", 7, 2, DEV),
    lang("tr", "Middle East", 6, 2, NONE),
    lang("ar", "Middle East", 5, 3, NONE),
    lang("he", "Middle East", 9, 4, DEV),
    lang("hi", "South Asia", 5, 1, NONE),
    lang("zh-cn", "East Asia", 8, 3, DEV),
    lang("zh-tw", "East Asia", 8, 4, DEV),
    lang("zh", "East Asia", 8, 3, NONE),
    lang("ja", "East Asia", 8, 4, OFFICE),
    lang("ko", "East Asia", 9, 4, NONE),
    lang("vi", "Southeast Asia", 6, 2, DEV),
    lang("th", "Southeast Asia", 6, 2, NONE),
    lang("id", "Southeast Asia", 6, 2, NONE),
];

pub static DEFAULT_LANGUAGE: LanguageEntry = lang("unlisted language", "Unknown", 5, 3, NONE);

static LANGUAGE_INDEX: Lazy<FxHashMap<&'static str, &'static LanguageEntry>> =
    Lazy::new(|| LANGUAGE_TABLE.iter().map(|e| (e.tag, e)).collect());

/// Exact lookup of the full tag, then exact lookup of its primary subtag.
pub fn lookup(tag: &str) -> Lookup<LanguageEntry> {
    let key = normalize_key(tag).replace('_', "-");
    if let Some(entry) = LANGUAGE_INDEX.get(key.as_str()) {
        return Lookup::hit(entry, entry.tag);
    }
    let primary = key.split('-').next().unwrap_or_default();
    match LANGUAGE_INDEX.get(primary) {
        Some(entry) => Lookup::hit(entry, entry.tag),
        None => Lookup::miss(&DEFAULT_LANGUAGE, DEFAULT_LANGUAGE.tag),
    }
}
