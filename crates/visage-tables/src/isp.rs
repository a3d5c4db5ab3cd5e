//! ISP name substring → connection tier.

use std::fmt;

use crate::lookup::{longest_substring_match, Lookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IspTier {
    /// Residential fiber / premium broadband.
    Premium,
    Business,
    Standard,
    Budget,
    Mobile,
    /// University and research networks.
    Education,
    /// Cloud or datacenter egress (often a VPN or a bot).
    Hosting,
}

impl IspTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Business => "business",
            Self::Standard => "standard",
            Self::Budget => "budget",
            Self::Mobile => "mobile",
            Self::Education => "education",
            Self::Hosting => "hosting",
        }
    }
}

impl fmt::Display for IspTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IspEntry {
    pub pattern: &'static str,
    pub tier: IspTier,
}

const fn isp(pattern: &'static str, tier: IspTier) -> IspEntry {
    IspEntry { pattern, tier }
}

use IspTier::*;

pub static ISP_TABLE: &[IspEntry] = &[
    isp("google fiber", Premium),
    isp("verizon fios", Premium),
    isp("at&t fiber", Premium),
    isp("sonic", Premium),
    isp("starlink", Premium),
    isp("init7", Premium),
    isp("hyperoptic", Premium),
    isp("comcast business", Business),
    isp("spectrum business", Business),
    isp("level 3", Business),
    isp("lumen", Business),
    isp("zayo", Business),
    isp("comcast", Standard),
    isp("xfinity", Standard),
    isp("spectrum", Standard),
    isp("charter", Standard),
    isp("cox", Standard),
    isp("at&t", Standard),
    isp("verizon", Standard),
    isp("centurylink", Standard),
    isp("virgin media", Standard),
    isp("sky broadband", Standard),
    isp("british telecommunications", Standard),
    isp("deutsche telekom", Standard),
    isp("orange", Standard),
    isp("free sas", Standard),
    isp("telefonica", Standard),
    isp("rogers", Standard),
    isp("bell canada", Standard),
    isp("telstra", Standard),
    isp("frontier", Budget),
    isp("hughesnet", Budget),
    isp("viasat", Budget),
    isp("cricket", Budget),
    isp("boost mobile", Budget),
    isp("metro by t-mobile", Budget),
    isp("t-mobile", Mobile),
    isp("vodafone", Mobile),
    isp("jio", Mobile),
    isp("airtel", Mobile),
    isp("mobile", Mobile),
    isp("wireless", Mobile),
    isp("cellular", Mobile),
    isp("university", Education),
    isp("college", Education),
    isp("institute of technology", Education),
    isp("research network", Education),
    isp("amazon", Hosting),
    isp("aws", Hosting),
    isp("google cloud", Hosting),
    isp("microsoft azure", Hosting),
    isp("digitalocean", Hosting),
    isp("hetzner", Hosting),
    isp("ovh", Hosting),
    isp("linode", Hosting),
    isp("m247", Hosting),
    isp("datacamp", Hosting),
];

pub static DEFAULT_ISP: IspEntry = isp("unrecognized isp", Standard);

/// Case-insensitive substring lookup of an ISP / AS organisation name.
pub fn lookup(name: &str) -> Lookup<IspEntry> {
    match longest_substring_match(name, ISP_TABLE, |e| e.pattern) {
        Some(entry) => Lookup::hit(entry, entry.pattern),
        None => Lookup::miss(&DEFAULT_ISP, DEFAULT_ISP.pattern),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fiber_beats_generic_carrier_name() {
        assert_eq!(lookup("Verizon Fios").entry.tier, IspTier::Premium);
        assert_eq!(lookup("Verizon Wireless").entry.tier, IspTier::Mobile);
    }

    #[test]
    fn metro_brand_is_budget_not_mobile() {
        assert_eq!(lookup("Metro by T-Mobile").entry.tier, IspTier::Budget);
    }

    #[test]
    fn university_network_is_education() {
        assert_eq!(lookup("Stanford University").entry.tier, IspTier::Education);
    }

    #[test]
    fn unknown_isp_defaults_to_standard() {
        let miss = lookup("Tiny Local Coop");
        assert!(!miss.matched);
        assert_eq!(miss.entry.tier, IspTier::Standard);
    }
}
