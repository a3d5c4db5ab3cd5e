//! GPU renderer substring → tier, launch MSRP (USD) and release year.

use std::fmt;

use crate::lookup::{longest_substring_match, Lookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GpuTier {
    Integrated,
    Entry,
    Mid,
    High,
    Flagship,
    Workstation,
}

impl GpuTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Integrated => "integrated",
            Self::Entry => "entry",
            Self::Mid => "mid-range",
            Self::High => "high-end",
            Self::Flagship => "flagship",
            Self::Workstation => "workstation",
        }
    }

    /// Discrete gaming-class card.
    pub fn is_gaming(&self) -> bool {
        matches!(self, Self::High | Self::Flagship)
    }
}

impl fmt::Display for GpuTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuEntry {
    pub pattern: &'static str,
    pub tier: GpuTier,
    pub msrp: u32,
    pub release_year: i32,
}

impl GpuEntry {
    /// Years between release and `reference_year`, floored at zero.
    pub fn age_years(&self, reference_year: i32) -> u32 {
        (reference_year - self.release_year).max(0) as u32
    }
}

const fn gpu(pattern: &'static str, tier: GpuTier, msrp: u32, release_year: i32) -> GpuEntry {
    GpuEntry {
        pattern,
        tier,
        msrp,
        release_year,
    }
}

use GpuTier::*;

/// Patterns are lower-case.
pub static GPU_TABLE: &[GpuEntry] = &[
    // NVIDIA GeForce 50 / 40 / 30 / 20 series
    gpu("rtx 5090", Flagship, 1999, 2025),
    gpu("rtx 5080", Flagship, 999, 2025),
    gpu("rtx 5070 ti", High, 749, 2025),
    gpu("rtx 5070", High, 549, 2025),
    gpu("rtx 4090", Flagship, 1599, 2022),
    gpu("rtx 4080", Flagship, 1199, 2022),
    gpu("rtx 4070 ti", High, 799, 2023),
    gpu("rtx 4070", High, 599, 2023),
    gpu("rtx 4060 ti", Mid, 399, 2023),
    gpu("rtx 4060", Mid, 299, 2023),
    gpu("rtx 3090", Flagship, 1499, 2020),
    gpu("rtx 3080", High, 699, 2020),
    gpu("rtx 3070", High, 499, 2020),
    gpu("rtx 3060", Mid, 329, 2021),
    gpu("rtx 3050", Entry, 249, 2022),
    gpu("rtx 2080", High, 699, 2018),
    gpu("rtx 2070", Mid, 499, 2018),
    gpu("rtx 2060", Mid, 349, 2019),
    // NVIDIA GeForce GTX
    gpu("gtx 1660", Entry, 219, 2019),
    gpu("gtx 1650", Entry, 149, 2019),
    gpu("gtx 1080", Mid, 599, 2016),
    gpu("gtx 1070", Mid, 379, 2016),
    gpu("gtx 1060", Entry, 249, 2016),
    gpu("gtx 1050", Entry, 109, 2016),
    gpu("gtx 970", Entry, 329, 2014),
    // NVIDIA professional
    gpu("rtx a6000", Workstation, 4650, 2020),
    gpu("rtx a5000", Workstation, 2250, 2021),
    gpu("rtx a4000", Workstation, 1000, 2021),
    gpu("quadro", Workstation, 900, 2018),
    // AMD Radeon
    gpu("rx 7900", Flagship, 999, 2022),
    gpu("rx 7800", High, 499, 2023),
    gpu("rx 7700", Mid, 449, 2023),
    gpu("rx 7600", Mid, 269, 2023),
    gpu("rx 6900", High, 999, 2020),
    gpu("rx 6800", High, 579, 2020),
    gpu("rx 6700", Mid, 479, 2021),
    gpu("rx 6600", Mid, 329, 2021),
    gpu("rx 580", Entry, 229, 2017),
    gpu("rx 570", Entry, 169, 2017),
    gpu("radeon pro", Workstation, 800, 2019),
    gpu("radeon graphics", Integrated, 0, 2020),
    gpu("vega", Integrated, 0, 2018),
    // Intel
    gpu("arc a770", Mid, 329, 2022),
    gpu("arc a750", Mid, 289, 2022),
    gpu("iris xe", Integrated, 0, 2020),
    gpu("uhd graphics", Integrated, 0, 2017),
    gpu("hd graphics", Integrated, 0, 2013),
    // Apple silicon (value of the GPU share of the SoC)
    gpu("apple m4 max", Workstation, 1400, 2024),
    gpu("apple m4", High, 500, 2024),
    gpu("apple m3 max", Workstation, 1200, 2023),
    gpu("apple m3 pro", High, 700, 2023),
    gpu("apple m3", High, 400, 2023),
    gpu("apple m2 max", Workstation, 1000, 2023),
    gpu("apple m2 pro", High, 600, 2023),
    gpu("apple m2", Mid, 350, 2022),
    gpu("apple m1 max", High, 900, 2021),
    gpu("apple m1 pro", High, 550, 2021),
    gpu("apple m1", Mid, 300, 2020),
    gpu("apple gpu", Mid, 300, 2020),
    // Mobile
    gpu("adreno", Entry, 0, 2020),
    gpu("mali", Entry, 0, 2019),
    gpu("powervr", Entry, 0, 2016),
    // Software renderers
    gpu("swiftshader", Integrated, 0, 2015),
    gpu("llvmpipe", Integrated, 0, 2015),
];

/// Used when no pattern matches.
pub static DEFAULT_GPU: GpuEntry = gpu("unrecognized gpu", Mid, 250, 2020);

/// Case-insensitive substring lookup of a renderer string.
pub fn lookup(renderer: &str) -> Lookup<GpuEntry> {
    match longest_substring_match(renderer, GPU_TABLE, |e| e.pattern) {
        Some(entry) => Lookup::hit(entry, entry.pattern),
        None => Lookup::miss(&DEFAULT_GPU, DEFAULT_GPU.pattern),
    }
}
