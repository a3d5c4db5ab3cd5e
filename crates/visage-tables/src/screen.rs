//! Screen resolution `"WxH"` → device class.

use std::fmt;

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::lookup::Lookup;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenClass {
    Mobile,
    Tablet,
    LowRes,
    Laptop,
    Desktop,
    Qhd,
    UltraWide,
    FourK,
    Unclassified,
}

impl ScreenClass {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::LowRes => "low-resolution",
            Self::Laptop => "laptop",
            Self::Desktop => "full-hd desktop",
            Self::Qhd => "qhd",
            Self::UltraWide => "ultrawide",
            Self::FourK => "4k",
            Self::Unclassified => "unclassified",
        }
    }

    /// QHD and above.
    pub fn is_high_end(&self) -> bool {
        matches!(self, Self::Qhd | Self::UltraWide | Self::FourK)
    }
}

impl fmt::Display for ScreenClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenEntry {
    pub resolution: &'static str,
    pub class: ScreenClass,
}

const fn screen(resolution: &'static str, class: ScreenClass) -> ScreenEntry {
    ScreenEntry { resolution, class }
}

use ScreenClass::*;

pub static SCREEN_TABLE: &[ScreenEntry] = &[
    // Phones (CSS pixels, portrait)
    screen("320x568", Mobile),
    screen("360x640", Mobile),
    screen("360x780", Mobile),
    screen("360x800", Mobile),
    screen("375x667", Mobile),
    screen("375x812", Mobile),
    screen("390x844", Mobile),
    screen("393x852", Mobile),
    screen("412x915", Mobile),
    screen("414x896", Mobile),
    screen("428x926", Mobile),
    screen("430x932", Mobile),
    // Tablets
    screen("768x1024", Tablet),
    screen("810x1080", Tablet),
    screen("820x1180", Tablet),
    screen("834x1194", Tablet),
    screen("800x1280", Tablet),
    screen("1024x1366", Tablet),
    // Low resolution and laptops
    screen("1024x768", LowRes),
    screen("1280x720", LowRes),
    screen("1280x800", Laptop),
    screen("1366x768", Laptop),
    screen("1440x900", Laptop),
    screen("1536x864", Laptop),
    screen("1470x956", Laptop),
    screen("1512x982", Laptop),
    screen("1600x900", Laptop),
    screen("1728x1117", Laptop),
    // Desktop
    screen("1680x1050", Desktop),
    screen("1920x1080", Desktop),
    screen("1920x1200", Desktop),
    // High end
    screen("2560x1440", Qhd),
    screen("2560x1600", Qhd),
    screen("2880x1800", Qhd),
    screen("2560x1080", UltraWide),
    screen("3440x1440", UltraWide),
    screen("5120x1440", UltraWide),
    screen("3840x2160", FourK),
    screen("4096x2160", FourK),
    screen("5120x2880", FourK),
];

pub static DEFAULT_SCREEN: ScreenEntry = screen("unclassified resolution", Unclassified);

static SCREEN_INDEX: Lazy<FxHashMap<&'static str, &'static ScreenEntry>> =
    Lazy::new(|| SCREEN_TABLE.iter().map(|e| (e.resolution, e)).collect());

/// Exact lookup of `"WxH"`; the rotated `"HxW"` form is tried second.
pub fn lookup(width: u32, height: u32) -> Lookup<ScreenEntry> {
    for key in [format!("{width}x{height}"), format!("{height}x{width}")] {
        if let Some(entry) = SCREEN_INDEX.get(key.as_str()) {
            return Lookup::hit(entry, entry.resolution);
        }
    }
    Lookup::miss(&DEFAULT_SCREEN, DEFAULT_SCREEN.resolution)
}
