//! Test fixture loader for Visage signal-bag scenarios, plus proptest
//! strategies that generate arbitrary bags.

pub mod strategies;

use serde::de::DeserializeOwned;
use std::path::PathBuf;
use visage_core::SignalBag;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("signal-bags").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load `signal-bags/<name>.json` as a [`SignalBag`].
pub fn load_signal_bag(name: &str) -> SignalBag {
    load_fixture(&format!("signal-bags/{name}.json"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in a fixture subdirectory, sorted by path.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            path.extension()
                .is_some_and(|ext| ext == "json")
                .then_some(path)
        })
        .collect();
    files.sort();
    files
}

/// Every signal-bag fixture as `(file stem, bag)`.
pub fn all_signal_bags() -> Vec<(String, SignalBag)> {
    list_fixtures("signal-bags")
        .into_iter()
        .map(|path| {
            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            let bag = load_signal_bag(&stem);
            (stem, bag)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures_root_exists() {
        assert!(fixtures_root().exists(), "test-fixtures directory not found");
    }

    #[test]
    fn all_signal_bag_files_exist() {
        let files = [
            "signal-bags/empty.json",
            "signal-bags/developer_workstation.json",
            "signal-bags/saudi_arabia_only.json",
            "signal-bags/family_suburb.json",
            "signal-bags/crypto_night_owl.json",
            "signal-bags/headless_bot.json",
            "signal-bags/malformed_values.json",
            "signal-bags/european_traveler.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn every_bag_parses() {
        let bags = all_signal_bags();
        assert_eq!(bags.len(), 8);
        let (_, empty) = bags.iter().find(|(name, _)| name == "empty").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn malformed_bag_keeps_well_typed_leaves() {
        let bag = load_signal_bag("malformed_values");
        assert_eq!(bag.hardware.screen_height, Some(1080));
        assert_eq!(bag.hardware.ram, Some(-3.0));
        assert_eq!(bag.hardware.platform, None);
        assert_eq!(bag.hardware.touch_points, None);
        assert_eq!(bag.behavioral.tab_switches, None);
        assert_eq!(bag.temporal.day_of_week, None);
        assert!(bag.vpn.detected.is_none());
    }

    #[test]
    fn developer_workstation_matches_reference_scenario() {
        let bag = load_signal_bag("developer_workstation");
        assert_eq!(bag.cpu_cores(), Some(16));
        assert_eq!(bag.ram_gb(), Some(64.0));
        assert_eq!(bag.hour(), Some(21));
        assert_eq!(bag.day_of_week(), Some(3));
        assert_eq!(bag.behavioral.dev_tools_open, Some(true));
    }
}
