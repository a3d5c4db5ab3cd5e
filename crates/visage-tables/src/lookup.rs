//! Shared lookup result and matching helpers.

use std::fmt;

/// Result of a table lookup. `entry` is never absent: a miss carries the
/// table default and `matched == false`, so the fallback shows up in reasoning.
#[derive(Debug)]
pub struct Lookup<T: 'static> {
    pub entry: &'static T,
    /// The table key or pattern that produced `entry`.
    pub key: &'static str,
    pub matched: bool,
}

impl<T> Clone for Lookup<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Lookup<T> {}

impl<T> Lookup<T> {
    pub fn hit(entry: &'static T, key: &'static str) -> Self {
        Self {
            entry,
            key,
            matched: true,
        }
    }

    pub fn miss(default: &'static T, key: &'static str) -> Self {
        Self {
            entry: default,
            key,
            matched: false,
        }
    }
}

impl<T> fmt::Display for Lookup<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matched {
            write!(f, "matched '{}'", self.key)
        } else {
            write!(f, "no match, default '{}'", self.key)
        }
    }
}

/// Normalize a structured key for exact matching.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Longest case-insensitive substring match over `rows`.
pub(crate) fn longest_substring_match<T>(
    haystack: &str,
    rows: &'static [T],
    pattern: impl Fn(&T) -> &'static str,
) -> Option<&'static T> {
    let haystack = haystack.to_lowercase();
    let mut best: Option<(&'static T, usize)> = None;
    for row in rows {
        let p = pattern(row);
        if haystack.contains(p) && best.map_or(true, |(_, len)| p.len() > len) {
            best = Some((row, p.len()));
        }
    }
    best.map(|(row, _)| row)
}

#[cfg(test)]
mod tests {
    use super::*;

    static ROWS: [&str; 3] = ["rtx 4070", "rtx 4070 ti", "ti"];

    #[test]
    fn longest_pattern_wins() {
        let hit = longest_substring_match("NVIDIA GeForce RTX 4070 Ti SUPER", &ROWS, |r| *r);
        assert_eq!(hit, Some(&"rtx 4070 ti"));
    }

    #[test]
    fn no_pattern_no_match() {
        assert!(longest_substring_match("Mali-G78", &ROWS, |r| *r).is_none());
    }

    #[test]
    fn normalize_trims_and_lowers() {
        assert_eq!(normalize_key("  San Francisco "), "san francisco");
    }
}
