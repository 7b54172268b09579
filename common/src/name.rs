//! Employee name normalization
//!
//! POS exports and payroll templates spell the same person differently
//! (`"S-Johnny Server"` vs `"s johnny  server"`). Both sides are reduced to a
//! [`NameKey`] before comparison.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    static ref NON_ALNUM_RE: Regex = Regex::new(r"[^0-9a-z]+").unwrap();
}

/// Placeholder POS accounts that are not employees
pub const IGNORED_PLACEHOLDERS: &[&str] = &[
    "H-R Host",
    "Online",
    "S-COMMON Server",
    "S-Johnny Server",
];

/// Normalized name used as the join key
pub type NameKey = String;

/// Lowercase, turn every non-alphanumeric run into one space, trim.
pub fn normalize(name: &str) -> NameKey {
    let lowered = name.trim().to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lowered, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized names excluded from matching and insertion
#[derive(Debug, Clone)]
pub struct IgnoreSet {
    keys: HashSet<NameKey>,
}

impl IgnoreSet {
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            keys: names.into_iter().map(normalize).collect(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::from_names(IGNORED_PLACEHOLDERS.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_basic() {
        assert_eq!(normalize("Jane Doe"), "jane doe");
        assert_eq!(normalize("  JANE   doe "), "jane doe");
        assert_eq!(normalize("O'Brien, Pat"), "o brien pat");
    }

    #[test]
    fn test_normalize_case_and_space_insensitive() {
        assert_eq!(normalize("  H-R   Host "), normalize("h r host"));
        assert_eq!(normalize("S-COMMON Server"), "s common server");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["  H-R   Host ", "Jane_Doe!!", "", "---", "Ana María 2"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", raw);
        }
    }

    #[test]
    fn test_normalize_punctuation_only() {
        assert_eq!(normalize("---"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_default_ignore_set() {
        let ignore = IgnoreSet::default();
        assert!(ignore.contains("h r host"));
        assert!(ignore.contains("online"));
        assert!(ignore.contains("s common server"));
        assert!(ignore.contains("s johnny server"));
        assert!(!ignore.contains("jane doe"));
    }

    #[test]
    fn test_ignore_set_matches_variants() {
        let ignore = IgnoreSet::default();
        assert!(ignore.contains(&normalize("ONLINE")));
        assert!(ignore.contains(&normalize("s_johnny   server")));
    }
}
