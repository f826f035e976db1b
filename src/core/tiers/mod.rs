//! Package tier ladder and tier name resolution
//!
//! Tiers form an ordered ladder (lower index = more basic); the order defines
//! the inheritance direction for service eligibility.

use crate::core::catalog::Package;

/// Normalize a tier name for lookup: lower-case, whitespace runs collapsed to
/// underscores. "Allin Black", "allin_black" and "allin  black" all resolve
/// identically.
pub fn normalize_tier_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// The canonical ordered list of package tiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLadder {
    levels: Vec<String>,
}

impl Default for PackageLadder {
    fn default() -> Self {
        Self::new(["basis", "gold", "allin", "allin_black"])
    }
}

impl PackageLadder {
    /// Build a ladder from an ordered list of tier names.
    pub fn new<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            levels: levels
                .into_iter()
                .map(|l| normalize_tier_name(l.as_ref()))
                .collect(),
        }
    }

    /// Build a ladder from catalogue `Package` rows: active packages only,
    /// ordered by `order_index`.
    pub fn from_packages(packages: &[Package]) -> Self {
        let mut active: Vec<&Package> = packages.iter().filter(|p| p.active).collect();
        active.sort_by_key(|p| p.order_index);
        Self::new(active.iter().map(|p| p.name.as_str()))
    }

    /// Position of a tier in the ladder, or `None` when the name is
    /// unrecognized. Callers must treat `None` as "excluded", never as tier 0.
    pub fn tier_index(&self, tier_name: &str) -> Option<usize> {
        let normalized = normalize_tier_name(tier_name);
        self.levels.iter().position(|l| *l == normalized)
    }

    /// The normalized tier names, lowest first.
    pub fn levels(&self) -> &[String] {
        &self.levels
    }

    /// The most basic tier, if the ladder is non-empty.
    pub fn lowest(&self) -> Option<&str> {
        self.levels.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
