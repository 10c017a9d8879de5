//! Item matcher settings value object
//!
//! Settings are produced once (from the environment or from stored JSON) and
//! handed to the engine as a value. Nothing reads them globally afterwards.
//!
//! # Environment
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `TRADEPOST_MATCHER_WORK_TYPE` | `structural` (default) or `platform` |
//! | `TRADEPOST_MATCHER_CACHE_CAPACITY` | memoized results kept, `0` disables |
//! | `TRADEPOST_MATCH_<CATEGORY>` | `true`/`false` per category, e.g. `TRADEPOST_MATCH_DISPLAY_NAME` |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::match_filter::{MatchCategory, MatchFilter};
use crate::error::DomainError;

/// Which matcher implementation compares items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherWorkType {
    /// Raw platform equality; filters are ignored.
    Platform,
    /// Category-by-category structural comparison.
    #[default]
    Structural,
}

impl fmt::Display for MatcherWorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Platform => write!(f, "platform"),
            Self::Structural => write!(f, "structural"),
        }
    }
}

impl FromStr for MatcherWorkType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platform" | "bukkit" | "0" => Ok(Self::Platform),
            "structural" | "quickshop" | "1" => Ok(Self::Structural),
            other => Err(DomainError::parse(format!(
                "Unknown matcher work type: {}",
                other
            ))),
        }
    }
}

fn default_cache_capacity() -> usize {
    4096
}

/// All configurable matcher settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherSettings {
    #[serde(default)]
    pub work_type: MatcherWorkType,

    /// Categories evaluated by `matches(reference, candidate)`
    #[serde(default)]
    pub filter: MatchFilter,

    /// Maximum memoized comparisons; 0 disables memoization
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            work_type: MatcherWorkType::default(),
            filter: MatchFilter::default(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

impl MatcherSettings {
    /// Load from environment variables, using defaults for missing values
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup. Unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let options: BTreeMap<String, bool> = MatchCategory::ALL
            .into_iter()
            .filter_map(|category| {
                lookup(category_env_var(category).as_str())
                    .and_then(|raw| raw.trim().parse::<bool>().ok())
                    .map(|enabled| (category.key().to_string(), enabled))
            })
            .collect();
        // Canonical keys always parse.
        let filter = MatchFilter::from_options(&options).unwrap_or_default();

        Self {
            work_type: lookup_or(&lookup, "TRADEPOST_MATCHER_WORK_TYPE", defaults.work_type),
            filter,
            cache_capacity: lookup_or(
                &lookup,
                "TRADEPOST_MATCHER_CACHE_CAPACITY",
                defaults.cache_capacity,
            ),
        }
    }

    /// Whether the raw platform equality override is active
    pub fn uses_platform_equality(&self) -> bool {
        self.work_type == MatcherWorkType::Platform
    }
}

/// `display-name` becomes `TRADEPOST_MATCH_DISPLAY_NAME`
pub fn category_env_var(category: MatchCategory) -> String {
    format!(
        "TRADEPOST_MATCH_{}",
        category.key().replace('-', "_").to_ascii_uppercase()
    )
}

fn lookup_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
