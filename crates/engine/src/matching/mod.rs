//! Item equivalence matching.
//!
//! Decides whether a candidate stack is "the same item" as a shop's
//! reference stack. Two strategies exist:
//!
//! - [`StructuralItemMatcher`] compares category by category under a
//!   [`MatchFilter`]
//! - [`PlatformItemMatcher`] defers to the platform's native similarity
//!
//! [`build_matcher`] picks one from [`MatcherSettings`] and optionally wraps
//! it in a [`MemoizedMatcher`].
//!
//! The reference operand always comes first. Several categories use
//! mapping-subset equality, so `matches(a, b)` and `matches(b, a)` may differ.

mod attributes;
mod capability;
mod memo;
mod normalize;
mod platform;
mod structural;
mod subset;
mod variants;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use tradepost_domain::{Item, MatchFilter, MatcherSettings};

pub use memo::{MatchFingerprint, MemoizedMatcher, DEFAULT_CACHE_CAPACITY};
pub use platform::PlatformItemMatcher;
pub use structural::{Mismatch, StructuralItemMatcher};
pub use subset::map_subset_matches;

/// Port for item equivalence checks.
#[cfg_attr(test, mockall::automock)]
pub trait ItemMatcher: Send + Sync {
    /// Short identifier used in logs and cache keys
    fn name(&self) -> &'static str;

    /// Filter applied by [`ItemMatcher::matches`]
    fn default_filter(&self) -> &MatchFilter;

    /// Whether `candidate` is equivalent to `reference` under `filter`.
    fn matches_with(&self, reference: &Item, candidate: &Item, filter: &MatchFilter) -> bool;

    /// Whether `candidate` is equivalent to `reference` under the default filter.
    fn matches(&self, reference: &Item, candidate: &Item) -> bool {
        self.matches_with(reference, candidate, self.default_filter())
    }
}

/// Build the matcher a deployment is configured for.
pub fn build_matcher(settings: &MatcherSettings) -> Arc<dyn ItemMatcher> {
    let base: Arc<dyn ItemMatcher> = if settings.uses_platform_equality() {
        Arc::new(PlatformItemMatcher::new(settings.filter.clone()))
    } else {
        Arc::new(StructuralItemMatcher::new(settings.filter.clone()))
    };

    tracing::info!(
        matcher = base.name(),
        categories = settings.filter.len(),
        cache_capacity = settings.cache_capacity,
        "Item matcher configured"
    );

    if settings.cache_capacity == 0 {
        base
    } else {
        Arc::new(MemoizedMatcher::new(base, settings.cache_capacity))
    }
}
