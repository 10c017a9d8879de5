//! Platform equality matcher.

use tradepost_domain::{Item, MatchFilter};

use super::ItemMatcher;

/// Delegates to the platform's native similarity check.
///
/// Selected when the deployment is configured for platform equality. The
/// filter is carried for interface parity and never consulted.
#[derive(Debug, Clone, Default)]
pub struct PlatformItemMatcher {
    default_filter: MatchFilter,
}

impl PlatformItemMatcher {
    pub fn new(default_filter: MatchFilter) -> Self {
        Self { default_filter }
    }
}

impl ItemMatcher for PlatformItemMatcher {
    fn name(&self) -> &'static str {
        "platform"
    }

    fn default_filter(&self) -> &MatchFilter {
        &self.default_filter
    }

    fn matches_with(&self, reference: &Item, candidate: &Item, _filter: &MatchFilter) -> bool {
        reference.normalized().is_similar(&candidate.normalized())
    }
}
