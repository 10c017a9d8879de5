//! Application state and composition.

use std::sync::Arc;

use tradepost_domain::MatcherSettings;

use crate::infrastructure::ports::ShopRepo;
use crate::matching::{build_matcher, ItemMatcher};
use crate::use_cases::ValidateTrade;

/// Main application state.
///
/// The matcher is built once from settings and shared by every use case.
pub struct App {
    pub matcher: Arc<dyn ItemMatcher>,
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub validate_trade: Arc<ValidateTrade>,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(settings: &MatcherSettings, shop_repo: Arc<dyn ShopRepo>) -> Self {
        let matcher = build_matcher(settings);

        let use_cases = UseCases {
            validate_trade: Arc::new(ValidateTrade::new(shop_repo, matcher.clone())),
        };

        Self { matcher, use_cases }
    }
}
