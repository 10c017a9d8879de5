//! Tradepost Engine library.
//!
//! Item equivalence matching and the trade checks built on it.
//!
//! ## Structure
//!
//! - `matching/` - The item equivalence matchers
//! - `use_cases/` - User story orchestration over the matchers
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod matching;
pub mod use_cases;

/// Test fixtures module for item builders and JSON fixtures.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use matching::{build_matcher, ItemMatcher};
