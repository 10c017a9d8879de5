//! Trade use cases.
//!
//! Every shop interaction counts how many stacks in an inventory are the
//! listing's item before any currency or item changes hands.

mod count_matching;
mod error;
mod types;
mod validate_trade;

pub use count_matching::count_matching;
pub use error::TradeError;
pub use types::TradeCheck;
pub use validate_trade::ValidateTrade;
