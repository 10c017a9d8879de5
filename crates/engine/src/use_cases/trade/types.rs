//! Trade validation result types.

use tradepost_domain::{ShopId, ShopKind};

/// Outcome of a successful trade validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeCheck {
    pub shop_id: ShopId,
    pub kind: ShopKind,
    /// Total amount across all matching stacks
    pub matched: u32,
    pub requested: u32,
    pub total_price: u64,
}
