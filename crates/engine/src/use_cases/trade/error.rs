//! Trade validation errors.

use crate::infrastructure::ports::RepoError;
use tradepost_domain::ShopId;

/// Errors that can occur while validating a trade.
#[derive(Debug, thiserror::Error)]
pub enum TradeError {
    #[error("Shop not found: {0}")]
    ShopNotFound(ShopId),
    #[error("Trade quantity must be positive")]
    InvalidQuantity,
    #[error("Not enough matching items: {matched} of {requested}")]
    InsufficientItems { matched: u32, requested: u32 },
    #[error("Trade total overflows: {quantity} x {unit_price}")]
    PriceOverflow { quantity: u32, unit_price: u64 },
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
