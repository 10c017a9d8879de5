//! Validate trade use case.
//!
//! Checks that an inventory holds enough stacks equivalent to a shop's item
//! to cover a trade, and prices the trade.

use std::sync::Arc;

use tradepost_domain::{Item, ShopId};

use crate::infrastructure::ports::ShopRepo;
use crate::matching::ItemMatcher;

use super::count_matching::count_matching;
use super::error::TradeError;
use super::types::TradeCheck;

/// Validate trade use case.
///
/// Orchestrates: listing lookup, equivalence counting, pricing.
pub struct ValidateTrade {
    shop_repo: Arc<dyn ShopRepo>,
    matcher: Arc<dyn ItemMatcher>,
}

impl ValidateTrade {
    pub fn new(shop_repo: Arc<dyn ShopRepo>, matcher: Arc<dyn ItemMatcher>) -> Self {
        Self { shop_repo, matcher }
    }

    /// Execute the validate trade use case.
    ///
    /// # Arguments
    /// * `shop_id` - The shop being traded with
    /// * `inventory` - Stacks offered for the trade (the shop's stock when
    ///   buying from a selling shop, the customer's when selling to a buying one)
    /// * `quantity` - Number of items to trade
    ///
    /// # Returns
    /// * `Ok(TradeCheck)` - The inventory covers the trade
    /// * `Err(TradeError)` - Unknown shop, zero quantity, or not enough matching items
    pub async fn execute(
        &self,
        shop_id: ShopId,
        inventory: &[Item],
        quantity: u32,
    ) -> Result<TradeCheck, TradeError> {
        if quantity == 0 {
            return Err(TradeError::InvalidQuantity);
        }

        let listing = self
            .shop_repo
            .get(shop_id)
            .await?
            .ok_or(TradeError::ShopNotFound(shop_id))?;

        let matched = count_matching(self.matcher.as_ref(), &listing.item, inventory);
        if matched < quantity {
            tracing::debug!(
                shop_id = %shop_id,
                matcher = self.matcher.name(),
                matched,
                requested = quantity,
                "Not enough matching items for trade"
            );
            return Err(TradeError::InsufficientItems {
                matched,
                requested: quantity,
            });
        }

        let total_price = listing
            .price_for(quantity)
            .ok_or(TradeError::PriceOverflow {
                quantity,
                unit_price: listing.unit_price,
            })?;

        tracing::info!(
            shop_id = %shop_id,
            kind = %listing.kind,
            matched,
            requested = quantity,
            total_price,
            "Trade validated"
        );

        Ok(TradeCheck {
            shop_id,
            kind: listing.kind,
            matched,
            requested: quantity,
            total_price,
        })
    }
}
