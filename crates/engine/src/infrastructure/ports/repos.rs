//! Repository port traits.

use async_trait::async_trait;
use tradepost_domain::{ShopId, ShopListing};

use super::error::RepoError;

// =============================================================================
// Shop Storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShopRepo: Send + Sync {
    async fn get(&self, id: ShopId) -> Result<Option<ShopListing>, RepoError>;
    async fn save(&self, listing: &ShopListing) -> Result<(), RepoError>;
    async fn delete(&self, id: ShopId) -> Result<(), RepoError>;
    async fn list(&self) -> Result<Vec<ShopListing>, RepoError>;
}
