//! In-memory shop storage.

use async_trait::async_trait;
use dashmap::DashMap;
use tradepost_domain::{ShopId, ShopListing};

use super::ports::{RepoError, ShopRepo};

/// [`ShopRepo`] backed by a concurrent map. Contents are lost on exit.
#[derive(Debug, Default)]
pub struct InMemoryShopRepo {
    listings: DashMap<ShopId, ShopListing>,
}

impl InMemoryShopRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with `listings`.
    pub fn with_listings(listings: impl IntoIterator<Item = ShopListing>) -> Self {
        let repo = Self::new();
        for listing in listings {
            repo.listings.insert(listing.id, listing);
        }
        repo
    }
}

#[async_trait]
impl ShopRepo for InMemoryShopRepo {
    async fn get(&self, id: ShopId) -> Result<Option<ShopListing>, RepoError> {
        Ok(self.listings.get(&id).map(|entry| entry.value().clone()))
    }

    async fn save(&self, listing: &ShopListing) -> Result<(), RepoError> {
        self.listings.insert(listing.id, listing.clone());
        tracing::debug!(shop_id = %listing.id, kind = %listing.kind, "Saved shop listing");
        Ok(())
    }

    async fn delete(&self, id: ShopId) -> Result<(), RepoError> {
        match self.listings.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::not_found("Shop", id)),
        }
    }

    async fn list(&self) -> Result<Vec<ShopListing>, RepoError> {
        let mut listings: Vec<ShopListing> = self
            .listings
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        listings.sort_by_key(|listing| listing.id);
        Ok(listings)
    }
}
