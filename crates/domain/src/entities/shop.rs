//! Shop listing entity - what a player shop trades

use serde::{Deserialize, Serialize};

use super::item::Item;
use crate::ids::{PlayerId, ShopId};

/// Direction of trade from the shop owner's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShopKind {
    /// The owner sells; customers hand over currency.
    Selling,
    /// The owner buys; customers hand over items.
    Buying,
}

impl std::fmt::Display for ShopKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selling => write!(f, "selling"),
            Self::Buying => write!(f, "buying"),
        }
    }
}

/// A player shop trading one kind of item at a fixed unit price.
///
/// `item` is the reference stack every offered stack is matched against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopListing {
    pub id: ShopId,
    pub owner: PlayerId,
    pub item: Item,
    /// Price per item in the economy's smallest unit
    pub unit_price: u64,
    pub kind: ShopKind,
}

impl ShopListing {
    pub fn new(owner: PlayerId, item: Item, unit_price: u64, kind: ShopKind) -> Self {
        Self {
            id: ShopId::new(),
            owner,
            item,
            unit_price,
            kind,
        }
    }

    pub fn with_id(mut self, id: ShopId) -> Self {
        self.id = id;
        self
    }

    /// Total price for `quantity` items, `None` on overflow.
    pub fn price_for(&self, quantity: u32) -> Option<u64> {
        self.unit_price.checked_mul(u64::from(quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Material;

    #[test]
    fn price_scales_with_quantity() {
        let item = Item::new(Material::new("DIAMOND").expect("valid"));
        let listing = ShopListing::new(PlayerId::new(), item, 250, ShopKind::Selling);
        assert_eq!(listing.price_for(4), Some(1000));
        assert_eq!(listing.price_for(0), Some(0));
    }

    #[test]
    fn price_overflow_is_none() {
        let item = Item::new(Material::new("DIAMOND").expect("valid"));
        let listing = ShopListing::new(PlayerId::new(), item, u64::MAX, ShopKind::Buying);
        assert_eq!(listing.price_for(2), None);
    }
}
