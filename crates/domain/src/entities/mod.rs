//! Entities - items, their metadata and the shops that trade them

mod item;
mod item_meta;
mod shop;

pub use item::Item;
pub use item_meta::{
    AttributeModifier, AttributeModifierMap, EquipmentSlot, ItemFlag, ItemMeta, ModifierOperation,
};
pub use shop::{ShopKind, ShopListing};
