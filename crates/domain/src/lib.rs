//! Tradepost domain types.
//!
//! Read-only item snapshots, their metadata, and the filter and settings
//! values the matching engine consumes.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use entities::{
    AttributeModifier, AttributeModifierMap, EquipmentSlot, Item, ItemFlag, ItemMeta,
    ModifierOperation, ShopKind, ShopListing,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{PlayerId, ShopId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    category_env_var, BannerPattern, BookGeneration, Capability, DyeColor, FireworkEffect,
    FireworkShape, MatchCategory, MatchFilter, MatcherSettings, MatcherWorkType, Material,
    MetaVariant, PotionData, PotionEffect, Rgb, VariantKind,
};
