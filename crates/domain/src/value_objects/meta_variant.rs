//! Subtype-specific item metadata
//!
//! An item carries at most one metadata variant. Each variant holds only the
//! fields its subtype defines; the matching engine compares variants with an
//! exhaustive `match` instead of run-time type tests.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::entities::Item;
use crate::ids::PlayerId;

/// Packed 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Color as a single `0xRRGGBB` integer.
    pub fn as_rgb(&self) -> u32 {
        (u32::from(self.red) << 16) | (u32::from(self.green) << 8) | u32::from(self.blue)
    }
}

/// The sixteen dye colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DyeColor {
    White,
    Orange,
    Magenta,
    LightBlue,
    Yellow,
    Lime,
    Pink,
    Gray,
    LightGray,
    Cyan,
    Purple,
    Blue,
    Brown,
    Green,
    Red,
    Black,
}

/// One layer of a banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerPattern {
    pub color: DyeColor,
    /// Pattern key, e.g. `creeper` or `stripe_top`
    pub pattern: String,
}

/// How many times a written book has been copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookGeneration {
    Original,
    CopyOfOriginal,
    CopyOfCopy,
    Tattered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FireworkShape {
    Ball,
    BallLarge,
    Star,
    Burst,
    Creeper,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FireworkEffect {
    pub shape: FireworkShape,
    pub colors: Vec<Rgb>,
    pub fade_colors: Vec<Rgb>,
    pub flicker: bool,
    pub trail: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionEffect {
    /// Effect key, e.g. `speed`
    pub kind: String,
    /// Duration in ticks
    pub duration: i32,
    pub amplifier: i32,
    pub ambient: bool,
    pub particles: bool,
    pub icon: bool,
}

/// The base potion type of a bottle, before custom effects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotionData {
    pub kind: String,
    pub extended: bool,
    pub upgraded: bool,
}

/// Fieldless discriminant of [`MetaVariant`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariantKind {
    Banner,
    BlockData,
    BlockState,
    Book,
    Crossbow,
    EnchantmentStorage,
    Firework,
    FireworkCharge,
    KnowledgeBook,
    LeatherArmor,
    Map,
    Potion,
    Skull,
    SpawnEgg,
    SuspiciousStew,
    TropicalFishBucket,
}

/// Subtype metadata. Exactly one of these (or none) is attached to an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MetaVariant {
    Banner {
        patterns: Vec<BannerPattern>,
    },
    BlockData {
        /// Serialized block data string, if any was stored
        data: Option<String>,
    },
    BlockState {
        /// Serialized block state (shulker box contents, spawner settings, ...)
        state: Option<String>,
    },
    Book {
        title: Option<String>,
        author: Option<String>,
        generation: Option<BookGeneration>,
        pages: Vec<String>,
    },
    Crossbow {
        charged_projectiles: Vec<Item>,
    },
    EnchantmentStorage {
        stored_enchants: BTreeMap<String, u32>,
    },
    Firework {
        effects: Vec<FireworkEffect>,
        power: u8,
    },
    FireworkCharge {
        effect: Option<FireworkEffect>,
    },
    KnowledgeBook {
        recipes: Vec<String>,
    },
    LeatherArmor {
        color: Rgb,
    },
    Map {
        map_id: Option<i32>,
        scaling: bool,
        location_name: Option<String>,
        color: Option<Rgb>,
    },
    Potion {
        base: PotionData,
        custom_effects: Vec<PotionEffect>,
        color: Option<Rgb>,
    },
    Skull {
        owner: Option<PlayerId>,
    },
    SpawnEgg {
        spawned_type: String,
    },
    SuspiciousStew {
        custom_effects: Vec<PotionEffect>,
    },
    TropicalFishBucket {
        pattern: String,
        body_color: DyeColor,
        pattern_color: DyeColor,
    },
}

impl MetaVariant {
    pub fn kind(&self) -> VariantKind {
        match self {
            Self::Banner { .. } => VariantKind::Banner,
            Self::BlockData { .. } => VariantKind::BlockData,
            Self::BlockState { .. } => VariantKind::BlockState,
            Self::Book { .. } => VariantKind::Book,
            Self::Crossbow { .. } => VariantKind::Crossbow,
            Self::EnchantmentStorage { .. } => VariantKind::EnchantmentStorage,
            Self::Firework { .. } => VariantKind::Firework,
            Self::FireworkCharge { .. } => VariantKind::FireworkCharge,
            Self::KnowledgeBook { .. } => VariantKind::KnowledgeBook,
            Self::LeatherArmor { .. } => VariantKind::LeatherArmor,
            Self::Map { .. } => VariantKind::Map,
            Self::Potion { .. } => VariantKind::Potion,
            Self::Skull { .. } => VariantKind::Skull,
            Self::SpawnEgg { .. } => VariantKind::SpawnEgg,
            Self::SuspiciousStew { .. } => VariantKind::SuspiciousStew,
            Self::TropicalFishBucket { .. } => VariantKind::TropicalFishBucket,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_packs_channels() {
        assert_eq!(Rgb::new(0xA0, 0x65, 0x40).as_rgb(), 0xA06540);
    }

    #[test]
    fn variant_is_internally_tagged() {
        let variant = MetaVariant::SpawnEgg {
            spawned_type: "ZOMBIE".to_string(),
        };
        let json = serde_json::to_value(&variant).expect("serialize");
        assert_eq!(json["kind"], "spawn_egg");
        assert_eq!(json["spawned_type"], "ZOMBIE");
        assert_eq!(variant.kind(), VariantKind::SpawnEgg);
    }
}
