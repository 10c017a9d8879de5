//! Test fixtures loader for JSON item files and common item builders.
//!
//! ```rust,ignore
//! use crate::test_fixtures::{items, load_fixture};
//!
//! #[test]
//! fn sword_matches_itself() {
//!     let sword: Item = load_fixture("items/sharpness_sword.json");
//!     // ... test logic
//! }
//! ```

use std::path::PathBuf;

// =============================================================================
// Fixture Loading
// =============================================================================

/// Path of a file under `test_data/`.
pub fn fixture_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_data")
        .join(path)
}

/// Load a JSON fixture from test_data/ directory.
///
/// # Panics
///
/// Panics if the fixture file cannot be read or parsed.
pub fn load_fixture<T: serde::de::DeserializeOwned>(path: &str) -> T {
    let fixture_path = fixture_path(path);
    let content = std::fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture '{}': {}",
            fixture_path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "Failed to parse fixture '{}': {}",
            fixture_path.display(),
            e
        )
    })
}

// =============================================================================
// Metadata Variant Fixtures
// =============================================================================

/// One representative value of every metadata variant.
pub mod variants {
    use std::collections::BTreeMap;

    use tradepost_domain::{
        BannerPattern, BookGeneration, DyeColor, FireworkEffect, FireworkShape, MetaVariant,
        PlayerId, PotionData, PotionEffect, Rgb,
    };

    use super::items;

    pub fn banner() -> MetaVariant {
        MetaVariant::Banner {
            patterns: vec![BannerPattern {
                color: DyeColor::Red,
                pattern: "stripe_top".to_string(),
            }],
        }
    }

    pub fn block_data(data: &str) -> MetaVariant {
        MetaVariant::BlockData {
            data: Some(data.to_string()),
        }
    }

    pub fn block_state(state: &str) -> MetaVariant {
        MetaVariant::BlockState {
            state: Some(state.to_string()),
        }
    }

    pub fn book() -> MetaVariant {
        MetaVariant::Book {
            title: Some("Guide".to_string()),
            author: Some("Notch".to_string()),
            generation: Some(BookGeneration::Original),
            pages: vec!["one".to_string()],
        }
    }

    pub fn crossbow(projectile: &str) -> MetaVariant {
        MetaVariant::Crossbow {
            charged_projectiles: vec![items::plain(projectile)],
        }
    }

    pub fn enchantment_storage() -> MetaVariant {
        let mut stored_enchants = BTreeMap::new();
        stored_enchants.insert("mending".to_string(), 1);
        MetaVariant::EnchantmentStorage { stored_enchants }
    }

    pub fn firework_effect(shape: FireworkShape) -> FireworkEffect {
        FireworkEffect {
            shape,
            colors: vec![Rgb::new(255, 0, 0)],
            fade_colors: Vec::new(),
            flicker: true,
            trail: false,
        }
    }

    pub fn firework() -> MetaVariant {
        MetaVariant::Firework {
            effects: vec![firework_effect(FireworkShape::Star)],
            power: 2,
        }
    }

    pub fn firework_charge(shape: FireworkShape) -> MetaVariant {
        MetaVariant::FireworkCharge {
            effect: Some(firework_effect(shape)),
        }
    }

    pub fn knowledge_book() -> MetaVariant {
        MetaVariant::KnowledgeBook {
            recipes: vec!["minecraft:torch".to_string()],
        }
    }

    pub fn leather_armor() -> MetaVariant {
        MetaVariant::LeatherArmor {
            color: Rgb::new(0xA0, 0x65, 0x40),
        }
    }

    pub fn map(map_id: i32) -> MetaVariant {
        MetaVariant::Map {
            map_id: Some(map_id),
            scaling: false,
            location_name: Some("Spawn".to_string()),
            color: None,
        }
    }

    pub fn potion(kind: &str, upgraded: bool) -> MetaVariant {
        MetaVariant::Potion {
            base: PotionData {
                kind: kind.to_string(),
                extended: false,
                upgraded,
            },
            custom_effects: Vec::new(),
            color: None,
        }
    }

    pub fn skull(owner: PlayerId) -> MetaVariant {
        MetaVariant::Skull { owner: Some(owner) }
    }

    pub fn spawn_egg(spawned_type: &str) -> MetaVariant {
        MetaVariant::SpawnEgg {
            spawned_type: spawned_type.to_string(),
        }
    }

    pub fn effect(kind: &str, duration: i32) -> PotionEffect {
        PotionEffect {
            kind: kind.to_string(),
            duration,
            amplifier: 0,
            ambient: false,
            particles: true,
            icon: true,
        }
    }

    pub fn suspicious_stew(kind: &str, duration: i32) -> MetaVariant {
        MetaVariant::SuspiciousStew {
            custom_effects: vec![effect(kind, duration)],
        }
    }

    pub fn tropical_fish_bucket(body_color: DyeColor) -> MetaVariant {
        MetaVariant::TropicalFishBucket {
            pattern: "kob".to_string(),
            body_color,
            pattern_color: DyeColor::White,
        }
    }
}

// =============================================================================
// Item Fixtures
// =============================================================================

/// Pre-built item fixtures for testing.
pub mod items {
    use tradepost_domain::{
        BookGeneration, Item, ItemMeta, Material, MetaVariant, PotionData,
    };

    use super::load_fixture;

    fn material(key: &str) -> Material {
        Material::new(key).expect("valid material")
    }

    /// A stack of `key` with no metadata.
    pub fn plain(key: &str) -> Item {
        Item::new(material(key))
    }

    /// A stack carrying only a display name.
    pub fn named(key: &str, name: &str) -> Item {
        plain(key).with_meta(ItemMeta::new().with_display_name(name))
    }

    /// A stack carrying only the given enchantments.
    pub fn enchanted(key: &str, enchants: &[(&str, u32)]) -> Item {
        let meta = enchants
            .iter()
            .fold(ItemMeta::new(), |meta, (enchant, level)| {
                meta.with_enchantment(*enchant, *level)
            });
        plain(key).with_meta(meta)
    }

    /// An original signed book by "Notch".
    pub fn written_book(title: &str, pages: &[&str]) -> Item {
        plain("WRITTEN_BOOK").with_meta(ItemMeta::new().with_variant(MetaVariant::Book {
            title: Some(title.to_string()),
            author: Some("Notch".to_string()),
            generation: Some(BookGeneration::Original),
            pages: pages.iter().map(|page| page.to_string()).collect(),
        }))
    }

    /// A potion with the given base type and no custom effects.
    pub fn potion(kind: &str) -> Item {
        plain("POTION").with_meta(ItemMeta::new().with_variant(MetaVariant::Potion {
            base: PotionData {
                kind: kind.to_string(),
                extended: false,
                upgraded: false,
            },
            custom_effects: Vec::new(),
            color: None,
        }))
    }

    /// DIAMOND_SWORD enchanted with sharpness 3.
    pub fn sharpness_sword() -> Item {
        load_fixture("items/sharpness_sword.json")
    }

    /// DIAMOND_SWORD enchanted with sharpness 3 and unbreaking 1.
    pub fn sharpness_unbreaking_sword() -> Item {
        load_fixture("items/sharpness_unbreaking_sword.json")
    }

    /// Named sword from a platform that cannot report attribute modifiers.
    pub fn legacy_platform_sword() -> Item {
        load_fixture("items/legacy_platform_sword.json")
    }

    /// A stack of `key` carrying only `variant`.
    pub fn with_variant(key: &str, variant: MetaVariant) -> Item {
        plain(key).with_meta(ItemMeta::new().with_variant(variant))
    }

    /// One item per metadata variant, plus damageable and repairable stacks.
    pub fn every_variant() -> Vec<Item> {
        use super::variants;
        use tradepost_domain::{DyeColor, FireworkShape, PlayerId};

        vec![
            with_variant("WHITE_BANNER", variants::banner()),
            with_variant("OAK_STAIRS", variants::block_data("facing=north")),
            with_variant("SHULKER_BOX", variants::block_state("items=[stone]")),
            with_variant("WRITTEN_BOOK", variants::book()),
            with_variant("CROSSBOW", variants::crossbow("ARROW")),
            with_variant("ENCHANTED_BOOK", variants::enchantment_storage()),
            with_variant("FIREWORK_ROCKET", variants::firework()),
            with_variant("FIREWORK_STAR", variants::firework_charge(FireworkShape::Star)),
            with_variant("KNOWLEDGE_BOOK", variants::knowledge_book()),
            with_variant("LEATHER_CHESTPLATE", variants::leather_armor()),
            with_variant("FILLED_MAP", variants::map(7)),
            with_variant("POTION", variants::potion("healing", false)),
            with_variant("PLAYER_HEAD", variants::skull(PlayerId::new())),
            with_variant("ZOMBIE_SPAWN_EGG", variants::spawn_egg("zombie")),
            with_variant("SUSPICIOUS_STEW", variants::suspicious_stew("night_vision", 100)),
            with_variant(
                "TROPICAL_FISH_BUCKET",
                variants::tropical_fish_bucket(DyeColor::Orange),
            ),
            plain("DIAMOND_PICKAXE").with_meta(ItemMeta::new().with_damage(12).with_repair_cost(3)),
        ]
    }

    /// Every JSON item fixture.
    pub fn all() -> Vec<Item> {
        vec![
            sharpness_sword(),
            sharpness_unbreaking_sword(),
            legacy_platform_sword(),
            load_fixture("items/written_book.json"),
            load_fixture("items/healing_potion.json"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_item_fixtures_parse() {
        let all = items::all();
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|item| item.has_meta()));
    }

    #[test]
    fn every_variant_kind_is_represented() {
        let kinds: std::collections::HashSet<_> = items::every_variant()
            .iter()
            .filter_map(|item| item.meta.as_ref()?.variant.as_ref().map(|variant| variant.kind()))
            .collect();
        assert_eq!(kinds.len(), 16);
    }

    #[test]
    fn legacy_fixture_reports_unsupported_modifiers() {
        let sword = items::legacy_platform_sword();
        let meta = sword.meta.expect("meta");
        assert!(!meta.attribute_modifiers.is_supported());
        assert_eq!(sword.amount, 5);
    }
}
