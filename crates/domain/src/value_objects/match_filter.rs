//! Match categories and the filter that selects them
//!
//! A [`MatchFilter`] is the immutable set of categories the matching engine
//! evaluates for one comparison. Categories absent from the filter are
//! vacuously satisfied; an empty filter reduces matching to type identity.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::meta_variant::VariantKind;
use crate::error::DomainError;

/// A comparison category that a filter can enable.
///
/// Declaration order is evaluation order: attribute categories first, then
/// subtype categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchCategory {
    // Attribute categories (type-independent metadata)
    DisplayName,
    Lore,
    Enchantments,
    AttributeModifiers,
    Unbreakable,
    ItemFlags,
    CustomModelData,

    // Subtype categories
    Banner,
    BlockData,
    BlockState,
    Book,
    Crossbow,
    Damage,
    EnchantmentStorage,
    Firework,
    FireworkCharge,
    KnowledgeBook,
    LeatherArmor,
    Map,
    Potion,
    Repair,
    Skull,
    SpawnEgg,
    SuspiciousStew,
    TropicalFishBucket,
}

impl MatchCategory {
    pub const ALL: [MatchCategory; 25] = [
        Self::DisplayName,
        Self::Lore,
        Self::Enchantments,
        Self::AttributeModifiers,
        Self::Unbreakable,
        Self::ItemFlags,
        Self::CustomModelData,
        Self::Banner,
        Self::BlockData,
        Self::BlockState,
        Self::Book,
        Self::Crossbow,
        Self::Damage,
        Self::EnchantmentStorage,
        Self::Firework,
        Self::FireworkCharge,
        Self::KnowledgeBook,
        Self::LeatherArmor,
        Self::Map,
        Self::Potion,
        Self::Repair,
        Self::Skull,
        Self::SpawnEgg,
        Self::SuspiciousStew,
        Self::TropicalFishBucket,
    ];

    /// Stable configuration key, e.g. `display-name`.
    pub fn key(&self) -> &'static str {
        match self {
            Self::DisplayName => "display-name",
            Self::Lore => "lore",
            Self::Enchantments => "enchantments",
            Self::AttributeModifiers => "attribute-modifiers",
            Self::Unbreakable => "unbreakable",
            Self::ItemFlags => "item-flags",
            Self::CustomModelData => "custom-model-data",
            Self::Banner => "banner",
            Self::BlockData => "block-data",
            Self::BlockState => "block-state",
            Self::Book => "book",
            Self::Crossbow => "crossbow",
            Self::Damage => "damage",
            Self::EnchantmentStorage => "enchantment-storage",
            Self::Firework => "firework",
            Self::FireworkCharge => "firework-charge",
            Self::KnowledgeBook => "knowledge-book",
            Self::LeatherArmor => "leather-armor",
            Self::Map => "map",
            Self::Potion => "potion",
            Self::Repair => "repair",
            Self::Skull => "skull",
            Self::SpawnEgg => "spawn-egg",
            Self::SuspiciousStew => "suspicious-stew",
            Self::TropicalFishBucket => "tropical-fish-bucket",
        }
    }

    /// Checked by the attribute comparator.
    pub fn is_attribute(&self) -> bool {
        matches!(
            self,
            Self::DisplayName
                | Self::Lore
                | Self::Enchantments
                | Self::AttributeModifiers
                | Self::Unbreakable
                | Self::ItemFlags
                | Self::CustomModelData
        )
    }

    /// Checked by the variant dispatcher.
    pub fn is_subtype(&self) -> bool {
        !self.is_attribute()
    }

    /// Metadata variant a subtype category is gated on.
    ///
    /// `None` for attribute categories and for `Damage`/`Repair`, which are
    /// gated on optional base-metadata fields instead.
    pub fn variant_kind(&self) -> Option<VariantKind> {
        let kind = match self {
            Self::Banner => VariantKind::Banner,
            Self::BlockData => VariantKind::BlockData,
            Self::BlockState => VariantKind::BlockState,
            Self::Book => VariantKind::Book,
            Self::Crossbow => VariantKind::Crossbow,
            Self::EnchantmentStorage => VariantKind::EnchantmentStorage,
            Self::Firework => VariantKind::Firework,
            Self::FireworkCharge => VariantKind::FireworkCharge,
            Self::KnowledgeBook => VariantKind::KnowledgeBook,
            Self::LeatherArmor => VariantKind::LeatherArmor,
            Self::Map => VariantKind::Map,
            Self::Potion => VariantKind::Potion,
            Self::Skull => VariantKind::Skull,
            Self::SpawnEgg => VariantKind::SpawnEgg,
            Self::SuspiciousStew => VariantKind::SuspiciousStew,
            Self::TropicalFishBucket => VariantKind::TropicalFishBucket,
            Self::DisplayName
            | Self::Lore
            | Self::Enchantments
            | Self::AttributeModifiers
            | Self::Unbreakable
            | Self::ItemFlags
            | Self::CustomModelData
            | Self::Damage
            | Self::Repair => return None,
        };
        Some(kind)
    }

    /// Option names used by older shop configurations.
    fn from_legacy_key(key: &str) -> Option<Self> {
        let category = match key {
            "displayname" => Self::DisplayName,
            "lores" => Self::Lore,
            "enchs" => Self::Enchantments,
            "attributes" => Self::AttributeModifiers,
            "itemflags" => Self::ItemFlags,
            "custommodeldata" => Self::CustomModelData,
            "repaircost" => Self::Repair,
            "books" => Self::Book,
            "potions" => Self::Potion,
            "leatherarmor" => Self::LeatherArmor,
            "fishbucket" => Self::TropicalFishBucket,
            "suspiciousstew" => Self::SuspiciousStew,
            "shulkerbox" => Self::BlockState,
            _ => return None,
        };
        Some(category)
    }
}

impl fmt::Display for MatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MatchCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Some(category) = Self::ALL.iter().find(|c| c.key() == normalized) {
            return Ok(*category);
        }
        Self::from_legacy_key(&normalized.replace('-', ""))
            .ok_or_else(|| DomainError::parse(format!("Unknown match category: {}", s)))
    }
}

/// Immutable set of enabled match categories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchFilter(BTreeSet<MatchCategory>);

impl MatchFilter {
    pub fn new(categories: impl IntoIterator<Item = MatchCategory>) -> Self {
        Self(categories.into_iter().collect())
    }

    /// Every category enabled.
    pub fn all() -> Self {
        Self::new(MatchCategory::ALL)
    }

    /// No category enabled: only the type-identity and metadata-presence checks remain.
    pub fn type_only() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, category: MatchCategory) -> bool {
        self.0.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = MatchCategory> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy of this filter with `category` enabled.
    pub fn with(&self, category: MatchCategory) -> Self {
        let mut categories = self.0.clone();
        categories.insert(category);
        Self(categories)
    }

    /// Copy of this filter with `category` disabled.
    pub fn without(&self, category: MatchCategory) -> Self {
        let mut categories = self.0.clone();
        categories.remove(&category);
        Self(categories)
    }

    /// Build a filter from named boolean options, one per category.
    ///
    /// Option names accept both current keys and legacy shop option names.
    /// Categories without an option keep their [`Default`] state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` for an option naming no known category.
    pub fn from_options(options: &BTreeMap<String, bool>) -> Result<Self, DomainError> {
        let mut categories = Self::default().0;
        for (name, enabled) in options {
            let category: MatchCategory = name.parse()?;
            if *enabled {
                categories.insert(category);
            } else {
                categories.remove(&category);
            }
        }
        Ok(Self(categories))
    }
}

/// Shipped shop configuration: everything except repair cost.
impl Default for MatchFilter {
    fn default() -> Self {
        Self::all().without(MatchCategory::Repair)
    }
}

impl FromIterator<MatchCategory> for MatchFilter {
    fn from_iter<I: IntoIterator<Item = MatchCategory>>(iter: I) -> Self {
        Self::new(iter)
    }
}
