//! Item metadata - descriptive attributes attached to an item beyond its type

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::value_objects::{Capability, MetaVariant};

/// Attribute key (e.g. `generic.attack_damage`) to the set of modifiers applied to it.
pub type AttributeModifierMap = BTreeMap<String, BTreeSet<AttributeModifier>>;

/// Visual flags that hide parts of an item's tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFlag {
    HideEnchants,
    HideAttributes,
    HideUnbreakable,
    HideDestroys,
    HidePlacedOn,
    HidePotionEffects,
    HideDye,
    /// Unknown flag for forward compatibility
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModifierOperation {
    AddNumber,
    AddScalar,
    MultiplyScalar1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    Hand,
    OffHand,
    Head,
    Chest,
    Legs,
    Feet,
}

/// A single generic attribute modifier
///
/// Equality and ordering are total: `amount` compares with [`f64::total_cmp`],
/// so a modifier always equals itself, NaN included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeModifier {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    pub operation: ModifierOperation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot: Option<EquipmentSlot>,
}

impl Ord for AttributeModifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.name.cmp(&other.name))
            .then_with(|| self.amount.total_cmp(&other.amount))
            .then_with(|| self.operation.cmp(&other.operation))
            .then_with(|| self.slot.cmp(&other.slot))
    }
}

impl PartialOrd for AttributeModifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for AttributeModifier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for AttributeModifier {}

/// Base metadata shared by every item kind.
///
/// `repair_cost` and `damage` double as membership markers: `Some` means the
/// item is repairable (resp. damageable) on the host platform.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lore: Option<Vec<String>>,
    /// Enchantment key to level
    #[serde(default)]
    pub enchantments: BTreeMap<String, u32>,
    /// Not every platform version can report attribute modifiers
    #[serde(default)]
    pub attribute_modifiers: Capability<AttributeModifierMap>,
    #[serde(default)]
    pub unbreakable: bool,
    #[serde(default)]
    pub item_flags: BTreeSet<ItemFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_model_data: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repair_cost: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damage: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<MetaVariant>,
}

impl ItemMeta {
    pub fn new() -> Self {
        Self::default()
    }

    // Builder methods

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_lore<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lore = Some(lines.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_enchantment(mut self, key: impl Into<String>, level: u32) -> Self {
        self.enchantments.insert(key.into(), level);
        self
    }

    pub fn with_attribute_modifiers(mut self, modifiers: Capability<AttributeModifierMap>) -> Self {
        self.attribute_modifiers = modifiers;
        self
    }

    pub fn with_unbreakable(mut self, unbreakable: bool) -> Self {
        self.unbreakable = unbreakable;
        self
    }

    pub fn with_flag(mut self, flag: ItemFlag) -> Self {
        self.item_flags.insert(flag);
        self
    }

    pub fn with_custom_model_data(mut self, data: i32) -> Self {
        self.custom_model_data = Some(data);
        self
    }

    pub fn with_repair_cost(mut self, cost: u32) -> Self {
        self.repair_cost = Some(cost);
        self
    }

    pub fn with_damage(mut self, damage: u32) -> Self {
        self.damage = Some(damage);
        self
    }

    pub fn with_variant(mut self, variant: MetaVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    // Presence queries

    /// An empty display name counts as no display name.
    pub fn has_display_name(&self) -> bool {
        self.display_name.as_ref().is_some_and(|name| !name.is_empty())
    }

    /// An empty lore list counts as no lore.
    pub fn has_lore(&self) -> bool {
        self.lore.as_ref().is_some_and(|lines| !lines.is_empty())
    }

    pub fn has_enchants(&self) -> bool {
        !self.enchantments.is_empty()
    }

    pub fn has_attribute_modifiers(&self) -> Capability<bool> {
        self.attribute_modifiers.as_ref().map(|map| !map.is_empty())
    }

    /// Whether nothing is set that the platform would report as metadata.
    ///
    /// Modifiers the platform cannot report count as absent.
    pub fn is_empty(&self) -> bool {
        !self.has_display_name()
            && !self.has_lore()
            && !self.has_enchants()
            && !self.has_attribute_modifiers().into_option().unwrap_or(false)
            && !self.unbreakable
            && self.item_flags.is_empty()
            && self.custom_model_data.is_none()
            && self.repair_cost.is_none()
            && self.damage.is_none()
            && self.variant.is_none()
    }
}
