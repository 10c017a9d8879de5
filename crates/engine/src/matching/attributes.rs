//! Attribute comparator.
//!
//! Type-independent metadata categories. Each check is independent and
//! receives the reference metadata first.

use tradepost_domain::{ItemMeta, MatchCategory, MatchFilter};

use super::capability::guarded;
use super::subset::map_subset_matches;

/// First enabled attribute category on which the operands differ.
pub(crate) fn first_mismatch(
    reference: &ItemMeta,
    candidate: &ItemMeta,
    filter: &MatchFilter,
) -> Option<MatchCategory> {
    filter
        .iter()
        .filter(MatchCategory::is_attribute)
        .find(|category| !attribute_matches(*category, reference, candidate))
}

fn attribute_matches(category: MatchCategory, reference: &ItemMeta, candidate: &ItemMeta) -> bool {
    match category {
        MatchCategory::DisplayName => display_name(reference, candidate),
        MatchCategory::Lore => lore(reference, candidate),
        MatchCategory::Enchantments => enchantments(reference, candidate),
        MatchCategory::AttributeModifiers => attribute_modifiers(reference, candidate),
        MatchCategory::Unbreakable => reference.unbreakable == candidate.unbreakable,
        MatchCategory::ItemFlags => reference.item_flags == candidate.item_flags,
        MatchCategory::CustomModelData => {
            reference.custom_model_data == candidate.custom_model_data
        }
        // Subtype categories belong to the variant dispatcher
        MatchCategory::Banner
        | MatchCategory::BlockData
        | MatchCategory::BlockState
        | MatchCategory::Book
        | MatchCategory::Crossbow
        | MatchCategory::Damage
        | MatchCategory::EnchantmentStorage
        | MatchCategory::Firework
        | MatchCategory::FireworkCharge
        | MatchCategory::KnowledgeBook
        | MatchCategory::LeatherArmor
        | MatchCategory::Map
        | MatchCategory::Potion
        | MatchCategory::Repair
        | MatchCategory::Skull
        | MatchCategory::SpawnEgg
        | MatchCategory::SuspiciousStew
        | MatchCategory::TropicalFishBucket => true,
    }
}

fn display_name(reference: &ItemMeta, candidate: &ItemMeta) -> bool {
    if reference.has_display_name() != candidate.has_display_name() {
        return false;
    }
    if !reference.has_display_name() {
        return true;
    }
    reference.display_name == candidate.display_name
}

fn lore(reference: &ItemMeta, candidate: &ItemMeta) -> bool {
    if reference.has_lore() != candidate.has_lore() {
        return false;
    }
    if !reference.has_lore() {
        return true;
    }
    reference.lore == candidate.lore
}

fn enchantments(reference: &ItemMeta, candidate: &ItemMeta) -> bool {
    if reference.has_enchants() != candidate.has_enchants() {
        return false;
    }
    map_subset_matches(&reference.enchantments, &candidate.enchantments)
}

fn attribute_modifiers(reference: &ItemMeta, candidate: &ItemMeta) -> bool {
    guarded(
        MatchCategory::AttributeModifiers,
        &reference.attribute_modifiers,
        &candidate.attribute_modifiers,
        |reference, candidate| {
            if reference.is_empty() != candidate.is_empty() {
                return false;
            }
            map_subset_matches(reference, candidate)
        },
    )
}
