//! Variant dispatcher.
//!
//! Subtype categories are gated on metadata-variant membership: exactly one
//! operand belonging to the subtype is a mismatch, neither belonging is a
//! vacuous match, and both belonging runs the field-level check.

use tradepost_domain::{ItemMeta, MatchCategory, MatchFilter, MetaVariant, VariantKind};

use super::subset::map_subset_matches;

/// First enabled subtype category on which the operands differ.
pub(crate) fn first_mismatch(
    reference: &ItemMeta,
    candidate: &ItemMeta,
    filter: &MatchFilter,
) -> Option<MatchCategory> {
    filter
        .iter()
        .filter(MatchCategory::is_subtype)
        .find(|category| !subtype_matches(*category, reference, candidate))
}

fn subtype_matches(category: MatchCategory, reference: &ItemMeta, candidate: &ItemMeta) -> bool {
    match category {
        // Membership is the presence of the optional base field.
        MatchCategory::Damage => reference.damage == candidate.damage,
        MatchCategory::Repair => reference.repair_cost == candidate.repair_cost,
        MatchCategory::Banner
        | MatchCategory::BlockData
        | MatchCategory::BlockState
        | MatchCategory::Book
        | MatchCategory::Crossbow
        | MatchCategory::EnchantmentStorage
        | MatchCategory::Firework
        | MatchCategory::FireworkCharge
        | MatchCategory::KnowledgeBook
        | MatchCategory::LeatherArmor
        | MatchCategory::Map
        | MatchCategory::Potion
        | MatchCategory::Skull
        | MatchCategory::SpawnEgg
        | MatchCategory::SuspiciousStew
        | MatchCategory::TropicalFishBucket => match category.variant_kind() {
            Some(kind) => variant_matches(kind, reference.variant.as_ref(), candidate.variant.as_ref()),
            None => true,
        },
        // Attribute categories belong to the attribute comparator
        MatchCategory::DisplayName
        | MatchCategory::Lore
        | MatchCategory::Enchantments
        | MatchCategory::AttributeModifiers
        | MatchCategory::Unbreakable
        | MatchCategory::ItemFlags
        | MatchCategory::CustomModelData => true,
    }
}

fn variant_matches(
    kind: VariantKind,
    reference: Option<&MetaVariant>,
    candidate: Option<&MetaVariant>,
) -> bool {
    let reference = reference.filter(|variant| variant.kind() == kind);
    let candidate = candidate.filter(|variant| variant.kind() == kind);
    match (reference, candidate) {
        (None, None) => true,
        (Some(reference), Some(candidate)) => fields_match(reference, candidate),
        _ => false,
    }
}

fn fields_match(reference: &MetaVariant, candidate: &MetaVariant) -> bool {
    use MetaVariant::*;

    match (reference, candidate) {
        (Banner { patterns: a }, Banner { patterns: b }) => a.len() == b.len() && a == b,
        (BlockData { data: a }, BlockData { data: b }) => a == b,
        (BlockState { state: a }, BlockState { state: b }) => a == b,
        (
            Book {
                title: title_a,
                author: author_a,
                generation: generation_a,
                pages: pages_a,
            },
            Book {
                title: title_b,
                author: author_b,
                generation: generation_b,
                pages: pages_b,
            },
        ) => {
            title_a == title_b
                && generation_a == generation_b
                && author_a == author_b
                && pages_a.len() == pages_b.len()
                && pages_a == pages_b
        }
        (
            Crossbow {
                charged_projectiles: a,
            },
            Crossbow {
                charged_projectiles: b,
            },
        ) => a == b,
        (EnchantmentStorage { stored_enchants: a }, EnchantmentStorage { stored_enchants: b }) => {
            map_subset_matches(a, b)
        }
        (
            Firework {
                effects: effects_a,
                power: power_a,
            },
            Firework {
                effects: effects_b,
                power: power_b,
            },
        ) => effects_a == effects_b && power_a == power_b,
        (FireworkCharge { effect: a }, FireworkCharge { effect: b }) => a == b,
        (KnowledgeBook { recipes: a }, KnowledgeBook { recipes: b }) => a == b,
        (LeatherArmor { color: a }, LeatherArmor { color: b }) => a.as_rgb() == b.as_rgb(),
        (map_a @ Map { .. }, map_b @ Map { .. }) => map_a == map_b,
        (potion_a @ Potion { .. }, potion_b @ Potion { .. }) => potion_a == potion_b,
        (Skull { owner: a }, Skull { owner: b }) => a == b,
        (SpawnEgg { spawned_type: a }, SpawnEgg { spawned_type: b }) => a == b,
        (SuspiciousStew { custom_effects: a }, SuspiciousStew { custom_effects: b }) => a == b,
        (fish_a @ TropicalFishBucket { .. }, fish_b @ TropicalFishBucket { .. }) => fish_a == fish_b,
        // Callers only pair variants of the same kind.
        _ => false,
    }
}
