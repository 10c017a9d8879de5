//! Structural item matcher: category-by-category comparison.

use tradepost_domain::{Item, MatchCategory, MatchFilter};

use super::normalize::NormalizedPair;
use super::{attributes, variants, ItemMatcher};

/// Compares items category by category under a [`MatchFilter`].
///
/// Stateless apart from the default filter captured at construction, so one
/// instance can be shared across threads and its results memoized.
#[derive(Debug, Clone, Default)]
pub struct StructuralItemMatcher {
    default_filter: MatchFilter,
}

impl StructuralItemMatcher {
    pub fn new(default_filter: MatchFilter) -> Self {
        Self { default_filter }
    }

    /// Why `candidate` differs from `reference`, or `None` when equivalent.
    pub fn explain(&self, reference: &Item, candidate: &Item, filter: &MatchFilter) -> Option<Mismatch> {
        let pair = NormalizedPair::new(reference, candidate);

        if pair.reference.material != pair.candidate.material {
            return Some(Mismatch::Material);
        }

        let (reference_meta, candidate_meta) = match (&pair.reference.meta, &pair.candidate.meta) {
            (None, None) => return None,
            (Some(reference), Some(candidate)) => (reference, candidate),
            _ => return Some(Mismatch::MetaPresence),
        };

        attributes::first_mismatch(reference_meta, candidate_meta, filter)
            .or_else(|| variants::first_mismatch(reference_meta, candidate_meta, filter))
            .map(Mismatch::Category)
    }
}

/// Why two items were judged different.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    /// Type identifiers differ
    Material,
    /// Exactly one item carries metadata
    MetaPresence,
    /// An enabled category disagreed
    Category(MatchCategory),
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Material => write!(f, "material"),
            Self::MetaPresence => write!(f, "meta-presence"),
            Self::Category(category) => write!(f, "{}", category),
        }
    }
}

impl ItemMatcher for StructuralItemMatcher {
    fn name(&self) -> &'static str {
        "structural"
    }

    fn default_filter(&self) -> &MatchFilter {
        &self.default_filter
    }

    fn matches_with(&self, reference: &Item, candidate: &Item, filter: &MatchFilter) -> bool {
        match self.explain(reference, candidate, filter) {
            None => true,
            Some(mismatch) => {
                tracing::trace!(
                    reference = %reference.material,
                    candidate = %candidate.material,
                    mismatch = %mismatch,
                    "Items are not equivalent"
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::items;
    use tradepost_domain::ItemMeta;

    #[test]
    fn different_materials_never_match() {
        let matcher = StructuralItemMatcher::default();
        let sword = items::plain("DIAMOND_SWORD");
        let axe = items::plain("DIAMOND_AXE");
        assert_eq!(
            matcher.explain(&sword, &axe, &MatchFilter::type_only()),
            Some(Mismatch::Material)
        );
        assert!(!matcher.matches(&sword, &axe));
    }

    #[test]
    fn metadata_presence_must_agree() {
        let matcher = StructuralItemMatcher::default();
        let plain = items::plain("DIAMOND_SWORD");
        let with_meta = plain.clone().with_meta(ItemMeta::new().with_damage(3));
        assert_eq!(
            matcher.explain(&plain, &with_meta, &MatchFilter::type_only()),
            Some(Mismatch::MetaPresence)
        );
        assert_eq!(
            matcher.explain(&with_meta, &plain, &MatchFilter::type_only()),
            Some(Mismatch::MetaPresence)
        );
    }

    #[test]
    fn empty_metadata_counts_as_absent() {
        let matcher = StructuralItemMatcher::default();
        let plain = items::plain("DIAMOND_SWORD");
        let empty = plain.clone().with_meta(ItemMeta::new());
        assert_eq!(matcher.explain(&plain, &empty, &MatchFilter::type_only()), None);
        assert_eq!(matcher.explain(&empty, &plain, &MatchFilter::all()), None);
    }

    #[test]
    fn items_without_metadata_match() {
        let matcher = StructuralItemMatcher::new(MatchFilter::all());
        let a = items::plain("COBBLESTONE").with_amount(12);
        let b = items::plain("COBBLESTONE").with_amount(64);
        assert!(matcher.matches(&a, &b));
    }

    #[test]
    fn attribute_mismatch_reports_category() {
        let matcher = StructuralItemMatcher::default();
        let named = items::named("DIAMOND_SWORD", "Excalibur");
        let other = items::named("DIAMOND_SWORD", "Caliburn");
        assert_eq!(
            matcher.explain(&named, &other, &MatchFilter::all()),
            Some(Mismatch::Category(MatchCategory::DisplayName))
        );
    }

    #[test]
    fn attribute_categories_are_checked_before_subtypes() {
        let matcher = StructuralItemMatcher::default();
        let book = items::written_book("Guide", &["one"]);
        let meta = book.meta.clone().unwrap_or_default();
        let a = book.clone().with_meta(meta.clone().with_display_name("A"));
        let b = items::plain("WRITTEN_BOOK").with_meta(ItemMeta::new().with_display_name("B"));
        assert_eq!(
            matcher.explain(&a, &b, &MatchFilter::all()),
            Some(Mismatch::Category(MatchCategory::DisplayName))
        );
    }

    #[test]
    fn default_filter_is_captured() {
        let matcher = StructuralItemMatcher::new(MatchFilter::type_only());
        let a = items::named("STONE", "A");
        let b = items::named("STONE", "B");
        assert!(matcher.matches(&a, &b));
        assert!(!matcher.matches_with(&a, &b, &MatchFilter::new([MatchCategory::DisplayName])));
        assert_eq!(matcher.default_filter(), &MatchFilter::type_only());
    }
}
