//! Mapping-subset equality.
//!
//! Every key of the reference mapping must be present in the candidate
//! mapping with an equal value. Keys only the candidate carries are ignored,
//! so the relation is asymmetric: swapping operands can change the result.

use std::collections::BTreeMap;

/// `true` when `reference` is a by-value subset of `candidate`.
pub fn map_subset_matches<K, V>(reference: &BTreeMap<K, V>, candidate: &BTreeMap<K, V>) -> bool
where
    K: Ord,
    V: PartialEq,
{
    reference
        .iter()
        .all(|(key, value)| candidate.get(key) == Some(value))
}
