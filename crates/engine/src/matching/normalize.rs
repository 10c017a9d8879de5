//! Quantity-invariant working copies of the compared items.

use tradepost_domain::Item;

/// The two operands of one comparison, with stack size forced to one.
///
/// Both copies are independent of the caller's snapshots.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedPair {
    pub reference: Item,
    pub candidate: Item,
}

impl NormalizedPair {
    pub fn new(reference: &Item, candidate: &Item) -> Self {
        Self {
            reference: reference.normalized(),
            candidate: candidate.normalized(),
        }
    }
}
