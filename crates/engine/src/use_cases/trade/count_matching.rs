//! Counting equivalent stacks in an inventory.

use tradepost_domain::Item;

use crate::matching::ItemMatcher;

/// Total amount of the stacks in `inventory` equivalent to `reference`.
///
/// Each stack is passed as the candidate operand. Saturates at `u32::MAX`.
pub fn count_matching(matcher: &dyn ItemMatcher, reference: &Item, inventory: &[Item]) -> u32 {
    inventory
        .iter()
        .filter(|stack| matcher.matches(reference, stack))
        .fold(0u32, |total, stack| total.saturating_add(stack.amount))
}
