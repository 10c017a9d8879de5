//! Capability guard.
//!
//! A category whose query the platform could not answer for either operand
//! resolves to a match. Unavailability never blocks a trade on its own.

use tradepost_domain::{Capability, MatchCategory};

/// Run `check` when both operands were answered; otherwise report a match.
pub(crate) fn guarded<T>(
    category: MatchCategory,
    reference: &Capability<T>,
    candidate: &Capability<T>,
    check: impl FnOnce(&T, &T) -> bool,
) -> bool {
    match (reference, candidate) {
        (Capability::Supported(reference), Capability::Supported(candidate)) => {
            check(reference, candidate)
        }
        _ => {
            let reason = reference
                .unsupported_reason()
                .or_else(|| candidate.unsupported_reason())
                .unwrap_or_default();
            tracing::debug!(
                category = %category,
                reason = %reason,
                "Capability unavailable on this platform, category treated as matched"
            );
            true
        }
    }
}
