//! Memoized matching.
//!
//! Match verdicts are pure functions of the normalized operands and the
//! filter, so a content fingerprint over those inputs is a safe cache key.

use std::sync::Arc;

use dashmap::DashMap;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tradepost_domain::{Item, MatchFilter};

use super::ItemMatcher;

/// Default number of verdicts kept before the cache is flushed.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// SHA-256 fingerprint of one `(reference, candidate, filter)` triple.
///
/// Operand order is part of the key; subset checks are asymmetric.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub struct MatchFingerprint {
    hash: [u8; 32],
}

impl MatchFingerprint {
    pub fn new(
        matcher: &str,
        reference: &Item,
        candidate: &Item,
        filter: &MatchFilter,
    ) -> Result<Self, serde_json::Error> {
        let mut hasher = Sha256::new();

        hasher.update(b"matcher:");
        hasher.update(matcher.as_bytes());

        hash_json(&mut hasher, b"reference:", &reference.normalized())?;
        hash_json(&mut hasher, b"candidate:", &candidate.normalized())?;
        hash_json(&mut hasher, b"filter:", filter)?;

        Ok(Self {
            hash: hasher.finalize().into(),
        })
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.hash)
    }

    /// First 8 hex characters, for logging.
    pub fn short_hex(&self) -> String {
        hex::encode(&self.hash[..4])
    }
}

fn hash_json<T: Serialize + ?Sized>(
    hasher: &mut Sha256,
    label: &[u8],
    value: &T,
) -> Result<(), serde_json::Error> {
    let bytes = serde_json::to_vec(value)?;
    hasher.update(label);
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(&bytes);
    Ok(())
}

/// Caches verdicts of an inner matcher keyed by [`MatchFingerprint`].
///
/// The cache is bounded; once `capacity` verdicts are held it is cleared
/// wholesale before the next insert.
pub struct MemoizedMatcher {
    inner: Arc<dyn ItemMatcher>,
    results: DashMap<MatchFingerprint, bool>,
    capacity: usize,
}

impl MemoizedMatcher {
    pub fn new(inner: Arc<dyn ItemMatcher>, capacity: usize) -> Self {
        Self {
            inner,
            results: DashMap::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn clear(&self) {
        self.results.clear();
    }
}

impl ItemMatcher for MemoizedMatcher {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn default_filter(&self) -> &MatchFilter {
        self.inner.default_filter()
    }

    fn matches_with(&self, reference: &Item, candidate: &Item, filter: &MatchFilter) -> bool {
        let fingerprint =
            match MatchFingerprint::new(self.inner.name(), reference, candidate, filter) {
                Ok(fingerprint) => fingerprint,
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to fingerprint items, matching uncached");
                    return self.inner.matches_with(reference, candidate, filter);
                }
            };

        if let Some(verdict) = self.results.get(&fingerprint) {
            tracing::trace!(fingerprint = %fingerprint.short_hex(), "Match cache hit");
            return *verdict;
        }

        let verdict = self.inner.matches_with(reference, candidate, filter);
        if self.results.len() >= self.capacity {
            tracing::debug!(capacity = self.capacity, "Match cache full, clearing");
            self.results.clear();
        }
        self.results.insert(fingerprint, verdict);
        verdict
    }
}
