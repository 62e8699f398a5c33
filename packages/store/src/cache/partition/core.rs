//! Core `MemoryCache` structure and initialization

use http::Method;
use indexmap::IndexMap;
use parking_lot::RwLock;

use super::super::{cache_entry::CacheEntry, cache_stats::CacheStats};

/// Entries for one URL, keyed by method. Never left empty in the store.
pub(super) type MethodEntries = IndexMap<Method, CacheEntry>;

/// In-memory stand-in for one host cache partition.
///
/// Storage is `URL -> method -> entry`, both levels in insertion order.
/// Overwriting an existing key keeps its original position.
#[derive(Debug, Default)]
pub struct MemoryCache {
    pub(super) name: String,
    pub(super) entries: RwLock<IndexMap<String, MethodEntries>>,
    pub(super) stats: CacheStats,
}

impl MemoryCache {
    /// Create an empty, unnamed partition.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty partition labelled `name` in log output.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entries, reserved slots included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().values().map(IndexMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Number of distinct URLs with at least one entry.
    #[must_use]
    pub fn url_count(&self) -> usize {
        self.entries.read().len()
    }

    /// Get partition statistics
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }
}
