//! Query options accepted by `match`, `match_all`, `keys` and `delete`
//!
//! The in-memory store takes these for interface compatibility with host
//! caches but does not interpret them: matching is always on the exact URL
//! and method.

/// Per-partition query options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheQueryOptions {
    pub ignore_method: bool,
    pub ignore_search: bool,
    pub ignore_vary: bool,
}

impl CacheQueryOptions {
    /// True when any flag asks for looser matching than exact URL + method.
    #[must_use]
    pub fn is_relaxed(&self) -> bool {
        self.ignore_method || self.ignore_search || self.ignore_vary
    }
}

/// Registry-level query options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiCacheQueryOptions {
    pub query: CacheQueryOptions,
    /// Restrict the lookup to one partition.
    pub cache_name: Option<String>,
}

impl MultiCacheQueryOptions {
    #[must_use]
    pub fn in_partition(name: impl Into<String>) -> Self {
        Self {
            query: CacheQueryOptions::default(),
            cache_name: Some(name.into()),
        }
    }
}

impl From<CacheQueryOptions> for MultiCacheQueryOptions {
    fn from(query: CacheQueryOptions) -> Self {
        Self {
            query,
            cache_name: None,
        }
    }
}
