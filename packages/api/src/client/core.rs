//! Core `CacheClient` structure and storage resolution
//!
//! The client owns an optional handle to a `CacheStorage`. When none is
//! available every helper degrades to a no-op so calling code can run the
//! same path with or without a cache.

use std::fmt;
use std::sync::Arc;

use respcache_store::{CacheConfig, CacheStorage, MemoryCacheStorage, Result};
use respcache_store::cache::Cache;

/// Helper layer over a named-partition response cache.
#[derive(Clone, Default)]
pub struct CacheClient {
    pub(super) storage: Option<Arc<dyn CacheStorage>>,
    pub(super) config: CacheConfig,
}

impl fmt::Debug for CacheClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheClient")
            .field("has_storage", &self.storage.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl CacheClient {
    /// Client over `storage`, or a no-op client when `None`.
    #[must_use]
    pub fn new(storage: Option<Arc<dyn CacheStorage>>) -> Self {
        Self {
            storage,
            config: CacheConfig::default(),
        }
    }

    /// Client over the given storage.
    #[must_use]
    pub fn with_storage(storage: Arc<dyn CacheStorage>) -> Self {
        Self::new(Some(storage))
    }

    /// Client with no storage; every helper is a no-op.
    #[must_use]
    pub fn without_storage() -> Self {
        Self::new(None)
    }

    /// Client over a fresh [`MemoryCacheStorage`].
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_storage(Arc::new(MemoryCacheStorage::new()))
    }

    /// Replace the configuration.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is unusable.
    pub fn with_config(mut self, config: CacheConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Whether a cache storage is available.
    #[must_use]
    pub fn have_cache_storage(&self) -> bool {
        self.storage.is_some()
    }

    #[must_use]
    pub fn storage(&self) -> Option<&Arc<dyn CacheStorage>> {
        self.storage.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Name of the partition the un-suffixed helpers operate on.
    #[must_use]
    pub fn default_partition(&self) -> &str {
        &self.config.default_partition
    }

    /// Open `partition`, or `None` without storage.
    pub(super) async fn open(&self, partition: &str) -> Option<Arc<dyn Cache>> {
        match self.storage {
            Some(ref storage) => Some(storage.open(partition).await),
            None => {
                tracing::trace!(target: "respcache::client", partition, "no cache storage available");
                None
            }
        }
    }
}
