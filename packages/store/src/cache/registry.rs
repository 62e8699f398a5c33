//! Multi-partition registry
//!
//! Maps partition names to shared [`MemoryCache`] instances in creation
//! order. Partitions are only created by `open`; `has`, `keys` and
//! `match_request` never create one.

use std::sync::Arc;

use async_trait::async_trait;
use indexmap::IndexMap;
use parking_lot::RwLock;

use super::{
    options::MultiCacheQueryOptions,
    partition::MemoryCache,
    traits::{Cache, CacheStorage},
};
use crate::http::{CacheRequest, CachedResponse};

/// In-memory stand-in for the host's cache storage.
#[derive(Debug, Default)]
pub struct MemoryCacheStorage {
    partitions: RwLock<IndexMap<String, Arc<MemoryCache>>>,
}

impl MemoryCacheStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`CacheStorage::open`], but keeps the concrete type so callers
    /// can reach [`MemoryCache::stats`] and the size queries.
    pub fn open_partition(&self, name: &str) -> Arc<MemoryCache> {
        if let Some(existing) = self.partitions.read().get(name) {
            return Arc::clone(existing);
        }

        let mut partitions = self.partitions.write();
        // Another holder may have created it between the two locks.
        let partition = partitions.entry(name.to_owned()).or_insert_with(|| {
            tracing::debug!(target: "respcache::cache::registry", partition = name, "creating partition");
            Arc::new(MemoryCache::named(name))
        });
        Arc::clone(partition)
    }

    /// The partition called `name`, if it exists.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<MemoryCache>> {
        self.partitions.read().get(name).cloned()
    }

    /// Number of partitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.partitions.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partitions.read().is_empty()
    }

    fn snapshot(&self) -> Vec<Arc<MemoryCache>> {
        self.partitions.read().values().cloned().collect()
    }
}

#[async_trait]
impl CacheStorage for MemoryCacheStorage {
    async fn open(&self, name: &str) -> Arc<dyn Cache> {
        self.open_partition(name)
    }

    async fn delete(&self, name: &str) -> bool {
        let removed = self.partitions.write().shift_remove(name).is_some();
        tracing::debug!(target: "respcache::cache::registry", partition = name, removed, "delete partition");
        removed
    }

    async fn has(&self, name: &str) -> bool {
        self.partitions.read().contains_key(name)
    }

    async fn keys(&self) -> Vec<String> {
        self.partitions.read().keys().cloned().collect()
    }

    async fn match_request(
        &self,
        request: &CacheRequest,
        options: &MultiCacheQueryOptions,
    ) -> Option<CachedResponse> {
        if let Some(name) = options.cache_name.as_deref() {
            let Some(partition) = self.get(name) else {
                tracing::debug!(
                    target: "respcache::cache::registry",
                    partition = name,
                    "match against missing partition"
                );
                return None;
            };
            return partition.match_request(request, &options.query).await;
        }

        // Locks are released before awaiting; partitions deleted mid-scan
        // are still consulted through the snapshot.
        for partition in self.snapshot() {
            if let Some(found) = partition.match_request(request, &options.query).await {
                return Some(found);
            }
        }
        None
    }
}
