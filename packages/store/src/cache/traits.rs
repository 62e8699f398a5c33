//! The named-partition response cache contract
//!
//! `CacheStorage` is the registry of named partitions and `Cache` is a single
//! partition. Helper code is written against these traits so that either the
//! in-memory implementation or a host-provided one can be injected.
//!
//! Every operation is total: absence is `None`, `false` or an empty `Vec`.

use std::sync::Arc;

use async_trait::async_trait;

use super::options::{CacheQueryOptions, MultiCacheQueryOptions};
use crate::http::{CacheRequest, CachedResponse};

/// A single named partition of request/response entries.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Reserve a slot for `request` with no response, replacing any entry
    /// stored under the same URL and method.
    async fn add(&self, request: CacheRequest);

    /// `add` every request in order.
    async fn add_all(&self, requests: Vec<CacheRequest>) {
        for request in requests {
            self.add(request).await;
        }
    }

    /// Store `response` under `request`'s URL and method (last write wins).
    async fn put(&self, request: CacheRequest, response: CachedResponse);

    /// The response stored for the exact URL and method, if any.
    async fn match_request(
        &self,
        request: &CacheRequest,
        options: &CacheQueryOptions,
    ) -> Option<CachedResponse>;

    /// Stored responses for `request`'s URL across all methods, or for the
    /// whole partition when `request` is `None`.
    async fn match_all(
        &self,
        request: Option<&CacheRequest>,
        options: &CacheQueryOptions,
    ) -> Vec<CachedResponse>;

    /// Request descriptors of every entry, reserved slots included, scoped
    /// like [`Cache::match_all`].
    async fn keys(
        &self,
        request: Option<&CacheRequest>,
        options: &CacheQueryOptions,
    ) -> Vec<CacheRequest>;

    /// Remove the entry for the exact URL and method. Returns whether one
    /// was removed.
    async fn delete(&self, request: &CacheRequest, options: &CacheQueryOptions) -> bool;
}

/// Registry of named partitions.
#[async_trait]
pub trait CacheStorage: Send + Sync {
    /// The partition called `name`, created empty if absent. Every call
    /// with the same name yields a handle to the same partition.
    async fn open(&self, name: &str) -> Arc<dyn Cache>;

    /// Drop the partition and all its entries. Returns whether it existed.
    async fn delete(&self, name: &str) -> bool;

    /// Whether the partition exists. Never creates it.
    async fn has(&self, name: &str) -> bool;

    /// Partition names in creation order.
    async fn keys(&self) -> Vec<String>;

    /// Look `request` up in the partition named by `options.cache_name`, or
    /// in every partition in creation order, returning the first hit.
    async fn match_request(
        &self,
        request: &CacheRequest,
        options: &MultiCacheQueryOptions,
    ) -> Option<CachedResponse>;
}
