//! `Cache` operations for the in-memory partition
//!
//! Each operation takes the lock once and releases it before returning, so
//! callers never observe a half-applied mutation.

use async_trait::async_trait;

use super::super::{
    cache_entry::CacheEntry, cache_key::CacheKey, options::CacheQueryOptions, traits::Cache,
};
use super::core::{MemoryCache, MethodEntries};
use crate::http::{CacheRequest, CachedResponse};

impl MemoryCache {
    fn insert(&self, entry: CacheEntry) {
        let url = entry.request.url().as_str().to_owned();
        let method = entry.request.method().clone();

        tracing::debug!(
            target: "respcache::cache::partition",
            partition = %self.name,
            key = %CacheKey::of(&entry.request),
            reserved = entry.response.is_none(),
            "storing entry"
        );

        self.entries.write().entry(url).or_default().insert(method, entry);
        self.stats.record_store();
    }

    /// Collect from the URL bucket of `request`, or from every bucket.
    fn collect<T>(
        &self,
        request: Option<&CacheRequest>,
        mut pick: impl FnMut(&CacheEntry) -> Option<T>,
    ) -> Vec<T> {
        let entries = self.entries.read();
        match request {
            Some(request) => entries
                .get(request.url().as_str())
                .map(|methods: &MethodEntries| methods.values().filter_map(&mut pick).collect())
                .unwrap_or_default(),
            None => entries
                .values()
                .flat_map(MethodEntries::values)
                .filter_map(pick)
                .collect(),
        }
    }

    fn note_options(&self, operation: &'static str, options: &CacheQueryOptions) {
        if options.is_relaxed() {
            tracing::trace!(
                target: "respcache::cache::partition",
                partition = %self.name,
                operation,
                ?options,
                "query options are not interpreted by the in-memory cache"
            );
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn add(&self, request: CacheRequest) {
        self.insert(CacheEntry::reserved(request));
    }

    async fn put(&self, request: CacheRequest, response: CachedResponse) {
        self.insert(CacheEntry::stored(request, response));
    }

    async fn match_request(
        &self,
        request: &CacheRequest,
        options: &CacheQueryOptions,
    ) -> Option<CachedResponse> {
        self.note_options("match", options);
        let key = CacheKey::of(request);

        let found = self
            .entries
            .read()
            .get(key.url)
            .and_then(|methods| methods.get(key.method))
            .and_then(|entry| entry.response.clone());

        if found.is_some() {
            self.stats.record_hit();
        } else {
            self.stats.record_miss();
        }
        tracing::debug!(
            target: "respcache::cache::partition",
            partition = %self.name,
            %key,
            hit = found.is_some(),
            "match"
        );
        found
    }

    async fn match_all(
        &self,
        request: Option<&CacheRequest>,
        options: &CacheQueryOptions,
    ) -> Vec<CachedResponse> {
        self.note_options("match_all", options);
        self.collect(request, |entry| entry.response.clone())
    }

    async fn keys(
        &self,
        request: Option<&CacheRequest>,
        options: &CacheQueryOptions,
    ) -> Vec<CacheRequest> {
        self.note_options("keys", options);
        self.collect(request, |entry| Some(entry.request.clone()))
    }

    async fn delete(&self, request: &CacheRequest, options: &CacheQueryOptions) -> bool {
        self.note_options("delete", options);
        let key = CacheKey::of(request);

        let removed = {
            let mut entries = self.entries.write();
            match entries.get_mut(key.url) {
                Some(methods) => {
                    let removed = methods.shift_remove(key.method).is_some();
                    if methods.is_empty() {
                        entries.shift_remove(key.url);
                    }
                    removed
                }
                None => false,
            }
        };

        if removed {
            self.stats.record_deletion();
        }
        tracing::debug!(
            target: "respcache::cache::partition",
            partition = %self.name,
            %key,
            removed,
            "delete"
        );
        removed
    }
}
