//! Partition maintenance: prefix cleanup, partition removal, age eviction

use std::time::SystemTime;

use respcache_store::{CacheQueryOptions, IntoCacheRequest, Result};

use super::core::CacheClient;

/// Outcome of [`CacheClient::cache_delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The partition existed and was removed
    Deleted,
    /// No partition by that name
    NotFound,
    /// No cache storage is available
    NoStorage,
}

impl DeleteOutcome {
    #[must_use]
    pub fn is_deleted(self) -> bool {
        matches!(self, DeleteOutcome::Deleted)
    }
}

impl CacheClient {
    /// Delete entries under `prefix` in the default partition, keeping any
    /// whose URL appears in `retain`.
    ///
    /// `prefix` is normalised like any request URL, so
    /// `"https://example.com"` matches everything under `https://example.com/`.
    /// Returns the number of entries deleted.
    ///
    /// # Errors
    ///
    /// Returns a `Builder` error if `prefix` does not parse.
    pub async fn cache_cleanup<R, S>(&self, prefix: R, retain: &[S]) -> Result<usize>
    where
        R: IntoCacheRequest,
        S: AsRef<str>,
    {
        self.cache_cleanup_in(&self.config.default_partition, prefix, retain).await
    }

    /// [`CacheClient::cache_cleanup`] in a named partition.
    ///
    /// # Errors
    ///
    /// Returns a `Builder` error if `prefix` does not parse.
    pub async fn cache_cleanup_in<R, S>(&self, partition: &str, prefix: R, retain: &[S]) -> Result<usize>
    where
        R: IntoCacheRequest,
        S: AsRef<str>,
    {
        let Some(cache) = self.open(partition).await else {
            return Ok(0);
        };
        let prefix = prefix.into_cache_request()?;

        let options = CacheQueryOptions::default();
        let prefix = prefix.url().as_str();
        let mut count = 0;
        for key in cache.keys(None, &options).await {
            let url = key.url().as_str();
            if !url.starts_with(prefix) || retain.iter().any(|keep| keep.as_ref() == url) {
                continue;
            }
            if cache.delete(&key, &options).await {
                count += 1;
            }
        }

        tracing::debug!(target: "respcache::client", partition, prefix, deleted = count, "cache cleanup");
        Ok(count)
    }

    /// Delete the default partition.
    pub async fn cache_delete(&self) -> DeleteOutcome {
        self.cache_delete_in(&self.config.default_partition).await
    }

    /// Delete a named partition.
    pub async fn cache_delete_in(&self, partition: &str) -> DeleteOutcome {
        let Some(ref storage) = self.storage else {
            return DeleteOutcome::NoStorage;
        };
        if storage.delete(partition).await {
            DeleteOutcome::Deleted
        } else {
            DeleteOutcome::NotFound
        }
    }

    /// Delete entries in the default partition whose response `Date` header
    /// is older than `cutoff`.
    ///
    /// Entries without a response or without a parseable `Date` are kept.
    /// Returns the number of entries deleted.
    pub async fn delete_old_requests(&self, cutoff: SystemTime) -> usize {
        self.delete_old_requests_in(&self.config.default_partition, cutoff).await
    }

    /// [`CacheClient::delete_old_requests`] in a named partition.
    pub async fn delete_old_requests_in(&self, partition: &str, cutoff: SystemTime) -> usize {
        let Some(cache) = self.open(partition).await else {
            return 0;
        };

        let options = CacheQueryOptions::default();
        let mut count = 0;
        for key in cache.keys(None, &options).await {
            let date = cache
                .match_request(&key, &options)
                .await
                .and_then(|response| response.date());
            let Some(date) = date else {
                continue;
            };
            if date < cutoff && cache.delete(&key, &options).await {
                tracing::trace!(target: "respcache::client", partition, url = %key.url(), "evicting stale entry");
                count += 1;
            }
        }

        tracing::debug!(target: "respcache::client", partition, deleted = count, "age eviction");
        count
    }
}
