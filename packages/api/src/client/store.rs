//! Storing responses

use respcache_store::{CachedResponse, IntoCacheRequest, Result};

use super::core::CacheClient;

impl CacheClient {
    /// Store `response` under `request` in the default partition.
    ///
    /// With the default configuration only 2xx responses are stored, and the
    /// request is stored without its `Authorization` header. Returns whether
    /// the response was stored; `Ok(false)` without storage.
    ///
    /// # Errors
    ///
    /// Returns a `Builder` error if a raw URL does not parse.
    pub async fn cache_store<R: IntoCacheRequest>(
        &self,
        request: R,
        response: CachedResponse,
    ) -> Result<bool> {
        self.cache_store_in(&self.config.default_partition, request, response).await
    }

    /// [`CacheClient::cache_store`] into a named partition.
    ///
    /// # Errors
    ///
    /// Returns a `Builder` error if a raw URL does not parse.
    pub async fn cache_store_in<R: IntoCacheRequest>(
        &self,
        partition: &str,
        request: R,
        response: CachedResponse,
    ) -> Result<bool> {
        if self.storage.is_none() {
            return Ok(false);
        }
        if self.config.store_success_only && !response.is_success() {
            tracing::debug!(
                target: "respcache::client",
                partition,
                status = %response.status(),
                "skipping non-success response"
            );
            return Ok(false);
        }

        let request = request.into_cache_request()?;
        let request = if self.config.strip_authorization {
            request.without_authorization()
        } else {
            request
        };

        let Some(cache) = self.open(partition).await else {
            return Ok(false);
        };
        cache.put(request, response).await;
        Ok(true)
    }
}
