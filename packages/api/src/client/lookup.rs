//! Cache lookups with conditional header injection

use respcache_store::http::{ConditionalOptions, apply_conditional_headers};
use respcache_store::{CacheQueryOptions, CacheRequest, CachedResponse, IntoCacheRequest, Result};

use super::core::CacheClient;

/// Options for [`CacheClient::cache_match`].
///
/// - `conditional.if_none_match`: on a hit, copy the cached `ETag` into the
///   request's `if-none-match` so the origin can answer `304 Not Modified`.
/// - `conditional.if_match`: same, into `if-match`.
/// - `query`: forwarded to the partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    pub conditional: ConditionalOptions,
    pub query: CacheQueryOptions,
}

impl MatchOptions {
    #[must_use]
    pub fn if_none_match() -> Self {
        Self {
            conditional: ConditionalOptions::if_none_match(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn if_match() -> Self {
        Self {
            conditional: ConditionalOptions::if_match(),
            ..Self::default()
        }
    }
}

/// Result of [`CacheClient::cache_lookup`]: the normalised request, with any
/// conditional headers applied, and the cached response.
#[derive(Debug, Clone)]
pub struct CacheLookup {
    pub request: CacheRequest,
    pub response: Option<CachedResponse>,
}

impl CacheClient {
    /// Try to return a response from the default partition.
    ///
    /// On a hit, conditional headers are written into `request` as selected
    /// by `options`, ready for a revalidation round trip:
    ///
    /// ```
    /// use respcache::{CacheClient, MatchOptions};
    /// use respcache_store::{CacheRequest, CachedResponse};
    ///
    /// # tokio_test::block_on(async {
    /// let client = CacheClient::in_memory();
    /// let tagged = CachedResponse::with_body("cached").header("ETag", "\"v1\"")?;
    /// client.cache_store("https://example.com/api", tagged).await?;
    ///
    /// let mut request = CacheRequest::get("https://example.com/api")?;
    /// let cached = client.cache_match(&mut request, &MatchOptions::if_none_match()).await;
    /// assert!(cached.is_some());
    /// assert_eq!(request.header_str("if-none-match"), Some("\"v1\""));
    /// # Ok::<(), respcache_store::Error>(())
    /// # }).unwrap();
    /// ```
    pub async fn cache_match(
        &self,
        request: &mut CacheRequest,
        options: &MatchOptions,
    ) -> Option<CachedResponse> {
        self.cache_match_in(&self.config.default_partition, request, options).await
    }

    /// [`CacheClient::cache_match`] against a named partition.
    pub async fn cache_match_in(
        &self,
        partition: &str,
        request: &mut CacheRequest,
        options: &MatchOptions,
    ) -> Option<CachedResponse> {
        let cache = self.open(partition).await?;
        let response = cache.match_request(request, &options.query).await?;

        if apply_conditional_headers(request, &response, options.conditional) {
            tracing::debug!(
                target: "respcache::client",
                partition,
                url = %request.url(),
                "applied conditional headers from cached ETag"
            );
        }
        Some(response)
    }

    /// Normalise `request` (a URL or a descriptor) and look it up in the
    /// default partition.
    ///
    /// # Errors
    ///
    /// Returns a `Builder` error if a raw URL does not parse.
    pub async fn cache_lookup<R: IntoCacheRequest>(
        &self,
        request: R,
        options: &MatchOptions,
    ) -> Result<CacheLookup> {
        let mut request = request.into_cache_request()?;
        let response = self.cache_match(&mut request, options).await;
        Ok(CacheLookup { request, response })
    }
}
