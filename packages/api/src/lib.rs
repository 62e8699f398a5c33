//! # respcache
//!
//! Convenience helpers over a named-partition HTTP response cache:
//!
//! - **conditional revalidation**: copy a cached `ETag` into `if-none-match`
//!   or `if-match` on the outgoing request
//! - **credential hygiene**: requests are stored without `Authorization`
//! - **prefix cleanup**: drop entries under a URL prefix except a keep-list
//! - **age eviction**: drop entries whose `Date` is older than a cutoff
//!
//! The cache itself is injected. [`CacheClient::in_memory`] wires up the
//! in-memory store from `respcache_store`; [`CacheClient::without_storage`]
//! gives a client whose helpers all degrade to no-ops.
//!
//! ```
//! use respcache::{CacheClient, DeleteOutcome};
//! use respcache_store::CachedResponse;
//!
//! # tokio_test::block_on(async {
//! let client = CacheClient::in_memory();
//! client.cache_store("https://example.com/one", CachedResponse::with_body("one")).await?;
//! client.cache_store("https://example.com/two", CachedResponse::with_body("two")).await?;
//!
//! let deleted = client.cache_cleanup("https://example.com", &["https://example.com/two"]).await?;
//! assert_eq!(deleted, 1);
//! assert_eq!(client.cache_delete().await, DeleteOutcome::Deleted);
//! # Ok::<(), respcache_store::Error>(())
//! # }).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod client;

pub use client::{CacheClient, CacheLookup, DeleteOutcome, MatchOptions};

// Re-export the types callers pass through the helpers
pub use respcache_store::{
    CacheConfig, CacheRequest, CachedResponse, ConditionalOptions, Error, IntoCacheRequest, Result,
};
