//! # respcache store
//!
//! Request/response descriptors, the named-partition cache contract, and an
//! in-memory implementation of it.
//!
//! The in-memory store reproduces the observable behaviour of a host
//! response cache closely enough to test helper code against:
//!
//! - entries keyed by URL and method, last write wins
//! - partitions isolated from each other, created lazily by `open`
//! - registry-wide lookups scanning partitions in creation order
//!
//! Query options (`ignore_method`, `ignore_search`, `ignore_vary`) are
//! accepted but not interpreted.
//!
//! ```
//! use respcache_store::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let storage = MemoryCacheStorage::new();
//! let cache = storage.open("default").await;
//! let request = CacheRequest::get("https://example.com/one")?;
//! cache.put(request.clone(), CachedResponse::with_body("hi")).await;
//!
//! let hit = storage.match_request(&request, &MultiCacheQueryOptions::default()).await;
//! assert!(hit.is_some());
//! # Ok::<(), respcache_store::Error>(())
//! # }).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all)]

pub mod cache;
pub mod config;
pub mod error;
pub mod http;

pub mod prelude;

pub use crate::prelude::*;
