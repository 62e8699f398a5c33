//! In-memory HTTP response cache with named partitions
//!
//! A stand-in for a host-provided response cache:
//! - `traits`: the `Cache` / `CacheStorage` contract helper code targets
//! - `partition`: one partition, keyed by URL then method
//! - `registry`: named partitions, wildcard lookup across them
//! - `options`: query options (accepted, not interpreted)
//! - `http_date`: `Date` header parsing for age-based eviction

pub mod cache_entry;
pub mod cache_key;
pub mod cache_stats;
pub mod http_date;
pub mod options;
pub mod partition;
pub mod registry;
pub mod traits;

pub use cache_entry::CacheEntry;
pub use cache_key::CacheKey;
pub use cache_stats::{CacheStats, CacheStatsSnapshot};
pub use http_date::{HttpDateParseError, httpdate};
pub use options::{CacheQueryOptions, MultiCacheQueryOptions};
pub use partition::MemoryCache;
pub use registry::MemoryCacheStorage;
pub use traits::{Cache, CacheStorage};
