//! Types most users of the cache need.

pub use crate::cache::{
    Cache, CacheQueryOptions, CacheStorage, MemoryCache, MemoryCacheStorage, MultiCacheQueryOptions,
};
pub use crate::config::CacheConfig;
pub use crate::error::{Error, Result};
pub use crate::http::{
    CacheRequest, CachedResponse, ConditionalOptions, IntoCacheRequest, apply_conditional_headers,
};

pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
pub use url::Url;
