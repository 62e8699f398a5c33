//! HTTP descriptors
//!
//! Request and response value types the cache stores, the normalisation
//! trait for raw URLs, and conditional header helpers.

pub mod headers;
pub mod into_request;
pub mod request;
pub mod response;

pub use headers::{ConditionalOptions, apply_conditional_headers};
pub use into_request::{IntoCacheRequest, IntoCacheRequestSealed};
pub use request::CacheRequest;
pub use response::CachedResponse;
