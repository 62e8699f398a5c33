//! Single-partition in-memory store
//!
//! - `core`: `MemoryCache` struct, construction and size queries
//! - `operations`: the `Cache` trait implementation

pub mod core;
pub mod operations;

pub use self::core::MemoryCache;
