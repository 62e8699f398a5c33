//! `CacheClient` helper modules
//!
//! - `core`: the client struct and storage resolution
//! - `lookup`: `cache_match` with conditional headers
//! - `store`: `cache_store`
//! - `maintenance`: prefix cleanup, partition deletion, age eviction

pub mod core;
pub mod lookup;
pub mod maintenance;
pub mod store;

pub use self::core::CacheClient;
pub use lookup::{CacheLookup, MatchOptions};
pub use maintenance::DeleteOutcome;
