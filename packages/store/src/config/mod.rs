//! Helper-layer configuration
//!
//! `CacheConfig` controls which partition the helpers use by default and
//! how requests and responses are filtered before being stored.

use crate::error::{self, Result};

/// Name of the partition used when callers don't pick one.
pub const DEFAULT_PARTITION: &str = "default";

/// Cache helper configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Partition used by the helpers without an explicit name
    pub default_partition: String,
    /// Remove `Authorization` from requests before storing them
    pub strip_authorization: bool,
    /// Only store 2xx responses
    pub store_success_only: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_partition: DEFAULT_PARTITION.to_string(),
            strip_authorization: true,
            store_success_only: true,
        }
    }
}

impl CacheConfig {
    /// Use `name` as the default partition
    ///
    /// # Examples
    /// ```
    /// use respcache_store::config::CacheConfig;
    ///
    /// let config = CacheConfig::default().with_partition("images");
    /// assert_eq!(config.default_partition, "images");
    /// ```
    #[must_use]
    pub fn with_partition(mut self, name: impl Into<String>) -> Self {
        self.default_partition = name.into();
        self
    }

    #[must_use]
    pub fn with_strip_authorization(mut self, enabled: bool) -> Self {
        self.strip_authorization = enabled;
        self
    }

    #[must_use]
    pub fn with_store_success_only(mut self, enabled: bool) -> Self {
        self.store_success_only = enabled;
        self
    }

    /// Store every response as given: keep `Authorization`, accept any status.
    ///
    /// Useful when the cache is a test double and the raw traffic matters.
    #[must_use]
    pub fn passthrough() -> Self {
        Self {
            strip_authorization: false,
            store_success_only: false,
            ..Self::default()
        }
    }

    /// Check the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the default partition name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.default_partition.trim().is_empty() {
            return Err(error::config("default partition name must not be empty"));
        }
        Ok(())
    }
}
