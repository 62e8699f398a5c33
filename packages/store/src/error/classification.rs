use super::types::{Error, Kind};

impl Error {
    /// Returns true if the error came from URL validation.
    #[must_use]
    pub fn is_builder(&self) -> bool {
        matches!(self.inner.kind, Kind::Builder)
    }

    /// Returns true if a header name or value was rejected.
    #[must_use]
    pub fn is_invalid_header(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidHeader)
    }

    /// Returns true if the method token was rejected.
    #[must_use]
    pub fn is_invalid_method(&self) -> bool {
        matches!(self.inner.kind, Kind::InvalidMethod)
    }

    /// Returns true if a `CacheConfig` was rejected.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self.inner.kind, Kind::Config)
    }
}
