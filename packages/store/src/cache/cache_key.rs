//! Entry key: URL string plus method string

use http::Method;

use crate::http::CacheRequest;

/// Borrowed view of the two parts a partition keys on.
///
/// Headers are deliberately absent: two requests differing only in headers
/// address the same entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheKey<'a> {
    pub url: &'a str,
    pub method: &'a Method,
}

impl<'a> CacheKey<'a> {
    #[must_use]
    pub fn of(request: &'a CacheRequest) -> Self {
        Self {
            url: request.url().as_str(),
            method: request.method(),
        }
    }
}

impl std::fmt::Display for CacheKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}
