//! Request descriptor used as the cache key carrier
//!
//! A `CacheRequest` is the owned (method, URL, headers) triple the host cache
//! matches against. Entries are keyed by `url.as_str()` and `method.as_str()`;
//! headers travel with the stored key but never take part in matching.

use http::{HeaderMap, HeaderName, HeaderValue, Method, header};
use url::Url;

use crate::error::{self, Result};

/// Owned request descriptor: method, normalised URL and headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
}

impl CacheRequest {
    /// Build a descriptor for `method` and `url`.
    ///
    /// # Errors
    ///
    /// Returns a `Builder` error if the URL does not parse or has no host.
    pub fn new(method: Method, url: &str) -> Result<Self> {
        Ok(Self::from_url(method, parse_url(url)?))
    }

    /// Build a `GET` descriptor, the shape a bare URL normalises to.
    ///
    /// # Errors
    ///
    /// Returns a `Builder` error if the URL does not parse or has no host.
    pub fn get(url: &str) -> Result<Self> {
        Self::new(Method::GET, url)
    }

    /// Build a descriptor from an already parsed URL.
    #[must_use]
    pub fn from_url(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Build a descriptor from a method token such as `"PATCH"`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidMethod` for a malformed token, or a `Builder` error for
    /// a bad URL.
    pub fn with_method_str(method: &str, url: &str) -> Result<Self> {
        let method = Method::from_bytes(method.as_bytes())?;
        Self::new(method, url)
    }

    /// Set a header, replacing any existing values, and return the descriptor.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeader` if the name or value is rejected.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        self.set_header(name, value)?;
        Ok(self)
    }

    /// Replace any existing values of `name` with `value`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeader` if the name or value is rejected.
    pub fn set_header(&mut self, name: &str, value: &str) -> Result<()> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(())
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    /// First value of `name` as a string, if present and visible ASCII.
    #[must_use]
    pub fn header_str(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Deep copy with the `Authorization` header removed.
    ///
    /// This is the form requests are stored under, so credentials never end
    /// up in the cache keys.
    #[must_use]
    pub fn without_authorization(&self) -> Self {
        let mut copy = self.clone();
        copy.headers.remove(header::AUTHORIZATION);
        copy
    }
}

pub(crate) fn parse_url(input: &str) -> Result<Url> {
    let url = Url::parse(input).map_err(|e| error::invalid_url(e, input))?;
    if url.has_host() {
        Ok(url)
    } else {
        Err(error::invalid_url(format!("URL has no host: {url}"), input))
    }
}
