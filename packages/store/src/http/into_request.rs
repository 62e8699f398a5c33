use url::Url;

use super::request::CacheRequest;
use crate::error::Result;

/// A trait to normalise a URL or an existing descriptor into a `CacheRequest`.
///
/// Bare URLs become `GET` requests. This trait is "sealed", such that only
/// types within this crate can implement it.
pub trait IntoCacheRequest: IntoCacheRequestSealed {}

impl IntoCacheRequest for CacheRequest {}
impl IntoCacheRequest for &CacheRequest {}
impl IntoCacheRequest for Url {}
impl IntoCacheRequest for &Url {}
impl IntoCacheRequest for String {}
impl IntoCacheRequest for &String {}
impl IntoCacheRequest for &str {}

pub trait IntoCacheRequestSealed {
    /// # Errors
    ///
    /// Returns a `Builder` error if a raw URL does not parse or has no host.
    fn into_cache_request(self) -> Result<CacheRequest>;
}

impl IntoCacheRequestSealed for CacheRequest {
    fn into_cache_request(self) -> Result<CacheRequest> {
        Ok(self)
    }
}

impl IntoCacheRequestSealed for &CacheRequest {
    fn into_cache_request(self) -> Result<CacheRequest> {
        Ok(self.clone())
    }
}

impl IntoCacheRequestSealed for Url {
    fn into_cache_request(self) -> Result<CacheRequest> {
        // Round-trip through the string form so hostless URLs are rejected
        // the same way as raw input.
        CacheRequest::get(self.as_str())
    }
}

impl IntoCacheRequestSealed for &Url {
    fn into_cache_request(self) -> Result<CacheRequest> {
        CacheRequest::get(self.as_str())
    }
}

impl IntoCacheRequestSealed for &str {
    fn into_cache_request(self) -> Result<CacheRequest> {
        CacheRequest::get(self)
    }
}

impl IntoCacheRequestSealed for &String {
    fn into_cache_request(self) -> Result<CacheRequest> {
        (&**self).into_cache_request()
    }
}

impl IntoCacheRequestSealed for String {
    fn into_cache_request(self) -> Result<CacheRequest> {
        (&*self).into_cache_request()
    }
}
