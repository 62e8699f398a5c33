//! Conditional request headers derived from a cached `ETag`

use http::{HeaderValue, header};

use super::request::CacheRequest;
use super::response::CachedResponse;

/// Which conditional headers to derive from a cached response.
///
/// - `if_none_match` copies the cached `ETag` into `if-none-match`, letting
///   the origin answer `304 Not Modified` when nothing changed.
/// - `if_match` copies it into `if-match`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionalOptions {
    pub if_none_match: bool,
    pub if_match: bool,
}

impl ConditionalOptions {
    #[must_use]
    pub fn if_none_match() -> Self {
        Self {
            if_none_match: true,
            if_match: false,
        }
    }

    #[must_use]
    pub fn if_match() -> Self {
        Self {
            if_none_match: false,
            if_match: true,
        }
    }
}

/// Copy the response `ETag` into the request's conditional headers.
///
/// Does nothing when the response carries no `ETag`. Returns whether any
/// header was written.
pub fn apply_conditional_headers(
    request: &mut CacheRequest,
    response: &CachedResponse,
    options: ConditionalOptions,
) -> bool {
    let Some(etag) = response.headers().get(header::ETAG).cloned() else {
        return false;
    };
    if etag.is_empty() {
        return false;
    }

    let mut applied = false;
    if options.if_none_match {
        set(request, header::IF_NONE_MATCH, etag.clone());
        applied = true;
    }
    if options.if_match {
        set(request, header::IF_MATCH, etag);
        applied = true;
    }
    applied
}

fn set(request: &mut CacheRequest, name: header::HeaderName, value: HeaderValue) {
    request.headers_mut().insert(name, value);
}
