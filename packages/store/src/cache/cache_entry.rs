//! Stored (request, response) pair

use crate::http::{CacheRequest, CachedResponse};

/// One slot in a partition.
///
/// `response` is `None` for slots reserved with `add`; such entries show up
/// in `keys` but never in `match_request` or `match_all`.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub request: CacheRequest,
    pub response: Option<CachedResponse>,
}

impl CacheEntry {
    #[must_use]
    pub fn reserved(request: CacheRequest) -> Self {
        Self {
            request,
            response: None,
        }
    }

    #[must_use]
    pub fn stored(request: CacheRequest, response: CachedResponse) -> Self {
        Self {
            request,
            response: Some(response),
        }
    }
}
