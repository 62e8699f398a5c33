//! Response descriptor stored as the cache value

use std::time::SystemTime;

use bytes::Bytes;
use http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header};

use crate::cache::http_date::httpdate;
use crate::error::Result;

/// An owned, fully materialised response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachedResponse {
    url: String,
    status: StatusCode,
    status_text: String,
    headers: HeaderMap,
    body: Bytes,
}

impl Default for CachedResponse {
    fn default() -> Self {
        Self::new(StatusCode::OK)
    }
}

impl CachedResponse {
    /// Empty response with `status` and its canonical reason phrase.
    #[must_use]
    pub fn new(status: StatusCode) -> Self {
        Self {
            url: String::new(),
            status,
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    /// Response with a body and status 200.
    #[must_use]
    pub fn with_body(body: impl Into<Bytes>) -> Self {
        Self::default().body(body)
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    #[must_use]
    pub fn status_text(mut self, text: impl Into<String>) -> Self {
        self.status_text = text.into();
        self
    }

    /// Set a header, replacing any existing values, and return the response.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHeader` if the name or value is rejected.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())?;
        let value = HeaderValue::from_str(value)?;
        self.headers.insert(name, value);
        Ok(self)
    }

    #[must_use]
    pub fn response_url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    #[must_use]
    pub fn reason(&self) -> &str {
        &self.status_text
    }

    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    #[must_use]
    pub fn bytes(&self) -> &Bytes {
        &self.body
    }

    /// True for 2xx statuses.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    #[must_use]
    pub fn etag(&self) -> Option<&str> {
        self.headers.get(header::ETAG).and_then(|v| v.to_str().ok())
    }

    /// The `Date` header, if present and in a recognised HTTP-date format.
    #[must_use]
    pub fn date(&self) -> Option<SystemTime> {
        let raw = self.headers.get(header::DATE)?.to_str().ok()?;
        match httpdate::parse_http_date(raw) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::trace!(target: "respcache::http::response", error = %e, "ignoring Date header");
                None
            }
        }
    }
}
