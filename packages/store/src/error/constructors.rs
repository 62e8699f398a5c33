use super::BoxError;
use super::types::{Error, Kind};

/// Creates an `Error` for a URL that failed to parse or has no host.
pub fn builder<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Builder).with(e.into())
}

/// Same as [`builder`], keeping the offending input for diagnostics.
pub fn invalid_url<E: Into<BoxError>>(e: E, url: &str) -> Error {
    Error::new(Kind::Builder).with(e.into()).with_url(url)
}

/// Creates an `Error` for a rejected header name or value.
pub fn invalid_header<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidHeader).with(e.into())
}

/// Creates an `Error` for a rejected method token.
pub fn invalid_method<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::InvalidMethod).with(e.into())
}

/// Creates an `Error` for a configuration that failed validation.
pub fn config<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Config).with(e.into())
}
