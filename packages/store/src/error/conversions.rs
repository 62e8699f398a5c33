use http::header::{InvalidHeaderName, InvalidHeaderValue};
use http::method::InvalidMethod;

use super::constructors::{invalid_header, invalid_method};
use super::types::Error;

impl From<InvalidHeaderName> for Error {
    fn from(error: InvalidHeaderName) -> Self {
        invalid_header(error)
    }
}

impl From<InvalidHeaderValue> for Error {
    fn from(error: InvalidHeaderValue) -> Self {
        invalid_header(error)
    }
}

impl From<InvalidMethod> for Error {
    fn from(error: InvalidMethod) -> Self {
        invalid_method(error)
    }
}
