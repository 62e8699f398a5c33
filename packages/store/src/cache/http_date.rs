//! HTTP date parsing and formatting
//!
//! Parses the three RFC 7231 HTTP-date forms, RFC 2822 and RFC 3339.
//! Used to read the `Date` header when evicting entries by age, so parsing
//! is lenient: the weekday name is ignored and pre-epoch dates are kept.

use thiserror::Error;

/// HTTP date parsing error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpDateParseError {
    /// Date format was not recognized by any of the supported parsers
    #[error("Unrecognized HTTP date format: {0}")]
    UnrecognizedFormat(String),
}

/// HTTP date parsing utilities
pub mod httpdate {
    use std::time::SystemTime;

    use chrono::{DateTime, NaiveDateTime, Utc};

    use super::HttpDateParseError;

    /// Forms without a zone, all in GMT, with the weekday already removed.
    const GMT_FORMATS: [&str; 3] = [
        // IMF-fixdate: `06 Nov 1994 08:49:37 GMT`
        "%d %b %Y %H:%M:%S GMT",
        // RFC 850: `06-Nov-94 08:49:37 GMT`
        "%d-%b-%y %H:%M:%S GMT",
        // asctime: `Nov  6 08:49:37 1994`
        "%b %e %H:%M:%S %Y",
    ];

    /// RFC 2822 with a numeric zone, weekday removed.
    const ZONED_FORMAT: &str = "%d %b %Y %H:%M:%S %z";

    /// Parse an HTTP date string into `SystemTime`.
    ///
    /// Accepted forms:
    /// 1. IMF-fixdate: `Sun, 06 Nov 1994 08:49:37 GMT`
    /// 2. RFC 850: `Sunday, 06-Nov-94 08:49:37 GMT`
    /// 3. asctime: `Sun Nov  6 08:49:37 1994`
    /// 4. RFC 2822 with a numeric zone
    /// 5. RFC 3339: `1994-11-06T08:49:37Z`
    ///
    /// The weekday is not checked against the date.
    pub fn parse_http_date(date_str: &str) -> Result<SystemTime, HttpDateParseError> {
        let date_str = date_str.trim();
        parse_utc(date_str)
            .map(SystemTime::from)
            .ok_or_else(|| HttpDateParseError::UnrecognizedFormat(date_str.to_string()))
    }

    /// Format `SystemTime` as an IMF-fixdate string.
    pub fn fmt_http_date(time: SystemTime) -> String {
        let dt: DateTime<Utc> = time.into();
        dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }

    fn parse_utc(date_str: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
            return Some(dt.with_timezone(&Utc));
        }

        // `Sun, ...` / `Sunday, ...` drop up to the comma; asctime drops the
        // first word. The untouched string covers weekday-less RFC 2822.
        let candidates = [
            Some(date_str),
            date_str.split_once(',').map(|(_, rest)| rest.trim_start()),
            date_str.split_once(' ').map(|(_, rest)| rest.trim_start()),
        ];

        candidates.into_iter().flatten().find_map(|body| {
            GMT_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(body, format).ok())
                .map(|dt| dt.and_utc())
                .or_else(|| {
                    DateTime::parse_from_str(body, ZONED_FORMAT)
                        .ok()
                        .map(|dt| dt.with_timezone(&Utc))
                })
        })
    }
}
