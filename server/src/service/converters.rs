//! Conversions from domain values to response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::SystemTime;

/// Format a timestamp as an HTTP-date (IMF-fixdate), e.g.
/// `Sun, 06 Nov 1994 08:49:37 GMT`.
///
/// Sub-second precision is dropped, matching the `Last-Modified` header the
/// asset server sends for the same file.
pub fn format_http_date(time: SystemTime) -> String {
    DateTime::<Utc>::from(time)
        .format("%a, %d %b %Y %H:%M:%S GMT")
        .to_string()
}

/// Body of a successful `POST /save_data`.
#[derive(Debug, Serialize)]
pub struct SaveDataResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl SaveDataResponse {
    pub fn success(last_modified: Option<SystemTime>) -> Self {
        Self {
            status: "success",
            last_modified: last_modified.map(format_http_date),
        }
    }
}

/// Body of a failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}
