use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::converters::ErrorResponse;
use super::parsers::PayloadError;
use crate::persistence::PersistenceError;

/// Failures surfaced at the HTTP boundary.
///
/// Input and storage failures both answer 500 with
/// `{"status": "error", "message": ...}`, which is what the app checks for.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    MalformedInput(#[from] PayloadError),
    #[error(transparent)]
    Storage(#[from] PersistenceError),
    #[error("not found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) | ApiError::Storage(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::NotFound = self {
            return status.into_response();
        }
        let message = self.to_string();
        tracing::error!(error = %message, "request failed");
        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let malformed = ApiError::from(PayloadError::MissingField("position.fen"));
        let storage = ApiError::from(PersistenceError::Migration("bad".to_string()));
        assert_eq!(malformed.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(storage.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_message_keeps_diagnostic_text() {
        let err = ApiError::from(PayloadError::MissingField("position.fen"));
        assert_eq!(err.to_string(), "missing field `position.fen`");
    }
}
