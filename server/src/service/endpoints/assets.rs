//! Static files under `/assets`.
//!
//! `ServeDir` rejects any path that would leave the root (`..`, absolute
//! components, their percent-encoded forms) with 404, answers `HEAD`, sets
//! `Content-Type` from the extension and `Last-Modified` from the file's
//! mtime, and honours `If-Modified-Since`. The app relies on the last two to
//! decide whether to download the opening database again.

use std::path::Path;
use tower_http::services::ServeDir;

use crate::service::error::ApiError;

pub fn asset_service(root: impl AsRef<Path>) -> ServeDir {
    ServeDir::new(root).append_index_html_on_directories(false)
}

/// Fallback for unknown routes, including `/assets` when asset serving is
/// disabled.
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
