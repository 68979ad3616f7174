//! HTTP service
//!
//! This module contains the axum surface of the server split into:
//! - parsers: request body → domain types, with all input validation
//! - converters: domain values → response bodies
//! - error: failure kinds and their HTTP responses
//! - endpoints: one handler module per route

pub mod converters;
pub mod endpoints;
pub mod error;
pub mod parsers;

use axum::routing::{get, post};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::persistence::traits::OpeningRepository;

/// State shared by all handlers.
pub struct AppState<R> {
    pub repo: R,
    /// Include the database file's mtime in `/save_data` replies.
    pub echo_last_modified: bool,
}

/// Build the application router.
///
/// `/assets` is only mounted when `assets_root` is set; otherwise it falls
/// through to the 404 fallback like any other unknown path.
pub fn build_router<R: OpeningRepository + 'static>(
    state: AppState<R>,
    assets_root: Option<PathBuf>,
) -> Router {
    let mut router = Router::new()
        .route("/save_data", post(endpoints::save_data::<R>))
        .route("/health", get(endpoints::health));

    if let Some(root) = assets_root {
        router = router.nest_service("/assets", endpoints::asset_service(root));
    }

    router
        .fallback(endpoints::not_found)
        .with_state(Arc::new(state))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
