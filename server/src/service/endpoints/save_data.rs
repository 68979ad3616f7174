//! `POST /save_data`: replace one position and its recommended moves.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::persistence::traits::OpeningRepository;
use crate::service::converters::SaveDataResponse;
use crate::service::error::ApiError;
use crate::service::parsers::{parse_save_request, PayloadError};
use crate::service::AppState;

pub async fn save_data<R: OpeningRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<SaveDataResponse>, ApiError> {
    // Body and JSON failures, oversized bodies included, must get the
    // `{"status": "error"}` reply.
    let body = body.map_err(|e| PayloadError::Body(e.body_text()))?;
    let entry = parse_save_request(&body)?;
    tracing::info!(
        fen = %entry.position.fen,
        moves = entry.moves.len(),
        "POST save_data"
    );

    state.repo.save_entry(&entry).await?;
    tracing::info!(name = %entry.position.name_ko, "opening saved");

    let last_modified = if state.echo_last_modified {
        // Already committed; a stat failure does not fail the request.
        match state.repo.modified_at().await {
            Ok(time) => time,
            Err(e) => {
                tracing::warn!("Failed to read database modification time: {}", e);
                None
            }
        }
    } else {
        None
    };

    Ok(Json(SaveDataResponse::success(last_modified)))
}
