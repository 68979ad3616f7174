//! Async repository trait for the opening book.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send`, which axum requires of handler futures.

use super::{MoveRecord, OpeningEntry, PersistenceError, PositionRecord};
use std::future::Future;
use std::time::SystemTime;

/// Repository for opening positions and their recommended moves.
///
/// Implementations must save an entry atomically: the position upsert, the
/// removal of the previous move set and the insertion of the new one either
/// all become visible or none do.
pub trait OpeningRepository: Send + Sync {
    fn save_entry(
        &self,
        entry: &OpeningEntry,
    ) -> impl Future<Output = Result<(), PersistenceError>> + Send;
    fn load_position(
        &self,
        fen: &str,
    ) -> impl Future<Output = Result<Option<PositionRecord>, PersistenceError>> + Send;
    /// Moves recommended from `fen`, ordered by priority and then by the order
    /// they were submitted in.
    fn list_moves(
        &self,
        fen: &str,
    ) -> impl Future<Output = Result<Vec<MoveRecord>, PersistenceError>> + Send;
    /// Modification time of the backing file, or `None` when the store has no
    /// file (in-memory databases).
    fn modified_at(
        &self,
    ) -> impl Future<Output = Result<Option<SystemTime>, PersistenceError>> + Send;
}
