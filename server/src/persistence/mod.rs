mod records;
pub mod sqlite;
pub mod traits;

pub use records::{Branches, EvalScore, MoveRecord, OpeningEntry, PositionRecord};

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration failed: {0}")]
    Migration(String),
    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),
}
