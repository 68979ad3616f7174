//! SQLite database connection pool and migration runner.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::persistence::PersistenceError;

/// Holds a connection pool to the SQLite database.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (or create) the database at `path`, run migrations, and return
    /// a ready-to-use `Database`.
    pub async fn open(path: &Path) -> Result<Self, PersistenceError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(PersistenceError::Io)?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        let db = Self {
            pool,
            path: Some(path.to_path_buf()),
        };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Create an in-memory database for testing. Migrations are applied.
    #[cfg(test)]
    pub async fn new_in_memory() -> Result<Self, PersistenceError> {
        let options = "sqlite::memory:"
            .parse::<SqliteConnectOptions>()?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        let db = Self { pool, path: None };
        db.run_migrations().await?;
        Ok(db)
    }

    /// Run embedded migrations from `server/migrations/`.
    async fn run_migrations(&self) -> Result<(), PersistenceError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| PersistenceError::Migration(e.to_string()))?;
        Ok(())
    }

    /// Get a reference to the underlying pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Path of the database file, `None` for in-memory databases.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Last modification time of the database file.
    pub async fn modified_at(&self) -> Result<Option<SystemTime>, PersistenceError> {
        let Some(path) = &self.path else {
            return Ok(None);
        };
        let metadata = tokio::fs::metadata(path).await?;
        Ok(Some(metadata.modified()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_in_memory() {
        let db = Database::new_in_memory().await.unwrap();
        // Verify the pool is functional
        let row: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(row.0, 1);
        assert!(db.path().is_none());
        assert!(db.modified_at().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_migrations_create_tables() {
        let db = Database::new_in_memory().await.unwrap();
        let tables: Vec<(String,)> =
            sqlx::query_as("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
                .fetch_all(db.pool())
                .await
                .unwrap();
        let names: Vec<&str> = tables.iter().map(|t| t.0.as_str()).collect();
        assert!(names.contains(&"positions"));
        assert!(names.contains(&"moves"));
    }

    #[tokio::test]
    async fn test_open_file_based() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("chessDB.sqlite");
        let db = Database::open(&db_path).await.unwrap();
        let row: (i64,) = sqlx::query_as("SELECT 1")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(row.0, 1);
        assert!(db_path.exists());
        assert_eq!(db.path(), Some(db_path.as_path()));
        assert!(db.modified_at().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_reopen_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("chessDB.sqlite");
        let first = Database::open(&db_path).await.unwrap();
        first.pool().close().await;

        // Migrations are recorded, so a second open is a no-op on the schema.
        let second = Database::open(&db_path).await.unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM positions")
            .fetch_one(second.pool())
            .await
            .unwrap();
        assert_eq!(count.0, 0);
    }

    #[tokio::test]
    async fn test_adopts_schema_created_by_the_app() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("chessDB.sqlite");

        // A database file created outside the server, without migration history.
        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .unwrap();
        sqlx::query(
            "CREATE TABLE positions (fen TEXT PRIMARY KEY, san TEXT, name_ko TEXT, \
             name_en TEXT, eval, \"desc\" TEXT)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query(
            "INSERT INTO positions VALUES ('start', '', '시작', 'Start', '0.0', '')",
        )
        .execute(&pool)
        .await
        .unwrap();
        pool.close().await;

        let db = Database::open(&db_path).await.unwrap();
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM positions")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count.0, 1);
    }
}
