//! SQLite-backed opening book.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with:
//! - **Rollback journal** (`journal_mode = DELETE`): every commit lands in the
//!   main database file, which is the file handed out by the asset server.
//! - **Foreign keys enabled**: `moves.parent_fen` must name a stored position.
//! - **Embedded migrations**: `sqlx::migrate!` runs `migrations/001_initial_schema.sql`
//!   when [`Database::open`] is called. The schema is idempotent, so a database
//!   file created by the mobile app is picked up as is.
//!
//! ## Connections
//!
//! Each save borrows one pooled connection for the lifetime of its
//! `sqlx::Transaction`. Dropping the transaction without committing rolls it
//! back, and the connection goes back to the pool on every exit path.

mod database;
mod opening_repo;

pub use database::Database;
pub use opening_repo::SqliteOpeningRepository;
