//! Opening book server.
//!
//! Persists chess opening positions and their recommended follow-up moves
//! into SQLite through `POST /save_data`, and serves the asset directory
//! (including the database file itself) under `/assets`.

pub mod config;
pub mod persistence;
pub mod service;
