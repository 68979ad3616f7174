//! Configuration for the opening book server.
//!
//! Every value has a compile-time default matching the deployed layout
//! (database inside the asset directory, port 8000 on all interfaces) and can
//! be overridden with a command-line flag or its environment variable.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default listen address: all interfaces, port 8000.
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

/// Default database file. The app downloads this file from the asset server.
const DEFAULT_DATABASE_PATH: &str = "./assets/chessDB.sqlite";

/// Default root directory served under `/assets`.
const DEFAULT_ASSETS_DIR: &str = "./assets";

/// Runtime configuration for the server.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "opening-book-server",
    about = "Stores chess opening positions and serves the opening database"
)]
pub struct ServerConfig {
    /// Address to listen on.
    #[arg(long, env = "OPENING_BOOK_LISTEN", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen: SocketAddr,

    /// SQLite database file holding the `positions` and `moves` tables.
    #[arg(long, env = "OPENING_BOOK_DATABASE", default_value = DEFAULT_DATABASE_PATH)]
    pub database: PathBuf,

    /// Directory served under `/assets`.
    #[arg(long, env = "OPENING_BOOK_ASSETS_DIR", default_value = DEFAULT_ASSETS_DIR)]
    pub assets_dir: PathBuf,

    /// Do not serve `/assets`.
    #[arg(long)]
    pub no_assets: bool,

    /// Do not include `last_modified` in `/save_data` responses.
    #[arg(long)]
    pub no_last_modified: bool,
}

impl ServerConfig {
    /// Asset root, or `None` when asset serving is disabled.
    pub fn assets_root(&self) -> Option<PathBuf> {
        (!self.no_assets).then(|| self.assets_dir.clone())
    }

    pub fn echo_last_modified(&self) -> bool {
        !self.no_last_modified
    }
}
