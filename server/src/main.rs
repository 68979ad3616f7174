use anyhow::Context;
use clap::Parser;
use opening_book_server::config::ServerConfig;
use opening_book_server::persistence::sqlite::{Database, SqliteOpeningRepository};
use opening_book_server::service::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing with span durations
    use tracing_subscriber::fmt::format::FmtSpan;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let config = ServerConfig::parse();
    tracing::info!("Starting opening book server");

    let db = Database::open(&config.database)
        .await
        .with_context(|| format!("failed to open database {}", config.database.display()))?;
    tracing::info!("Using database: {}", config.database.display());

    let assets_root = config.assets_root();
    match &assets_root {
        Some(dir) => tracing::info!("Serving assets from: {}", dir.display()),
        None => tracing::info!("Asset serving disabled"),
    }
    if !config.echo_last_modified() {
        tracing::info!("last_modified echo disabled");
    }

    let state = AppState {
        repo: SqliteOpeningRepository::new(db),
        echo_last_modified: config.echo_last_modified(),
    };
    let app = service::build_router(state, assets_root);

    let listener = tokio::net::TcpListener::bind(config.listen)
        .await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    tracing::info!("Server listening on {}", config.listen);

    axum::serve(listener, app).await?;

    Ok(())
}
