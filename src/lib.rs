use anyhow::Context;
use api::{setup_config, setup_db, setup_router};
use tracing::info;
use utils::db::migrate;
use utils::file::create_dev_db;

/// Loads configuration, prepares the database and serves the HTTP API until
/// the process receives ctrl-c.
pub async fn run() -> anyhow::Result<()> {
    let config = setup_config()?;

    create_dev_db(&config.db_url).context("Failed to create the sqlite database file")?;
    let conn = setup_db(&config).await.context("Database connection failed")?;
    migrate(&conn).await.context("Migration failed")?;

    let server_url = config.get_server_url();
    let router = setup_router(config, conn)?;

    let listener = tokio::net::TcpListener::bind(&server_url)
        .await
        .with_context(|| format!("Failed to bind {server_url}"))?;
    info!("Listening on {}", server_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
