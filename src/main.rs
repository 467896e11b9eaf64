use crate::controller::build_router;
use crate::model::app_state::AppState;
use crate::shared::configuration::{log_level, CONFIGURATION};
use crate::shared::progress_store::ProgressStore;
use anyhow::Context;

mod controller;
mod middleware;
mod model;
mod shared;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(log_level(&CONFIGURATION))
        .init();

    let progress_store = ProgressStore::open(&CONFIGURATION.output_directory).with_context(|| {
        format!(
            "Failed to create output directory {}.",
            &CONFIGURATION.output_directory
        )
    })?;
    tracing::info!(
        "Saving progress files into: {}",
        progress_store.directory().display()
    );

    let app = build_router(
        AppState::new(progress_store),
        &CONFIGURATION.static_directory,
    );

    let listener = tokio::net::TcpListener::bind(&CONFIGURATION.server_bind_point)
        .await
        .with_context(|| format!("Failed to bind to {}.", &CONFIGURATION.server_bind_point))?;
    tracing::info!("Listening on: {}", &CONFIGURATION.server_bind_point);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for the shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down.");
}
