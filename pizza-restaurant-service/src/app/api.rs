use std::net::SocketAddr;

use pizza_restaurant_service::handlers::{app, AppState};
use pizza_restaurant_service::store::Store;
use tracing::info;

pub async fn main(store: Store, bind: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let applied = store.run_pending_migrations()?;
    info!(applied, database = store.database_url(), "database ready");

    let router = app(AppState { store });

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("Pizza Restaurant API listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
