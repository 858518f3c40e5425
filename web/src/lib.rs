use log::*;

pub use error::{Error, WebErrorKind};
pub use service::AppState;

mod controller;
mod error;
mod middleware;
mod params;
mod response;
pub mod router;

/// Binds the configured interface and port and serves the API until Ctrl-C is received.
pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let listen_addr = app_state.config.listen_address();
    let allowed_origins = app_state.config.allowed_origins().join(", ");

    info!("Server starting... listening for connections on http://{listen_addr}");
    info!("Allowed CORS origins: {allowed_origins}");

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    let router = router::define_routes(app_state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received, stopping server"),
        Err(e) => {
            error!("Unable to listen for the shutdown signal: {e}");
            // Keep serving; the process can still be stopped externally.
            std::future::pending::<()>().await;
        }
    }
}
