//! # Courtside Server
//!
//! Main entry point for the Courtside availability gateway.

use courtside_config::ConfigLoader;
use courtside_core::{CourtsideError, CourtsideResult};
use courtside_rest::{create_router, AppState};
use courtside_server::{
    di::build_gateway_module,
    startup::{init_logging, print_startup_info, shutdown_signal},
};
use courtside_service::CacheConnection;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Application error: {}", e);
        eprintln!("courtside-server: {e}");
        std::process::exit(1);
    }
}

async fn run() -> CourtsideResult<()> {
    let config = ConfigLoader::from_default_location()?.into_config();
    init_logging(&config.observability)?;

    info!("Starting Courtside gateway...");
    print_startup_info(&config);

    // Dropping the connection closes the pool, including on early returns below.
    let cache = CacheConnection::connect(&config.redis).await?;

    let module = build_gateway_module(cache.pool(), &config.upstream)?;
    let router = create_router(AppState::from_module(module.as_ref()), &config.server);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| CourtsideError::Internal(format!("Failed to bind {}: {}", addr, e)))?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| CourtsideError::Internal(format!("Server error: {}", e)))?;

    cache.close();
    info!("Server shutdown complete");
    Ok(())
}
