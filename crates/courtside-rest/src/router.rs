//! Main application router.

use crate::{
    controllers::{availability_controller, health_controller},
    middleware::logging_middleware,
    state::AppState,
};
use axum::{middleware, Router};
use courtside_config::ServerConfig;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = if server_config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    let api_router = availability_controller::router().with_state(state);

    let router = Router::new()
        .merge(health_controller::router())
        .nest("/api/v1", api_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with availability endpoints under /api/v1");
    router
}
