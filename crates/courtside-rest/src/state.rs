//! Application state for Axum handlers.

use courtside_core::HasComponent;
use courtside_service::AvailabilityService;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub availability_service: Arc<dyn AvailabilityService>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(availability_service: Arc<dyn AvailabilityService>) -> Self {
        Self { availability_service }
    }

    /// Resolves the services from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: HasComponent<dyn AvailabilityService>,
    {
        Self::new(module.resolve())
    }
}
