//! # Courtside REST
//!
//! HTTP gateway exposing the cached availability reads.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::create_router;
pub use state::AppState;
