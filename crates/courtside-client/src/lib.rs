//! # Courtside Client
//!
//! HTTP client for the upstream availability API.

mod http_upstream_client;

pub use http_upstream_client::{HttpUpstreamClient, HttpUpstreamClientParameters};
