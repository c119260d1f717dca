//! # Courtside Service
//!
//! Cache-aside access to the upstream availability API.
//! Contains the key-value cache port, the upstream reader contract, and the
//! availability service that ties them together.

pub mod availability_service;
pub mod cache;
mod r#impl;
pub mod upstream;

pub use availability_service::*;
pub use cache::*;
pub use r#impl::*;
pub use upstream::*;
