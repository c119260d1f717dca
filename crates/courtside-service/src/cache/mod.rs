//! Caching infrastructure for the service layer.
//!
//! This module provides the key-value cache port with a Redis implementation.
//! An in-memory implementation is available to tests through the `test-util`
//! feature. Values cross the port as JSON text.

mod cache_interface;
pub mod cache_keys;
mod connection;
#[cfg(any(test, feature = "test-util"))]
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use connection::CacheConnection;
#[cfg(any(test, feature = "test-util"))]
pub use memory_cache::InMemoryCacheService;
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters};
