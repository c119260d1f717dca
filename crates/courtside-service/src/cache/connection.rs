//! Process-wide Redis connection handle.

use courtside_config::RedisConfig;
use courtside_core::{CourtsideError, CourtsideResult};
use deadpool_redis::{redis, Config, Pool, Runtime};
use std::sync::Arc;
use tracing::info;

/// Owns the Redis pool for the lifetime of the process.
///
/// Created once at startup and handed to cache components as a shared pool.
/// The pool is closed when the handle is closed or dropped, so every exit
/// path releases it.
pub struct CacheConnection {
    pool: Arc<Pool>,
}

impl CacheConnection {
    /// Creates the pool and checks it with `PING`.
    pub async fn connect(config: &RedisConfig) -> CourtsideResult<Self> {
        let url = config.url();
        info!("Connecting to Redis at {}...", url);

        let pool = Config::from_url(url)
            .builder()
            .map_err(|e| CourtsideError::Configuration(format!("Invalid Redis config: {}", e)))?
            .max_size(config.pool_size)
            .runtime(Runtime::Tokio1)
            .build()
            .map_err(|e| CourtsideError::Configuration(format!("Failed to create Redis pool: {}", e)))?;

        let mut conn = pool
            .get()
            .await
            .map_err(|e| CourtsideError::Cache(format!("Failed to get Redis connection: {}", e)))?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| CourtsideError::Cache(format!("Redis PING failed: {}", e)))?;

        info!("Redis connected");

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Returns the shared pool.
    #[must_use]
    pub fn pool(&self) -> Arc<Pool> {
        Arc::clone(&self.pool)
    }

    /// Closes the pool. Outstanding clones of the pool stop handing out connections.
    pub fn close(self) {
        drop(self);
    }
}

impl Drop for CacheConnection {
    fn drop(&mut self) {
        if !self.pool.is_closed() {
            self.pool.close();
            info!("Redis connection closed");
        }
    }
}
