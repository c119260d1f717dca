//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use courtside_core::{CourtsideError, CourtsideResult};
use deadpool_redis::{redis::AsyncCommands, Pool};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Redis-based cache service.
///
/// Each call borrows one pooled connection and issues a single command.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool, shared with the owning [`super::CacheConnection`].
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Builds the Shaku parameters for a service over `pool`.
    #[must_use]
    pub fn parameters(pool: Arc<Pool>) -> RedisCacheServiceParameters {
        RedisCacheServiceParameters { pool: Some(pool) }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> CourtsideResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                CourtsideError::Cache(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(CourtsideError::Cache("Redis pool is not configured".to_string())),
        }
    }
}

/// Whole seconds for `SET ... EX`; partial seconds round up and the minimum is 1.
fn ttl_seconds(ttl: Duration) -> u64 {
    let secs = ttl.as_secs() + u64::from(ttl.subsec_nanos() > 0);
    secs.max(1)
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    async fn get_raw(&self, key: &str) -> CourtsideResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn.get(key).await.map_err(|e| {
            CourtsideError::Cache(format!("Failed to get key '{}': {}", key, e))
        })?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> CourtsideResult<()> {
        let mut conn = self.get_conn().await?;

        match ttl {
            Some(ttl) => {
                let secs = ttl_seconds(ttl);
                conn.set_ex::<_, _, ()>(key, value, secs).await.map_err(|e| {
                    CourtsideError::Cache(format!("Failed to set key '{}': {}", key, e))
                })?;
                debug!("Cached key '{}' with TTL {}s", key, secs);
            }
            None => {
                conn.set::<_, _, ()>(key, value).await.map_err(|e| {
                    CourtsideError::Cache(format!("Failed to set key '{}': {}", key, e))
                })?;
                debug!("Cached key '{}' without expiry", key);
            }
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> CourtsideResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn.del(key).await.map_err(|e| {
            CourtsideError::Cache(format!("Failed to delete key '{}': {}", key, e))
        })?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unconfigured() -> RedisCacheService {
        RedisCacheService { pool: None }
    }

    #[test]
    fn test_ttl_seconds() {
        assert_eq!(ttl_seconds(Duration::from_secs(3600)), 3600);
        assert_eq!(ttl_seconds(Duration::from_millis(1500)), 2);
        assert_eq!(ttl_seconds(Duration::from_millis(10)), 1);
        assert_eq!(ttl_seconds(Duration::ZERO), 1);
    }

    #[tokio::test]
    async fn test_missing_pool_is_an_error_not_a_miss() {
        let cache = unconfigured();

        let err = cache.get_raw("clubs:place-42").await.unwrap_err();
        assert!(matches!(err, CourtsideError::Cache(_)));
        assert!(cache.set_raw("clubs:place-42", "[]", None).await.is_err());
        assert!(cache.delete("clubs:place-42").await.is_err());
    }
}
