//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use courtside_core::{CourtsideError, CourtsideResult};
use serde::{de::DeserializeOwned, Serialize};
use shaku::Interface;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Key-value cache port over a string-keyed store.
///
/// Values are JSON text at this level so the trait stays dyn-compatible;
/// [`CacheExt`] adds the typed layer on top.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> CourtsideResult<Option<String>>;

    /// Set a raw JSON value, overwriting any existing entry.
    ///
    /// With a TTL the entry stops being readable after that many whole
    /// seconds; without one it stays until deleted or evicted by the store.
    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> CourtsideResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed. A missing key is not an error.
    async fn delete(&self, key: &str) -> CourtsideResult<bool>;
}

/// Typed access to any [`CacheInterface`].
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    ///
    /// An entry that does not decode as `T` is reported as
    /// [`CourtsideError::CacheCorrupted`], never as a miss.
    async fn get<T: DeserializeOwned + Send>(&self, key: &str) -> CourtsideResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| CourtsideError::CacheCorrupted {
                    key: key.to_string(),
                    message: e.to_string(),
                }),
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> CourtsideResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| CourtsideError::Serialization(format!("Failed to encode '{}': {}", key, e)))?;
        self.set_raw(key, &json, ttl).await
    }

    /// Cache-aside read-through.
    ///
    /// Returns the cached value when present. Otherwise awaits `fetch`, stores
    /// its result under `key` and returns it. Errors from the probe, the fetch
    /// and the store write all reach the caller; nothing is written when the
    /// fetch fails.
    async fn get_or_fetch<T, F, Fut>(
        &self,
        key: &str,
        ttl: Option<Duration>,
        fetch: F,
    ) -> CourtsideResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = CourtsideResult<T>> + Send,
    {
        if let Some(cached) = self.get::<T>(key).await? {
            debug!(key, "served from cache");
            return Ok(cached);
        }

        let value = fetch().await?;
        self.set(key, &value, ttl).await?;
        debug!(key, "populated cache from upstream");

        Ok(value)
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
