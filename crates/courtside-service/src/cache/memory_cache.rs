//! In-process cache with per-entry expiry, for tests.

use super::CacheInterface;
use async_trait::async_trait;
use courtside_core::CourtsideResult;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.map_or(true, |deadline| now < deadline)
    }
}

/// Cache port backed by a map in process memory.
///
/// Deadlines use the tokio clock, so a paused test runtime controls expiry.
/// Expired entries are dropped when read and swept on every write.
#[derive(Default)]
pub struct InMemoryCacheService {
    entries: Mutex<HashMap<String, Entry>>,
}

impl InMemoryCacheService {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remaining lifetime of a live entry; `None` for missing or non-expiring entries.
    #[must_use]
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        let entries = self.entries.lock();
        entries
            .get(key)
            .filter(|entry| entry.is_live(now))
            .and_then(|entry| entry.expires_at)
            .map(|deadline| deadline - now)
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries.lock().values().filter(|e| e.is_live(now)).count()
    }

    /// Returns `true` if no live entry exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheInterface for InMemoryCacheService {
    async fn get_raw(&self, key: &str) -> CourtsideResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.entries.lock();

        let value = match entries.get(key) {
            Some(entry) if entry.is_live(now) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        };

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> CourtsideResult<()> {
        let now = Instant::now();
        let entry = Entry {
            value: value.to_string(),
            expires_at: ttl.map(|ttl| now + ttl),
        };

        let mut entries = self.entries.lock();
        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> CourtsideResult<bool> {
        let now = Instant::now();
        let removed = self.entries.lock().remove(key);
        Ok(removed.is_some_and(|entry| entry.is_live(now)))
    }
}
