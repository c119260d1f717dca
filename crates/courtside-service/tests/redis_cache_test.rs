//! Integration tests for RedisCacheService and CacheConnection.
//!
//! These tests run against a real Redis server using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use async_trait::async_trait;
use common::TestRedis;
use courtside_config::RedisConfig;
use courtside_core::{Club, Court, CourtsideError, CourtsideResult, Slot, SlotDate};
use courtside_service::{
    AvailabilityService, AvailabilityServiceComponent, CacheConnection, CacheExt, CacheInterface,
    RedisCacheService, UpstreamReader, CACHE_TTL,
};
use deadpool_redis::redis::AsyncCommands;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

async fn ttl_of(connection: &CacheConnection, key: &str) -> i64 {
    let mut conn = connection.pool().get().await.expect("Failed to get connection");
    conn.ttl(key).await.expect("TTL failed")
}

#[tokio::test]
async fn test_set_with_ttl_expires_in_store() {
    let redis = TestRedis::new().await;
    let connection = redis.connect().await;
    let cache = RedisCacheService::new(connection.pool());

    let courts = vec![Court::new(3, "Cancha 3")];
    cache.set("courts:7", &courts, Some(CACHE_TTL)).await.unwrap();

    let ttl = ttl_of(&connection, "courts:7").await;
    assert!(ttl > 3590 && ttl <= 3600, "unexpected TTL {ttl}");

    let cached: Option<Vec<Court>> = cache.get("courts:7").await.unwrap();
    assert_eq!(cached, Some(courts));
}

#[tokio::test]
async fn test_set_without_ttl_persists() {
    let redis = TestRedis::new().await;
    let connection = redis.connect().await;
    let cache = RedisCacheService::new(connection.pool());

    cache.set_raw("clubs:place-42", "[]", None).await.unwrap();

    // -1 means the key exists with no expiry.
    assert_eq!(ttl_of(&connection, "clubs:place-42").await, -1);
}

#[tokio::test]
async fn test_sub_second_ttl_rounds_up() {
    let redis = TestRedis::new().await;
    let connection = redis.connect().await;
    let cache = RedisCacheService::new(connection.pool());

    cache
        .set_raw("clubs:short", "[]", Some(Duration::from_millis(200)))
        .await
        .unwrap();

    assert_eq!(ttl_of(&connection, "clubs:short").await, 1);
}

#[tokio::test]
async fn test_missing_key_and_delete() {
    let redis = TestRedis::new().await;
    let connection = redis.connect().await;
    let cache = RedisCacheService::new(connection.pool());

    assert!(cache.get_raw("slots:1:2:2024-03-01").await.unwrap().is_none());
    assert!(!cache.delete("slots:1:2:2024-03-01").await.unwrap());

    cache.set_raw("slots:1:2:2024-03-01", "[]", None).await.unwrap();
    assert!(cache.delete("slots:1:2:2024-03-01").await.unwrap());
    assert!(cache.get_raw("slots:1:2:2024-03-01").await.unwrap().is_none());
}

#[tokio::test]
async fn test_records_are_stored_verbatim() {
    let redis = TestRedis::new().await;
    let connection = redis.connect().await;
    let cache = RedisCacheService::new(connection.pool());

    let raw = r#"[{"id":1,"name":null,"logo":"x.png"}]"#;
    let clubs: Vec<Club> = serde_json::from_str(raw).unwrap();
    cache.set("clubs:place-42", &clubs, Some(CACHE_TTL)).await.unwrap();

    assert_eq!(cache.get_raw("clubs:place-42").await.unwrap().as_deref(), Some(raw));
}

#[tokio::test]
async fn test_close_releases_pool() {
    let redis = TestRedis::new().await;
    let connection = redis.connect().await;
    let pool = connection.pool();
    let cache = RedisCacheService::new(pool.clone());

    connection.close();

    assert!(pool.is_closed());
    let err = cache.get_raw("courts:7").await.unwrap_err();
    assert!(matches!(err, CourtsideError::Cache(_)));
}

#[tokio::test]
async fn test_drop_releases_pool() {
    let redis = TestRedis::new().await;
    let pool = {
        let connection = redis.connect().await;
        connection.pool()
    };

    assert!(pool.is_closed());
}

#[tokio::test]
async fn test_connect_fails_without_server() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let config = RedisConfig {
        host: "127.0.0.1".to_string(),
        port,
        pool_size: 1,
    };

    let err = CacheConnection::connect(&config).await.err().unwrap();
    assert!(matches!(err, CourtsideError::Cache(_)));
}

/// Upstream stand-in that counts calls and serves fixed courts.
#[derive(Default)]
struct CountingUpstream {
    calls: AtomicUsize,
}

#[async_trait]
impl UpstreamReader for CountingUpstream {
    async fn fetch_clubs(&self, _place_id: &str) -> CourtsideResult<Vec<Club>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    async fn fetch_courts(&self, club_id: i64) -> CourtsideResult<Vec<Court>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![Court::new(club_id * 10, "Cancha")])
    }

    async fn fetch_slots(&self, _club_id: i64, _court_id: i64, _date: SlotDate) -> CourtsideResult<Vec<Slot>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }
}

#[tokio::test]
async fn test_service_reads_through_redis() {
    let redis = TestRedis::new().await;
    let connection = redis.connect().await;
    let upstream = Arc::new(CountingUpstream::default());
    let service = AvailabilityServiceComponent::new(
        Arc::new(RedisCacheService::new(connection.pool())),
        upstream.clone(),
    );

    let first = service.get_courts(7).await.unwrap();
    let second = service.get_courts(7).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
    assert!(ttl_of(&connection, "courts:7").await > 3590);
}
