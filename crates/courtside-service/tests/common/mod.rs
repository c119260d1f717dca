//! Common test infrastructure for Redis integration tests.

use courtside_config::RedisConfig;
use courtside_service::CacheConnection;
use testcontainers::{runners::AsyncRunner, ContainerAsync};
use testcontainers_modules::redis::Redis;

/// Test Redis container wrapper.
///
/// Keeps the container alive for as long as the connection is in use.
pub struct TestRedis {
    _container: ContainerAsync<Redis>,
    config: RedisConfig,
}

impl TestRedis {
    /// Starts a fresh Redis container.
    pub async fn new() -> Self {
        let container = Redis::default()
            .start()
            .await
            .expect("Failed to start Redis container");

        let port = container
            .get_host_port_ipv4(6379)
            .await
            .expect("Failed to get Redis port");

        let config = RedisConfig {
            host: "127.0.0.1".to_string(),
            port,
            pool_size: 4,
        };

        Self {
            _container: container,
            config,
        }
    }

    /// Opens a pooled connection to the container.
    pub async fn connect(&self) -> CacheConnection {
        CacheConnection::connect(&self.config)
            .await
            .expect("Failed to connect to Redis")
    }
}
