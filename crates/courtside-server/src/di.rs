//! Dependency injection module using Shaku.
//!
//! One module covers the whole gateway: the Redis cache port, the HTTP
//! upstream reader and the availability service that depends on both.

use courtside_client::HttpUpstreamClient;
use courtside_config::UpstreamConfig;
use courtside_core::{module, CourtsideResult};
use courtside_service::{AvailabilityServiceComponent, RedisCacheService};
use deadpool_redis::Pool;
use std::sync::Arc;

module! {
    pub GatewayModule {
        components = [
            RedisCacheService,
            HttpUpstreamClient,
            AvailabilityServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the gateway module around an already connected Redis pool.
pub fn build_gateway_module(
    cache_pool: Arc<Pool>,
    upstream_config: &UpstreamConfig,
) -> CourtsideResult<Arc<GatewayModule>> {
    let module = GatewayModule::builder()
        .with_component_parameters::<RedisCacheService>(RedisCacheService::parameters(cache_pool))
        .with_component_parameters::<HttpUpstreamClient>(HttpUpstreamClient::parameters(upstream_config)?)
        .build();

    Ok(Arc::new(module))
}
