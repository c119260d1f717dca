//! Server startup utilities.

use courtside_config::{AppConfig, LogFormat, ObservabilityConfig};
use courtside_core::{CourtsideError, CourtsideResult};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Builds the log filter; `RUST_LOG` wins over the configured level.
fn env_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{},courtside=debug,tower_http=debug", config.log_level))
    })
}

/// Installs the global tracing subscriber.
pub fn init_logging(config: &ObservabilityConfig) -> CourtsideResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter(config));

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| CourtsideError::Internal(format!("Failed to initialise logging: {}", e)))
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("Courtside gateway v{}", config.app.version);
    info!("Environment: {}", config.app.environment);
    info!("REST API:  http://{}/api/v1", config.server.addr());
    info!("Health:    http://{}/health", config.server.addr());
    info!("Upstream:  {}", config.upstream.base_url);
    info!("Redis:     {}", config.redis.url());
    info!("{}", separator);
}

/// Resolves when the process receives Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_startup_info_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        print_startup_info(&AppConfig::default());
    }

    #[test]
    fn test_second_init_reports_error() {
        let config = ObservabilityConfig::default();
        let _ = init_logging(&config);
        assert!(init_logging(&config).is_err());
    }
}
