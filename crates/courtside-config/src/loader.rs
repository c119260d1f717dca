//! Configuration loader with layered sources.

use crate::AppConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use courtside_core::{CourtsideError, CourtsideResult};
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Loaded application configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: String,
}

impl ConfigLoader {
    /// Loads configuration from `config_dir`.
    ///
    /// Sources in order, later entries win:
    /// 1. `{config_dir}/default.toml`
    /// 2. `{config_dir}/{environment}.toml` (`COURTSIDE_ENVIRONMENT`, default `development`)
    /// 3. `{config_dir}/local.toml`
    /// 4. `COURTSIDE__SECTION__KEY` environment variables
    /// 5. `REDIS_HOST`, `REDIS_PORT` and `ATC_BASE_URL`
    pub fn new(config_dir: impl Into<String>) -> CourtsideResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let config_dir = config_dir.into();
        let config = Self::load(&config_dir, |key| std::env::var(key).ok())?;

        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> CourtsideResult<Self> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the directory the configuration was read from.
    #[must_use]
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }

    /// Consumes the loader and returns the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    fn load<F>(config_dir: &str, lookup: F) -> CourtsideResult<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("COURTSIDE_ENVIRONMENT").unwrap_or_else(|| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{}/{}.toml", config_dir, name);
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("COURTSIDE")
                .separator("__")
                .try_parsing(true),
        );

        builder = apply_plain_overrides(builder, &lookup)?;

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize::<AppConfig>())
            .map_err(config_error)?;

        validate(&app_config)?;
        Ok(app_config)
    }
}

/// Applies the unprefixed variables deployments already set for the gateway.
fn apply_plain_overrides<F>(
    builder: ConfigBuilder<DefaultState>,
    lookup: &F,
) -> CourtsideResult<ConfigBuilder<DefaultState>>
where
    F: Fn(&str) -> Option<String>,
{
    let port = match lookup("REDIS_PORT") {
        Some(raw) => Some(raw.trim().parse::<i64>().map_err(|e| {
            CourtsideError::Configuration(format!("REDIS_PORT '{}' is not a port: {}", raw, e))
        })?),
        None => None,
    };

    builder
        .set_override_option("redis.host", lookup("REDIS_HOST"))
        .and_then(|b| b.set_override_option("redis.port", port))
        .and_then(|b| b.set_override_option("upstream.base_url", lookup("ATC_BASE_URL")))
        .map_err(config_error)
}

/// Validates the configuration.
fn validate(config: &AppConfig) -> CourtsideResult<()> {
    let base_url = Url::parse(&config.upstream.base_url).map_err(|e| {
        CourtsideError::Configuration(format!(
            "Upstream base URL '{}' is invalid: {}",
            config.upstream.base_url, e
        ))
    })?;
    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(CourtsideError::Configuration(format!(
            "Upstream base URL must be http or https, got '{}'",
            base_url.scheme()
        )));
    }

    if config.redis.host.is_empty() {
        return Err(CourtsideError::Configuration("Redis host is required".to_string()));
    }
    if config.redis.port == 0 {
        return Err(CourtsideError::Configuration("Redis port must be non-zero".to_string()));
    }
    if config.redis.pool_size == 0 {
        return Err(CourtsideError::Configuration("Redis pool size must be non-zero".to_string()));
    }
    if config.server.port == 0 {
        return Err(CourtsideError::Configuration("Server port must be non-zero".to_string()));
    }

    Ok(())
}

fn config_error(err: ConfigError) -> CourtsideError {
    CourtsideError::Configuration(err.to_string())
}
