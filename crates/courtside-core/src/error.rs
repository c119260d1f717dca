//! Unified error types for all layers of the gateway.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for Courtside.
///
/// Cache and upstream faults are kept apart so callers can tell a broken
/// store from a broken upstream, and a corrupted cache entry from a missing one.
#[derive(Error, Debug)]
pub enum CourtsideError {
    // ============ Cache Errors ============
    /// The key-value store could not be reached or rejected the command.
    #[error("Cache error: {0}")]
    Cache(String),

    /// A cached entry exists but does not decode into the expected type.
    #[error("Corrupted cache entry '{key}': {message}")]
    CacheCorrupted { key: String, message: String },

    /// A value could not be encoded for storage.
    #[error("Serialization error: {0}")]
    Serialization(String),

    // ============ Upstream Errors ============
    /// The upstream request failed before a response arrived.
    #[error("Upstream request to {endpoint} failed: {message}")]
    Upstream { endpoint: String, message: String },

    /// The upstream answered with a non-success status.
    #[error("Upstream {endpoint} responded with status {status}")]
    UpstreamStatus { endpoint: String, status: u16 },

    /// The upstream body does not decode into the expected sequence.
    #[error("Upstream {endpoint} returned a malformed body: {message}")]
    UpstreamPayload { endpoint: String, message: String },

    // ============ Application Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CourtsideError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation(_) => 400,
            Self::UpstreamStatus { status: 404, .. } => 404,
            Self::Upstream { .. } | Self::UpstreamStatus { .. } | Self::UpstreamPayload { .. } => 502,
            Self::Cache(_) => 503,
            Self::CacheCorrupted { .. }
            | Self::Serialization(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Cache(_) => "CACHE_ERROR",
            Self::CacheCorrupted { .. } => "CACHE_CORRUPTED",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::Upstream { .. } => "UPSTREAM_ERROR",
            Self::UpstreamStatus { .. } => "UPSTREAM_STATUS",
            Self::UpstreamPayload { .. } => "UPSTREAM_PAYLOAD",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a cache error.
    #[must_use]
    pub fn cache<T: Into<String>>(message: T) -> Self {
        Self::Cache(message.into())
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if a caller could reasonably retry the operation.
    ///
    /// Nothing in the gateway retries on its own; this only informs callers.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        match self {
            Self::Cache(_) | Self::Upstream { .. } => true,
            Self::UpstreamStatus { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// Serializable error response for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `CourtsideError`.
    #[must_use]
    pub fn from_error(error: &CourtsideError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&CourtsideError> for ErrorResponse {
    fn from(error: &CourtsideError) -> Self {
        Self::from_error(error)
    }
}
