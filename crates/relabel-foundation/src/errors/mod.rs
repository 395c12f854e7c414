//! Unified error type for relabel
//!
//! Command handlers return `RelabelResult<T>`. Only the conditions that a
//! caller must handle at the transport boundary surface as errors; engine
//! failures during a refactoring are logged and folded into a partial result
//! by the handler instead.

mod conversions;

use thiserror::Error;

/// Result type alias used throughout relabel
pub type RelabelResult<T> = Result<T, RelabelError>;

type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Standardized error codes for command responses
pub mod error_codes {
    /// Internal error
    pub const E1000_INTERNAL_ERROR: &str = "E1000";
    /// Invalid request arguments
    pub const E1001_INVALID_REQUEST: &str = "E1001";
    /// Request was cancelled by the caller
    pub const E1002_CANCELLED: &str = "E1002";
    /// Refactoring engine failure
    pub const E1003_ENGINE_ERROR: &str = "E1003";
    /// Operation or command not supported
    pub const E1007_NOT_SUPPORTED: &str = "E1007";
    /// Invalid data format
    pub const E1008_INVALID_DATA: &str = "E1008";
    /// Configuration error
    pub const E1009_CONFIG: &str = "E1009";
}

/// Core error type used throughout relabel
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RelabelError {
    /// The caller broke the command contract (empty or malformed arguments)
    #[error("Invalid request: {message}")]
    InvalidRequest {
        message: String,
        parameter: Option<String>,
    },

    /// Cancellation was observed at a checkpoint
    #[error("Operation cancelled: {operation}")]
    Cancelled { operation: String },

    /// Failure reported by a collaborator (resolver, engine, serializer)
    #[error("Refactoring engine error: {message}")]
    Engine {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("Operation not supported: {operation}")]
    NotSupported {
        operation: String,
        reason: Option<String>,
    },

    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxedSource>,
    },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl RelabelError {
    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            parameter: None,
        }
    }

    /// Create an invalid request error pointing at a specific parameter
    pub fn invalid_parameter(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
            parameter: Some(parameter.into()),
        }
    }

    /// Create a cancellation error
    pub fn cancelled(operation: impl Into<String>) -> Self {
        Self::Cancelled {
            operation: operation.into(),
        }
    }

    /// Create an engine error without an underlying source
    pub fn engine(message: impl Into<String>) -> Self {
        Self::Engine {
            message: message.into(),
            source: None,
        }
    }

    /// Create a not supported error
    pub fn not_supported(operation: impl Into<String>) -> Self {
        Self::NotSupported {
            operation: operation.into(),
            reason: None,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error is the cancellation non-outcome
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Machine-readable error code for transport responses
    pub fn code(&self) -> &'static str {
        use error_codes::*;

        match self {
            Self::InvalidRequest { .. } => E1001_INVALID_REQUEST,
            Self::Cancelled { .. } => E1002_CANCELLED,
            Self::Engine { .. } => E1003_ENGINE_ERROR,
            Self::NotSupported { .. } => E1007_NOT_SUPPORTED,
            Self::Json { .. } => E1008_INVALID_DATA,
            Self::Config { .. } => E1009_CONFIG,
            Self::Internal { .. } => E1000_INTERNAL_ERROR,
        }
    }
}
