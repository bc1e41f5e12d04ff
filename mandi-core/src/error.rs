//! Error types for the Farmer Market Price API

use thiserror::Error;

/// Service-wide error type
///
/// Variants keep the internal failure classification distinct even though
/// the HTTP layer flattens them into a uniform error body.
#[derive(Error, Debug)]
pub enum MandiError {
    /// Upstream answered with a non-success status
    #[error("API error: {0}")]
    Api(String),

    /// The upstream call could not be completed (transport fault, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The upstream body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// The service is missing required configuration
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl MandiError {
    pub fn api(msg: impl Into<String>) -> Self {
        MandiError::Api(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        MandiError::Network(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        MandiError::Parse(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        MandiError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        MandiError::Internal(msg.into())
    }

    /// True when the failure was caused by the upstream call itself
    pub fn is_upstream(&self) -> bool {
        matches!(self, MandiError::Api(_) | MandiError::Network(_))
    }
}

/// Result type alias for service operations
pub type MandiResult<T> = Result<T, MandiError>;
