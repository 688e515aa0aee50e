//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The MCP handshake over stdio failed.
    #[error("Server initialization error: {0}")]
    InitError(String),

    /// The running rmcp service stopped abnormally.
    #[error("Service error: {0}")]
    ServiceError(String),

    /// Failed to install the interrupt handler.
    #[error("Signal error: {0}")]
    SignalError(#[from] std::io::Error),
}

impl TransportError {
    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::InitError(msg.into())
    }

    /// Create a service error.
    pub fn service(msg: impl Into<String>) -> Self {
        Self::ServiceError(msg.into())
    }
}
