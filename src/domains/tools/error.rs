//! Tool-specific error types.
//!
//! These are caller or routing defects. They abort the call as protocol
//! errors; upstream failures never end up here (see [`super::client::UpstreamError`]).

use rmcp::{ErrorData as McpError, model::ErrorCode};
use thiserror::Error;

/// Errors that can occur while routing or preparing a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool was not found.
    #[error("Unknown tool: {0}")]
    NotFound(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: String, reason: String },
}

impl ToolError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(tool: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            tool: tool.into(),
            reason: reason.into(),
        }
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(_) => {
                McpError::new(ErrorCode::METHOD_NOT_FOUND, err.to_string(), None)
            }
            ToolError::InvalidArguments { .. } => McpError::invalid_params(err.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_method_not_found() {
        let err: McpError = ToolError::not_found("not_a_tool").into();
        assert_eq!(err.code.0, ErrorCode::METHOD_NOT_FOUND.0);
        assert!(err.message.contains("not_a_tool"));
    }

    #[test]
    fn test_invalid_arguments_maps_to_invalid_params() {
        let err: McpError =
            ToolError::invalid_arguments("station_crowding", "missing field `trainLine`").into();
        assert_eq!(err.code.0, ErrorCode::INVALID_PARAMS.0);
        assert!(err.message.contains("station_crowding"));
        assert!(err.message.contains("trainLine"));
    }
}
