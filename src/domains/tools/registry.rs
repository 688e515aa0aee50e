//! Tool Registry - listing and dispatch for every DataMall tool.
//!
//! All seven tools share one handler: look up the binding, narrow the
//! arguments, perform one GET, format the result. Routing and argument
//! defects come back as [`ToolError`]; upstream failures come back as
//! flagged results.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::{info, instrument, warn};

use super::client::LtaClient;
use super::common::{success_result, upstream_error_result};
use super::definitions::{CATALOG, EndpointBinding, find};
use super::error::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the catalog plus the client calls are forwarded with.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    client: LtaClient,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(client: LtaClient) -> Self {
        Self { client }
    }

    /// Get all tool names, in listing order.
    pub fn tool_names() -> Vec<&'static str> {
        CATALOG.iter().map(|binding| binding.name).collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        CATALOG.iter().map(EndpointBinding::to_tool).collect()
    }

    /// Dispatch a tool call to its endpoint.
    ///
    /// Unknown names fail with [`ToolError::NotFound`] and never reach a handler.
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let Some(binding) = find(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };

        self.execute(binding, arguments).await
    }

    /// Run one binding: validate, fetch, format.
    #[instrument(skip(self, binding, arguments), fields(tool = binding.name, path = binding.path))]
    async fn execute(
        &self,
        binding: &EndpointBinding,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ToolError> {
        let query = binding.shape.query(binding.name, arguments)?;

        info!("Fetching {} with {} query parameter(s)", binding.path, query.len());

        match self.client.get(binding.path, &query).await {
            Ok(body) => Ok(success_result(&body)),
            Err(err) => Ok(upstream_error_result(binding.name, &err)),
        }
    }
}
