//! LTA DataMall MCP Server Library
//!
//! Exposes Singapore Land Transport Authority DataMall endpoints (bus
//! arrivals, station crowding, train alerts, carparks, travel times, traffic
//! incidents) as Model Context Protocol tools served over stdio.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the MCP server handler and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: The static tool catalog, its dispatch and the DataMall client
//!
//! # Example
//!
//! ```rust,no_run
//! use lta_mcp_server::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
