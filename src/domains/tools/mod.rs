//! Tools domain module.
//!
//! Every tool forwards to one LTA DataMall endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - The static catalog and the parameter types behind its schemas
//! - `registry.rs` - Listing and the single parameterized dispatch path
//! - `client.rs` - The DataMall HTTP client
//! - `common.rs` - Success and flagged-error result formatting
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! Add an entry to `CATALOG` in `definitions/catalog.rs`. If it takes a new
//! combination of arguments, add a parameter struct and an `ArgumentShape`
//! variant. Nothing else changes.

mod client;
mod common;
pub mod definitions;
mod error;
mod registry;

pub use client::{LtaClient, UpstreamError};
pub use error::ToolError;
pub use registry::ToolRegistry;
