//! Transport layer for the MCP server.
//!
//! MCP clients launch this server as a subprocess and talk to it over
//! stdin/stdout, so STDIO is the only transport. Framing and capability
//! negotiation are handled by rmcp; this layer owns the service lifecycle.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
