//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP.

use std::future::Future;

use rmcp::{RoleServer, ServiceExt, transport::IntoTransport};
use tracing::{info, warn};

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client disconnects or the process
    /// receives an interrupt.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        Self::run_until(server, rmcp::transport::stdio(), tokio::signal::ctrl_c()).await
    }

    /// Serve `transport` until the client disconnects or `shutdown` resolves.
    ///
    /// `shutdown` is watched from the start, including while waiting for the
    /// client's `initialize`. In-flight tool calls are not drained.
    pub async fn run_until<T, E, A, F>(
        server: McpServer,
        transport: T,
        shutdown: F,
    ) -> TransportResult<()>
    where
        T: IntoTransport<RoleServer, E, A> + Send + 'static,
        E: std::error::Error + Send + Sync + 'static,
        F: Future<Output = std::io::Result<()>>,
    {
        tokio::pin!(shutdown);

        let service = tokio::select! {
            service = server.serve(transport) => {
                service.map_err(|e| TransportError::init(e.to_string()))?
            }
            signal = &mut shutdown => {
                signal?;
                warn!("Interrupt received before client handshake, exiting");
                return Ok(());
            }
        };

        info!("Client connected");

        // `waiting` consumes the service, so keep a token to stop it on interrupt.
        let cancel = service.cancellation_token();
        let waiting = service.waiting();
        tokio::pin!(waiting);

        tokio::select! {
            quit = &mut waiting => {
                let reason = quit.map_err(|e| TransportError::service(e.to_string()))?;
                info!("STDIO transport finished: {:?}", reason);
            }
            signal = &mut shutdown => {
                signal?;
                warn!("Interrupt received, closing STDIO transport");
                cancel.cancel();
                let reason = waiting
                    .await
                    .map_err(|e| TransportError::service(e.to_string()))?;
                info!("STDIO transport closed: {:?}", reason);
            }
        }

        Ok(())
    }
}
