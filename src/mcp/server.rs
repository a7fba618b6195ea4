// ABOUTME: MCP server transports - line-delimited stdio and HTTP serving
// ABOUTME: Runs the JSON-RPC loop over stdin/stdout or mounts the axum router
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # MCP Server Transports
//!
//! The stdio transport speaks line-delimited JSON-RPC on stdin/stdout per
//! the MCP specification; logging must go to stderr in that mode. The HTTP
//! transport mounts the REST router, which includes the `POST /mcp`
//! JSON-RPC endpoint.

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::jsonrpc::JsonRpcRequest;
use crate::mcp::protocol::ProtocolHandler;
use crate::mcp::resources::ServerResources;
use crate::routes;

/// MCP server over shared resources
pub struct McpServer {
    resources: Arc<ServerResources>,
}

impl McpServer {
    /// Create a server over pre-built resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Shared resources accessor
    #[must_use]
    pub const fn resources(&self) -> &Arc<ServerResources> {
        &self.resources
    }

    /// Run the MCP server using stdio transport (MCP specification compliant).
    ///
    /// # Errors
    ///
    /// Returns an error when stdout writes fail; a closed stdin ends the
    /// loop normally.
    pub async fn run_stdio_transport(self) -> Result<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");

        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut reader = BufReader::new(stdin);
        let mut line = String::new();

        while reader
            .read_line(&mut line)
            .await
            .context("failed to read from stdin")?
            > 0
        {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                line.clear();
                continue;
            }

            match serde_json::from_str::<JsonRpcRequest>(trimmed) {
                Ok(request) => {
                    if let Some(response) =
                        ProtocolHandler::handle_request(request, &self.resources).await
                    {
                        let serialized = match serde_json::to_string(&response) {
                            Ok(s) => s,
                            Err(e) => {
                                error!("Failed to serialize response: {}", e);
                                line.clear();
                                continue;
                            }
                        };
                        stdout.write_all(serialized.as_bytes()).await?;
                        stdout.write_all(b"\n").await?;
                        stdout.flush().await?;
                    }
                }
                Err(e) => {
                    debug!("Failed to parse MCP request: {} - Line: {}", e, trimmed);
                }
            }
            line.clear();
        }

        info!("MCP stdio transport ended");
        Ok(())
    }

    /// Run the HTTP server (REST API plus the `/mcp` JSON-RPC endpoint).
    ///
    /// # Errors
    ///
    /// Returns an error when binding or serving fails.
    pub async fn run_http_server(self, port: u16) -> Result<()> {
        let app = routes::router(Arc::clone(&self.resources));
        let addr = format!("0.0.0.0:{port}");
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("failed to bind {addr}"))?;

        info!("HTTP server listening on {}", addr);
        axum::serve(listener, app)
            .await
            .context("HTTP server terminated")?;
        Ok(())
    }
}
