// ABOUTME: Server binary - starts the Chef MCP Server on stdio or HTTP transport
// ABOUTME: Loads configuration, initializes logging and storage, then serves
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Chef MCP Server Binary
//!
//! Starts the meal-planning assistant backend. By default the server runs
//! the HTTP transport (REST API plus `POST /mcp`); with `--stdio` it speaks
//! line-delimited JSON-RPC on stdin/stdout for MCP clients, with logs on
//! stderr.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

use chef_mcp_server::{
    config::environment::ServerConfig,
    database::Database,
    logging::LoggingConfig,
    mcp::{McpServer, ServerResources},
};

#[derive(Parser)]
#[command(name = "chef-mcp-server")]
#[command(about = "Chef MCP Server - Meal-planning assistant backend for LLMs")]
pub struct Args {
    /// Run the MCP stdio transport instead of the HTTP server
    #[arg(long)]
    stdio: bool,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url {
        config.database.url = database_url;
    }

    // The stdio transport owns stdout for JSON-RPC frames.
    let logging = LoggingConfig::from_env();
    if args.stdio {
        logging.init_stderr()?;
    } else {
        logging.init()?;
    }

    info!("Starting Chef MCP Server");
    info!("{}", config.summary());

    let database = Database::new(&config.database.url).await?;
    info!("Database initialized: {}", config.database.url);

    let http_port = config.http_port;
    let resources = Arc::new(ServerResources::new(database, config));
    let server = McpServer::new(resources);

    if args.stdio {
        server.run_stdio_transport().await
    } else {
        server.run_http_server(http_port).await
    }
}
