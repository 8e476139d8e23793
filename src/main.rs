//! Subtitle Studio MCP Server - Binary Entry Point
//!
//! Serves JSON-RPC on stdin/stdout. Logs go to stderr, filtered by
//! `RUST_LOG` (default `info`). Projects are stored under the directory
//! named by `SUBTITLE_DATA_DIR` (default `./data`).

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use subtitle_studio::protocol::ServerInfo;
use subtitle_studio::server::McpServer;
use subtitle_studio::service::ProjectService;
use subtitle_studio::store::{FileStore, ProjectRepository, StoreConfig};
use subtitle_studio::tools::register_all_tools;
use subtitle_studio::types::McpResult;

fn main() -> McpResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = StoreConfig::from_env();
    tracing::info!(data_dir = %config.data_dir().display(), "Opening project store");

    let store = Arc::new(FileStore::open(config)?);
    let repository = Arc::new(ProjectRepository::new(store));
    let service = Arc::new(ProjectService::open(repository)?);

    let mut server = McpServer::stdio(ServerInfo::default());
    register_all_tools(&mut server, service);

    server.run()
}
