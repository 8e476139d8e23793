//! MCP Tools implementation
//!
//! Tools are organized by category:
//! - Project tools (4): create, list, read and delete projects
//! - Editing tools (4): subtitle edits and the silent flag
//! - History tools (3): undo, redo and the command log

pub mod editing;
pub mod history;
pub mod project;

use std::io::{BufRead, Write};
use std::sync::Arc;

use serde_json::Value;

use crate::server::McpServer;
use crate::service::ProjectService;
use crate::types::McpResult;

pub use editing::{AddSubtitleTool, RemoveSubtitleTool, SetSilentTool, UpdateSubtitleTool};
pub use history::{ReadCommandsTool, RedoTool, UndoTool};
pub use project::{CreateProjectTool, DeleteProjectTool, ListProjectsTool, ReadProjectTool};

/// Register all tools with the MCP server
pub fn register_all_tools<R: BufRead, W: Write>(
    server: &mut McpServer<R, W>,
    service: Arc<ProjectService>,
) {
    // Project tools (4)
    server.register_tool(Box::new(CreateProjectTool::new(service.clone())));
    server.register_tool(Box::new(ListProjectsTool::new(service.clone())));
    server.register_tool(Box::new(ReadProjectTool::new(service.clone())));
    server.register_tool(Box::new(DeleteProjectTool::new(service.clone())));

    // Editing tools (4)
    server.register_tool(Box::new(AddSubtitleTool::new(service.clone())));
    server.register_tool(Box::new(RemoveSubtitleTool::new(service.clone())));
    server.register_tool(Box::new(UpdateSubtitleTool::new(service.clone())));
    server.register_tool(Box::new(SetSilentTool::new(service.clone())));

    // History tools (3)
    server.register_tool(Box::new(UndoTool::new(service.clone())));
    server.register_tool(Box::new(RedoTool::new(service.clone())));
    server.register_tool(Box::new(ReadCommandsTool::new(service)));
}

/// Read a required string argument
pub(crate) fn required_str<'a>(params: &'a Value, name: &str) -> McpResult<&'a str> {
    params
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| format!("Missing {}", name).into())
}
