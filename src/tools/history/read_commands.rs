//! Read commands tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{json_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::required_str;
use crate::types::McpResult;

/// Tool for inspecting the command log of a project
pub struct ReadCommandsTool {
    service: Arc<ProjectService>,
}

impl ReadCommandsTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for ReadCommandsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "read_commands",
            "Read the command log of a project, its redo stack and the compacted log that gets saved",
            json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string" }
                },
                "required": ["projectId"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let project_id = required_str(&params, "projectId")?;

        let log = self.service.with_project(project_id, |project| {
            json!({
                "baseState": project.base_state(),
                "commands": project.commands(),
                "redoStack": project.redo_commands(),
                "compacted": project.compacted_commands()
            })
        })?;

        json_content(&log)
    }
}
