//! Undo tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{json_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::project::project_view;
use crate::tools::required_str;
use crate::types::McpResult;

/// Tool for undoing the last edit of a project
pub struct UndoTool {
    service: Arc<ProjectService>,
}

impl UndoTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for UndoTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "undo",
            "Undo the most recent edit of a project. Does nothing when there is nothing to undo",
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

        let (undone, view) = self.service.with_project(project_id, |project| {
            let undone = project.undo();
            (undone, project_view(project))
        })?;

        json_content(&json!({ "undone": undone, "project": view }))
    }
}
