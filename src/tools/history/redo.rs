//! Redo tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{json_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::project::project_view;
use crate::tools::required_str;
use crate::types::McpResult;

/// Tool for re-applying the most recently undone edit
pub struct RedoTool {
    service: Arc<ProjectService>,
}

impl RedoTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for RedoTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "redo",
            "Re-apply the most recently undone edit. Does nothing when there is nothing to redo",
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

        let (redone, view) = self.service.with_project(project_id, |project| {
            project.redo().map(|redone| (redone, project_view(project)))
        })??;

        json_content(&json!({ "redone": redone, "project": view }))
    }
}
