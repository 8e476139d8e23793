//! Delete project tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{text_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::required_str;
use crate::types::McpResult;

/// Tool for deleting a project and its command log
pub struct DeleteProjectTool {
    service: Arc<ProjectService>,
}

impl DeleteProjectTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for DeleteProjectTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "delete_project",
            "Delete a project and its saved command log",
            json!({
                "type": "object",
                "properties": {
                    "projectId": {
                        "type": "string",
                        "description": "Id of the project to delete"
                    }
                },
                "required": ["projectId"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let project_id = required_str(&params, "projectId")?;
        self.service.delete_project(project_id)?;
        Ok(text_content("Project deleted successfully".to_string()))
    }
}
