//! Remove subtitle tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{text_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::required_str;
use crate::types::McpResult;

/// Tool for removing a subtitle from a project
pub struct RemoveSubtitleTool {
    service: Arc<ProjectService>,
}

impl RemoveSubtitleTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for RemoveSubtitleTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "remove_subtitle",
            "Remove a subtitle from a project",
            json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string" },
                    "id": {
                        "type": "string",
                        "description": "Id of the subtitle to remove"
                    }
                },
                "required": ["projectId", "id"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let project_id = required_str(&params, "projectId")?;
        let id = required_str(&params, "id")?;

        self.service
            .with_project(project_id, |project| project.remove_subtitle(id))??;

        Ok(text_content(format!("Subtitle '{}' removed", id)))
    }
}
