//! Create project tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{json_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::required_str;
use crate::types::McpResult;

/// Tool for creating an empty subtitle project
pub struct CreateProjectTool {
    service: Arc<ProjectService>,
}

impl CreateProjectTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for CreateProjectTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "create_project",
            "Create a new subtitle project for a video",
            json!({
                "type": "object",
                "properties": {
                    "title": {
                        "type": "string",
                        "description": "Project title"
                    },
                    "video": {
                        "type": "string",
                        "description": "URL of the video to subtitle"
                    }
                },
                "required": ["title", "video"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let title = required_str(&params, "title")?;
        let video = required_str(&params, "video")?;

        let id = self.service.create_project(title, video)?;
        json_content(&json!({ "id": id }))
    }
}
