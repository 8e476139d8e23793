//! Add subtitle tool

use std::sync::Arc;

use serde_json::{json, Value};

use super::position_schema;
use crate::protocol::{json_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::required_str;
use crate::types::{McpResult, SubtitleState};

/// Tool for adding a subtitle to a project
pub struct AddSubtitleTool {
    service: Arc<ProjectService>,
}

impl AddSubtitleTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for AddSubtitleTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "add_subtitle",
            "Add a subtitle to a project. Time and duration are rounded to one decimal; \
             an id is generated when none is given",
            json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string" },
                    "id": {
                        "type": "string",
                        "description": "Subtitle id, unique within the project"
                    },
                    "time": {
                        "type": "number",
                        "description": "Start time in seconds"
                    },
                    "duration": {
                        "type": "number",
                        "description": "Display duration in seconds"
                    },
                    "text": { "type": "string" },
                    "color": { "type": "string" },
                    "position": position_schema()
                },
                "required": ["projectId", "time", "duration"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let project_id = required_str(&params, "projectId")?;
        let subtitle: SubtitleState = serde_json::from_value(params.clone())?;

        let added = self.service.with_project(project_id, |project| {
            let handle = project.add_subtitle(subtitle)?;
            handle.get(project).cloned()
        })??;

        json_content(&serde_json::to_value(added)?)
    }
}
