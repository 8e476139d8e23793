//! Update subtitle tool

use std::sync::Arc;

use serde_json::{json, Value};

use super::position_schema;
use crate::protocol::{json_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::required_str;
use crate::types::{McpResult, SubtitleUpdate};

/// Tool for changing fields of an existing subtitle
pub struct UpdateSubtitleTool {
    service: Arc<ProjectService>,
}

impl UpdateSubtitleTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for UpdateSubtitleTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "update_subtitle",
            "Change one or more fields of a subtitle. Omitted fields keep their value",
            json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string" },
                    "id": {
                        "type": "string",
                        "description": "Id of the subtitle to change"
                    },
                    "time": { "type": "number" },
                    "duration": { "type": "number" },
                    "text": { "type": "string" },
                    "color": { "type": "string" },
                    "position": position_schema()
                },
                "required": ["projectId", "id"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let project_id = required_str(&params, "projectId")?;
        let id = required_str(&params, "id")?;
        let update: SubtitleUpdate = serde_json::from_value(params.clone())?;

        let updated = self.service.with_project(project_id, |project| {
            project.update_subtitle(id, update)?;
            project.subtitle(id)?.get(project).cloned()
        })??;

        json_content(&serde_json::to_value(updated)?)
    }
}
