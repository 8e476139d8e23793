//! Set silent tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{text_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::required_str;
use crate::types::McpResult;

/// Tool for muting or unmuting the project video
pub struct SetSilentTool {
    service: Arc<ProjectService>,
}

impl SetSilentTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for SetSilentTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "set_silent",
            "Play the project video with or without sound",
            json!({
                "type": "object",
                "properties": {
                    "projectId": { "type": "string" },
                    "silent": { "type": "boolean" }
                },
                "required": ["projectId", "silent"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let project_id = required_str(&params, "projectId")?;
        let silent = params
            .get("silent")
            .and_then(|v| v.as_bool())
            .ok_or("Missing silent")?;

        self.service
            .with_project(project_id, |project| project.set_silent(silent))??;

        Ok(text_content(format!("Silent set to {}", silent)))
    }
}
