//! List projects tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::protocol::{json_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::types::McpResult;

/// Tool for listing all projects, most recently saved first
pub struct ListProjectsTool {
    service: Arc<ProjectService>,
}

impl ListProjectsTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for ListProjectsTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "list_projects",
            "List all subtitle projects",
            json!({
                "type": "object",
                "properties": {}
            }),
        )
    }

    fn execute(&self, _params: Value) -> McpResult<Value> {
        let projects = self.service.projects()?;
        json_content(&serde_json::to_value(projects)?)
    }
}
