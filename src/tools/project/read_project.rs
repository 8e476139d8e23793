//! Read project tool

use std::sync::Arc;

use serde_json::{json, Value};

use crate::project::Project;
use crate::protocol::{json_content, McpTool, Tool};
use crate::service::ProjectService;
use crate::tools::required_str;
use crate::types::McpResult;
use crate::utils::format_start;

/// Tool for reading the current state of a project
pub struct ReadProjectTool {
    service: Arc<ProjectService>,
}

impl ReadProjectTool {
    pub fn new(service: Arc<ProjectService>) -> Self {
        Self { service }
    }
}

impl Tool for ReadProjectTool {
    fn definition(&self) -> McpTool {
        McpTool::new(
            "read_project",
            "Read the current snapshot of a project with its subtitles in time order",
            json!({
                "type": "object",
                "properties": {
                    "projectId": {
                        "type": "string",
                        "description": "Id of the project to read"
                    }
                },
                "required": ["projectId"]
            }),
        )
    }

    fn execute(&self, params: Value) -> McpResult<Value> {
        let project_id = required_str(&params, "projectId")?;
        let view = self.service.with_project(project_id, |p| project_view(p))?;
        json_content(&view)
    }
}

/// Current snapshot of a project with its subtitles sorted by start time
pub(crate) fn project_view(project: &Project) -> Value {
    let snapshot = project.current_snapshot();

    let subtitles: Vec<Value> = project
        .subtitles()
        .iter()
        .filter_map(|handle| snapshot.subtitle(handle.id()))
        .map(|s| {
            json!({
                "id": s.id,
                "time": s.time,
                "duration": s.duration,
                "text": s.text,
                "color": s.color,
                "position": s.position,
                "start": format_start(s.time)
            })
        })
        .collect();

    json!({
        "id": snapshot.id,
        "title": snapshot.title,
        "video": snapshot.video,
        "silent": snapshot.silent,
        "subtitles": subtitles,
        "undoAvailable": project.undo_available(),
        "redoAvailable": project.redo_available()
    })
}
