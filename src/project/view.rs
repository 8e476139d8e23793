//! Identity-bound subtitle handles and the sorted subtitle view
//!
//! A [`SubtitleHandle`] names one subtitle of one project. It holds no
//! state of its own: reads resolve against the project's current snapshot
//! and writes become `sub.update` commands on the project. A handle stays
//! usable across any number of edits, and reports itself invalid whenever
//! its subtitle is absent from the current snapshot (for example after
//! the `sub.add` that created it was undone).

use crate::types::{FieldUpdate, Position, ProjectState, SubtitleState};

use super::error::{ProjectError, ProjectResult};
use super::Project;

/// Handle to one subtitle of a project
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubtitleHandle {
    project_id: String,
    id: String,
}

impl SubtitleHandle {
    pub(crate) fn new(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            id: id.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// True iff the subtitle exists in the project's current snapshot
    pub fn is_valid(&self, project: &Project) -> bool {
        self.project_id == project.id() && project.contains_subtitle(&self.id)
    }

    /// Resolve the current record
    pub fn get<'a>(&self, project: &'a Project) -> ProjectResult<&'a SubtitleState> {
        self.check_project(project)?;
        project
            .current_snapshot()
            .subtitle(&self.id)
            .ok_or_else(|| ProjectError::NotFound(self.id.clone()))
    }

    pub fn time(&self, project: &Project) -> ProjectResult<f64> {
        self.get(project).map(|s| s.time)
    }

    pub fn duration(&self, project: &Project) -> ProjectResult<f64> {
        self.get(project).map(|s| s.duration)
    }

    pub fn text<'a>(&self, project: &'a Project) -> ProjectResult<&'a str> {
        self.get(project).map(|s| s.text.as_str())
    }

    pub fn color<'a>(&self, project: &'a Project) -> ProjectResult<&'a str> {
        self.get(project).map(|s| s.color.as_str())
    }

    pub fn position<'a>(&self, project: &'a Project) -> ProjectResult<&'a Position> {
        self.get(project).map(|s| &s.position)
    }

    /// Write one field through the project's command log
    pub fn set(&self, project: &mut Project, field: FieldUpdate) -> ProjectResult<()> {
        self.check_project(project)?;
        project.update_field(&self.id, field)
    }

    pub fn set_time(&self, project: &mut Project, time: f64) -> ProjectResult<()> {
        self.set(project, FieldUpdate::Time(time))
    }

    pub fn set_duration(&self, project: &mut Project, duration: f64) -> ProjectResult<()> {
        self.set(project, FieldUpdate::Duration(duration))
    }

    pub fn set_text(&self, project: &mut Project, text: impl Into<String>) -> ProjectResult<()> {
        self.set(project, FieldUpdate::Text(text.into()))
    }

    pub fn set_color(&self, project: &mut Project, color: impl Into<String>) -> ProjectResult<()> {
        self.set(project, FieldUpdate::Color(color.into()))
    }

    pub fn set_position(&self, project: &mut Project, position: Position) -> ProjectResult<()> {
        self.set(project, FieldUpdate::Position(position))
    }

    fn check_project(&self, project: &Project) -> ProjectResult<()> {
        if self.project_id == project.id() {
            Ok(())
        } else {
            Err(ProjectError::ProjectMismatch {
                handle: self.project_id.clone(),
                project: project.id().to_string(),
            })
        }
    }
}

/// Handles for every subtitle of `state`, ascending by start time
///
/// The sort is stable, so subtitles starting at the same time keep their
/// insertion order.
pub fn sorted_handles(state: &ProjectState) -> Vec<SubtitleHandle> {
    let mut subtitles: Vec<&SubtitleState> = state.subtitles.iter().collect();
    subtitles.sort_by(|a, b| a.time.total_cmp(&b.time));

    subtitles
        .into_iter()
        .map(|s| SubtitleHandle::new(state.id.clone(), s.id.clone()))
        .collect()
}
