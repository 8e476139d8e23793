//! Project service - the set of projects a user works on
//!
//! Loads every saved project at startup, creates new ones and runs edits
//! under a single lock so each project has exactly one mutator at a time.
//! Every project is subscribed to save itself through the repository
//! after each state-changing operation.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::project::{ChangeListener, Project, ProjectError, ProjectResult};
use crate::store::{ProjectRepository, StoreResult};
use crate::types::{ProjectState, ProjectSummary};
use crate::utils::{current_millis, unique_millis_id};

/// Owns the loaded projects and wires them to the repository
pub struct ProjectService {
    repository: Arc<ProjectRepository>,
    projects: Mutex<Vec<Project>>,
}

impl ProjectService {
    /// Load all indexed projects from the repository
    ///
    /// Projects whose log is missing, unreadable or not applicable to their
    /// base snapshot are skipped with a warning.
    pub fn open(repository: Arc<ProjectRepository>) -> StoreResult<Self> {
        let mut projects = Vec::new();

        for base in repository.list()? {
            let saved = match repository.load(&base.id) {
                Ok(Some(saved)) => saved,
                Ok(None) => {
                    tracing::warn!(project = %base.id, "Indexed project has no command log, skipping");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(project = %base.id, error = %e, "Failed to read project, skipping");
                    continue;
                }
            };

            match Project::try_from(saved) {
                Ok(mut project) => {
                    project.subscribe(save_listener(repository.clone()));
                    projects.push(project);
                }
                Err(e) => {
                    tracing::warn!(project = %base.id, error = %e, "Failed to replay project, skipping");
                }
            }
        }

        tracing::info!(count = projects.len(), "Loaded projects");

        Ok(Self {
            repository,
            projects: Mutex::new(projects),
        })
    }

    pub fn repository(&self) -> &Arc<ProjectRepository> {
        &self.repository
    }

    /// Create and save an empty project, returning its id
    pub fn create_project(&self, title: &str, video: &str) -> ProjectResult<String> {
        let mut projects = self.projects.lock();

        let id = unique_millis_id("pr", current_millis(), |id| {
            projects.iter().any(|p| p.id() == id)
        });

        let mut project = Project::new(ProjectState::new(id.clone(), title, video));
        self.repository.save_project(&project)?;
        project.subscribe(save_listener(self.repository.clone()));

        tracing::info!(project = %id, title, "Created project");
        projects.insert(0, project);

        Ok(id)
    }

    /// Summaries of all projects, most recently saved first
    pub fn projects(&self) -> ProjectResult<Vec<ProjectSummary>> {
        let order = self.repository.list()?;
        let projects = self.projects.lock();

        let mut summaries: Vec<ProjectSummary> = order
            .iter()
            .filter_map(|base| projects.iter().find(|p| p.id() == base.id))
            .map(Project::summary)
            .collect();

        // loaded but not indexed (index write failed); list them last
        for project in projects.iter() {
            if !order.iter().any(|base| base.id == project.id()) {
                summaries.push(project.summary());
            }
        }

        Ok(summaries)
    }

    pub fn contains(&self, project_id: &str) -> bool {
        self.projects.lock().iter().any(|p| p.id() == project_id)
    }

    /// Run `f` on the project with this id under the service lock
    pub fn with_project<R, F>(&self, project_id: &str, f: F) -> ProjectResult<R>
    where
        F: FnOnce(&mut Project) -> R,
    {
        let mut projects = self.projects.lock();
        let project = projects
            .iter_mut()
            .find(|p| p.id() == project_id)
            .ok_or_else(|| ProjectError::ProjectNotFound(project_id.to_string()))?;

        Ok(f(project))
    }

    /// Remove a project from memory and storage
    pub fn delete_project(&self, project_id: &str) -> ProjectResult<()> {
        let mut projects = self.projects.lock();
        let idx = projects
            .iter()
            .position(|p| p.id() == project_id)
            .ok_or_else(|| ProjectError::ProjectNotFound(project_id.to_string()))?;

        self.repository.delete(project_id)?;
        projects.remove(idx);

        tracing::info!(project = %project_id, "Deleted project");
        Ok(())
    }
}

/// Listener that saves the compacted project after each change
///
/// Save failures are logged and not retried; the next change saves again.
fn save_listener(repository: Arc<ProjectRepository>) -> ChangeListener {
    Box::new(move |project: &Project| {
        if let Err(e) = repository.save_project(project) {
            tracing::warn!(project = %project.id(), error = %e, "Failed to save project");
        }
    })
}
