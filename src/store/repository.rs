//! Project repository - load and save projects through a key-value store
//!
//! # Layout
//!
//! - `projects`: JSON array of base snapshots, most recently saved first
//! - `project.<id>.commands`: `{"baseState": …, "commands": […]}`
//!
//! # Pattern
//!
//! 1. Write the project's own key (base snapshot + compacted log)
//! 2. Re-read the index, move the project to the front, write it back
//!
//! The index update runs under a lock so concurrent saves of different
//! projects do not drop each other's entries. A crash between the two
//! writes leaves a saved log that is missing from (or stale in) the
//! index; the log itself is always complete.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::project::Project;
use crate::types::{Command, ProjectState, SavedProject};

use super::error::{StoreError, StoreResult};
use super::kv::KeyValueStore;

/// Key of the project index
pub const PROJECTS_KEY: &str = "projects";

/// Key holding a project's base snapshot and command log
pub fn commands_key(project_id: &str) -> String {
    format!("project.{}.commands", project_id)
}

/// Reads and writes saved projects
///
/// The repository is the persistence side of a project: it is handed to
/// each project as a change listener and never reaches back into it.
///
/// # Example
///
/// ```ignore
/// let repository = ProjectRepository::new(Arc::new(MemoryStore::new()));
/// repository.save(&base, &commands)?;
/// let saved = repository.load(&base.id)?.expect("just saved");
/// ```
pub struct ProjectRepository {
    store: Arc<dyn KeyValueStore>,
    /// Serializes read-modify-write cycles on the index
    index_lock: Mutex<()>,
}

impl ProjectRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            index_lock: Mutex::new(()),
        }
    }

    /// Base snapshots of all indexed projects, most recently saved first
    pub fn list(&self) -> StoreResult<Vec<ProjectState>> {
        match self.store.get(PROJECTS_KEY)? {
            Some(json) => Ok(serde_json::from_str(&json)?),
            None => Ok(Vec::new()),
        }
    }

    /// Load a project's base snapshot and command log
    ///
    /// Returns `Ok(None)` when nothing is stored for `project_id`, and
    /// [`StoreError::Corrupted`] when the stored snapshot belongs to a
    /// different project.
    pub fn load(&self, project_id: &str) -> StoreResult<Option<SavedProject>> {
        let key = commands_key(project_id);

        let Some(json) = self.store.get(&key)? else {
            return Ok(None);
        };

        let saved = SavedProject::from_json(&json)?;
        if saved.base_state.id != project_id {
            return Err(StoreError::Corrupted {
                key,
                reason: format!("holds project {}", saved.base_state.id),
            });
        }

        Ok(Some(saved))
    }

    /// Persist a base snapshot with its (compacted) command log
    ///
    /// The project moves to the front of the index.
    ///
    /// # Arguments
    ///
    /// * `base` - The snapshot the log starts from; its id names the key
    /// * `commands` - The log to store, usually already compacted
    pub fn save(&self, base: &ProjectState, commands: &[Command]) -> StoreResult<()> {
        let saved = SavedProject::new(base.clone(), commands.to_vec());
        self.store.set(&commands_key(&base.id), &saved.to_json()?)?;

        let _guard = self.index_lock.lock();
        let mut index = self.list()?;
        index.retain(|p| p.id != base.id);
        index.insert(0, base.clone());
        self.store
            .set(PROJECTS_KEY, &serde_json::to_string(&index)?)?;

        tracing::debug!(project = %base.id, commands = commands.len(), "Saved project");
        Ok(())
    }

    /// Persist a project in its compacted form
    pub fn save_project(&self, project: &Project) -> StoreResult<()> {
        self.save(project.base_state(), &project.compacted_commands())
    }

    /// Remove a project and its index entry
    pub fn delete(&self, project_id: &str) -> StoreResult<()> {
        let _guard = self.index_lock.lock();
        let mut index = self.list()?;
        index.retain(|p| p.id != project_id);
        self.store
            .set(PROJECTS_KEY, &serde_json::to_string(&index)?)?;

        self.store.remove(&commands_key(project_id))?;
        Ok(())
    }
}
