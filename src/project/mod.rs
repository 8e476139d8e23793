//! Project - command-sourced subtitle document
//!
//! A project is an immutable base snapshot plus an ordered log of edit
//! commands. The current snapshot is never stored on its own: it is the
//! replay of the log over the base, memoized until the log changes.
//!
//! # Architecture
//!
//! ```text
//! Edit Path:
//! ┌──────────┐    ┌──────────────┐    ┌───────────────┐    ┌──────────────┐
//! │ Tool/UI  │───►│ build Command│───►│ apply to live │───►│ notify       │
//! │ request  │    │ push to log  │    │ snapshot      │    │ listener     │
//! └──────────┘    └──────────────┘    └───────────────┘    └──────────────┘
//!
//! Undo: pop log → redo stack, drop memoized snapshot (rebuilt on next read)
//! Redo: pop redo stack → apply as an edit, keeping the rest of the stack
//! ```
//!
//! - `replay`: rebuild engine (base + commands → snapshot)
//! - `edit`: mutating operations
//! - `history`: undo and redo
//! - `view`: subtitle handles and the sorted view
//! - `compact`: log compaction before persisting

pub mod compact;
mod edit;
mod error;
mod history;
mod memo;
pub mod replay;
mod view;

use std::time::Instant;

use crate::types::{Command, ProjectState, ProjectSummary, SavedProject};

pub use compact::compact;
pub use error::{ProjectError, ProjectResult};
pub use memo::Memo;
pub use replay::{replay, replay_lossy, Replayed};
pub use view::{sorted_handles, SubtitleHandle};

/// Listener invoked after every state-changing operation
pub type ChangeListener = Box<dyn FnMut(&Project) + Send>;

/// A subtitle project with undo/redo over its command log
///
/// # Pattern
///
/// - Edits build a [`Command`], apply it to the live snapshot and append
///   it to the log. A command that fails changes nothing.
/// - `undo` moves the last command to the redo stack and drops the
///   memoized snapshot; the next read replays the shorter log.
/// - `redo` applies the most recently undone command again. Any other
///   edit clears the redo stack.
/// - Every state change calls the listener registered with
///   [`Project::subscribe`], which is how projects get saved.
///
/// The snapshot and the sorted subtitle view are memoized and rebuilt
/// lazily, so a burst of undos costs one replay.
///
/// # Example
///
/// ```ignore
/// let mut project = Project::new(ProjectState::new("p1", "Demo", "video.mp4"));
/// let handle = project.add_subtitle(SubtitleState::with_text("s1", 1.0, 2.0, "hi"))?;
/// handle.set_text(&mut project, "hello")?;
///
/// project.undo();
/// assert_eq!(handle.text(&project)?, "hi");
/// ```
pub struct Project {
    pub(crate) base: ProjectState,
    pub(crate) commands: Vec<Command>,
    pub(crate) redo_stack: Vec<Command>,
    pub(crate) state: Memo<ProjectState>,
    pub(crate) subtitles: Memo<Vec<SubtitleHandle>>,
    pub(crate) listener: Option<ChangeListener>,
}

impl Project {
    /// Create a project with an empty log
    pub fn new(base: ProjectState) -> Self {
        Self {
            base,
            commands: Vec::new(),
            redo_stack: Vec::new(),
            state: Memo::new(),
            subtitles: Memo::new(),
            listener: None,
        }
    }

    /// Restore a project from its base snapshot and command log
    ///
    /// The log is replayed once up front; a log that does not apply to the
    /// base is rejected with the replay error.
    ///
    /// # Arguments
    ///
    /// * `base` - The snapshot the log starts from
    /// * `commands` - The saved log; unknown commands are kept and skipped
    pub fn from_saved(base: ProjectState, commands: Vec<Command>) -> ProjectResult<Self> {
        let state = replay(&base, &commands)?;

        Ok(Self {
            base,
            commands,
            redo_stack: Vec::new(),
            state: Memo::with_value(state),
            subtitles: Memo::new(),
            listener: None,
        })
    }

    pub fn id(&self) -> &str {
        &self.base.id
    }

    pub fn title(&self) -> &str {
        &self.base.title
    }

    pub fn video(&self) -> &str {
        &self.base.video
    }

    pub fn silent(&self) -> bool {
        self.current_snapshot().silent
    }

    /// The snapshot the command log starts from
    pub fn base_state(&self) -> &ProjectState {
        &self.base
    }

    /// The replay of the command log over the base snapshot
    pub fn current_snapshot(&self) -> &ProjectState {
        self.state.get_or_compute(|| self.rebuild())
    }

    /// The applied command log, oldest first
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Undone commands, most recently undone last
    pub fn redo_commands(&self) -> &[Command] {
        &self.redo_stack
    }

    /// The command log with consecutive same-subtitle updates merged
    pub fn compacted_commands(&self) -> Vec<Command> {
        compact(&self.commands)
    }

    /// Persisted form: base snapshot plus compacted log
    pub fn to_saved(&self) -> SavedProject {
        SavedProject::new(self.base.clone(), self.compacted_commands())
    }

    pub fn undo_available(&self) -> bool {
        !self.commands.is_empty()
    }

    pub fn redo_available(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn contains_subtitle(&self, id: &str) -> bool {
        self.current_snapshot().contains_subtitle(id)
    }

    /// Handle for the subtitle with this id
    pub fn subtitle(&self, id: &str) -> ProjectResult<SubtitleHandle> {
        if self.contains_subtitle(id) {
            Ok(SubtitleHandle::new(self.id(), id))
        } else {
            Err(ProjectError::NotFound(id.to_string()))
        }
    }

    /// Handles for all subtitles, ascending by start time
    pub fn subtitles(&self) -> &[SubtitleHandle] {
        self.subtitles
            .get_or_compute(|| sorted_handles(self.current_snapshot()))
    }

    pub fn summary(&self) -> ProjectSummary {
        ProjectSummary {
            id: self.base.id.clone(),
            title: self.base.title.clone(),
            video: self.base.video.clone(),
            subtitle_count: self.current_snapshot().subtitles.len(),
            command_count: self.commands.len(),
        }
    }

    /// Register the change listener, replacing any previous one
    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listener = Some(listener);
    }

    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }

    pub(crate) fn notify(&mut self) {
        if let Some(mut listener) = self.listener.take() {
            listener(&*self);
            self.listener = Some(listener);
        }
    }

    /// Replay the full log over the base snapshot
    pub(crate) fn rebuild(&self) -> ProjectState {
        let started = Instant::now();
        let replayed = replay_lossy(&self.base, &self.commands);

        tracing::debug!(
            project = %self.base.id,
            commands = self.commands.len(),
            skipped = replayed.skipped.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "Rebuilt project"
        );

        replayed.state
    }
}

impl std::fmt::Debug for Project {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Project")
            .field("id", &self.base.id)
            .field("commands", &self.commands.len())
            .field("redo_stack", &self.redo_stack.len())
            .field("state_valid", &self.state.is_valid())
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl TryFrom<SavedProject> for Project {
    type Error = ProjectError;

    fn try_from(saved: SavedProject) -> ProjectResult<Self> {
        Project::from_saved(saved.base_state, saved.commands)
    }
}
