//! Mutating operations on a project

use crate::types::{Command, FieldUpdate, SubtitleState, SubtitleUpdate};
use crate::utils::{current_millis, unique_millis_id};

use super::error::{ProjectError, ProjectResult};
use super::replay::{apply_command, Outcome};
use super::{Project, SubtitleHandle};

/// How a command is applied to the log
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ApplyOptions {
    /// Leave the redo stack alone (set when the command comes from redo)
    pub keep_redo_stack: bool,
}

impl Project {
    /// Apply a command to the live snapshot and append it to the log
    ///
    /// On failure the log, the redo stack and the snapshot are unchanged.
    pub(crate) fn apply(&mut self, command: Command, options: ApplyOptions) -> ProjectResult<()> {
        let mut state = match self.state.take() {
            Some(state) => state,
            None => self.rebuild(),
        };

        let result = apply_command(&mut state, &command);
        self.state.set(state);

        if result? == Outcome::Skipped {
            tracing::warn!(project = %self.base.id, command = %command, "Can not apply command");
        }

        if command.reorders_subtitles() {
            self.subtitles.invalidate();
        }

        tracing::debug!(project = %self.base.id, command = %command, "Applied command");
        self.commands.push(command);

        if !options.keep_redo_stack {
            self.redo_stack.clear();
        }

        self.notify();
        Ok(())
    }

    /// Add a subtitle and return a handle bound to it
    ///
    /// An empty id is replaced by a fresh millisecond id. An id that is
    /// already present fails with [`ProjectError::DuplicateId`].
    pub fn add_subtitle(&mut self, subtitle: SubtitleState) -> ProjectResult<SubtitleHandle> {
        let mut subtitle = subtitle.normalized();

        if subtitle.id.is_empty() {
            subtitle.id = unique_millis_id("", current_millis(), |id| self.contains_subtitle(id));
        } else if self.contains_subtitle(&subtitle.id) {
            return Err(ProjectError::DuplicateId(subtitle.id));
        }

        let handle = SubtitleHandle::new(self.id(), subtitle.id.clone());
        self.apply(Command::add_subtitle(subtitle), ApplyOptions::default())?;

        Ok(handle)
    }

    pub fn remove_subtitle(&mut self, id: &str) -> ProjectResult<()> {
        self.apply(Command::remove_subtitle(id), ApplyOptions::default())
    }

    /// Overwrite a single field of a subtitle
    pub fn update_field(&mut self, id: &str, field: FieldUpdate) -> ProjectResult<()> {
        self.update_subtitle(id, field.into())
    }

    /// Overwrite the fields present in `update`
    pub fn update_subtitle(&mut self, id: &str, update: SubtitleUpdate) -> ProjectResult<()> {
        self.apply(Command::update_subtitle(id, update), ApplyOptions::default())
    }

    pub fn set_silent(&mut self, silent: bool) -> ProjectResult<()> {
        self.apply(Command::set_silent(silent), ApplyOptions::default())
    }
}
