//! Undo and redo over the command log

use super::edit::ApplyOptions;
use super::error::ProjectResult;
use super::Project;

impl Project {
    /// Move the last command from the log onto the redo stack
    ///
    /// Returns `false` when there is nothing to undo. The snapshot is
    /// rebuilt lazily on the next read.
    pub fn undo(&mut self) -> bool {
        let Some(command) = self.commands.pop() else {
            return false;
        };

        tracing::debug!(project = %self.base.id, command = %command, "Undo");
        self.redo_stack.push(command);

        self.state.invalidate();
        self.subtitles.invalidate();

        self.notify();
        true
    }

    /// Re-apply the most recently undone command
    ///
    /// Returns `Ok(false)` when the redo stack is empty. The remaining redo
    /// stack is kept, so undo and redo can be alternated freely.
    pub fn redo(&mut self) -> ProjectResult<bool> {
        let Some(command) = self.redo_stack.pop() else {
            return Ok(false);
        };

        tracing::debug!(project = %self.base.id, command = %command, "Redo");

        let options = ApplyOptions {
            keep_redo_stack: true,
        };
        if let Err(e) = self.apply(command.clone(), options) {
            self.redo_stack.push(command);
            return Err(e);
        }

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::project::{replay, Project};
    use crate::types::{FieldUpdate, ProjectState, SubtitleState};

    fn project() -> Project {
        Project::new(ProjectState::new("p1", "Demo", "video.mp4"))
    }

    #[test]
    fn test_undo_on_empty_log_is_noop() {
        let mut project = project();
        assert!(!project.undo());
        assert!(!project.redo_available());
    }

    #[test]
    fn test_redo_on_empty_stack_is_noop() {
        let mut project = project();
        assert!(!project.redo().unwrap());
        assert!(!project.undo_available());
    }

    #[test]
    fn test_undo_after_remove_restores_subtitle() {
        let mut project = project();
        project
            .add_subtitle(SubtitleState::with_text("s2", 4.0, 1.5, "bye"))
            .unwrap();
        project.remove_subtitle("s2").unwrap();
        assert!(!project.contains_subtitle("s2"));

        assert!(project.undo());

        let restored = project.current_snapshot().subtitle("s2").unwrap();
        assert_eq!(restored.time, 4.0);
        assert_eq!(restored.duration, 1.5);
        assert_eq!(restored.text, "bye");
        assert!(project.redo_available());
    }

    #[test]
    fn test_undo_redo_restores_log_and_snapshot() {
        let mut project = project();
        project
            .add_subtitle(SubtitleState::with_text("s1", 1.0, 2.0, "a"))
            .unwrap();
        project.update_field("s1", FieldUpdate::Text("b".into())).unwrap();

        let commands = project.commands().to_vec();
        let snapshot = project.current_snapshot().clone();

        project.undo();
        assert_eq!(project.current_snapshot().subtitle("s1").unwrap().text, "a");
        project.redo().unwrap();

        assert_eq!(project.commands(), commands.as_slice());
        assert_eq!(project.current_snapshot(), &snapshot);
        assert!(!project.redo_available());
    }

    #[test]
    fn test_redo_in_undo_order() {
        let mut project = project();
        project.add_subtitle(SubtitleState::new("a")).unwrap();
        project.add_subtitle(SubtitleState::new("b")).unwrap();
        project.add_subtitle(SubtitleState::new("c")).unwrap();
        let commands = project.commands().to_vec();

        project.undo();
        project.undo();
        project.undo();
        assert!(project.current_snapshot().subtitles.is_empty());

        project.redo().unwrap();
        assert!(project.contains_subtitle("a"));
        assert!(!project.contains_subtitle("b"));
        assert!(project.redo_available());

        project.redo().unwrap();
        project.redo().unwrap();
        assert_eq!(project.commands(), commands.as_slice());
    }

    #[test]
    fn test_undo_redo_toggle_keeps_stack() {
        let mut project = project();
        project.set_silent(true).unwrap();
        project.set_silent(false).unwrap();

        project.undo();
        project.undo();
        for _ in 0..3 {
            project.redo().unwrap();
            project.undo();
        }

        assert_eq!(project.redo_commands().len(), 2);
        assert!(!project.silent());
    }

    #[test]
    fn test_new_edit_clears_redo_stack() {
        let mut project = project();
        project.add_subtitle(SubtitleState::new("a")).unwrap();
        project.add_subtitle(SubtitleState::new("b")).unwrap();

        project.undo();
        project.undo();
        assert!(project.redo_available());

        project.set_silent(true).unwrap();

        assert!(!project.redo_available());
        assert!(!project.redo().unwrap());
        assert_eq!(project.commands().len(), 1);
    }

    #[test]
    fn test_failed_edit_keeps_redo_stack() {
        let mut project = project();
        project.add_subtitle(SubtitleState::new("a")).unwrap();
        project.undo();

        assert!(project.remove_subtitle("missing").is_err());
        assert!(project.redo_available());
    }

    #[test]
    fn test_snapshot_matches_replay_after_history_moves() {
        let mut project = project();
        project
            .add_subtitle(SubtitleState::with_text("a", 2.0, 1.0, "x"))
            .unwrap();
        project
            .add_subtitle(SubtitleState::with_text("b", 1.0, 1.0, "y"))
            .unwrap();
        project.update_field("a", FieldUpdate::Time(0.5)).unwrap();
        project.undo();
        project.undo();
        project.redo().unwrap();

        let expected = replay(project.base_state(), project.commands()).unwrap();
        assert_eq!(project.current_snapshot(), &expected);
    }

    #[test]
    fn test_handle_validity_follows_history() {
        let mut project = project();
        let handle = project.add_subtitle(SubtitleState::new("s1")).unwrap();
        assert!(handle.is_valid(&project));

        project.undo();
        assert!(!handle.is_valid(&project));

        project.redo().unwrap();
        assert!(handle.is_valid(&project));

        project.remove_subtitle("s1").unwrap();
        assert!(!handle.is_valid(&project));
    }

    #[test]
    fn test_undo_notifies_listener() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let mut project = project();
        project.set_silent(true).unwrap();
        project.subscribe(Box::new(move |_: &Project| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        project.undo();
        project.redo().unwrap();
        project.undo();
        project.undo();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}
