//! Rebuild engine
//!
//! Reconstructs a project snapshot by applying a command log, in order, to
//! a copy of the base snapshot. Replay is a pure function of its inputs:
//! the same base and log always produce the same snapshot.

use crate::types::{Command, ProjectState};
use crate::utils::round_time;

use super::error::{ProjectError, ProjectResult};

/// Result of applying a single command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command changed (or validly left unchanged) the state
    Applied,
    /// The command kind is unknown and was ignored
    Skipped,
}

/// Apply a single command to the state
///
/// A failing command leaves `state` untouched: targets are looked up and
/// times are checked before anything is written.
///
/// # Errors
///
/// * [`ProjectError::NotFound`] - remove or update of an id not in `state`
/// * [`ProjectError::InvalidTime`] - a time or duration that is not a
///   finite number once rounded
pub fn apply_command(state: &mut ProjectState, command: &Command) -> ProjectResult<Outcome> {
    match command {
        Command::AddSubtitle { subtitle } => {
            check_time("time", subtitle.time)?;
            check_time("duration", subtitle.duration)?;
            state.subtitles.push(subtitle.clone().normalized());
        }

        Command::RemoveSubtitle { id } => {
            let idx = index_of(state, id)?;
            state.subtitles.remove(idx);
        }

        Command::UpdateSubtitle { id, update } => {
            let idx = index_of(state, id)?;
            if let Some(time) = update.time {
                check_time("time", time)?;
            }
            if let Some(duration) = update.duration {
                check_time("duration", duration)?;
            }
            state.subtitles[idx].apply(update);
        }

        Command::SetSilent { silent } => {
            state.silent = *silent;
        }

        Command::Unknown(_) => return Ok(Outcome::Skipped),
    }

    Ok(Outcome::Applied)
}

/// Rounded times must stay finite; JSON has no encoding for infinity or NaN
fn check_time(field: &'static str, value: f64) -> ProjectResult<()> {
    if round_time(value).is_finite() {
        Ok(())
    } else {
        Err(ProjectError::InvalidTime { field, value })
    }
}

fn index_of(state: &ProjectState, id: &str) -> ProjectResult<usize> {
    state
        .index_of(id)
        .ok_or_else(|| ProjectError::NotFound(id.to_string()))
}

/// Replay `commands` over a copy of `base`
///
/// Unknown commands are logged and skipped. Any other failure aborts the
/// replay and is returned to the caller.
///
/// # Arguments
///
/// * `base` - The snapshot to start from; it is cloned, never modified
/// * `commands` - The log to apply, oldest first
///
/// # Example
///
/// ```ignore
/// let state = replay(&base, &[
///     Command::add_subtitle(SubtitleState::with_text("s1", 1.23, 2.0, "hi")),
///     Command::update_subtitle("s1", update),
/// ])?;
/// assert_eq!(state.subtitles[0].time, 1.2);
/// ```
pub fn replay(base: &ProjectState, commands: &[Command]) -> ProjectResult<ProjectState> {
    let mut state = base.clone();

    for (position, command) in commands.iter().enumerate() {
        if apply_command(&mut state, command)? == Outcome::Skipped {
            tracing::warn!(position, project = %base.id, action = %command.kind(), "Can not apply command, skipping");
        }
    }

    Ok(state)
}

/// Snapshot produced by a tolerant replay, with the commands it had to skip
#[derive(Debug)]
pub struct Replayed {
    pub state: ProjectState,
    pub skipped: Vec<ProjectError>,
}

/// Replay `commands` over a copy of `base`, skipping every failing command
///
/// Used where a snapshot must always be produced. For a log that was
/// validated command by command when it was built this is identical to
/// [`replay`].
pub fn replay_lossy(base: &ProjectState, commands: &[Command]) -> Replayed {
    let mut state = base.clone();
    let mut skipped = Vec::new();

    for (position, command) in commands.iter().enumerate() {
        match apply_command(&mut state, command) {
            Ok(Outcome::Applied) => {}
            Ok(Outcome::Skipped) => {
                tracing::warn!(position, project = %base.id, action = %command.kind(), "Can not apply command, skipping");
                skipped.push(ProjectError::UnknownCommand(position));
            }
            Err(e) => {
                tracing::warn!(position, project = %base.id, command = %command, error = %e, "Command failed during rebuild, skipping");
                skipped.push(e);
            }
        }
    }

    Replayed { state, skipped }
}
