//! Log compaction before persisting
//!
//! Runs of consecutive `sub.update` commands that target the same subtitle
//! are folded into one update carrying the later-wins union of their
//! fields. Every other command is kept as is and breaks a run. The
//! compacted log replays to the same snapshot as the full log.

use crate::types::Command;

/// Produce the compacted form of `commands`
///
/// # Arguments
///
/// * `commands` - An applied command log, oldest first
///
/// # Returns
///
/// A log that is never longer than `commands` and replays to the same
/// snapshot. Unknown commands are kept verbatim.
///
/// # Example
///
/// ```ignore
/// // update(s1, time 5.0), update(s1, time 5.5), update(s1, text "x")
/// let compacted = compact(&log);
/// // => [update(s1, time 5.5, text "x")]
/// ```
pub fn compact(commands: &[Command]) -> Vec<Command> {
    let mut compacted: Vec<Command> = Vec::with_capacity(commands.len());

    for command in commands {
        if let (
            Some(Command::UpdateSubtitle {
                id: previous_id,
                update: previous,
            }),
            Command::UpdateSubtitle { id, update },
        ) = (compacted.last_mut(), command)
        {
            if *previous_id == *id {
                previous.merge(update);
                continue;
            }
        }

        compacted.push(command.clone());
    }

    compacted
}
