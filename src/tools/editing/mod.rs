//! Editing tools
//!
//! Each call appends one command to the project's log and clears its redo
//! stack. A rejected edit leaves the project unchanged.

mod add_subtitle;
mod remove_subtitle;
mod set_silent;
mod update_subtitle;

pub use add_subtitle::AddSubtitleTool;
pub use remove_subtitle::RemoveSubtitleTool;
pub use set_silent::SetSilentTool;
pub use update_subtitle::UpdateSubtitleTool;

use serde_json::{json, Value};

/// JSON schema of a subtitle screen position
pub(crate) fn position_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "x": { "type": "string", "enum": ["left", "center", "right"] },
            "y": { "type": "string", "enum": ["top", "center", "bottom"] }
        },
        "required": ["x", "y"]
    })
}
