//! Command types for the project edit log
//!
//! Commands are immutable records of edits. The current project state is
//! derived by replaying them in order over the project's base snapshot.
//! Their wire form is tagged by `action` and matches the layout used by
//! earlier editor versions, so persisted logs stay readable.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{ProjectState, SubtitleState, SubtitleUpdate};

/// Action tags this version knows how to apply
pub const KNOWN_ACTIONS: [&str; 4] = ["sub.add", "sub.rm", "sub.update", "pr.silent"];

/// An edit operation in a project's command log
///
/// Commands with an `action` outside [`KNOWN_ACTIONS`] decode to
/// [`Command::Unknown`], which keeps the raw JSON object and writes it
/// back unchanged when the log is saved.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Append a subtitle; the record carries its own id
    AddSubtitle { subtitle: SubtitleState },

    /// Remove the subtitle with this id
    RemoveSubtitle { id: String },

    /// Overwrite the fields present in `update`
    UpdateSubtitle { id: String, update: SubtitleUpdate },

    /// Toggle playback without sound
    SetSilent { silent: bool },

    /// Any action this version does not know; skipped on replay
    Unknown(Value),
}

/// Wire form of the known commands (decoding)
#[derive(Deserialize)]
#[serde(tag = "action")]
enum KnownCommand {
    #[serde(rename = "sub.add")]
    AddSubtitle {
        #[serde(rename = "baseState")]
        subtitle: SubtitleState,
    },
    #[serde(rename = "sub.rm")]
    RemoveSubtitle { id: String },
    #[serde(rename = "sub.update")]
    UpdateSubtitle { id: String, update: SubtitleUpdate },
    #[serde(rename = "pr.silent")]
    SetSilent { silent: bool },
}

/// Wire form of the known commands (encoding, borrowed)
#[derive(Serialize)]
#[serde(tag = "action")]
enum KnownCommandRef<'a> {
    #[serde(rename = "sub.add")]
    AddSubtitle {
        #[serde(rename = "baseState")]
        subtitle: &'a SubtitleState,
    },
    #[serde(rename = "sub.rm")]
    RemoveSubtitle { id: &'a str },
    #[serde(rename = "sub.update")]
    UpdateSubtitle {
        id: &'a str,
        update: &'a SubtitleUpdate,
    },
    #[serde(rename = "pr.silent")]
    SetSilent { silent: bool },
}

impl From<KnownCommand> for Command {
    fn from(known: KnownCommand) -> Self {
        match known {
            KnownCommand::AddSubtitle { subtitle } => Command::AddSubtitle { subtitle },
            KnownCommand::RemoveSubtitle { id } => Command::RemoveSubtitle { id },
            KnownCommand::UpdateSubtitle { id, update } => Command::UpdateSubtitle { id, update },
            KnownCommand::SetSilent { silent } => Command::SetSilent { silent },
        }
    }
}

impl Serialize for Command {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let known = match self {
            Command::AddSubtitle { subtitle } => KnownCommandRef::AddSubtitle { subtitle },
            Command::RemoveSubtitle { id } => KnownCommandRef::RemoveSubtitle { id },
            Command::UpdateSubtitle { id, update } => KnownCommandRef::UpdateSubtitle { id, update },
            Command::SetSilent { silent } => KnownCommandRef::SetSilent { silent: *silent },
            Command::Unknown(raw) => return raw.serialize(serializer),
        };
        known.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Command {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;

        let known = raw
            .get("action")
            .and_then(Value::as_str)
            .is_some_and(|action| KNOWN_ACTIONS.contains(&action));
        if !known {
            return Ok(Command::Unknown(raw));
        }

        KnownCommand::deserialize(raw)
            .map(Command::from)
            .map_err(D::Error::custom)
    }
}

impl Command {
    pub fn add_subtitle(subtitle: SubtitleState) -> Self {
        Command::AddSubtitle { subtitle }
    }

    pub fn remove_subtitle(id: impl Into<String>) -> Self {
        Command::RemoveSubtitle { id: id.into() }
    }

    pub fn update_subtitle(id: impl Into<String>, update: SubtitleUpdate) -> Self {
        Command::UpdateSubtitle {
            id: id.into(),
            update,
        }
    }

    pub fn set_silent(silent: bool) -> Self {
        Command::SetSilent { silent }
    }

    /// Wrap a command written by another editor version
    pub fn unknown(raw: Value) -> Self {
        Command::Unknown(raw)
    }

    /// Action tag, as written in the log
    pub fn kind(&self) -> &str {
        match self {
            Command::AddSubtitle { .. } => "sub.add",
            Command::RemoveSubtitle { .. } => "sub.rm",
            Command::UpdateSubtitle { .. } => "sub.update",
            Command::SetSilent { .. } => "pr.silent",
            Command::Unknown(raw) => raw
                .get("action")
                .and_then(Value::as_str)
                .unwrap_or("unknown"),
        }
    }

    /// Id of the subtitle this command targets, if any
    pub fn subtitle_id(&self) -> Option<&str> {
        match self {
            Command::AddSubtitle { subtitle } => Some(&subtitle.id),
            Command::RemoveSubtitle { id } | Command::UpdateSubtitle { id, .. } => Some(id),
            Command::SetSilent { .. } | Command::Unknown(_) => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Command::Unknown(_))
    }

    /// Whether applying this command can change the order of the sorted view
    pub fn reorders_subtitles(&self) -> bool {
        match self {
            Command::AddSubtitle { .. } | Command::RemoveSubtitle { .. } => true,
            Command::UpdateSubtitle { update, .. } => update.touches_time(),
            Command::SetSilent { .. } | Command::Unknown(_) => false,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.subtitle_id() {
            Some(id) => write!(f, "{}({})", self.kind(), id),
            None => write!(f, "{}", self.kind()),
        }
    }
}

/// Persisted form of a project: base snapshot plus command log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedProject {
    #[serde(rename = "baseState")]
    pub base_state: ProjectState,
    #[serde(default)]
    pub commands: Vec<Command>,
}

impl SavedProject {
    pub fn new(base_state: ProjectState, commands: Vec<Command>) -> Self {
        Self {
            base_state,
            commands,
        }
    }

    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
