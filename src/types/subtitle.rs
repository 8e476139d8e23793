//! Subtitle record types

use serde::{Deserialize, Serialize};

use crate::utils::round_time;

/// Default text color for new subtitles
pub const DEFAULT_COLOR: &str = "#ffffff";

/// Screen anchor of a subtitle (`x`: left/center/right, `y`: top/center/bottom)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: String,
    pub y: String,
}

impl Position {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new("center", "center")
    }
}

/// A single timed subtitle inside a project
///
/// Missing fields decode to the editor defaults, so partially written
/// records from older logs still produce a complete subtitle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleState {
    pub id: String,
    /// Start time in seconds
    pub time: f64,
    /// Display duration in seconds
    pub duration: f64,
    pub text: String,
    pub color: String,
    pub position: Position,
}

impl SubtitleState {
    /// Create a subtitle with default values
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Create a subtitle with timing and text
    pub fn with_text(id: impl Into<String>, time: f64, duration: f64, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time,
            duration,
            text: text.into(),
            ..Default::default()
        }
    }

    /// Round `time` and `duration` to one decimal
    pub fn normalize(&mut self) {
        self.time = round_time(self.time);
        self.duration = round_time(self.duration);
    }

    /// Return a normalized copy
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Overwrite the fields present in `update`
    pub fn apply(&mut self, update: &SubtitleUpdate) {
        if let Some(time) = update.time {
            self.time = round_time(time);
        }
        if let Some(duration) = update.duration {
            self.duration = round_time(duration);
        }
        if let Some(text) = &update.text {
            self.text = text.clone();
        }
        if let Some(color) = &update.color {
            self.color = color.clone();
        }
        if let Some(position) = &update.position {
            self.position = position.clone();
        }
    }
}

impl Default for SubtitleState {
    fn default() -> Self {
        Self {
            id: String::new(),
            time: 0.0,
            duration: 0.0,
            text: String::new(),
            color: DEFAULT_COLOR.to_string(),
            position: Position::default(),
        }
    }
}

/// Partial field set carried by an update command
///
/// Only the changed fields are present. An empty update is legal and
/// changes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubtitleUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl SubtitleUpdate {
    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        self.time.is_none()
            && self.duration.is_none()
            && self.text.is_none()
            && self.color.is_none()
            && self.position.is_none()
    }

    /// True if this update moves the subtitle in time
    pub fn touches_time(&self) -> bool {
        self.time.is_some()
    }

    /// Fold a later update into this one; the later value wins per field
    pub fn merge(&mut self, later: &SubtitleUpdate) {
        if later.time.is_some() {
            self.time = later.time;
        }
        if later.duration.is_some() {
            self.duration = later.duration;
        }
        if later.text.is_some() {
            self.text.clone_from(&later.text);
        }
        if later.color.is_some() {
            self.color.clone_from(&later.color);
        }
        if later.position.is_some() {
            self.position.clone_from(&later.position);
        }
    }
}

/// A single field value written through a subtitle handle
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    Time(f64),
    Duration(f64),
    Text(String),
    Color(String),
    Position(Position),
}

impl FieldUpdate {
    /// Name of the field as it appears in the update payload
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldUpdate::Time(_) => "time",
            FieldUpdate::Duration(_) => "duration",
            FieldUpdate::Text(_) => "text",
            FieldUpdate::Color(_) => "color",
            FieldUpdate::Position(_) => "position",
        }
    }
}

impl From<FieldUpdate> for SubtitleUpdate {
    fn from(field: FieldUpdate) -> Self {
        let mut update = SubtitleUpdate::default();
        match field {
            FieldUpdate::Time(v) => update.time = Some(round_time(v)),
            FieldUpdate::Duration(v) => update.duration = Some(round_time(v)),
            FieldUpdate::Text(v) => update.text = Some(v),
            FieldUpdate::Color(v) => update.color = Some(v),
            FieldUpdate::Position(v) => update.position = Some(v),
        }
        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_take_defaults() {
        let sub: SubtitleState = serde_json::from_str(r#"{"id":"s1","text":"hi"}"#).unwrap();
        assert_eq!(sub.id, "s1");
        assert_eq!(sub.text, "hi");
        assert_eq!(sub.color, "#ffffff");
        assert_eq!(sub.position, Position::new("center", "center"));
        assert_eq!(sub.time, 0.0);
    }

    #[test]
    fn test_apply_only_present_fields() {
        let mut sub = SubtitleState::with_text("s1", 1.0, 2.0, "hi");
        sub.apply(&SubtitleUpdate {
            text: Some("hello".to_string()),
            ..Default::default()
        });

        assert_eq!(sub.text, "hello");
        assert_eq!(sub.time, 1.0);
        assert_eq!(sub.duration, 2.0);
    }

    #[test]
    fn test_apply_rounds_time_fields() {
        let mut sub = SubtitleState::new("s1");
        sub.apply(&SubtitleUpdate {
            time: Some(3.14159),
            duration: Some(0.96),
            ..Default::default()
        });

        assert_eq!(sub.time, 3.1);
        assert_eq!(sub.duration, 1.0);
    }

    #[test]
    fn test_merge_later_wins() {
        let mut first = SubtitleUpdate {
            time: Some(5.0),
            color: Some("#ff0000".to_string()),
            ..Default::default()
        };
        let later = SubtitleUpdate {
            time: Some(5.5),
            text: Some("x".to_string()),
            ..Default::default()
        };

        first.merge(&later);

        assert_eq!(first.time, Some(5.5));
        assert_eq!(first.text.as_deref(), Some("x"));
        assert_eq!(first.color.as_deref(), Some("#ff0000"));
        assert!(first.duration.is_none());
    }

    #[test]
    fn test_update_serialization_skips_absent_fields() {
        let update: SubtitleUpdate = FieldUpdate::Text("hello".to_string()).into();
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"text":"hello"}"#);
        assert!(!update.is_empty());
        assert!(SubtitleUpdate::default().is_empty());
    }

    #[test]
    fn test_field_update_rounds_time() {
        let update: SubtitleUpdate = FieldUpdate::Time(7.26).into();
        assert_eq!(update.time, Some(7.3));
        assert!(update.touches_time());
    }
}
