//! Project snapshot types

use serde::{Deserialize, Serialize};

use super::SubtitleState;

/// Full state of a project at one point of its command log
///
/// Snapshots are values: replaying commands produces a fresh snapshot and
/// never mutates the base it started from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectState {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// URL of the video the subtitles belong to
    #[serde(default)]
    pub video: String,
    /// Play the video without sound
    #[serde(default)]
    pub silent: bool,
    #[serde(default)]
    pub subtitles: Vec<SubtitleState>,
}

impl ProjectState {
    /// Create an empty project
    pub fn new(id: impl Into<String>, title: impl Into<String>, video: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            video: video.into(),
            silent: false,
            subtitles: Vec::new(),
        }
    }

    /// Position of the subtitle with this id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.subtitles.iter().position(|s| s.id == id)
    }

    /// Look up a subtitle by id
    pub fn subtitle(&self, id: &str) -> Option<&SubtitleState> {
        self.subtitles.iter().find(|s| s.id == id)
    }

    pub fn contains_subtitle(&self, id: &str) -> bool {
        self.subtitles.iter().any(|s| s.id == id)
    }
}

/// Brief project info for listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: String,
    pub title: String,
    pub video: String,
    #[serde(rename = "subtitleCount")]
    pub subtitle_count: usize,
    #[serde(rename = "commandCount")]
    pub command_count: usize,
}
