//! Data types for the subtitle editor
//!
//! Plain values shared by the project engine, the store and the tool layer.

mod command;
mod project;
mod subtitle;

pub use command::{Command, SavedProject};
pub use project::{ProjectState, ProjectSummary};
pub use subtitle::{FieldUpdate, Position, SubtitleState, SubtitleUpdate, DEFAULT_COLOR};

/// Result type for MCP operations
pub type McpResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
