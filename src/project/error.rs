//! Errors raised by the project engine

use thiserror::Error;

use crate::store::StoreError;

/// Result type for project operations
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Errors that can occur while editing or loading a project
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A command or handle targets a subtitle that is not in the current state
    #[error("subtitle with id not found: {0}")]
    NotFound(String),

    /// An added subtitle reuses an id already present in the current state
    #[error("subtitle id already exists: {0}")]
    DuplicateId(String),

    /// A time or duration that has no finite rounded value
    #[error("{field} must be a finite number of seconds, got {value}")]
    InvalidTime { field: &'static str, value: f64 },

    /// A command kind this version cannot apply
    #[error("unknown command at position {0}")]
    UnknownCommand(usize),

    /// A subtitle handle was used with a different project than it came from
    #[error("handle belongs to project {handle}, not {project}")]
    ProjectMismatch { handle: String, project: String },

    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
