//! Subtitle Studio
//!
//! A command-sourced editor for subtitle projects, served over the Model
//! Context Protocol (MCP).
//!
//! # Features
//!
//! - **Command log**: every edit is a serializable command replayed over
//!   an immutable base snapshot
//! - **Undo/Redo**: undo drops the last command, redo re-applies it
//! - **Lazy snapshots**: the current state and the time-sorted subtitle
//!   view are rebuilt only when needed
//! - **Compaction**: consecutive updates of one subtitle are merged
//!   before saving
//! - **Persistence**: projects save themselves after every change
//!
//! # Modules
//!
//! - `types`: Snapshots, subtitles and commands
//! - `project`: The project engine (replay, edit, undo/redo, compaction)
//! - `store`: Key-value storage and the project repository
//! - `service`: The set of loaded projects
//! - `protocol`: MCP and JSON-RPC protocol types
//! - `tools`: MCP tool implementations
//! - `server`: MCP server implementation
//! - `utils`: Time rounding, ids and atomic file writes
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use subtitle_studio::store::{MemoryStore, ProjectRepository};
//! use subtitle_studio::tools::register_all_tools;
//! use subtitle_studio::{McpServer, ProjectService, ServerInfo};
//!
//! fn main() {
//!     let repository = Arc::new(ProjectRepository::new(Arc::new(MemoryStore::new())));
//!     let service = Arc::new(ProjectService::open(repository).unwrap());
//!     let mut server = McpServer::stdio(ServerInfo::default());
//!     register_all_tools(&mut server, service);
//!     server.run().unwrap();
//! }
//! ```

pub mod project;
pub mod protocol;
pub mod server;
pub mod service;
pub mod store;
pub mod tools;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use project::{ChangeListener, Project, ProjectError, ProjectResult, SubtitleHandle};
pub use protocol::{McpTool, ServerInfo, Tool};
pub use server::McpServer;
pub use service::ProjectService;
pub use types::{
    Command, FieldUpdate, McpResult, Position, ProjectState, ProjectSummary, SavedProject,
    SubtitleState, SubtitleUpdate,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
