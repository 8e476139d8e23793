//! Project store - persistence for base snapshots and command logs
//!
//! - `KeyValueStore`: durable string store (`MemoryStore`, `FileStore`)
//! - `ProjectRepository`: project index plus per-project command logs
//! - `StoreConfig`: data directory resolution
//!
//! # Architecture
//!
//! ```text
//! Save Path (after every edit):
//! ┌─────────┐    ┌────────────────┐    ┌─────────────────────┐    ┌──────────────┐
//! │ Project │───►│ compact log    │───►│ project.<id>.commands│───►│ move to front│
//! │ listener│    │                │    │ (atomic write)       │    │ of `projects`│
//! └─────────┘    └────────────────┘    └─────────────────────┘    └──────────────┘
//!
//! Load Path (startup):
//! ┌───────────────┐    ┌──────────────────┐    ┌────────────────┐
//! │ read projects │───►│ read each command│───►│ replay onto    │───► Ready!
//! │ index         │    │ log              │    │ base snapshot  │
//! └───────────────┘    └──────────────────┘    └────────────────┘
//! ```

mod config;
mod error;
mod kv;
mod repository;

pub use config::{StoreConfig, DATA_DIR_ENV};
pub use error::{StoreError, StoreResult};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use repository::{commands_key, ProjectRepository, PROJECTS_KEY};
