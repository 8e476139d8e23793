//! Utility functions and helpers
//!
//! Atomic file writes and time helpers.

pub mod atomic;
pub mod time;

pub use atomic::{atomic_write, cleanup_temp_files};
pub use time::{current_millis, format_start, round_time, unique_millis_id};
