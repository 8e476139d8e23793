//! History tools

mod read_commands;
mod redo;
mod undo;

pub use read_commands::ReadCommandsTool;
pub use redo::RedoTool;
pub use undo::UndoTool;
