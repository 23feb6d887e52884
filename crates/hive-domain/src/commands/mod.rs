use hive_core::HiveResult;

use crate::board::{BoardEvent, BoardTree};

pub mod column_commands;
pub mod task_commands;

pub use column_commands::*;
pub use task_commands::*;

/// A mutation of one node path of a loaded board tree.
///
/// Commands never re-read or replace the whole tree, so edits to sibling
/// columns and tasks made while a remote call is in flight are preserved.
pub trait BoardCommand: Send + Sync {
    /// Apply this command. `Ok(None)` means the command was a no-op.
    fn execute(&self, tree: &mut BoardTree) -> HiveResult<Option<BoardEvent>>;

    /// Human-readable description of what this command does
    fn description(&self) -> String;
}
