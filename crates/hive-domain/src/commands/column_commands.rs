use super::BoardCommand;
use crate::board::{BoardEvent, BoardTree, ColumnNode};
use crate::column::{Column, ColumnId};
use hive_core::{HiveError, HiveResult};

/// Append a persisted column to the end of the board with no tasks
pub struct AppendColumn {
    pub column: Column,
}

impl BoardCommand for AppendColumn {
    fn execute(&self, tree: &mut BoardTree) -> HiveResult<Option<BoardEvent>> {
        if self.column.project_id != tree.project_id() {
            return Err(HiveError::Validation(format!(
                "Column {} belongs to project {}, not {}",
                self.column.id,
                self.column.project_id,
                tree.project_id()
            )));
        }
        if tree.column(self.column.id).is_some() {
            return Ok(None);
        }
        tree.columns
            .push(ColumnNode::new(self.column.clone(), Vec::new()));
        Ok(Some(BoardEvent::ColumnAppended {
            column_id: self.column.id,
        }))
    }

    fn description(&self) -> String {
        format!("Append column: '{}'", self.column.title)
    }
}

/// Remove a column node; its tasks leave the tree with it
pub struct RemoveColumn {
    pub column_id: ColumnId,
}

impl BoardCommand for RemoveColumn {
    fn execute(&self, tree: &mut BoardTree) -> HiveResult<Option<BoardEvent>> {
        let before = tree.columns.len();
        tree.columns.retain(|c| c.id() != self.column_id);
        if tree.columns.len() == before {
            return Ok(None);
        }
        Ok(Some(BoardEvent::ColumnRemoved {
            column_id: self.column_id,
        }))
    }

    fn description(&self) -> String {
        format!("Remove column {}", self.column_id)
    }
}
