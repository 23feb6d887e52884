use serde::{Deserialize, Serialize};

use crate::column::{Column, ColumnId};
use crate::project::{Project, ProjectId};
use crate::sync::SyncState;
use crate::task::{Task, TaskId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTask {
    pub task: Task,
    #[serde(default)]
    pub sync: SyncState,
}

impl BoardTask {
    pub fn synced(task: Task) -> Self {
        Self {
            task,
            sync: SyncState::Synced,
        }
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnNode {
    pub column: Column,
    pub tasks: Vec<BoardTask>,
}

impl ColumnNode {
    pub fn new(column: Column, tasks: Vec<Task>) -> Self {
        Self {
            column,
            tasks: tasks.into_iter().map(BoardTask::synced).collect(),
        }
    }

    pub fn id(&self) -> ColumnId {
        self.column.id
    }

    pub fn task(&self, task_id: TaskId) -> Option<&BoardTask> {
        self.tasks.iter().find(|t| t.id() == task_id)
    }

    pub fn task_ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(BoardTask::id).collect()
    }

    /// One past the highest task position in this column, or 0 when empty.
    pub fn next_task_position(&self) -> i32 {
        self.tasks
            .iter()
            .map(|t| t.task.position)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }
}

/// A project with its columns and their tasks, as rendered by a board view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardTree {
    pub project: Project,
    pub columns: Vec<ColumnNode>,
}

impl BoardTree {
    pub fn new(project: Project, columns: Vec<ColumnNode>) -> Self {
        Self { project, columns }
    }

    pub fn project_id(&self) -> ProjectId {
        self.project.id
    }

    pub fn column(&self, column_id: ColumnId) -> Option<&ColumnNode> {
        self.columns.iter().find(|c| c.id() == column_id)
    }

    pub fn column_mut(&mut self, column_id: ColumnId) -> Option<&mut ColumnNode> {
        self.columns.iter_mut().find(|c| c.id() == column_id)
    }

    /// Locates a task anywhere on the board, returning its column id too.
    pub fn find_task(&self, task_id: TaskId) -> Option<(ColumnId, &BoardTask)> {
        self.columns
            .iter()
            .find_map(|c| c.task(task_id).map(|t| (c.id(), t)))
    }

    pub fn find_task_mut(&mut self, task_id: TaskId) -> Option<&mut BoardTask> {
        self.columns
            .iter_mut()
            .flat_map(|c| c.tasks.iter_mut())
            .find(|t| t.id() == task_id)
    }

    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    pub fn next_column_position(&self) -> i32 {
        self.columns.len() as i32
    }

    pub fn next_task_position(&self, column_id: ColumnId) -> Option<i32> {
        self.column(column_id).map(ColumnNode::next_task_position)
    }

    pub fn unsynced_tasks(&self) -> Vec<&BoardTask> {
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .filter(|t| t.sync.is_unsynced())
            .collect()
    }
}

/// Change notifications published whenever the board tree changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    Loaded {
        project_id: ProjectId,
    },
    Cleared,
    TaskInserted {
        column_id: ColumnId,
        task_id: TaskId,
    },
    ColumnAppended {
        column_id: ColumnId,
    },
    ColumnRemoved {
        column_id: ColumnId,
    },
    TaskMoved {
        task_id: TaskId,
        from: ColumnId,
        to: ColumnId,
    },
    TaskSyncChanged {
        task_id: TaskId,
        sync: SyncState,
    },
}
