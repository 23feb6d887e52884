use super::BoardCommand;
use crate::board::{BoardEvent, BoardTask, BoardTree};
use crate::column::ColumnId;
use crate::sync::SyncState;
use crate::task::{Task, TaskId};
use hive_core::{HiveError, HiveResult};

/// Insert a persisted task at the front of its column
pub struct PrependTask {
    pub column_id: ColumnId,
    pub task: Task,
}

impl BoardCommand for PrependTask {
    fn execute(&self, tree: &mut BoardTree) -> HiveResult<Option<BoardEvent>> {
        let Some(column) = tree.column_mut(self.column_id) else {
            return Ok(None);
        };
        column.tasks.insert(0, BoardTask::synced(self.task.clone()));
        Ok(Some(BoardEvent::TaskInserted {
            column_id: self.column_id,
            task_id: self.task.id,
        }))
    }

    fn description(&self) -> String {
        format!("Prepend task: '{}'", self.task.title)
    }
}

/// Move a task from one column's list to the end of another's
///
/// The moved task is marked `Pending` until the caller records the outcome of
/// the remote update. Its origin is the column the remote store last placed it
/// in: the source column, or the origin of an earlier move not yet synced.
pub struct TransferTask {
    pub task_id: TaskId,
    pub source_column_id: ColumnId,
    pub target_column_id: ColumnId,
}

impl BoardCommand for TransferTask {
    fn execute(&self, tree: &mut BoardTree) -> HiveResult<Option<BoardEvent>> {
        if self.source_column_id == self.target_column_id
            || tree.column(self.target_column_id).is_none()
        {
            return Ok(None);
        }
        let Some(source) = tree.column_mut(self.source_column_id) else {
            return Ok(None);
        };
        let Some(index) = source.tasks.iter().position(|t| t.id() == self.task_id) else {
            return Ok(None);
        };
        let mut moved = source.tasks.remove(index);

        let target = tree.column_mut(self.target_column_id).ok_or_else(|| {
            HiveError::Internal(format!(
                "Column {} vanished during transfer",
                self.target_column_id
            ))
        })?;
        let position = target.next_task_position();
        moved.task.move_to_column(self.target_column_id, position);
        moved.sync = SyncState::Pending {
            origin: moved.sync.origin().unwrap_or(self.source_column_id),
        };
        target.tasks.push(moved);

        Ok(Some(BoardEvent::TaskMoved {
            task_id: self.task_id,
            from: self.source_column_id,
            to: self.target_column_id,
        }))
    }

    fn description(&self) -> String {
        format!(
            "Transfer task {} from column {} to column {}",
            self.task_id, self.source_column_id, self.target_column_id
        )
    }
}

/// Record the outcome of a remote relocation of a task to `column_id`
///
/// Remote calls may finish in any order, so the outcome is reconciled with
/// wherever the task is now rather than where it was when the call started.
pub struct SettleTransfer {
    pub task_id: TaskId,
    pub column_id: ColumnId,
    /// `None` when the remote store accepted the relocation
    pub failure: Option<String>,
}

impl SettleTransfer {
    fn settled(&self, current_column: ColumnId, sync: &SyncState) -> Option<SyncState> {
        let here = current_column == self.column_id;
        match (&self.failure, sync) {
            (None, _) if here => Some(SyncState::Synced),
            // The remote row now sits in `column_id`, behind the local placement
            (None, SyncState::Pending { .. }) => Some(SyncState::Pending {
                origin: self.column_id,
            }),
            (None, SyncState::Unsynced { reason, .. }) => Some(SyncState::Unsynced {
                origin: self.column_id,
                reason: reason.clone(),
            }),
            (None, SyncState::Synced) => Some(SyncState::Unsynced {
                origin: self.column_id,
                reason: "An earlier move finished after a later one".to_string(),
            }),
            (Some(reason), SyncState::Pending { origin } | SyncState::Unsynced { origin, .. })
                if here =>
            {
                Some(SyncState::Unsynced {
                    origin: *origin,
                    reason: reason.clone(),
                })
            }
            // A failed call left the remote row where it was; a later move owns the state
            (Some(_), _) => None,
        }
    }
}

impl BoardCommand for SettleTransfer {
    fn execute(&self, tree: &mut BoardTree) -> HiveResult<Option<BoardEvent>> {
        let Some((current_column, task)) = tree.find_task(self.task_id) else {
            return Ok(None);
        };
        let Some(sync) = self.settled(current_column, &task.sync) else {
            return Ok(None);
        };
        if sync == task.sync {
            return Ok(None);
        }
        SetTaskSync {
            task_id: self.task_id,
            sync,
        }
        .execute(tree)
    }

    fn description(&self) -> String {
        match &self.failure {
            None => format!("Settle move of task {} to {}", self.task_id, self.column_id),
            Some(_) => format!("Settle failed move of task {}", self.task_id),
        }
    }
}

/// Record whether a task's placement matches the remote store
pub struct SetTaskSync {
    pub task_id: TaskId,
    pub sync: SyncState,
}

impl BoardCommand for SetTaskSync {
    fn execute(&self, tree: &mut BoardTree) -> HiveResult<Option<BoardEvent>> {
        let Some(task) = tree.find_task_mut(self.task_id) else {
            return Ok(None);
        };
        task.sync = self.sync.clone();
        Ok(Some(BoardEvent::TaskSyncChanged {
            task_id: self.task_id,
            sync: self.sync.clone(),
        }))
    }

    fn description(&self) -> String {
        format!("Set sync state of task {}", self.task_id)
    }
}
