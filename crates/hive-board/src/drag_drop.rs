use hive_core::{HiveError, HiveResult};
use hive_domain::commands::{SetTaskSync, SettleTransfer, TransferTask};
use hive_domain::{ColumnId, SyncState, TaskId};
use hive_persistence::SharedRepository;
use serde::Serialize;

use crate::store::BoardStateStore;

/// What a drag gesture carries from its source column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DragPayload {
    pub task_id: TaskId,
    pub source_column_id: ColumnId,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragPayload),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DropOutcome {
    Moved {
        task_id: TaskId,
        from: ColumnId,
        to: ColumnId,
        position: i32,
    },
    /// Dropped back onto its own column
    SelfDrop,
    /// Nothing to move: no drag in progress, or the task or target is gone
    Ignored,
}

/// Turns a drag-start/drop pair into a task transfer between columns.
///
/// The transfer is shown immediately and then persisted with a single
/// relocation call. If that call fails the task stays where it was dropped,
/// marked `Unsynced` with the column the remote store still has it in, until
/// the caller retries or calls [`Self::revert`]. Relocations of the same task
/// may complete out of order; each outcome is settled against the task's
/// current placement.
pub struct DragDropMoveProtocol {
    repository: SharedRepository,
    store: BoardStateStore,
    state: DragState,
}

impl DragDropMoveProtocol {
    pub fn new(repository: SharedRepository, store: BoardStateStore) -> Self {
        Self {
            repository,
            store,
            state: DragState::Idle,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn begin_drag(&mut self, task_id: TaskId, source_column_id: ColumnId) -> DragPayload {
        let payload = DragPayload {
            task_id,
            source_column_id,
        };
        self.state = DragState::Dragging(payload);
        payload
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }

    pub async fn drop_on(&mut self, target_column_id: ColumnId) -> HiveResult<DropOutcome> {
        let DragState::Dragging(payload) = std::mem::take(&mut self.state) else {
            return Ok(DropOutcome::Ignored);
        };
        self.transfer(payload, target_column_id).await
    }

    pub async fn transfer(
        &self,
        payload: DragPayload,
        target_column_id: ColumnId,
    ) -> HiveResult<DropOutcome> {
        let DragPayload {
            task_id,
            source_column_id,
        } = payload;
        if source_column_id == target_column_id {
            return Ok(DropOutcome::SelfDrop);
        }

        let moved = self.store.apply(&TransferTask {
            task_id,
            source_column_id,
            target_column_id,
        })?;
        if moved.is_none() {
            tracing::debug!(
                %task_id,
                %source_column_id,
                "Ignoring drop of a task no longer in its source column"
            );
            return Ok(DropOutcome::Ignored);
        }

        let position = self
            .placement(task_id)
            .map(|(_, position)| position)
            .ok_or_else(|| {
                HiveError::Internal(format!("Task {} vanished after move", task_id))
            })?;

        let result = self
            .repository
            .relocate_task(task_id, target_column_id, position)
            .await;
        let settled = self.store.apply(&SettleTransfer {
            task_id,
            column_id: target_column_id,
            failure: result.as_ref().err().map(ToString::to_string),
        });
        if let Err(e) = settled {
            tracing::debug!(%task_id, "Move outcome not recorded: {}", e);
        }

        match result {
            Ok(_) => {
                tracing::info!(
                    %task_id,
                    from = %source_column_id,
                    to = %target_column_id,
                    "Moved task"
                );
                Ok(DropOutcome::Moved {
                    task_id,
                    from: source_column_id,
                    to: target_column_id,
                    position,
                })
            }
            Err(e) => {
                tracing::warn!(%task_id, "Failed to persist task move: {}", e);
                Err(e)
            }
        }
    }

    /// Moves an unsynced task back to the column it came from, locally only.
    ///
    /// Returns `false` when the task is not unsynced or its origin column is gone.
    pub fn revert(&self, task_id: TaskId) -> HiveResult<bool> {
        let located = self
            .store
            .with_tree(|tree| {
                tree.find_task(task_id)
                    .map(|(column_id, task)| (column_id, task.sync.clone()))
            })
            .flatten();
        let Some((current, SyncState::Unsynced { origin, .. })) = located else {
            return Ok(false);
        };

        if current != origin {
            let moved = self.store.apply(&TransferTask {
                task_id,
                source_column_id: current,
                target_column_id: origin,
            })?;
            if moved.is_none() {
                return Ok(false);
            }
        }
        self.store.apply(&SetTaskSync {
            task_id,
            sync: SyncState::Synced,
        })?;
        tracing::info!(%task_id, to = %origin, "Reverted unsynced move");
        Ok(true)
    }

    fn placement(&self, task_id: TaskId) -> Option<(ColumnId, i32)> {
        self.store
            .with_tree(|tree| {
                tree.find_task(task_id)
                    .map(|(column_id, task)| (column_id, task.task.position))
            })
            .flatten()
    }
}
