use hive_core::{HiveError, HiveResult};
use hive_domain::commands::PrependTask;
use hive_domain::{normalize_description, ColumnId, Session, Task, TaskPriority};
use hive_persistence::SharedRepository;

use crate::store::BoardStateStore;

pub struct TaskMutationController {
    repository: SharedRepository,
    store: BoardStateStore,
}

impl TaskMutationController {
    pub fn new(repository: SharedRepository, store: BoardStateStore) -> Self {
        Self { repository, store }
    }

    /// Persists a new task and puts it at the front of its column.
    ///
    /// Validation happens before any remote call. The tree only changes once
    /// the store confirms the insert; a failed insert leaves it untouched.
    pub async fn create_task(
        &self,
        session: &Session,
        column_id: ColumnId,
        title: &str,
        description: Option<&str>,
        priority: TaskPriority,
    ) -> HiveResult<Task> {
        let title = title.trim();
        if title.is_empty() {
            return Err(HiveError::Validation("Task title is required".into()));
        }

        let position = self
            .store
            .with_tree(|tree| tree.next_task_position(column_id))
            .ok_or_else(|| HiveError::NotFound("No board is loaded".into()))?
            .ok_or_else(|| HiveError::NotFound(format!("Column {}", column_id)))?;

        let task = Task::new(
            column_id,
            session.user_id,
            title.to_string(),
            normalize_description(description),
            priority,
            position,
        );
        let task = self.repository.insert_task(&task).await.map_err(|e| {
            tracing::warn!(
                %column_id,
                user_id = %session.user_id,
                "Failed to create task: {}",
                e
            );
            e
        })?;

        self.store.apply(&PrependTask {
            column_id,
            task: task.clone(),
        })?;
        tracing::info!(%column_id, task_id = %task.id, "Created task '{}'", task.title);
        Ok(task)
    }
}
