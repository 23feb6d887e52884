use hive_core::{HiveError, HiveResult};
use hive_domain::commands::{AppendColumn, RemoveColumn};
use hive_domain::{Column, ColumnId, ProjectId, Session};
use hive_persistence::SharedRepository;

use crate::store::BoardStateStore;

pub struct ColumnMutationController {
    repository: SharedRepository,
    store: BoardStateStore,
}

impl ColumnMutationController {
    pub fn new(repository: SharedRepository, store: BoardStateStore) -> Self {
        Self { repository, store }
    }

    /// Persists a column after the last one and appends it to the board.
    ///
    /// Position is the current column count, so two creations racing on the
    /// same board can still share a position.
    pub async fn create_column(
        &self,
        session: &Session,
        project_id: ProjectId,
        title: &str,
    ) -> HiveResult<Column> {
        let title = title.trim();
        if title.is_empty() {
            return Err(HiveError::Validation("Column title is required".into()));
        }

        let position = self
            .store
            .with_tree(|tree| {
                (tree.project_id() == project_id).then(|| tree.next_column_position())
            })
            .flatten()
            .ok_or_else(|| {
                HiveError::NotFound(format!("Project {} is not loaded", project_id))
            })?;

        let column = Column::new(project_id, title.to_string(), position);
        let column = self.repository.insert_column(&column).await.map_err(|e| {
            tracing::warn!(
                %project_id,
                user_id = %session.user_id,
                "Failed to create column: {}",
                e
            );
            e
        })?;

        self.store.apply(&AppendColumn {
            column: column.clone(),
        })?;
        tracing::info!(
            %project_id,
            column_id = %column.id,
            position,
            "Created column '{}'",
            column.title
        );
        Ok(column)
    }

    /// Deletes a column remotely, then drops its node and tasks from the board.
    ///
    /// Tasks are not moved elsewhere; what happens to their rows is up to the store.
    pub async fn delete_column(&self, session: &Session, column_id: ColumnId) -> HiveResult<()> {
        let known = self
            .store
            .with_tree(|tree| tree.column(column_id).is_some())
            .unwrap_or(false);
        if !known {
            return Err(HiveError::NotFound(format!("Column {}", column_id)));
        }

        self.repository.delete_column(column_id).await.map_err(|e| {
            tracing::warn!(
                %column_id,
                user_id = %session.user_id,
                "Failed to delete column: {}",
                e
            );
            e
        })?;

        self.store.apply(&RemoveColumn { column_id })?;
        tracing::info!(%column_id, "Deleted column");
        Ok(())
    }
}
