use async_trait::async_trait;
use hive_core::{HiveError, HiveResult};
use hive_domain::{
    Column, ColumnId, Membership, Organization, OrganizationId, Project, ProjectId, Task, TaskId,
    UserId,
};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::remote_state::RemoteState;
use crate::traits::{BootstrapOutcome, ColumnRecord, ProjectRepository};

/// Thread-safe in-memory stand-in for the remote store
///
/// Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<RwLock<RemoteState>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: RemoteState) -> Self {
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Copy of the current tables
    pub fn snapshot(&self) -> HiveResult<RemoteState> {
        Ok(self.read()?.clone())
    }

    fn read(&self) -> HiveResult<RwLockReadGuard<'_, RemoteState>> {
        self.state
            .read()
            .map_err(|_| HiveError::Internal("in-memory store lock poisoned".into()))
    }

    fn write(&self) -> HiveResult<RwLockWriteGuard<'_, RemoteState>> {
        self.state
            .write()
            .map_err(|_| HiveError::Internal("in-memory store lock poisoned".into()))
    }
}

#[async_trait]
impl ProjectRepository for InMemoryRepository {
    async fn fetch_project(&self, id: ProjectId) -> HiveResult<Option<Project>> {
        Ok(self.read()?.project(id))
    }

    async fn list_projects(
        &self,
        organization_id: OrganizationId,
        limit: usize,
    ) -> HiveResult<Vec<Project>> {
        Ok(self.read()?.projects_for(organization_id, limit))
    }

    async fn insert_project(&self, project: &Project) -> HiveResult<Project> {
        self.write()?.insert_project(project)
    }

    async fn fetch_columns(&self, project_id: ProjectId) -> HiveResult<Vec<Column>> {
        Ok(self.read()?.columns_for(project_id))
    }

    async fn fetch_columns_with_tasks(
        &self,
        project_id: ProjectId,
    ) -> HiveResult<Vec<ColumnRecord>> {
        Ok(self.read()?.columns_with_tasks(project_id))
    }

    async fn insert_columns(&self, columns: &[Column]) -> HiveResult<Vec<Column>> {
        self.write()?.insert_columns(columns)
    }

    async fn insert_default_columns(
        &self,
        project_id: ProjectId,
        columns: &[Column],
    ) -> HiveResult<BootstrapOutcome> {
        self.write()?.insert_default_columns(project_id, columns)
    }

    async fn insert_column(&self, column: &Column) -> HiveResult<Column> {
        let mut inserted = self.write()?.insert_columns(std::slice::from_ref(column))?;
        inserted
            .pop()
            .ok_or_else(|| HiveError::Internal("column insert returned no row".into()))
    }

    async fn delete_column(&self, id: ColumnId) -> HiveResult<()> {
        self.write()?.delete_column(id);
        Ok(())
    }

    async fn insert_task(&self, task: &Task) -> HiveResult<Task> {
        self.write()?.insert_task(task)
    }

    async fn relocate_task(
        &self,
        task_id: TaskId,
        column_id: ColumnId,
        position: i32,
    ) -> HiveResult<Task> {
        self.write()?.relocate_task(task_id, column_id, position)
    }

    async fn fetch_membership(&self, user_id: UserId) -> HiveResult<Option<Membership>> {
        Ok(self.read()?.membership(user_id))
    }

    async fn fetch_organization(&self, id: OrganizationId) -> HiveResult<Option<Organization>> {
        Ok(self.read()?.organization(id))
    }

    async fn create_organization_with_owner(
        &self,
        name: &str,
        owner: UserId,
    ) -> HiveResult<Organization> {
        self.write()?.create_organization_with_owner(name, owner)
    }
}
