use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hive_core::HiveResult;
use hive_domain::{
    Column, ColumnId, Membership, Organization, OrganizationId, Project, ProjectId, Task, TaskId,
    UserId,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// A column together with its tasks, as returned by the composite board read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnRecord {
    pub column: Column,
    pub tasks: Vec<Task>,
}

/// Result of a conditional default-column insert
#[derive(Debug, Clone)]
pub enum BootstrapOutcome {
    /// The project had no columns; these were inserted
    Inserted(Vec<Column>),
    /// The project already had columns; nothing was written
    AlreadyPresent,
}

impl BootstrapOutcome {
    pub fn inserted_count(&self) -> usize {
        match self {
            Self::Inserted(columns) => columns.len(),
            Self::AlreadyPresent => 0,
        }
    }
}

/// Gateway to the remote store holding organizations, projects, columns and tasks
///
/// Every call may suspend; none is retried or cancelled by callers.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn fetch_project(&self, id: ProjectId) -> HiveResult<Option<Project>>;

    /// Projects of an organization, newest first
    async fn list_projects(
        &self,
        organization_id: OrganizationId,
        limit: usize,
    ) -> HiveResult<Vec<Project>>;

    async fn insert_project(&self, project: &Project) -> HiveResult<Project>;

    /// Columns of a project ordered by position
    async fn fetch_columns(&self, project_id: ProjectId) -> HiveResult<Vec<Column>>;

    /// Columns ordered by position, each with its tasks in store order
    async fn fetch_columns_with_tasks(&self, project_id: ProjectId)
        -> HiveResult<Vec<ColumnRecord>>;

    async fn insert_columns(&self, columns: &[Column]) -> HiveResult<Vec<Column>>;

    /// Insert `columns` only if the project has none, atomically with that check
    async fn insert_default_columns(
        &self,
        project_id: ProjectId,
        columns: &[Column],
    ) -> HiveResult<BootstrapOutcome>;

    async fn insert_column(&self, column: &Column) -> HiveResult<Column>;

    async fn delete_column(&self, id: ColumnId) -> HiveResult<()>;

    async fn insert_task(&self, task: &Task) -> HiveResult<Task>;

    /// Set a task's column and position; repeating the call is harmless
    async fn relocate_task(
        &self,
        task_id: TaskId,
        column_id: ColumnId,
        position: i32,
    ) -> HiveResult<Task>;

    async fn fetch_membership(&self, user_id: UserId) -> HiveResult<Option<Membership>>;

    async fn fetch_organization(&self, id: OrganizationId) -> HiveResult<Option<Organization>>;

    /// Create an organization and make `owner` its owning member
    async fn create_organization_with_owner(
        &self,
        name: &str,
        owner: UserId,
    ) -> HiveResult<Organization>;
}

pub type SharedRepository = Arc<dyn ProjectRepository>;

/// String key-value storage backing the offline project list
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> HiveResult<Option<String>>;
    async fn set(&self, key: &str, value: String) -> HiveResult<()>;

    /// Replaces the value under `key` with `f(current)`, holding the store
    /// exclusively so concurrent updates are applied one after another.
    /// Nothing is written when `f` fails.
    async fn update(&self, key: &str, f: ValueUpdate) -> HiveResult<()>;
}

pub type ValueUpdate = Box<dyn FnOnce(Option<String>) -> HiveResult<String> + Send>;

/// Metadata written alongside file-backed data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceMetadata {
    /// Version of the persistence format
    pub format_version: u32,
    /// ID of the instance that performed the save
    pub instance_id: Uuid,
    /// When this data was saved
    pub saved_at: DateTime<Utc>,
}

impl PersistenceMetadata {
    pub fn new(format_version: u32, instance_id: Uuid) -> Self {
        Self {
            format_version,
            instance_id,
            saved_at: Utc::now(),
        }
    }
}
