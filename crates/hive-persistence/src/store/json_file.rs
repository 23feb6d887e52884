use async_trait::async_trait;
use hive_core::{HiveError, HiveResult};
use hive_domain::{
    Column, ColumnId, Membership, Organization, OrganizationId, Project, ProjectId, Task, TaskId,
    UserId,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::remote_state::RemoteState;
use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{BootstrapOutcome, ColumnRecord, PersistenceMetadata, ProjectRepository};

const FORMAT_VERSION: u32 = 1;

/// On-disk layout of a [`JsonFileRepository`] file
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    pub data: RemoteState,
}

impl JsonEnvelope {
    pub fn empty(instance_id: Uuid) -> Self {
        Self {
            version: FORMAT_VERSION,
            metadata: PersistenceMetadata::new(FORMAT_VERSION, instance_id),
            data: RemoteState::default(),
        }
    }

    pub fn to_json_string(&self) -> HiveResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| HiveError::Serialization(e.to_string()))
    }
}

/// Remote store kept in a single JSON file
///
/// Each write reads the file, applies the change and rewrites it atomically.
/// Calls through one repository (and its clones) are serialized; separate
/// processes sharing a file are not coordinated.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
    instance_id: Uuid,
    lock: Arc<Mutex<()>>,
}

impl JsonFileRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_instance_id(path, Uuid::new_v4())
    }

    pub fn with_instance_id(path: impl AsRef<Path>, instance_id: Uuid) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id,
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    /// Current tables; a missing file is an empty store
    pub async fn load_state(&self) -> HiveResult<RemoteState> {
        let Some(bytes) = AtomicWriter::read_optional(&self.path).await? else {
            return Ok(RemoteState::default());
        };
        let envelope: JsonEnvelope = serde_json::from_slice(&bytes)
            .map_err(|e| HiveError::Serialization(e.to_string()))?;
        if envelope.version != FORMAT_VERSION {
            return Err(HiveError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }
        Ok(envelope.data)
    }

    async fn save_state(&self, state: RemoteState) -> HiveResult<()> {
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: PersistenceMetadata::new(FORMAT_VERSION, self.instance_id),
            data: state,
        };
        let bytes = serde_json::to_vec_pretty(&envelope)
            .map_err(|e| HiveError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes).await?;
        tracing::info!("Saved {} bytes to {}", bytes.len(), self.path.display());
        Ok(())
    }

    async fn query<T, F>(&self, f: F) -> HiveResult<T>
    where
        F: FnOnce(&RemoteState) -> T + Send,
        T: Send,
    {
        let _guard = self.lock.lock().await;
        let state = self.load_state().await?;
        Ok(f(&state))
    }

    async fn mutate<T, F>(&self, f: F) -> HiveResult<T>
    where
        F: FnOnce(&mut RemoteState) -> HiveResult<T> + Send,
        T: Send,
    {
        let _guard = self.lock.lock().await;
        let mut state = self.load_state().await?;
        let output = f(&mut state)?;
        self.save_state(state).await?;
        Ok(output)
    }
}

#[async_trait]
impl ProjectRepository for JsonFileRepository {
    async fn fetch_project(&self, id: ProjectId) -> HiveResult<Option<Project>> {
        self.query(|s| s.project(id)).await
    }

    async fn list_projects(
        &self,
        organization_id: OrganizationId,
        limit: usize,
    ) -> HiveResult<Vec<Project>> {
        self.query(|s| s.projects_for(organization_id, limit)).await
    }

    async fn insert_project(&self, project: &Project) -> HiveResult<Project> {
        self.mutate(|s| s.insert_project(project)).await
    }

    async fn fetch_columns(&self, project_id: ProjectId) -> HiveResult<Vec<Column>> {
        self.query(|s| s.columns_for(project_id)).await
    }

    async fn fetch_columns_with_tasks(
        &self,
        project_id: ProjectId,
    ) -> HiveResult<Vec<ColumnRecord>> {
        self.query(|s| s.columns_with_tasks(project_id)).await
    }

    async fn insert_columns(&self, columns: &[Column]) -> HiveResult<Vec<Column>> {
        self.mutate(|s| s.insert_columns(columns)).await
    }

    async fn insert_default_columns(
        &self,
        project_id: ProjectId,
        columns: &[Column],
    ) -> HiveResult<BootstrapOutcome> {
        self.mutate(|s| s.insert_default_columns(project_id, columns))
            .await
    }

    async fn insert_column(&self, column: &Column) -> HiveResult<Column> {
        let mut inserted = self
            .mutate(|s| s.insert_columns(std::slice::from_ref(column)))
            .await?;
        inserted
            .pop()
            .ok_or_else(|| HiveError::Internal("column insert returned no row".into()))
    }

    async fn delete_column(&self, id: ColumnId) -> HiveResult<()> {
        self.mutate(|s| {
            s.delete_column(id);
            Ok(())
        })
        .await
    }

    async fn insert_task(&self, task: &Task) -> HiveResult<Task> {
        self.mutate(|s| s.insert_task(task)).await
    }

    async fn relocate_task(
        &self,
        task_id: TaskId,
        column_id: ColumnId,
        position: i32,
    ) -> HiveResult<Task> {
        self.mutate(|s| s.relocate_task(task_id, column_id, position))
            .await
    }

    async fn fetch_membership(&self, user_id: UserId) -> HiveResult<Option<Membership>> {
        self.query(|s| s.membership(user_id)).await
    }

    async fn fetch_organization(&self, id: OrganizationId) -> HiveResult<Option<Organization>> {
        self.query(|s| s.organization(id)).await
    }

    async fn create_organization_with_owner(
        &self,
        name: &str,
        owner: UserId,
    ) -> HiveResult<Organization> {
        self.mutate(|s| s.create_organization_with_owner(name, owner))
            .await
    }
}
