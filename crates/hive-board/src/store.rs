use hive_core::{HiveError, HiveResult};
use hive_domain::commands::BoardCommand;
use hive_domain::{BoardEvent, BoardTree, ColumnNode, ProjectId};
use hive_persistence::SharedRepository;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::sync::broadcast;

use crate::bootstrap::ColumnBootstrapper;

const EVENT_BUFFER: usize = 64;

/// In-memory board tree that views render from
///
/// Clones are handles to the same tree. Only the controllers in this crate
/// mutate it; every change is published to subscribers as a [`BoardEvent`].
#[derive(Clone)]
pub struct BoardStateStore {
    repository: SharedRepository,
    bootstrapper: ColumnBootstrapper,
    tree: Arc<RwLock<Option<BoardTree>>>,
    events: broadcast::Sender<BoardEvent>,
}

impl BoardStateStore {
    pub fn new(repository: SharedRepository, bootstrapper: ColumnBootstrapper) -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            repository,
            bootstrapper,
            tree: Arc::new(RwLock::new(None)),
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<BoardEvent> {
        self.events.subscribe()
    }

    pub fn snapshot(&self) -> Option<BoardTree> {
        self.read().clone()
    }

    pub fn with_tree<T>(&self, f: impl FnOnce(&BoardTree) -> T) -> Option<T> {
        self.read().as_ref().map(f)
    }

    pub fn project_id(&self) -> Option<ProjectId> {
        self.with_tree(BoardTree::project_id)
    }

    pub fn is_loaded(&self) -> bool {
        self.read().is_some()
    }

    /// Fetches a project's board and makes it the current tree.
    ///
    /// A project with no columns is bootstrapped once and re-read once; an
    /// empty second read is kept as is. On any failure the store is left
    /// empty rather than holding a partial tree.
    pub async fn load(&self, project_id: ProjectId) -> HiveResult<BoardTree> {
        match self.fetch_tree(project_id).await {
            Ok(tree) => {
                *self.write() = Some(tree.clone());
                tracing::debug!(
                    %project_id,
                    columns = tree.columns.len(),
                    tasks = tree.task_count(),
                    "Loaded board"
                );
                self.publish(BoardEvent::Loaded { project_id });
                Ok(tree)
            }
            Err(e) => {
                tracing::warn!(%project_id, "Failed to load board: {}", e);
                self.clear();
                Err(e)
            }
        }
    }

    pub fn clear(&self) {
        let previous = self.write().take();
        if previous.is_some() {
            self.publish(BoardEvent::Cleared);
        }
    }

    async fn fetch_tree(&self, project_id: ProjectId) -> HiveResult<BoardTree> {
        let project = self
            .repository
            .fetch_project(project_id)
            .await?
            .ok_or_else(|| HiveError::NotFound(format!("Project {}", project_id)))?;

        let mut records = self.repository.fetch_columns_with_tasks(project_id).await?;
        if records.is_empty() {
            self.bootstrapper.ensure_default_columns(project_id).await?;
            records = self.repository.fetch_columns_with_tasks(project_id).await?;
            if records.is_empty() {
                tracing::warn!(%project_id, "Board still has no columns after bootstrap");
            }
        }

        let columns = records
            .into_iter()
            .map(|record| ColumnNode::new(record.column, record.tasks))
            .collect();
        Ok(BoardTree::new(project, columns))
    }

    /// Applies a command to the loaded tree and publishes its event.
    pub(crate) fn apply(&self, command: &dyn BoardCommand) -> HiveResult<Option<BoardEvent>> {
        let event = {
            let mut guard = self.write();
            let tree = guard
                .as_mut()
                .ok_or_else(|| HiveError::NotFound("No board is loaded".into()))?;
            command.execute(tree)?
        };
        match &event {
            Some(event) => self.publish(event.clone()),
            None => tracing::debug!("No-op: {}", command.description()),
        }
        Ok(event)
    }

    fn publish(&self, event: BoardEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<BoardTree>> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<BoardTree>> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }
}
