use hive_core::{HiveError, HiveResult, Locale};
use hive_domain::{BoardTree, Column, ColumnId, ProjectId, Session, Task, TaskId, TaskPriority};
use hive_persistence::SharedRepository;
use tokio::sync::broadcast;

use crate::bootstrap::ColumnBootstrapper;
use crate::column_controller::ColumnMutationController;
use crate::drag_drop::{DragDropMoveProtocol, DropOutcome};
use crate::notification::{BoardAction, Notification};
use crate::store::BoardStateStore;
use crate::task_controller::TaskMutationController;

const NOTIFICATION_BUFFER: usize = 32;

/// One open board: the store plus the controllers that mutate it.
///
/// Every operation reports its outcome on the notification channel; failures
/// come back as `None`/`false` after being reported.
pub struct BoardScreen {
    session: Session,
    store: BoardStateStore,
    tasks: TaskMutationController,
    columns: ColumnMutationController,
    drag: DragDropMoveProtocol,
    notifications: broadcast::Sender<Notification>,
}

impl BoardScreen {
    pub fn new(session: Session, repository: SharedRepository, locale: Locale) -> Self {
        let bootstrapper = ColumnBootstrapper::new(repository.clone(), locale);
        let store = BoardStateStore::new(repository.clone(), bootstrapper);
        let (notifications, _) = broadcast::channel(NOTIFICATION_BUFFER);
        Self {
            session,
            tasks: TaskMutationController::new(repository.clone(), store.clone()),
            columns: ColumnMutationController::new(repository.clone(), store.clone()),
            drag: DragDropMoveProtocol::new(repository, store.clone()),
            store,
            notifications,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &BoardStateStore {
        &self.store
    }

    pub fn notifications(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    pub async fn open(&self, project_id: ProjectId) -> Option<BoardTree> {
        let result = self.store.load(project_id).await;
        self.report_failure(BoardAction::LoadBoard, result)
    }

    pub async fn add_task(
        &self,
        column_id: ColumnId,
        title: &str,
        description: Option<&str>,
        priority: TaskPriority,
    ) -> Option<Task> {
        let result = self
            .tasks
            .create_task(&self.session, column_id, title, description, priority)
            .await;
        let task = self.report_failure(BoardAction::CreateTask, result)?;
        self.notify(Notification::success(
            BoardAction::CreateTask,
            "Task created",
            format!("{} was added", task.title),
        ));
        Some(task)
    }

    /// Adds a column to the loaded board
    pub async fn add_column(&self, title: &str) -> Option<Column> {
        let result = match self.store.project_id() {
            Some(project_id) => {
                self.columns
                    .create_column(&self.session, project_id, title)
                    .await
            }
            None => Err(HiveError::NotFound("No board is loaded".into())),
        };
        let column = self.report_failure(BoardAction::CreateColumn, result)?;
        self.notify(Notification::success(
            BoardAction::CreateColumn,
            "Column created",
            format!("{} was added", column.title),
        ));
        Some(column)
    }

    pub async fn remove_column(&self, column_id: ColumnId) -> bool {
        let title = self
            .store
            .with_tree(|tree| tree.column(column_id).map(|node| node.column.title.clone()))
            .flatten();
        let result = self.columns.delete_column(&self.session, column_id).await;
        if self.report_failure(BoardAction::DeleteColumn, result).is_none() {
            return false;
        }
        self.notify(Notification::success(
            BoardAction::DeleteColumn,
            "Column removed",
            format!("{} was removed", title.unwrap_or_default()),
        ));
        true
    }

    pub fn start_drag(&mut self, task_id: TaskId, source_column_id: ColumnId) {
        self.drag.begin_drag(task_id, source_column_id);
    }

    pub async fn drop_on(&mut self, target_column_id: ColumnId) -> Option<DropOutcome> {
        let result = self.drag.drop_on(target_column_id).await;
        let outcome = self.report_failure(BoardAction::MoveTask, result)?;
        if let DropOutcome::Moved { task_id, to, .. } = outcome {
            let description = self
                .store
                .with_tree(|tree| {
                    let (_, task) = tree.find_task(task_id)?;
                    let column = tree.column(to)?;
                    Some(format!("{} moved to {}", task.task.title, column.column.title))
                })
                .flatten()
                .unwrap_or_default();
            self.notify(Notification::success(
                BoardAction::MoveTask,
                "Task moved",
                description,
            ));
        }
        Some(outcome)
    }

    /// Puts an unsynced task back where it was dragged from
    pub fn revert_move(&self, task_id: TaskId) -> bool {
        let result = self.drag.revert(task_id);
        self.report_failure(BoardAction::MoveTask, result)
            .unwrap_or(false)
    }

    fn report_failure<T>(&self, action: BoardAction, result: HiveResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.notify(Notification::failure(action, &e));
                None
            }
        }
    }

    fn notify(&self, notification: Notification) {
        // Nobody listening is fine
        let _ = self.notifications.send(notification);
    }
}
