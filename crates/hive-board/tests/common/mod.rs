#![allow(dead_code)]

use async_trait::async_trait;
use hive_core::HiveResult;
use hive_domain::{
    Column, ColumnId, Membership, Organization, OrganizationId, Project, ProjectId, Session, Task,
    TaskId, TaskPriority, UserId,
};
use hive_persistence::{
    BootstrapOutcome, ColumnRecord, InMemoryRepository, ProjectRepository, RemoteState,
};
use mockall::mock;
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::sync::oneshot;
use uuid::Uuid;

mock! {
    pub Repository {}

    #[async_trait]
    impl ProjectRepository for Repository {
        async fn fetch_project(&self, id: ProjectId) -> HiveResult<Option<Project>>;
        async fn list_projects(
            &self,
            organization_id: OrganizationId,
            limit: usize,
        ) -> HiveResult<Vec<Project>>;
        async fn insert_project(&self, project: &Project) -> HiveResult<Project>;
        async fn fetch_columns(&self, project_id: ProjectId) -> HiveResult<Vec<Column>>;
        async fn fetch_columns_with_tasks(
            &self,
            project_id: ProjectId,
        ) -> HiveResult<Vec<ColumnRecord>>;
        async fn insert_columns(&self, columns: &[Column]) -> HiveResult<Vec<Column>>;
        async fn insert_default_columns(
            &self,
            project_id: ProjectId,
            columns: &[Column],
        ) -> HiveResult<BootstrapOutcome>;
        async fn insert_column(&self, column: &Column) -> HiveResult<Column>;
        async fn delete_column(&self, id: ColumnId) -> HiveResult<()>;
        async fn insert_task(&self, task: &Task) -> HiveResult<Task>;
        async fn relocate_task(
            &self,
            task_id: TaskId,
            column_id: ColumnId,
            position: i32,
        ) -> HiveResult<Task>;
        async fn fetch_membership(&self, user_id: UserId) -> HiveResult<Option<Membership>>;
        async fn fetch_organization(
            &self,
            id: OrganizationId,
        ) -> HiveResult<Option<Organization>>;
        async fn create_organization_with_owner(
            &self,
            name: &str,
            owner: UserId,
        ) -> HiveResult<Organization>;
    }
}

/// A project with Todo [T1, T2], Doing [] and Done []
#[derive(Debug, Clone)]
pub struct BoardFixture {
    pub session: Session,
    pub project: Project,
    pub todo: Column,
    pub doing: Column,
    pub done: Column,
    pub t1: Task,
    pub t2: Task,
}

impl BoardFixture {
    pub fn new() -> Self {
        let organization = Organization::new("Bee Team".to_string());
        let session = Session::new(Uuid::new_v4()).with_organization(organization.id);
        let project = Project::new(
            organization.id,
            session.user_id,
            "Website Redesign".to_string(),
            None,
            "bg-gradient-honey".to_string(),
        );
        let todo = Column::new(project.id, "Todo".to_string(), 0);
        let doing = Column::new(project.id, "Doing".to_string(), 1);
        let done = Column::new(project.id, "Done".to_string(), 2);
        let t1 = task(todo.id, session.user_id, "T1", 0);
        let t2 = task(todo.id, session.user_id, "T2", 1);
        Self {
            session,
            project,
            todo,
            doing,
            done,
            t1,
            t2,
        }
    }

    pub fn records(&self) -> Vec<ColumnRecord> {
        vec![
            ColumnRecord {
                column: self.todo.clone(),
                tasks: vec![self.t1.clone(), self.t2.clone()],
            },
            ColumnRecord {
                column: self.doing.clone(),
                tasks: vec![],
            },
            ColumnRecord {
                column: self.done.clone(),
                tasks: vec![],
            },
        ]
    }

    /// Remote tables holding exactly this board
    pub fn remote_state(&self) -> RemoteState {
        RemoteState {
            organizations: vec![],
            members: vec![],
            projects: vec![self.project.clone()],
            columns: vec![self.todo.clone(), self.doing.clone(), self.done.clone()],
            tasks: vec![self.t1.clone(), self.t2.clone()],
        }
    }

    pub fn in_memory(&self) -> InMemoryRepository {
        InMemoryRepository::with_state(self.remote_state())
    }
}

pub fn task(column_id: ColumnId, created_by: UserId, title: &str, position: i32) -> Task {
    Task::new(
        column_id,
        created_by,
        title.to_string(),
        None,
        TaskPriority::Medium,
        position,
    )
}

/// Mock that serves the fixture board on load
pub fn mock_serving(fixture: &BoardFixture) -> MockRepository {
    let mut repo = MockRepository::new();
    let project = fixture.project.clone();
    repo.expect_fetch_project()
        .returning(move |_| Ok(Some(project.clone())));
    let records = fixture.records();
    repo.expect_fetch_columns_with_tasks()
        .returning(move |_| Ok(records.clone()));
    repo
}

/// In-memory store whose task relocations can be held back until released
pub struct GatedRepository {
    inner: InMemoryRepository,
    gates: Mutex<VecDeque<Option<oneshot::Receiver<()>>>>,
}

impl GatedRepository {
    pub fn new(inner: InMemoryRepository) -> Self {
        Self {
            inner,
            gates: Mutex::new(VecDeque::new()),
        }
    }

    /// The next relocation waits until the sender fires or is dropped
    pub fn hold_next_relocation(&self) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().push_back(Some(rx));
        tx
    }
}

#[async_trait]
impl ProjectRepository for GatedRepository {
    async fn fetch_project(&self, id: ProjectId) -> HiveResult<Option<Project>> {
        self.inner.fetch_project(id).await
    }

    async fn list_projects(
        &self,
        organization_id: OrganizationId,
        limit: usize,
    ) -> HiveResult<Vec<Project>> {
        self.inner.list_projects(organization_id, limit).await
    }

    async fn insert_project(&self, project: &Project) -> HiveResult<Project> {
        self.inner.insert_project(project).await
    }

    async fn fetch_columns(&self, project_id: ProjectId) -> HiveResult<Vec<Column>> {
        self.inner.fetch_columns(project_id).await
    }

    async fn fetch_columns_with_tasks(
        &self,
        project_id: ProjectId,
    ) -> HiveResult<Vec<ColumnRecord>> {
        self.inner.fetch_columns_with_tasks(project_id).await
    }

    async fn insert_columns(&self, columns: &[Column]) -> HiveResult<Vec<Column>> {
        self.inner.insert_columns(columns).await
    }

    async fn insert_default_columns(
        &self,
        project_id: ProjectId,
        columns: &[Column],
    ) -> HiveResult<BootstrapOutcome> {
        self.inner.insert_default_columns(project_id, columns).await
    }

    async fn insert_column(&self, column: &Column) -> HiveResult<Column> {
        self.inner.insert_column(column).await
    }

    async fn delete_column(&self, id: ColumnId) -> HiveResult<()> {
        self.inner.delete_column(id).await
    }

    async fn insert_task(&self, task: &Task) -> HiveResult<Task> {
        self.inner.insert_task(task).await
    }

    async fn relocate_task(
        &self,
        task_id: TaskId,
        column_id: ColumnId,
        position: i32,
    ) -> HiveResult<Task> {
        let gate = self.gates.lock().unwrap().pop_front().flatten();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner.relocate_task(task_id, column_id, position).await
    }

    async fn fetch_membership(&self, user_id: UserId) -> HiveResult<Option<Membership>> {
        self.inner.fetch_membership(user_id).await
    }

    async fn fetch_organization(&self, id: OrganizationId) -> HiveResult<Option<Organization>> {
        self.inner.fetch_organization(id).await
    }

    async fn create_organization_with_owner(
        &self,
        name: &str,
        owner: UserId,
    ) -> HiveResult<Organization> {
        self.inner.create_organization_with_owner(name, owner).await
    }
}
