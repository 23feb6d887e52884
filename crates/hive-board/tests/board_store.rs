mod common;

use common::{mock_serving, BoardFixture, MockRepository};
use hive_board::{BoardStateStore, ColumnBootstrapper};
use hive_core::{HiveError, Locale};
use hive_domain::BoardEvent;
use hive_persistence::{
    BootstrapOutcome, ColumnRecord, InMemoryRepository, ProjectRepository, SharedRepository,
};
use std::sync::Arc;

fn store_over(repository: SharedRepository) -> BoardStateStore {
    let bootstrapper = ColumnBootstrapper::new(repository.clone(), Locale::Pt);
    BoardStateStore::new(repository, bootstrapper)
}

#[tokio::test]
async fn test_first_load_of_empty_project_bootstraps_default_columns() {
    let fixture = BoardFixture::new();
    let repo = Arc::new(InMemoryRepository::new());
    repo.insert_project(&fixture.project).await.unwrap();
    let store = store_over(repo.clone());

    let tree = store.load(fixture.project.id).await.unwrap();

    let titles: Vec<_> = tree.columns.iter().map(|c| c.column.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Projeto", "Status", "To Do", "Revisão", "Correção", "Aprovação"]
    );
    assert_eq!(tree.task_count(), 0);
    assert_eq!(store.project_id(), Some(fixture.project.id));

    store.load(fixture.project.id).await.unwrap();
    assert_eq!(repo.fetch_columns(fixture.project.id).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_existing_columns_are_loaded_without_bootstrap() {
    let fixture = BoardFixture::new();
    let mut repo = mock_serving(&fixture);
    repo.expect_fetch_columns().never();
    repo.expect_insert_default_columns().never();
    let store = store_over(Arc::new(repo));

    let tree = store.load(fixture.project.id).await.unwrap();

    assert_eq!(tree.columns.len(), 3);
    assert_eq!(
        tree.column(fixture.todo.id).unwrap().task_ids(),
        vec![fixture.t1.id, fixture.t2.id]
    );
}

#[tokio::test]
async fn test_missing_project_is_not_found_and_clears_the_store() {
    let fixture = BoardFixture::new();
    let store = store_over(Arc::new(fixture.in_memory()));
    store.load(fixture.project.id).await.unwrap();

    let result = store.load(uuid::Uuid::new_v4()).await;

    assert!(matches!(result, Err(HiveError::NotFound(_))));
    assert!(!store.is_loaded());
}

#[tokio::test]
async fn test_failed_board_read_leaves_store_empty() {
    let fixture = BoardFixture::new();
    let mut repo = MockRepository::new();
    let project = fixture.project.clone();
    repo.expect_fetch_project()
        .returning(move |_| Ok(Some(project.clone())));
    repo.expect_fetch_columns_with_tasks()
        .returning(|_| Err(HiveError::Persistence("connection reset".into())));
    let store = store_over(Arc::new(repo));

    let result = store.load(fixture.project.id).await;

    assert!(matches!(result, Err(HiveError::Persistence(_))));
    assert!(store.snapshot().is_none());
}

#[tokio::test]
async fn test_empty_second_read_is_accepted_after_one_bootstrap() {
    let fixture = BoardFixture::new();
    let mut repo = MockRepository::new();
    let project = fixture.project.clone();
    repo.expect_fetch_project()
        .returning(move |_| Ok(Some(project.clone())));
    repo.expect_fetch_columns_with_tasks()
        .times(2)
        .returning(|_| Ok(Vec::<ColumnRecord>::new()));
    repo.expect_fetch_columns().times(1).returning(|_| Ok(vec![]));
    repo.expect_insert_default_columns()
        .times(1)
        .returning(|_, columns| Ok(BootstrapOutcome::Inserted(columns.to_vec())));
    let store = store_over(Arc::new(repo));

    let tree = store.load(fixture.project.id).await.unwrap();

    assert!(tree.columns.is_empty());
    assert!(store.is_loaded());
}

#[tokio::test]
async fn test_subscribers_see_load_and_clear() {
    let fixture = BoardFixture::new();
    let store = store_over(Arc::new(fixture.in_memory()));
    let mut events = store.subscribe();

    store.load(fixture.project.id).await.unwrap();
    store.clear();

    assert_eq!(
        events.recv().await.unwrap(),
        BoardEvent::Loaded {
            project_id: fixture.project.id
        }
    );
    assert_eq!(events.recv().await.unwrap(), BoardEvent::Cleared);
}
