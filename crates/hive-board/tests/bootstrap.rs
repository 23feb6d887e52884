mod common;

use common::{BoardFixture, MockRepository};
use hive_board::ColumnBootstrapper;
use hive_core::{HiveError, Locale};
use hive_persistence::{BootstrapOutcome, InMemoryRepository, ProjectRepository};
use std::sync::Arc;

#[tokio::test]
async fn test_bootstrap_is_idempotent() {
    let fixture = BoardFixture::new();
    let repo = Arc::new(InMemoryRepository::new());
    repo.insert_project(&fixture.project).await.unwrap();
    let bootstrapper = ColumnBootstrapper::new(repo.clone(), Locale::En);

    let first = bootstrapper
        .ensure_default_columns(fixture.project.id)
        .await
        .unwrap();
    let second = bootstrapper
        .ensure_default_columns(fixture.project.id)
        .await
        .unwrap();

    assert_eq!(first.inserted_count(), 6);
    assert!(matches!(second, BootstrapOutcome::AlreadyPresent));

    let columns = repo.fetch_columns(fixture.project.id).await.unwrap();
    let titles: Vec<_> = columns.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Project", "Status", "To Do", "Review", "Fix", "Approval"]
    );
    let positions: Vec<_> = columns.iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![0, 1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_concurrent_bootstraps_write_one_template() {
    let fixture = BoardFixture::new();
    let repo = Arc::new(InMemoryRepository::new());
    repo.insert_project(&fixture.project).await.unwrap();

    let attempts = (0..3).map(|_| {
        let bootstrapper = ColumnBootstrapper::new(repo.clone(), Locale::Pt);
        let project_id = fixture.project.id;
        tokio::spawn(async move { bootstrapper.ensure_default_columns(project_id).await })
    });
    let outcomes = futures::future::join_all(attempts).await;

    let inserted: usize = outcomes
        .into_iter()
        .map(|joined| joined.unwrap().unwrap().inserted_count())
        .sum();
    assert_eq!(inserted, 6);
    assert_eq!(repo.fetch_columns(fixture.project.id).await.unwrap().len(), 6);
}

#[tokio::test]
async fn test_insert_failure_is_propagated() {
    let fixture = BoardFixture::new();
    let mut repo = MockRepository::new();
    repo.expect_fetch_columns().returning(|_| Ok(vec![]));
    repo.expect_insert_default_columns()
        .returning(|_, _| Err(HiveError::Persistence("permission denied".into())));
    let bootstrapper = ColumnBootstrapper::new(Arc::new(repo), Locale::Pt);

    let result = bootstrapper.ensure_default_columns(fixture.project.id).await;

    assert!(matches!(result, Err(HiveError::Persistence(_))));
}
