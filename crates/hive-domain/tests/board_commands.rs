use hive_domain::commands::*;
use hive_domain::*;
use uuid::Uuid;

struct Fixture {
    tree: BoardTree,
    todo: ColumnId,
    doing: ColumnId,
    done: ColumnId,
    t1: TaskId,
    t2: TaskId,
}

fn task(column_id: ColumnId, title: &str, position: i32) -> Task {
    Task::new(
        column_id,
        Uuid::new_v4(),
        title.to_string(),
        None,
        TaskPriority::Medium,
        position,
    )
}

fn fixture() -> Fixture {
    let project = Project::new(
        Uuid::new_v4(),
        Uuid::new_v4(),
        "Launch".to_string(),
        None,
        "bg-gradient-honey".to_string(),
    );
    let todo = Column::new(project.id, "Todo".to_string(), 0);
    let doing = Column::new(project.id, "Doing".to_string(), 1);
    let done = Column::new(project.id, "Done".to_string(), 2);
    let t1 = task(todo.id, "T1", 0);
    let t2 = task(todo.id, "T2", 1);
    let (t1_id, t2_id) = (t1.id, t2.id);
    let (todo_id, doing_id, done_id) = (todo.id, doing.id, done.id);

    let tree = BoardTree::new(
        project,
        vec![
            ColumnNode::new(todo, vec![t1, t2]),
            ColumnNode::new(doing, vec![]),
            ColumnNode::new(done, vec![]),
        ],
    );
    Fixture {
        tree,
        todo: todo_id,
        doing: doing_id,
        done: done_id,
        t1: t1_id,
        t2: t2_id,
    }
}

#[test]
fn test_transfer_moves_task_to_end_of_target() {
    let mut f = fixture();
    let cmd = TransferTask {
        task_id: f.t1,
        source_column_id: f.todo,
        target_column_id: f.done,
    };

    let event = cmd.execute(&mut f.tree).unwrap();

    assert_eq!(
        event,
        Some(BoardEvent::TaskMoved {
            task_id: f.t1,
            from: f.todo,
            to: f.done,
        })
    );
    assert_eq!(f.tree.column(f.todo).unwrap().task_ids(), vec![f.t2]);
    assert_eq!(f.tree.column(f.done).unwrap().task_ids(), vec![f.t1]);
    assert_eq!(f.tree.task_count(), 2);

    let (_, moved) = f.tree.find_task(f.t1).unwrap();
    assert_eq!(moved.task.column_id, f.done);
    assert_eq!(moved.sync, SyncState::Pending { origin: f.todo });
}

#[test]
fn test_transfer_appends_after_existing_tasks() {
    let mut f = fixture();
    let existing = task(f.done, "Shipped", 7);
    let existing_id = existing.id;
    PrependTask {
        column_id: f.done,
        task: existing,
    }
    .execute(&mut f.tree)
    .unwrap();

    TransferTask {
        task_id: f.t1,
        source_column_id: f.todo,
        target_column_id: f.done,
    }
    .execute(&mut f.tree)
    .unwrap();

    let done = f.tree.column(f.done).unwrap();
    assert_eq!(done.task_ids(), vec![existing_id, f.t1]);
    assert_eq!(done.tasks[1].task.position, 8);
}

#[test]
fn test_self_drop_is_noop() {
    let mut f = fixture();
    let before = f.tree.column(f.todo).unwrap().task_ids();

    let event = TransferTask {
        task_id: f.t1,
        source_column_id: f.todo,
        target_column_id: f.todo,
    }
    .execute(&mut f.tree)
    .unwrap();

    assert!(event.is_none());
    assert_eq!(f.tree.column(f.todo).unwrap().task_ids(), before);
    assert_eq!(f.tree.task_count(), 2);
}

#[test]
fn test_transfer_of_missing_task_is_noop() {
    let mut f = fixture();

    let wrong_source = TransferTask {
        task_id: f.t1,
        source_column_id: f.doing,
        target_column_id: f.done,
    }
    .execute(&mut f.tree)
    .unwrap();
    let unknown_task = TransferTask {
        task_id: Uuid::new_v4(),
        source_column_id: f.todo,
        target_column_id: f.done,
    }
    .execute(&mut f.tree)
    .unwrap();
    let unknown_target = TransferTask {
        task_id: f.t1,
        source_column_id: f.todo,
        target_column_id: Uuid::new_v4(),
    }
    .execute(&mut f.tree)
    .unwrap();

    assert!(wrong_source.is_none());
    assert!(unknown_task.is_none());
    assert!(unknown_target.is_none());
    assert_eq!(f.tree.column(f.todo).unwrap().task_ids(), vec![f.t1, f.t2]);
    assert!(f.tree.column(f.done).unwrap().tasks.is_empty());
}

#[test]
fn test_prepend_task_goes_first() {
    let mut f = fixture();
    let new_task = task(f.todo, "T0", 2);
    let new_id = new_task.id;

    PrependTask {
        column_id: f.todo,
        task: new_task,
    }
    .execute(&mut f.tree)
    .unwrap();

    assert_eq!(
        f.tree.column(f.todo).unwrap().task_ids(),
        vec![new_id, f.t1, f.t2]
    );
}

#[test]
fn test_remove_column_only_touches_that_node() {
    let mut f = fixture();
    TransferTask {
        task_id: f.t2,
        source_column_id: f.todo,
        target_column_id: f.doing,
    }
    .execute(&mut f.tree)
    .unwrap();

    let event = RemoveColumn { column_id: f.todo }
        .execute(&mut f.tree)
        .unwrap();

    assert_eq!(event, Some(BoardEvent::ColumnRemoved { column_id: f.todo }));
    assert!(f.tree.column(f.todo).is_none());
    assert_eq!(f.tree.columns.len(), 2);
    assert_eq!(f.tree.column(f.doing).unwrap().task_ids(), vec![f.t2]);
    assert!(f.tree.find_task(f.t1).is_none());

    let again = RemoveColumn { column_id: f.todo }
        .execute(&mut f.tree)
        .unwrap();
    assert!(again.is_none());
}

#[test]
fn test_append_column_rejects_foreign_project() {
    let mut f = fixture();
    let foreign = Column::new(Uuid::new_v4(), "Elsewhere".to_string(), 3);

    let result = AppendColumn { column: foreign }.execute(&mut f.tree);

    assert!(result.is_err());
    assert_eq!(f.tree.columns.len(), 3);
}

#[test]
fn test_set_task_sync_marks_divergence() {
    let mut f = fixture();
    SetTaskSync {
        task_id: f.t1,
        sync: SyncState::Unsynced {
            origin: f.doing,
            reason: "timeout".to_string(),
        },
    }
    .execute(&mut f.tree)
    .unwrap();

    let unsynced = f.tree.unsynced_tasks();
    assert_eq!(unsynced.len(), 1);
    assert_eq!(unsynced[0].id(), f.t1);
    assert_eq!(unsynced[0].sync.origin(), Some(f.doing));
}

fn transfer(tree: &mut BoardTree, task_id: TaskId, from: ColumnId, to: ColumnId) {
    TransferTask {
        task_id,
        source_column_id: from,
        target_column_id: to,
    }
    .execute(tree)
    .unwrap();
}

fn settle(
    tree: &mut BoardTree,
    task_id: TaskId,
    column_id: ColumnId,
    failure: Option<&str>,
) -> Option<BoardEvent> {
    SettleTransfer {
        task_id,
        column_id,
        failure: failure.map(str::to_string),
    }
    .execute(tree)
    .unwrap()
}

fn sync_of_t1(f: &Fixture) -> SyncState {
    f.tree.find_task(f.t1).unwrap().1.sync.clone()
}

#[test]
fn test_chained_transfer_keeps_remote_origin() {
    let mut f = fixture();
    transfer(&mut f.tree, f.t1, f.todo, f.doing);
    settle(&mut f.tree, f.t1, f.doing, Some("timeout"));
    transfer(&mut f.tree, f.t1, f.doing, f.done);

    assert_eq!(sync_of_t1(&f), SyncState::Pending { origin: f.todo });

    settle(&mut f.tree, f.t1, f.done, Some("timeout"));
    assert_eq!(
        sync_of_t1(&f),
        SyncState::Unsynced {
            origin: f.todo,
            reason: "timeout".to_string(),
        }
    );
}

#[test]
fn test_settle_success_in_place_marks_synced() {
    let mut f = fixture();
    transfer(&mut f.tree, f.t1, f.todo, f.done);

    let event = settle(&mut f.tree, f.t1, f.done, None);

    assert_eq!(
        event,
        Some(BoardEvent::TaskSyncChanged {
            task_id: f.t1,
            sync: SyncState::Synced,
        })
    );
}

#[test]
fn test_settle_success_after_task_moved_on_tracks_remote_column() {
    let mut f = fixture();
    transfer(&mut f.tree, f.t1, f.todo, f.doing);
    transfer(&mut f.tree, f.t1, f.doing, f.done);

    settle(&mut f.tree, f.t1, f.doing, None);

    assert_eq!(sync_of_t1(&f), SyncState::Pending { origin: f.doing });
}

#[test]
fn test_late_success_of_earlier_move_flags_divergence() {
    let mut f = fixture();
    transfer(&mut f.tree, f.t1, f.todo, f.doing);
    transfer(&mut f.tree, f.t1, f.doing, f.done);
    settle(&mut f.tree, f.t1, f.done, None);
    assert_eq!(sync_of_t1(&f), SyncState::Synced);

    settle(&mut f.tree, f.t1, f.doing, None);

    let sync = sync_of_t1(&f);
    assert!(sync.is_unsynced());
    assert_eq!(sync.origin(), Some(f.doing));
}

#[test]
fn test_failure_after_task_moved_on_is_noop() {
    let mut f = fixture();
    transfer(&mut f.tree, f.t1, f.todo, f.doing);
    transfer(&mut f.tree, f.t1, f.doing, f.done);

    assert!(settle(&mut f.tree, f.t1, f.doing, Some("timeout")).is_none());
    assert_eq!(sync_of_t1(&f), SyncState::Pending { origin: f.todo });
}
