pub mod column;
pub mod offline;
pub mod org;
pub mod project;
pub mod task;

use crate::context::{reported_failure, CliContext};
use hive_board::BoardScreen;
use hive_domain::ProjectId;

/// Screen with the project's board loaded, bootstrapping it if needed
pub(crate) async fn open_board(
    ctx: &CliContext,
    project_id: ProjectId,
) -> anyhow::Result<BoardScreen> {
    let screen = ctx.screen();
    let mut notifications = screen.notifications();
    if screen.open(project_id).await.is_none() {
        return Err(reported_failure(&mut notifications));
    }
    Ok(screen)
}
