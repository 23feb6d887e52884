use crate::cli::TaskAction;
use crate::context::{reported_failure, CliContext};
use crate::handlers::open_board;
use crate::output;

pub async fn handle(ctx: &CliContext, action: TaskAction) -> anyhow::Result<()> {
    match action {
        TaskAction::Create {
            project_id,
            column_id,
            title,
            description,
            priority,
        } => {
            let screen = open_board(ctx, project_id).await?;
            let mut notifications = screen.notifications();
            match screen
                .add_task(column_id, &title, description.as_deref(), priority)
                .await
            {
                Some(task) => output::output_success(&task),
                None => return Err(reported_failure(&mut notifications)),
            }
        }
        TaskAction::Move { project_id, id, to } => {
            let mut screen = open_board(ctx, project_id).await?;
            let source = screen
                .store()
                .with_tree(|tree| tree.find_task(id).map(|(column_id, _)| column_id))
                .flatten()
                .ok_or_else(|| anyhow::anyhow!("Task not found: {}", id))?;

            let mut notifications = screen.notifications();
            screen.start_drag(id, source);
            match screen.drop_on(to).await {
                Some(outcome) => output::output_success(&outcome),
                None => return Err(reported_failure(&mut notifications)),
            }
        }
    }
    Ok(())
}
