use crate::cli::ColumnAction;
use crate::context::{reported_failure, CliContext};
use crate::handlers::open_board;
use crate::output;

pub async fn handle(ctx: &CliContext, action: ColumnAction) -> anyhow::Result<()> {
    match action {
        ColumnAction::Create { project_id, title } => {
            let screen = open_board(ctx, project_id).await?;
            let mut notifications = screen.notifications();
            match screen.add_column(&title).await {
                Some(column) => output::output_success(&column),
                None => return Err(reported_failure(&mut notifications)),
            }
        }
        ColumnAction::Delete { project_id, id } => {
            let screen = open_board(ctx, project_id).await?;
            let mut notifications = screen.notifications();
            if !screen.remove_column(id).await {
                return Err(reported_failure(&mut notifications));
            }
            output::output_success(serde_json::json!({"deleted": id.to_string()}));
        }
    }
    Ok(())
}
