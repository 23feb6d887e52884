use crate::cli::ProjectAction;
use crate::context::{reported_failure, CliContext};
use crate::output;
use hive_board::ProjectController;

pub async fn handle(ctx: &CliContext, action: ProjectAction) -> anyhow::Result<()> {
    let controller =
        ProjectController::new(ctx.repository.clone(), ctx.config.effective_project_color());
    match action {
        ProjectAction::Create {
            title,
            description,
            color,
        } => {
            let project = controller
                .create_project(
                    &ctx.session,
                    &title,
                    description.as_deref(),
                    color.as_deref(),
                )
                .await?;
            output::output_success(&project);
        }
        ProjectAction::List { limit } => {
            let projects = controller.list_projects(&ctx.session, limit).await?;
            output::output_list(projects);
        }
        ProjectAction::Board { id } => {
            let screen = ctx.screen();
            let mut notifications = screen.notifications();
            match screen.open(id).await {
                Some(board) => output::output_success(&board),
                None => return Err(reported_failure(&mut notifications)),
            }
        }
    }
    Ok(())
}
