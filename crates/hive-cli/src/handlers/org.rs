use crate::cli::OrgAction;
use crate::context::CliContext;
use crate::output;

pub async fn handle(ctx: &CliContext, action: OrgAction) -> anyhow::Result<()> {
    match action {
        OrgAction::Show => output::output_success(serde_json::json!({
            "organization": &ctx.organization,
            "session": &ctx.session,
        })),
    }
    Ok(())
}
