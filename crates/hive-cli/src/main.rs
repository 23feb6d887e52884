mod cli;
mod context;
mod handlers;
mod output;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("HIVE_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        output::output_error(&format!("{:#}", e));
    }
    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = context::load_config(cli.config.as_deref());

    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "hive", &mut std::io::stdout());
        }
        Commands::Offline(offline_cmd) => {
            handlers::offline::handle(&config, offline_cmd).await?;
        }
        cmd => {
            let file_path = cli
                .file
                .ok_or_else(|| anyhow::anyhow!("--file is required for board operations"))?;
            let ctx = CliContext::load(&file_path, cli.user, config).await?;

            match cmd {
                Commands::Org(org_cmd) => handlers::org::handle(&ctx, org_cmd.action).await?,
                Commands::Project(project_cmd) => {
                    handlers::project::handle(&ctx, project_cmd.action).await?;
                }
                Commands::Column(column_cmd) => {
                    handlers::column::handle(&ctx, column_cmd.action).await?;
                }
                Commands::Task(task_cmd) => {
                    handlers::task::handle(&ctx, task_cmd.action).await?;
                }
                Commands::Completions { .. } | Commands::Offline(_) => {}
            }
        }
    }
    Ok(())
}
