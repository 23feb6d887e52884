use crate::cli::{OfflineAction, OfflineCommand};
use crate::output;
use hive_core::AppConfig;
use hive_persistence::{LocalKeyValueStore, OfflineProjectList};
use std::path::PathBuf;

pub async fn handle(config: &AppConfig, command: OfflineCommand) -> anyhow::Result<()> {
    let path = command
        .offline_file
        .map(PathBuf::from)
        .or_else(|| config.offline_file.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("--offline-file is required (or set offline_file in config)")
        })?;
    let list = OfflineProjectList::new(LocalKeyValueStore::new(path));

    match command.action {
        OfflineAction::Add {
            title,
            description,
            color,
        } => {
            let color = color.unwrap_or_else(|| config.effective_project_color().to_string());
            let summary = list.add(&title, description.as_deref(), &color).await?;
            output::output_success(&summary);
        }
        OfflineAction::List => {
            output::output_list(list.list().await?);
        }
    }
    Ok(())
}
