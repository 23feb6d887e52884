use anyhow::Context;
use hive_board::{BoardScreen, Notification, OrganizationResolver};
use hive_core::AppConfig;
use hive_domain::{Organization, Session};
use hive_persistence::{JsonFileRepository, SharedRepository};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::broadcast;
use uuid::Uuid;

pub fn load_config(config_path: Option<&str>) -> AppConfig {
    match config_path {
        Some(path) => AppConfig::load_from(Path::new(path)),
        None => AppConfig::load(),
    }
}

/// Everything a board command needs: config, repository and the acting session
pub struct CliContext {
    pub config: AppConfig,
    pub repository: SharedRepository,
    pub organization: Organization,
    pub session: Session,
}

impl CliContext {
    pub async fn load(
        file_path: &str,
        user: Option<Uuid>,
        config: AppConfig,
    ) -> anyhow::Result<Self> {
        let user_id = user.or(config.user_id).ok_or_else(|| {
            anyhow::anyhow!("--user is required (or set HIVE_USER, or user_id in config)")
        })?;

        let repository: SharedRepository = Arc::new(JsonFileRepository::new(file_path));
        let resolver = OrganizationResolver::new(repository.clone());
        let organization = resolver
            .ensure_organization(user_id, &config.effective_organization_name(user_id))
            .await
            .context("Failed to load organization")?;
        tracing::debug!(%user_id, organization_id = %organization.id, "Resolved session");

        Ok(Self {
            session: Session::new(user_id).with_organization(organization.id),
            config,
            repository,
            organization,
        })
    }

    pub fn screen(&self) -> BoardScreen {
        BoardScreen::new(self.session, self.repository.clone(), self.config.locale)
    }
}

/// Turns the failure a [`BoardScreen`] reported into an error
pub fn reported_failure(notifications: &mut broadcast::Receiver<Notification>) -> anyhow::Error {
    let mut last = None;
    while let Ok(notification) = notifications.try_recv() {
        if notification.is_failure() {
            last = Some(notification);
        }
    }
    match last {
        Some(n) => anyhow::anyhow!("{}: {}", n.title, n.description),
        None => anyhow::anyhow!("Operation failed"),
    }
}
