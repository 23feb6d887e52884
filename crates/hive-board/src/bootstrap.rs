use hive_core::{HiveResult, Locale};
use hive_domain::{default_columns, ProjectId};
use hive_persistence::{BootstrapOutcome, SharedRepository};

/// Gives a project its default column layout the first time it is opened
#[derive(Clone)]
pub struct ColumnBootstrapper {
    repository: SharedRepository,
    locale: Locale,
}

impl ColumnBootstrapper {
    pub fn new(repository: SharedRepository, locale: Locale) -> Self {
        Self { repository, locale }
    }

    /// Inserts the default template if the project has no columns.
    ///
    /// The insert is conditional on the remote side, so two sessions racing on
    /// the same empty project still end up with a single template.
    pub async fn ensure_default_columns(
        &self,
        project_id: ProjectId,
    ) -> HiveResult<BootstrapOutcome> {
        let existing = self.repository.fetch_columns(project_id).await?;
        if !existing.is_empty() {
            tracing::debug!(%project_id, columns = existing.len(), "Project already has columns");
            return Ok(BootstrapOutcome::AlreadyPresent);
        }

        let template = default_columns(project_id, self.locale);
        let outcome = self
            .repository
            .insert_default_columns(project_id, &template)
            .await?;
        match &outcome {
            BootstrapOutcome::Inserted(columns) => {
                tracing::info!(%project_id, columns = columns.len(), "Created default columns");
            }
            BootstrapOutcome::AlreadyPresent => {
                tracing::debug!(%project_id, "Default columns were created concurrently");
            }
        }
        Ok(outcome)
    }
}
