use hive_core::HiveResult;
use hive_domain::{normalize_description, Project, Session};
use hive_persistence::SharedRepository;

/// How many projects the navigation sidebar shows
pub const SIDEBAR_PROJECT_LIMIT: usize = 10;

pub struct ProjectController {
    repository: SharedRepository,
    default_color: String,
}

impl ProjectController {
    pub fn new(repository: SharedRepository, default_color: impl Into<String>) -> Self {
        Self {
            repository,
            default_color: default_color.into(),
        }
    }

    pub async fn create_project(
        &self,
        session: &Session,
        title: &str,
        description: Option<&str>,
        color: Option<&str>,
    ) -> HiveResult<Project> {
        let title = Project::validate_title(title)?;
        let organization_id = session.require_organization()?;
        let color = color
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(&self.default_color);

        let project = Project::new(
            organization_id,
            session.user_id,
            title,
            normalize_description(description),
            color.to_string(),
        );
        let project = self.repository.insert_project(&project).await?;
        tracing::info!(project_id = %project.id, "Created project '{}'", project.title);
        Ok(project)
    }

    pub async fn list_projects(&self, session: &Session, limit: usize) -> HiveResult<Vec<Project>> {
        let organization_id = session.require_organization()?;
        self.repository.list_projects(organization_id, limit).await
    }
}
