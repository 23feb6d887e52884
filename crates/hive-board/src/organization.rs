use hive_core::{HiveError, HiveResult};
use hive_domain::{Organization, Session, UserId};
use hive_persistence::SharedRepository;

/// Finds the acting user's organization, creating one on first use
pub struct OrganizationResolver {
    repository: SharedRepository,
}

impl OrganizationResolver {
    pub fn new(repository: SharedRepository) -> Self {
        Self { repository }
    }

    pub async fn ensure_organization(
        &self,
        user_id: UserId,
        default_name: &str,
    ) -> HiveResult<Organization> {
        if let Some(membership) = self.repository.fetch_membership(user_id).await? {
            return self
                .repository
                .fetch_organization(membership.organization_id)
                .await?
                .ok_or_else(|| {
                    HiveError::NotFound(format!("Organization {}", membership.organization_id))
                });
        }

        let organization = self
            .repository
            .create_organization_with_owner(default_name, user_id)
            .await?;
        tracing::info!(
            %user_id,
            organization_id = %organization.id,
            "Created organization '{}'",
            organization.name
        );
        Ok(organization)
    }

    pub async fn open_session(&self, user_id: UserId, default_name: &str) -> HiveResult<Session> {
        let organization = self.ensure_organization(user_id, default_name).await?;
        Ok(Session::new(user_id).with_organization(organization.id))
    }
}
