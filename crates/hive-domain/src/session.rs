use hive_core::{HiveError, HiveResult};
use serde::{Deserialize, Serialize};

use crate::organization::{OrganizationId, UserId};

/// The acting identity passed explicitly to every board operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub organization_id: Option<OrganizationId>,
}

impl Session {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            organization_id: None,
        }
    }

    pub fn with_organization(mut self, organization_id: OrganizationId) -> Self {
        self.organization_id = Some(organization_id);
        self
    }

    pub fn require_organization(&self) -> HiveResult<OrganizationId> {
        self.organization_id.ok_or_else(|| {
            HiveError::Validation(format!("User {} has no organization", self.user_id))
        })
    }
}
