use chrono::{DateTime, Utc};
use hive_core::{HiveError, HiveResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::organization::{OrganizationId, UserId};

pub type ProjectId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: Option<String>,
    pub color: String,
    pub organization_id: OrganizationId,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(
        organization_id: OrganizationId,
        created_by: UserId,
        title: String,
        description: Option<String>,
        color: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            color,
            organization_id,
            created_by,
            created_at: Utc::now(),
        }
    }

    /// Returns the trimmed title, rejecting blank input.
    pub fn validate_title(title: &str) -> HiveResult<String> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(HiveError::Validation("Project title is required".into()));
        }
        Ok(trimmed.to_string())
    }
}

/// Normalizes free-text descriptions: blank input becomes `None`.
pub fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}
