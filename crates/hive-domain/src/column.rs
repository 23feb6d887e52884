use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::project::ProjectId;

pub type ColumnId = Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: ColumnId,
    pub project_id: ProjectId,
    pub title: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl Column {
    pub fn new(project_id: ProjectId, title: String, position: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            title,
            position,
            created_at: Utc::now(),
        }
    }
}
