use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCounts {
    pub todo: u32,
    pub in_progress: u32,
    pub done: u32,
}

/// Flat project entry kept by the offline project list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, rename = "tasks")]
    pub task_counts: TaskCounts,
    #[serde(default = "default_member_count", rename = "members")]
    pub member_count: u32,
}

fn default_member_count() -> u32 {
    1
}

impl ProjectSummary {
    pub fn new(title: String, description: String, color: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            color,
            created_at: Utc::now(),
            task_counts: TaskCounts::default(),
            member_count: default_member_count(),
        }
    }

    pub fn total_tasks(&self) -> u32 {
        self.task_counts.todo + self.task_counts.in_progress + self.task_counts.done
    }

    /// Share of done tasks, rounded to a whole percent.
    pub fn completion_percent(&self) -> u32 {
        let total = self.total_tasks();
        if total == 0 {
            return 0;
        }
        ((self.task_counts.done as f64 / total as f64) * 100.0).round() as u32
    }
}
