use hive_core::{HiveError, HiveResult};
use hive_domain::{
    Column, ColumnId, Membership, Organization, OrganizationId, Project, ProjectId, Task, TaskId,
    UserId,
};
use serde::{Deserialize, Serialize};

use crate::traits::{BootstrapOutcome, ColumnRecord};

/// Tables of the remote store and the semantics of every gateway call
///
/// Both reference repositories delegate here; they differ only in where the
/// tables live between calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteState {
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub members: Vec<Membership>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl RemoteState {
    pub fn project(&self, id: ProjectId) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn projects_for(&self, organization_id: OrganizationId, limit: usize) -> Vec<Project> {
        let mut projects: Vec<_> = self
            .projects
            .iter()
            .filter(|p| p.organization_id == organization_id)
            .cloned()
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects.truncate(limit);
        projects
    }

    pub fn insert_project(&mut self, project: &Project) -> HiveResult<Project> {
        if self.projects.iter().any(|p| p.id == project.id) {
            return Err(HiveError::Persistence(format!(
                "Duplicate project id {}",
                project.id
            )));
        }
        self.projects.push(project.clone());
        Ok(project.clone())
    }

    pub fn columns_for(&self, project_id: ProjectId) -> Vec<Column> {
        let mut columns: Vec<_> = self
            .columns
            .iter()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect();
        // Stable: equal positions keep insertion order
        columns.sort_by_key(|c| c.position);
        columns
    }

    pub fn columns_with_tasks(&self, project_id: ProjectId) -> Vec<ColumnRecord> {
        self.columns_for(project_id)
            .into_iter()
            .map(|column| {
                let tasks = self
                    .tasks
                    .iter()
                    .filter(|t| t.column_id == column.id)
                    .cloned()
                    .collect();
                ColumnRecord { column, tasks }
            })
            .collect()
    }

    pub fn insert_columns(&mut self, columns: &[Column]) -> HiveResult<Vec<Column>> {
        for column in columns {
            if !self.projects.iter().any(|p| p.id == column.project_id) {
                return Err(HiveError::NotFound(format!(
                    "Project {}",
                    column.project_id
                )));
            }
            if self.columns.iter().any(|c| c.id == column.id) {
                return Err(HiveError::Persistence(format!(
                    "Duplicate column id {}",
                    column.id
                )));
            }
        }
        self.columns.extend_from_slice(columns);
        Ok(columns.to_vec())
    }

    pub fn insert_default_columns(
        &mut self,
        project_id: ProjectId,
        columns: &[Column],
    ) -> HiveResult<BootstrapOutcome> {
        if self.columns.iter().any(|c| c.project_id == project_id) {
            return Ok(BootstrapOutcome::AlreadyPresent);
        }
        if let Some(foreign) = columns.iter().find(|c| c.project_id != project_id) {
            return Err(HiveError::Validation(format!(
                "Default column {} does not belong to project {}",
                foreign.id, project_id
            )));
        }
        self.insert_columns(columns).map(BootstrapOutcome::Inserted)
    }

    /// Removes the column row and, like a cascading foreign key, its task rows
    pub fn delete_column(&mut self, id: ColumnId) {
        self.columns.retain(|c| c.id != id);
        self.tasks.retain(|t| t.column_id != id);
    }

    pub fn insert_task(&mut self, task: &Task) -> HiveResult<Task> {
        if !self.columns.iter().any(|c| c.id == task.column_id) {
            return Err(HiveError::NotFound(format!("Column {}", task.column_id)));
        }
        if self.tasks.iter().any(|t| t.id == task.id) {
            return Err(HiveError::Persistence(format!(
                "Duplicate task id {}",
                task.id
            )));
        }
        self.tasks.push(task.clone());
        Ok(task.clone())
    }

    pub fn relocate_task(
        &mut self,
        task_id: TaskId,
        column_id: ColumnId,
        position: i32,
    ) -> HiveResult<Task> {
        if !self.columns.iter().any(|c| c.id == column_id) {
            return Err(HiveError::NotFound(format!("Column {}", column_id)));
        }
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| HiveError::NotFound(format!("Task {}", task_id)))?;
        task.move_to_column(column_id, position);
        Ok(task.clone())
    }

    pub fn membership(&self, user_id: UserId) -> Option<Membership> {
        self.members.iter().find(|m| m.user_id == user_id).cloned()
    }

    pub fn organization(&self, id: OrganizationId) -> Option<Organization> {
        self.organizations.iter().find(|o| o.id == id).cloned()
    }

    pub fn create_organization_with_owner(
        &mut self,
        name: &str,
        owner: UserId,
    ) -> HiveResult<Organization> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HiveError::Validation(
                "Organization name is required".into(),
            ));
        }
        let organization = Organization::new(name.to_string());
        self.members
            .push(Membership::owner(owner, organization.id));
        self.organizations.push(organization.clone());
        Ok(organization)
    }
}
