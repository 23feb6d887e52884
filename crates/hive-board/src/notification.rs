use hive_core::{ErrorCategory, HiveError};
use serde::Serialize;

/// User-facing operations whose outcome is reported as a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardAction {
    LoadBoard,
    CreateTask,
    CreateColumn,
    DeleteColumn,
    MoveTask,
    CreateProject,
    ResolveOrganization,
}

impl BoardAction {
    fn failure_title(self) -> &'static str {
        match self {
            Self::LoadBoard => "Failed to load project",
            Self::CreateTask => "Failed to create task",
            Self::CreateColumn => "Failed to create column",
            Self::DeleteColumn => "Failed to remove column",
            Self::MoveTask => "Failed to move task",
            Self::CreateProject => "Failed to create project",
            Self::ResolveOrganization => "Failed to load organization",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub action: BoardAction,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(
        action: BoardAction,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            action,
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    pub fn failure(action: BoardAction, error: &HiveError) -> Self {
        let description = match (error.category(), error) {
            (ErrorCategory::Validation, HiveError::Validation(message)) => message.clone(),
            (ErrorCategory::NotFound, HiveError::NotFound(what)) => {
                format!("{} was not found", what)
            }
            _ => error.to_string(),
        };
        Self {
            action,
            title: action.failure_title().to_string(),
            description,
            severity: Severity::Destructive,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_is_shown_verbatim() {
        let n = Notification::failure(
            BoardAction::CreateTask,
            &HiveError::Validation("Task title is required".into()),
        );
        assert_eq!(n.title, "Failed to create task");
        assert_eq!(n.description, "Task title is required");
        assert!(n.is_failure());
    }

    #[test]
    fn test_not_found_and_persistence_descriptions() {
        let missing = Notification::failure(
            BoardAction::LoadBoard,
            &HiveError::NotFound("Project 42".into()),
        );
        assert_eq!(missing.description, "Project 42 was not found");

        let failed = Notification::failure(
            BoardAction::DeleteColumn,
            &HiveError::Persistence("connection reset".into()),
        );
        assert_eq!(failed.description, "Persistence error: connection reset");
        assert_eq!(failed.severity, Severity::Destructive);
    }

    #[test]
    fn test_success_is_info() {
        let n = Notification::success(
            BoardAction::CreateColumn,
            "Column created",
            "Review was added",
        );
        assert!(!n.is_failure());
    }
}
