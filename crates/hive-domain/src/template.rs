use hive_core::Locale;

use crate::column::Column;
use crate::project::ProjectId;

/// Columns every project starts with, in left-to-right order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultColumn {
    Project,
    Status,
    ToDo,
    Review,
    Fix,
    Approval,
}

pub const DEFAULT_TEMPLATE: [DefaultColumn; 6] = [
    DefaultColumn::Project,
    DefaultColumn::Status,
    DefaultColumn::ToDo,
    DefaultColumn::Review,
    DefaultColumn::Fix,
    DefaultColumn::Approval,
];

impl DefaultColumn {
    pub fn title(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Project, Locale::Pt) => "Projeto",
            (Self::Project, Locale::En) => "Project",
            (Self::Status, _) => "Status",
            (Self::ToDo, _) => "To Do",
            (Self::Review, Locale::Pt) => "Revisão",
            (Self::Review, Locale::En) => "Review",
            (Self::Fix, Locale::Pt) => "Correção",
            (Self::Fix, Locale::En) => "Fix",
            (Self::Approval, Locale::Pt) => "Aprovação",
            (Self::Approval, Locale::En) => "Approval",
        }
    }
}

/// Builds the default column set for a project; each position equals its template index.
pub fn default_columns(project_id: ProjectId, locale: Locale) -> Vec<Column> {
    DEFAULT_TEMPLATE
        .iter()
        .enumerate()
        .map(|(index, column)| {
            Column::new(project_id, column.title(locale).to_string(), index as i32)
        })
        .collect()
}
