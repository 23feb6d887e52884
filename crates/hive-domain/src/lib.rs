pub mod board;
pub mod column;
pub mod commands;
pub mod organization;
pub mod project;
pub mod session;
pub mod summary;
pub mod sync;
pub mod task;
pub mod template;

pub use board::{BoardEvent, BoardTask, BoardTree, ColumnNode};
pub use column::{Column, ColumnId};
pub use organization::{MemberRole, Membership, Organization, OrganizationId, UserId};
pub use project::{normalize_description, Project, ProjectId};
pub use session::Session;
pub use summary::{ProjectSummary, TaskCounts};
pub use sync::SyncState;
pub use task::{Task, TaskId, TaskPriority};
pub use template::{default_columns, DefaultColumn, DEFAULT_TEMPLATE};
