pub mod bootstrap;
pub mod column_controller;
pub mod drag_drop;
pub mod notification;
pub mod organization;
pub mod project_controller;
pub mod screen;
pub mod store;
pub mod task_controller;

pub use bootstrap::ColumnBootstrapper;
pub use column_controller::ColumnMutationController;
pub use drag_drop::{DragDropMoveProtocol, DragPayload, DragState, DropOutcome};
pub use notification::{BoardAction, Notification, Severity};
pub use organization::OrganizationResolver;
pub use project_controller::{ProjectController, SIDEBAR_PROJECT_LIMIT};
pub use screen::BoardScreen;
pub use store::BoardStateStore;
pub use task_controller::TaskMutationController;
