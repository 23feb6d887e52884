use clap::{Args, Parser, Subcommand};
use hive_board::SIDEBAR_PROJECT_LIMIT;
use hive_domain::TaskPriority;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "hive")]
#[command(about = "Project boards with columns and tasks", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the board data file (or set HIVE_FILE env var)
    #[arg(long, global = true, value_name = "FILE", env = "HIVE_FILE")]
    pub file: Option<String>,

    /// Acting user id (or set HIVE_USER env var, or user_id in config)
    #[arg(long, global = true, env = "HIVE_USER")]
    pub user: Option<Uuid>,

    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "FILE", env = "HIVE_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Organization of the acting user
    Org(OrgCommand),
    /// Project operations
    Project(ProjectCommand),
    /// Column operations
    Column(ColumnCommand),
    /// Task operations
    Task(TaskCommand),
    /// Project list kept without a data file
    Offline(OfflineCommand),
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Args)]
pub struct OrgCommand {
    #[command(subcommand)]
    pub action: OrgAction,
}

#[derive(Subcommand)]
pub enum OrgAction {
    /// Show the organization, creating it on first use
    Show,
}

#[derive(Args)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// List the most recent projects
    List {
        #[arg(long, default_value_t = SIDEBAR_PROJECT_LIMIT)]
        limit: usize,
    },
    /// Show a project's board, creating default columns if it has none
    Board {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct ColumnCommand {
    #[command(subcommand)]
    pub action: ColumnAction,
}

#[derive(Subcommand)]
pub enum ColumnAction {
    /// Add a column after the last one
    Create {
        #[arg(long)]
        project_id: Uuid,
        #[arg(long)]
        title: String,
    },
    /// Delete a column and its tasks
    Delete {
        #[arg(long)]
        project_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task at the top of a column
    Create {
        #[arg(long)]
        project_id: Uuid,
        #[arg(long)]
        column_id: Uuid,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// low, medium or high
        #[arg(long, default_value = "medium")]
        priority: TaskPriority,
    },
    /// Move a task to the end of another column
    Move {
        #[arg(long)]
        project_id: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        to: Uuid,
    },
}

#[derive(Args)]
pub struct OfflineCommand {
    /// Key-value file holding the offline list (or set HIVE_OFFLINE_FILE env var)
    #[arg(long, value_name = "FILE", env = "HIVE_OFFLINE_FILE")]
    pub offline_file: Option<String>,

    #[command(subcommand)]
    pub action: OfflineAction,
}

#[derive(Subcommand)]
pub enum OfflineAction {
    /// Add a project summary
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// List saved project summaries
    List,
}
