mod commands;
pub mod error;
mod shell;
mod utils;


use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::db::{Database, Id, SqliteDatabase};
use crate::paths::resolve_db_path;
use error::CliResult;
pub use shell::{Flow, Shell};

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "Interactive todo list", long_about = None)]
pub struct Cli {
    /// Database file path (default: TODOLIST_DB env or ~/.local/share/todolist/todolist.db)
    #[arg(long)]
    pub db: Option<PathBuf>,
}

/// One line typed at the `cmd>` prompt.
#[derive(Parser, Debug)]
#[command(
    name = "cmd",
    about = "Todo List Application Commands",
    no_binary_name = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
pub enum ShellCommand {
    /// Display this help message
    #[command(visible_aliases = ["h", "?"])]
    Help,
    /// Exit the application
    #[command(visible_alias = "exit")]
    Quit,
    /// Project commands
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Todo commands
    Todos {
        #[command(subcommand)]
        command: TodoCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List all projects
    List {
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Create a new project (prompts for the title if omitted)
    Create {
        /// Project title (quote it to keep inner spacing)
        #[arg(allow_hyphen_values = true)]
        title: Vec<String>,
    },
    /// Rename a project (prompts for the title if omitted)
    Rename {
        /// Project ID
        id: Id,
        /// New project title
        #[arg(allow_hyphen_values = true)]
        title: Vec<String>,
    },
    /// Delete a project and all of its todos
    Delete {
        /// Project ID
        id: Id,
    },
}

#[derive(Subcommand, Debug)]
pub enum TodoCommands {
    /// List todos, optionally for one project
    List {
        /// Only todos of this project
        project_id: Option<Id>,
        /// Only todos of the project with this title
        #[arg(long, allow_hyphen_values = true, conflicts_with = "project_id")]
        project_title: Option<String>,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Add a todo (interactive prompts)
    Add,
    /// Show one todo
    Show {
        /// Todo ID
        id: Id,
        /// Output format (table or json)
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Edit a todo (interactive prompts, current values as defaults)
    Edit {
        /// Todo ID
        id: Id,
    },
    /// Mark a todo completed
    Complete {
        /// Todo ID
        id: Id,
    },
    /// Delete a todo
    Delete {
        /// Todo ID
        id: Id,
    },
}

/// Initialize tracing subscriber with env filter.
///
/// Logs go to stderr so they never interleave with shell output.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todolist=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Open the database and run the interactive shell on stdin/stdout.
pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let db_path = resolve_db_path(cli.db);
    info!(path = %db_path.display(), "opening database");

    let db = SqliteDatabase::open(&db_path).await?;
    db.migrate().await?;

    let stdin = std::io::stdin();
    let mut shell = Shell::new(&db, stdin.lock(), std::io::stdout());
    let result = shell.run().await;

    db.close().await;
    result
}
