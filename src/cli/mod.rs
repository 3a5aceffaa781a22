//! Command-line interface for kanby
//!
//! This module defines the CLI structure using clap derive macros. The CLI
//! is the view layer of the board: it renders projections handed back by
//! the controller and forwards user gestures to the mutation entry points.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::board::{ColumnCounts, Projection};
use crate::config::Config;
use crate::controller::{Controller, LoadState};
use crate::error::{Error, Result};
use crate::output::{emit_success, format_board, OutputOptions};
use crate::remote::HttpRemoteSource;
use crate::storage::Storage;
use crate::task::{Priority, Status, Task, TaskPatch};
use crate::theme::Theme;

/// kanby - local-first kanban board
///
/// Tasks live in a local cache and are bootstrapped from a remote endpoint
/// the first time. Board columns are todo, doing, and done; cards order by
/// priority within a column.
#[derive(Parser, Debug)]
#[command(name = "kanby")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding persisted board state
    #[arg(long, global = true, env = "KANBY_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Endpoint supplying the initial task set
    #[arg(long, global = true, env = "KANBY_API_URL")]
    pub api_url: Option<String>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the board: columns, counts, and cards ordered by priority
    Board,

    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Task description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Column: todo, doing, done
        #[arg(long, default_value = "todo")]
        status: String,

        /// Priority: high, medium, low
        #[arg(long, default_value = "medium")]
        priority: String,
    },

    /// Edit fields of an existing task
    Edit {
        /// Task id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New column: todo, doing, done
        #[arg(long)]
        status: Option<String>,

        /// New priority: high, medium, low
        #[arg(long)]
        priority: Option<String>,
    },

    /// Move a task to another column
    Mv {
        /// Task id
        id: String,

        /// Destination column: todo, doing, done
        status: String,
    },

    /// Remove a task
    Rm {
        /// Task id
        id: String,
    },

    /// Show or set the board theme (light/dark)
    Theme {
        /// Theme to set; omit to show the current one
        value: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        let cwd = std::env::current_dir()?;
        let config = Config::load_from_dir(&cwd);
        let storage = Storage::resolve(self.data_dir.clone().or_else(|| config.data_dir.clone()))?;

        // Theme has its own lifecycle and never touches the board
        if let Commands::Theme { value } = &self.command {
            return run_theme(&storage, &config, value.as_deref(), options);
        }

        let api_url = self.api_url.clone().unwrap_or_else(|| config.api_url.clone());
        let mut controller = Controller::new(storage, HttpRemoteSource::new(api_url));

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        if let LoadState::Error(reason) = runtime.block_on(controller.load()) {
            return Err(Error::Startup(reason.clone()));
        }

        match self.command {
            Commands::Board => run_board(&controller, options),
            Commands::Add {
                title,
                description,
                status,
                priority,
            } => run_add(&mut controller, &title, &description, &status, &priority, options),
            Commands::Edit {
                id,
                title,
                description,
                status,
                priority,
            } => run_edit(&mut controller, &id, title, description, status, priority, options),
            Commands::Mv { id, status } => run_edit(
                &mut controller,
                &id,
                None,
                None,
                Some(status),
                None,
                options,
            ),
            Commands::Rm { id } => run_rm(&mut controller, &id, options),
            Commands::Theme { .. } => unreachable!("handled before startup"),
        }
    }
}

/// Board output for JSON
#[derive(Debug, Serialize)]
struct BoardData {
    #[serde(flatten)]
    projection: Projection,
    counts: ColumnCounts,
}

fn run_board(controller: &Controller<HttpRemoteSource>, options: OutputOptions) -> Result<()> {
    let projection = controller.projection();
    let human = format_board(&projection);
    let data = BoardData {
        counts: projection.counts(),
        projection,
    };
    emit_success(options, "board", &data, Some(&human))
}

fn run_add(
    controller: &mut Controller<HttpRemoteSource>,
    title: &str,
    description: &str,
    status: &str,
    priority: &str,
    options: OutputOptions,
) -> Result<()> {
    let status: Status = status.parse()?;
    let priority: Priority = priority.parse()?;

    let task = controller.create_task(title, description, status, priority)?;
    let human = format!("Created task {} in {}", task.id, task.status.as_str());
    emit_task(options, "add", &task, &human)
}

#[allow(clippy::too_many_arguments)]
fn run_edit(
    controller: &mut Controller<HttpRemoteSource>,
    id: &str,
    title: Option<String>,
    description: Option<String>,
    status: Option<String>,
    priority: Option<String>,
    options: OutputOptions,
) -> Result<()> {
    let patch = TaskPatch {
        title,
        description,
        status: status.as_deref().map(str::parse).transpose()?,
        priority: priority.as_deref().map(str::parse).transpose()?,
    };

    if patch.title.is_none()
        && patch.description.is_none()
        && patch.status.is_none()
        && patch.priority.is_none()
    {
        return Err(Error::InvalidArgument(
            "nothing to update: provide --title, --description, --status, or --priority"
                .to_string(),
        ));
    }

    let task = controller.update_task(id, patch)?;
    let human = format!("Updated task {} ({})", task.id, task.status.as_str());
    emit_task(options, "edit", &task, &human)
}

fn run_rm(
    controller: &mut Controller<HttpRemoteSource>,
    id: &str,
    options: OutputOptions,
) -> Result<()> {
    controller.delete_task(id)?;

    #[derive(Serialize)]
    struct RmData<'a> {
        id: &'a str,
    }

    emit_success(
        options,
        "rm",
        &RmData { id },
        Some(&format!("Deleted task {id}")),
    )
}

fn run_theme(
    storage: &Storage,
    config: &Config,
    value: Option<&str>,
    options: OutputOptions,
) -> Result<()> {
    #[derive(Serialize)]
    struct ThemeData {
        theme: Theme,
    }

    match value {
        Some(value) => {
            let theme: Theme = value.parse()?;
            storage.save_theme(theme);
            emit_success(
                options,
                "theme",
                &ThemeData { theme },
                Some(&format!("Theme set to {theme}")),
            )
        }
        None => {
            let theme = storage.load_theme().unwrap_or(config.default_theme);
            emit_success(
                options,
                "theme",
                &ThemeData { theme },
                Some(&theme.to_string()),
            )
        }
    }
}

fn emit_task(options: OutputOptions, command: &str, task: &Task, human: &str) -> Result<()> {
    emit_success(options, command, task, Some(human))
}
