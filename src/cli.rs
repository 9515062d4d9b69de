// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::types::RenderStyle;

/// Command-line arguments for `ganttplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "ganttplan",
    version,
    about = "Schedule task plans on a dependency timeline.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `ganttplan.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GANTTPLAN_LOG`, then `[log] level`, then `info` is used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Override `[store].dir` for plan history.
    #[arg(long, value_name = "DIR", global = true)]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Resolve a plan and draw its timeline.
    Show {
        /// Plan document path, or a stored plan id.
        plan: String,

        #[arg(long, value_enum)]
        style: Option<RenderStyle>,

        /// Print the schedule view as JSON instead of drawing it.
        #[arg(long)]
        json: bool,
    },

    /// Report dangling references, duplicate names and cycles.
    ///
    /// Exits with an error if the plan contains a dependency cycle.
    Check {
        /// Plan document path, or a stored plan id.
        plan: String,
    },

    /// Edit one task and persist the rewritten plan.
    Edit(EditArgs),

    /// Parse generator output and store it in the plan history.
    Import {
        /// File holding the raw generator output (JSON, optionally fenced).
        file: PathBuf,

        /// The goal the plan was generated for.
        #[arg(long)]
        goal: String,
    },

    /// Manage stored plans.
    History {
        #[command(subcommand)]
        action: HistoryCommand,
    },

    /// Draw the built-in sample plan.
    Demo {
        #[arg(long, value_enum)]
        style: Option<RenderStyle>,
    },
}

#[derive(Debug, Clone, Args)]
pub struct EditArgs {
    /// Plan document path, or a stored plan id.
    pub plan: String,

    /// Position of the task in the plan (0-based).
    #[arg(long, required_unless_present = "task", conflicts_with = "task")]
    pub index: Option<usize>,

    /// Select the task by its current name instead of by position.
    #[arg(long, value_name = "NAME")]
    pub task: Option<String>,

    /// New task name. References to the old name are rewritten.
    #[arg(long)]
    pub name: Option<String>,

    /// New duration text, e.g. "3 days" or "1 week".
    #[arg(long, conflicts_with = "days")]
    pub duration: Option<String>,

    /// New duration as a number of days.
    #[arg(long)]
    pub days: Option<f64>,

    /// Make the task wait for this task.
    #[arg(long, value_name = "NAME", conflicts_with = "no_depends_on")]
    pub depends_on: Option<String>,

    /// Remove the task's dependency.
    #[arg(long)]
    pub no_depends_on: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum HistoryCommand {
    /// List stored plans.
    List,
    /// Draw a stored plan.
    Show { id: String },
    /// Delete a stored plan.
    Delete { id: String },
    /// Delete all stored plans.
    Clear,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
