//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::plan::Vibe;

/// Panic Planner - AI study-plan generator
#[derive(Parser)]
#[command(
    name = "pplan",
    about = "AI study-plan generator for CS students with 100 backlog videos and 0 motivation",
    version,
    after_help = "Logs are written to: ~/.local/share/panic-planner/logs/panic-planner.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Launch the interactive TUI (the default)
    Tui,

    /// Generate one plan without the TUI and print it as Markdown
    Generate {
        /// Current semester or year
        #[arg(long)]
        semester: String,

        /// Subjects and backlogs
        #[arg(long)]
        subjects: String,

        /// Upcoming exam dates
        #[arg(long)]
        exams: String,

        /// Daily free time
        #[arg(long = "free-time")]
        free_time: String,

        /// What's the dream?
        #[arg(long)]
        goals: String,

        /// Coach personality (chill, hardcore, roast)
        #[arg(long, default_value = "chill")]
        vibe: Vibe,

        /// Write the Markdown to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show application logs
    Logs {
        /// Follow log output (like tail -f)
        #[arg(short, long)]
        follow: bool,

        /// Number of lines to show
        #[arg(short, long, default_value = "50")]
        lines: usize,
    },
}

/// Path of the application log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("panic-planner")
        .join("logs")
        .join("panic-planner.log")
}
