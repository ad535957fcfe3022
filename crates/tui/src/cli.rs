use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::model::TaskStatus;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "focusboard",
    version,
    about = "A remote-friendly task board for the living-room screen.",
    after_help = "Examples:\n  focusboard              Launch the board (same as `focusboard tui`)\n  focusboard tui --demo\n  focusboard replay intents.json --format json\n  focusboard --log debug replay intents.json"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter directive (e.g. "info", "focusboard_core=debug")
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Launch the remote-style terminal board (default command)
    Tui(TuiArgs),
    /// Apply a JSON list of intents to a fresh board and print the result
    Replay(ReplayArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct TuiArgs {
    /// Start with a handful of sample tasks
    #[arg(long)]
    pub demo: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// File holding a JSON array of intents, e.g. [{"intent": "open_create"}]
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output format for the final board
    #[arg(long, value_enum, default_value_t = ReplayFormat::Text)]
    pub format: ReplayFormat,

    /// Only list tasks with this status in the text report
    #[arg(long, value_enum)]
    pub status: Option<TaskStatus>,

    /// Seed sample tasks before replaying
    #[arg(long)]
    pub demo: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum ReplayFormat {
    #[default]
    Text,
    Json,
}
