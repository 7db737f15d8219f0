use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;
use crate::task::TaskKind;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "format-guard")]
#[command(
    author,
    version,
    about = "Commit gate that keeps formatting-only changes apart from functional ones"
)]
#[command(long_about = "Classifies staged changes as functional or cosmetic (whitespace-only, or \
    reproducible by an approved formatter) and checks them against the commit message tag \
    `<ISSUE-ID> [Whitespace]` / `<ISSUE-ID> [Format]`.\n\n\
    Exit codes:\n  \
    0 - All tasks passed or were skipped\n  \
    1 - A task failed\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check staged changes against the commit message
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Git hook management
    Hook(HookArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File holding the commit message (the commit-msg hook argument)
    #[arg(conflicts_with = "message")]
    pub message_file: Option<PathBuf>,

    /// Commit message given inline
    #[arg(short, long)]
    pub message: Option<String>,

    /// Run only this task [possible values: whitespace, formatting]
    #[arg(short, long)]
    pub task: Option<TaskKind>,

    /// Files to check instead of the staged file list
    #[arg(long, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".format-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct HookArgs {
    #[command(subcommand)]
    pub action: HookAction,
}

#[derive(Subcommand, Debug)]
pub enum HookAction {
    /// Install a commit-msg hook that runs `format-guard check`
    Install {
        /// Replace an existing commit-msg hook
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and settings
    Validate {
        /// Path to configuration file (default: discovered config)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format [possible values: text, json]
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
