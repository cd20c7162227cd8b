use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `agl` binary.
#[derive(Debug, Parser)]
#[command(name = "agl", version, about = "Agile board - backlog and sprint planning from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Table coloring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project id (defaults to `general.default_project`)
    #[arg(short, long, global = true)]
    pub project: Option<i64>,

    /// Only show items assigned to me
    #[arg(short, long, global = true)]
    pub mine: bool,
}

impl Cli {
    /// Extract the global flags, falling back to `default_format` when
    /// `--format` is absent.
    #[must_use]
    pub fn global_flags(&self, default_format: &str) -> GlobalFlags {
        GlobalFlags {
            format: self
                .format
                .or_else(|| OutputFormat::from_config(default_format))
                .unwrap_or(OutputFormat::Table),
            color: self.color,
            quiet: self.quiet,
            project: self.project,
            mine: self.mine,
        }
    }
}
