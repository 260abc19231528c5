use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct ToolsCli {
    /// Log output format (text or JSON) for tracing events.
    #[arg(long, global = true, default_value = "text")]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub install: InstallArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl ToolsCli {
    /// The selected subcommand, `install` when none is given.
    pub fn selected(&self) -> Commands {
        self.command.unwrap_or(Commands::Install)
    }
}

#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-friendly text logs.
    Text,
    /// JSON logs for machine ingestion.
    Json,
}

#[derive(Subcommand, Copy, Clone, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Reinstall the Culebra global tool from the local source tree (default).
    Install,
}

// Global so the flags are accepted on either side of `install`.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct InstallArgs {
    /// Name of the global tool package
    #[arg(long, global = true, default_value = "CulebraLang")]
    pub tool_name: String,

    /// Local package feed the tool is installed from
    #[arg(long, global = true, default_value = "./nupkg")]
    pub package_source: String,

    /// Toolchain executable used for every step
    #[arg(long, global = true, default_value = "dotnet")]
    pub toolchain: String,

    /// Working directory for every step, defaults to the current directory
    #[arg(long, global = true)]
    pub project_dir: Option<PathBuf>,
}
