use anyhow::Result;
use clap::Parser;
use culebra_dev_tools::cli::{Commands, LogFormat, ToolsCli};
use culebra_dev_tools::commands::install::InstallRunner;
use culebra_dev_tools::error::ToolsError;
use culebra_dev_tools::traits::SubcommandRunner;
use std::{io, process};
use tracing::warn;
use tracing_subscriber::{fmt::time::SystemTime, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "info";

fn main() -> Result<()> {
    let cli = ToolsCli::parse();

    initialise_tracing(cli.log_format);

    let result = match cli.selected() {
        Commands::Install => InstallRunner::from(cli.install).run(),
    };

    // A failed fatal step ends the process with the child's own status.
    if let Err(err) = &result {
        if let Some(failure) = err.downcast_ref::<ToolsError>() {
            process::exit(failure.exit_status());
        }
    }

    result
}

/// Logging never stops the install: an unusable `RUST_LOG` falls back to
/// the default filter and is reported once logging is up.
fn initialise_tracing(format: LogFormat) {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(err)),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);

    match format {
        LogFormat::Text => builder.with_timer(SystemTime).init(),
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .init(),
    }

    // An unset RUST_LOG is also reported as an error; only a present but
    // unparsable value is worth a warning.
    if let (Some(err), Ok(raw)) = (rejected, std::env::var("RUST_LOG")) {
        warn!(%err, filter = %raw, "ignoring invalid RUST_LOG");
    }
}
