use crate::error::{Result, ToolsError};
use crate::shell::SPAWN_FAILURE_STATUS;
use crate::traits::CommandExecutor;
use colored::*;
use std::io::{self, Stdout, Write};
use tracing::{error, instrument, warn};

const SEPARATOR: &str = "----------------------------------------";

/// Outcome of a single finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub command: String,
    pub status: i32,
}

impl CommandResult {
    pub fn new(command: impl Into<String>, status: i32) -> Self {
        Self {
            command: command.into(),
            status,
        }
    }

    pub fn failed(&self) -> bool {
        self.status != 0
    }
}

/// Runs commands one at a time and applies the failure policy to each.
///
/// Every command is followed by a separator line on the output. A non-zero
/// status additionally prints `Had error at command <command>`. When the
/// failure is not tolerated the caller receives [`ToolsError::CommandFailed`]
/// and must not run anything further.
pub struct CommandRunner<E, W = Stdout> {
    executor: E,
    out: W,
}

impl<E: CommandExecutor> CommandRunner<E> {
    pub fn new(executor: E) -> Self {
        Self {
            executor,
            out: io::stdout(),
        }
    }
}

impl<E: CommandExecutor, W: Write> CommandRunner<E, W> {
    pub fn with_output(executor: E, out: W) -> Self {
        Self { executor, out }
    }

    #[instrument(skip(self))]
    pub fn run(&mut self, command: &str, tolerate_failure: bool) -> Result<CommandResult> {
        let status = match self.executor.execute(command) {
            Ok(status) => status,
            Err(err) => {
                error!(%err, "unable to start shell");
                SPAWN_FAILURE_STATUS
            }
        };
        let result = CommandResult::new(command, status);

        if let Err(err) = self.report(&result) {
            warn!(%err, "unable to write to console");
        }

        if result.failed() {
            error!(status, "command failed");

            if !tolerate_failure {
                return Err(ToolsError::CommandFailed {
                    command: result.command,
                    status,
                });
            }

            warn!(status, "continuing after tolerated failure");
        }

        Ok(result)
    }

    fn report(&mut self, result: &CommandResult) -> io::Result<()> {
        writeln!(self.out, "{}", SEPARATOR.dimmed())?;
        if result.failed() {
            let line = format!("Had error at command {}", result.command);
            writeln!(self.out, "{}", line.red())?;
        }
        self.out.flush()
    }

    pub fn into_parts(self) -> (E, W) {
        (self.executor, self.out)
    }
}
