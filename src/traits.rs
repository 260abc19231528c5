use anyhow::Result;
use std::io;

pub trait SubcommandRunner {
    fn run(self) -> Result<()>;
}

/// Runs a command string to completion and reports its exit status.
///
/// An `Err` means the command could not be started at all. A command that
/// started and failed, including one the shell could not find, is an `Ok`
/// carrying a non-zero status.
pub trait CommandExecutor {
    fn execute(&mut self, command: &str) -> io::Result<i32>;
}
