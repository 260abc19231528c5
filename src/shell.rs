use crate::traits::CommandExecutor;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Status reported when the shell itself could not be started, matching the
/// status a shell uses for a program it cannot find.
pub const SPAWN_FAILURE_STATUS: i32 = 127;

#[cfg(unix)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}

#[cfg(unix)]
fn status_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    match (status.code(), status.signal()) {
        (Some(code), _) => code,
        (None, Some(signal)) => 128 + signal,
        (None, None) => 1,
    }
}

#[cfg(not(unix))]
fn status_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

/// Executes commands through the host shell, inheriting stdio.
#[derive(Debug, Default, Clone)]
pub struct ShellExecutor {
    current_dir: Option<PathBuf>,
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }
}

impl CommandExecutor for ShellExecutor {
    fn execute(&mut self, command: &str) -> io::Result<i32> {
        let mut cmd = shell_command(command);

        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }

        debug!(command, "spawning shell");
        let status = cmd.status()?;

        Ok(status_code(status))
    }
}
