use thiserror::Error;

pub type Result<T, E = ToolsError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum ToolsError {
    #[error("Had error at command {command} (exit status {status})")]
    CommandFailed { command: String, status: i32 },
}

impl ToolsError {
    /// Exit status the process should terminate with for this error.
    pub fn exit_status(&self) -> i32 {
        match self {
            Self::CommandFailed { status, .. } => *status,
        }
    }
}
