mod steps;

use crate::cli::InstallArgs;
use crate::commands::install::steps::reinstall_pipeline;
use crate::runner::CommandRunner;
use crate::shell::ShellExecutor;
use crate::traits::SubcommandRunner;
use anyhow::Result;
use tracing::info;

pub struct InstallRunner {
    args: InstallArgs,
}

impl From<InstallArgs> for InstallRunner {
    fn from(args: InstallArgs) -> Self {
        Self { args }
    }
}

impl SubcommandRunner for InstallRunner {
    fn run(self) -> Result<()> {
        let mut executor = ShellExecutor::new();
        if let Some(dir) = &self.args.project_dir {
            executor = executor.current_dir(dir);
        }

        let mut runner = CommandRunner::new(executor);
        let report = reinstall_pipeline(&self.args).run(&mut runner)?;

        info!(
            tool = %self.args.tool_name,
            tolerated_failures = report.tolerated_failures().count(),
            "tool reinstalled"
        );

        Ok(())
    }
}
