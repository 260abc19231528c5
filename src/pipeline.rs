use crate::error::Result;
use crate::runner::{CommandResult, CommandRunner};
use crate::traits::CommandExecutor;
use std::io::Write;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Report the failure and carry on with the next step.
    Tolerate,
    /// Report the failure and stop the pipeline with its status.
    Fatal,
}

impl FailurePolicy {
    pub fn tolerates_failure(self) -> bool {
        matches!(self, Self::Tolerate)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub command: String,
    pub policy: FailurePolicy,
}

impl Step {
    pub fn tolerated(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            policy: FailurePolicy::Tolerate,
        }
    }

    pub fn fatal(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            policy: FailurePolicy::Fatal,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub results: Vec<CommandResult>,
}

impl PipelineReport {
    pub fn tolerated_failures(&self) -> impl Iterator<Item = &CommandResult> {
        self.results.iter().filter(|result| result.failed())
    }
}

/// A fixed sequence of commands executed strictly in order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Runs every step, stopping at the first fatal failure.
    ///
    /// Returns the results of all steps when no fatal step failed. Tolerated
    /// failures are included in the report.
    pub fn run<E, W>(&self, runner: &mut CommandRunner<E, W>) -> Result<PipelineReport>
    where
        E: CommandExecutor,
        W: Write,
    {
        let mut report = PipelineReport::default();

        for (index, step) in self.steps.iter().enumerate() {
            debug!(step = index + 1, command = %step.command, policy = ?step.policy, "running step");
            let result = runner.run(&step.command, step.policy.tolerates_failure())?;
            report.results.push(result);
        }

        info!(
            steps = report.results.len(),
            tolerated_failures = report.tolerated_failures().count(),
            "pipeline finished"
        );

        Ok(report)
    }
}
