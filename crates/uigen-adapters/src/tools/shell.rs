//! Subprocess tool runner using std::process.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use uigen_core::{
    application::{ApplicationError, ports::ToolRunner},
    domain::{ToolCwd, ToolInvocation},
    error::UigenResult,
};

/// Production tool runner that executes invocations as blocking
/// subprocesses.
///
/// The working directory is resolved per invocation: skeleton-level
/// commands run in the output root, project-level commands in the
/// generated project root.
#[derive(Debug, Clone, Copy)]
pub struct ShellRunner;

impl ShellRunner {
    /// Create a new shell runner.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRunner for ShellRunner {
    fn run(
        &self,
        invocation: &ToolInvocation,
        output_root: &Path,
        project_root: &Path,
    ) -> UigenResult<()> {
        let cwd = match invocation.cwd {
            ToolCwd::OutputRoot => output_root,
            ToolCwd::ProjectRoot => project_root,
        };
        debug!(command = %invocation, cwd = %cwd.display(), "spawning tool");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(cwd)
            .status()
            .map_err(|e| ApplicationError::ToolFailed {
                command: invocation.command_line(),
                reason: format!("Failed to spawn: {}", e),
            })?;

        if !status.success() {
            return Err(ApplicationError::ToolFailed {
                command: invocation.command_line(),
                reason: match status.code() {
                    Some(code) => format!("Exited with status {}", code),
                    None => "Terminated by signal".into(),
                },
            }
            .into());
        }

        Ok(())
    }
}
