//! Recording tool runner for testing.

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use uigen_core::{
    application::{ApplicationError, ports::ToolRunner},
    domain::ToolInvocation,
    error::UigenResult,
};

/// Tool runner that records invocations instead of executing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    recorded: Arc<Mutex<Vec<ToolInvocation>>>,
    fail_on: Arc<Mutex<Option<String>>>,
}

impl RecordingRunner {
    /// Create a new recording runner that accepts every invocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any invocation whose program matches `program`.
    pub fn failing_on(program: impl Into<String>) -> Self {
        Self {
            recorded: Arc::new(Mutex::new(Vec::new())),
            fail_on: Arc::new(Mutex::new(Some(program.into()))),
        }
    }

    /// The invocations recorded so far, in execution order.
    pub fn invocations(&self) -> Vec<ToolInvocation> {
        self.recorded.lock().unwrap().clone()
    }

    /// Rendered command lines of the recorded invocations.
    pub fn command_lines(&self) -> Vec<String> {
        self.recorded
            .lock()
            .unwrap()
            .iter()
            .map(ToolInvocation::command_line)
            .collect()
    }
}

impl ToolRunner for RecordingRunner {
    fn run(
        &self,
        invocation: &ToolInvocation,
        _output_root: &Path,
        _project_root: &Path,
    ) -> UigenResult<()> {
        if let Some(program) = self.fail_on.lock().unwrap().as_deref() {
            if invocation.program == program {
                return Err(ApplicationError::ToolFailed {
                    command: invocation.command_line(),
                    reason: "Injected failure".into(),
                }
                .into());
            }
        }
        self.recorded.lock().unwrap().push(invocation.clone());
        Ok(())
    }
}
