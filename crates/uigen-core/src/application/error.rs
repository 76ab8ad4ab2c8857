//! Application layer errors.
//!
//! These represent failures in orchestration and at the ports, not
//! business-logic violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An external tool invocation failed. Fatal to the whole run; a
    /// partially-materialized project tree is not a safe resume point.
    #[error("external tool failed: {command}: {reason}")]
    ToolFailed { command: String, reason: String },

    /// An artifact-sink operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    SinkError { path: PathBuf, reason: String },

    /// The specification document could not be loaded or parsed.
    #[error("failed to load specification from {path}: {reason}")]
    SpecLoadFailed { path: PathBuf, reason: String },

    /// Project already exists at the target location.
    #[error("Project already exists at {path}")]
    ProjectExists { path: PathBuf },

    /// Best-effort cleanup after a failed write did not complete.
    #[error("Rollback failed for {path}: {reason}")]
    RollbackFailed { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ToolFailed { command, .. } => vec![
                format!("The command '{command}' did not succeed"),
                "Ensure the tool is installed and on your PATH".into(),
                "Re-run with --skip-tools to generate artifacts only".into(),
            ],
            Self::SinkError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::SpecLoadFailed { path, .. } => vec![
                format!("Could not read: {}", path.display()),
                "Check the path and that the document is valid JSON".into(),
                "Run 'uigen init' to write a sample specification".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Use --force to overwrite (destructive)".into(),
                "Choose a different project name".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> crate::error::ErrorCategory {
        use crate::error::ErrorCategory;
        match self {
            Self::ToolFailed { .. } => ErrorCategory::External,
            Self::SinkError { .. } | Self::RollbackFailed { .. } => ErrorCategory::Internal,
            Self::SpecLoadFailed { .. } => ErrorCategory::Input,
            Self::ProjectExists { .. } => ErrorCategory::Input,
        }
    }
}
