//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the generation engine needs from external
//! systems. The `uigen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{AppSpec, ToolInvocation};
use crate::error::UigenResult;

/// Port for materializing artifacts.
///
/// Implemented by:
/// - `uigen_adapters::sink::LocalSink` (production, std::fs)
/// - `uigen_adapters::sink::MemorySink` (testing)
///
/// Artifacts never share a target path and have no ordering dependency on
/// each other, so an implementation may write them in any order.
pub trait ArtifactSink: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> UigenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> UigenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> UigenResult<()>;
}

/// Port for executing external tool invocations.
///
/// Implemented by:
/// - `uigen_adapters::tools::ShellRunner` (blocking subprocess execution)
/// - `uigen_adapters::tools::RecordingRunner` (testing)
///
/// Execution is blocking: the engine requires an invocation to have
/// completed before subsequent steps depend on its result. The engine
/// never parses tool output; it only consumes success or failure.
pub trait ToolRunner: Send + Sync {
    /// Run one invocation to completion. An `Err` aborts the whole run.
    fn run(&self, invocation: &ToolInvocation, output_root: &Path, project_root: &Path)
    -> UigenResult<()>;
}

/// Port for resolving and parsing a specification document.
///
/// Implemented by:
/// - `uigen_adapters::JsonSpecLoader` (serde_json)
pub trait SpecSource: Send + Sync {
    /// Load and parse the specification at `path`.
    fn load(&self, path: &Path) -> UigenResult<AppSpec>;
}
