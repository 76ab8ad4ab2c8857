//! Local filesystem sink using std::fs.

use std::io;
use std::path::Path;

use uigen_core::{application::ports::ArtifactSink, error::UigenResult};

/// Production artifact sink implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalSink;

impl LocalSink {
    /// Create a new local filesystem sink.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactSink for LocalSink {
    fn create_dir_all(&self, path: &Path) -> UigenResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> UigenResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_dir_all(&self, path: &Path) -> UigenResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> uigen_core::error::UigenError {
    use uigen_core::application::ApplicationError;

    ApplicationError::SinkError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
