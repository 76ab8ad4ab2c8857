//! Artifact and tool-invocation value types.
//!
//! An [`Artifact`] is one virtual file: a relative path plus its full text
//! content. The orchestrator produces a complete [`ArtifactSet`] per run;
//! artifacts are never partially written or merged with a prior run's
//! output (full overwrite semantics). [`ToolInvocation`] describes an
//! external command the caller must execute before artifacts are written.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

/// One unit of generated textual output, keyed by a relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub content: String,
}

impl Artifact {
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// The ordered artifact output of one generation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtifactSet {
    entries: Vec<Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.entries.push(Artifact::new(path, content));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an artifact's content by its relative path.
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        let path = path.as_ref();
        self.entries
            .iter()
            .find(|a| a.path == path)
            .map(|a| a.content.as_str())
    }

    /// Check the set invariants: no duplicate paths, no absolute paths.
    ///
    /// Duplicates would mean two generators fought over one file; that is
    /// an engine bug, not a user error.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for artifact in &self.entries {
            let display = artifact.path.display().to_string();
            if !seen.insert(display.clone()) {
                return Err(DomainError::DuplicateArtifactPath { path: display });
            }
            if artifact.path.is_absolute() {
                return Err(DomainError::AbsoluteArtifactPath { path: display });
            }
        }
        Ok(())
    }
}

impl IntoIterator for ArtifactSet {
    type Item = Artifact;
    type IntoIter = std::vec::IntoIter<Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

// ── External tool invocations ─────────────────────────────────────────────────

/// Where an external command must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCwd {
    /// The directory the project skeleton is created in.
    OutputRoot,
    /// Inside the created project directory.
    ProjectRoot,
}

/// An opaque external command for the caller's shell-execution facility.
///
/// The core never parses tool output; it only requires success/failure
/// signalling, and a failure aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInvocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: ToolCwd,
}

impl ToolInvocation {
    pub fn new(program: impl Into<String>, args: &[&str], cwd: ToolCwd) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|s| (*s).to_string()).collect(),
            cwd,
        }
    }

    /// The full command line, for logs and dry-run listings.
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl std::fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.command_line())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
