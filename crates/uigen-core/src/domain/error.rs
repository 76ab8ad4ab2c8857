//! Domain error types.
//!
//! All errors are:
//! - Cloneable (cheap to pass across layers)
//! - Categorizable (for CLI display)
//! - Actionable (provide suggestions)

use thiserror::Error;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ── Precondition violations (always fatal) ──────────────────────────
    #[error("specification has no components; the first component is the default route target")]
    EmptySpecification,

    #[error("project name must not be empty")]
    EmptyProjectName,

    // ── Malformed input ─────────────────────────────────────────────────
    #[error("Invalid specification: {0}")]
    InvalidSpecification(String),

    // ── Strict-mode violations (tolerated in permissive mode) ───────────
    #[error("components '{first}' and '{second}' derive the same route path '{path}'")]
    DuplicateRoutePath {
        first: String,
        second: String,
        path: String,
    },

    #[error("field '{field}' is a {field_type} but declares no options")]
    EmptyOptions {
        field: String,
        field_type: &'static str,
    },

    #[error("field '{field}' has a non-ascending range [{min}, {max}]")]
    RangeNotAscending { field: String, min: f64, max: f64 },

    // ── Artifact-set invariants ─────────────────────────────────────────
    #[error("Duplicate artifact path: {path}")]
    DuplicateArtifactPath { path: String },

    #[error("Absolute artifact paths not allowed: {path}")]
    AbsoluteArtifactPath { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptySpecification => vec![
                "Add at least one component to the specification".into(),
                "The first component becomes the default route".into(),
            ],
            Self::EmptyProjectName => vec![
                "Set a non-empty \"name\" in the specification document".into(),
            ],
            Self::InvalidSpecification(msg) => vec![
                "Check your specification document".into(),
                format!("Details: {}", msg),
            ],
            Self::DuplicateRoutePath { first, second, path } => vec![
                format!("'{first}' and '{second}' both map to route '/{path}'"),
                "Rename one of the components, or run without --strict to let the later one win".into(),
            ],
            Self::EmptyOptions { field, field_type } => vec![
                format!("Give '{field}' a non-empty \"options\" array"),
                format!("A {field_type} with no options renders no selectable values"),
            ],
            Self::RangeNotAscending { field, .. } => vec![
                format!("Swap the range bounds on '{field}' so min comes first"),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptySpecification | Self::EmptyProjectName => ErrorCategory::Precondition,
            Self::InvalidSpecification(_)
            | Self::DuplicateRoutePath { .. }
            | Self::EmptyOptions { .. }
            | Self::RangeNotAscending { .. } => ErrorCategory::Validation,
            Self::DuplicateArtifactPath { .. } | Self::AbsoluteArtifactPath { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Precondition,
    Validation,
    Internal,
}
