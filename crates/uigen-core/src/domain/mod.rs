//! Core domain layer for Uigen.
//!
//! Pure business logic with no I/O: the specification model, identifier
//! derivation, the validation-rule compiler, and the artifact value types.
//! Filesystem writes and external-tool execution are handled via ports
//! defined in the application layer.
//!
//! - **No async**: generation is synchronous
//! - **No I/O**: no filesystem, network, or process calls
//! - **Deterministic**: equal inputs produce byte-equal outputs
//! - **Immutable entities**: all domain objects are Clone + PartialEq

pub mod artifact;
pub mod error;
pub mod naming;
pub mod spec;
pub mod validation;

pub use artifact::{Artifact, ArtifactSet, ToolCwd, ToolInvocation};
pub use error::{DomainError, ErrorCategory};
pub use spec::{
    AppSpec, ComponentSpec, FieldSpec, FieldType, GridColumns, MenuOrientation, StyleOptions,
    ValidationSpec,
};
pub use validation::{CompiledValidation, Directive, ValidationMode, compile_field, validate_spec};
