//! Uigen Core - specification-to-artifact generation engine.
//!
//! This crate turns a declarative UI specification (project name, ordered
//! components with typed fields and buttons, menu and footer options) into
//! an in-memory set of source artifacts for a component-based SPA framework:
//! one component class and form per component, a routing table, and an
//! assembled shell page.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            uigen-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//! ┌──────────────────▼──────────────────────┐
//! │        GenerationService                │
//! │   (linear orchestration, all-or-nothing)│
//! └──────────────────┬──────────────────────┘
//! ┌──────────────────▼──────────────────────┐
//! │     Application Ports (Traits)          │
//! │  (ArtifactSink, ToolRunner, SpecSource) │
//! └──────────────────┬──────────────────────┘
//! ┌──────────────────▼──────────────────────┐
//! │     uigen-adapters (Infrastructure)     │
//! │ (LocalSink, ShellRunner, JsonSpecLoader)│
//! └─────────────────────────────────────────┘
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (AppSpec, Directive, Artifact, naming)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain and generation layers are pure and synchronous: every
//! generator is a deterministic function of its inputs, so repeated runs on
//! an identical specification yield byte-identical artifacts. All I/O and
//! process execution happens behind the ports.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use uigen_core::{
//!     application::{GenerationOptions, GenerationService},
//!     domain::AppSpec,
//! };
//!
//! # fn demo(spec: AppSpec, sink: Box<dyn uigen_core::application::ports::ArtifactSink>,
//! #         tools: Box<dyn uigen_core::application::ports::ToolRunner>) {
//! let service = GenerationService::new(sink, tools);
//! let options = GenerationOptions::default();
//! service.generate(&spec, &options, std::path::Path::new("./out")).unwrap();
//! # }
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Artifact generators (the heart of the engine)
pub mod generate;

// Application layer (orchestration logic + ports)
pub mod application;

// Root error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationOptions, GenerationOutput, GenerationService,
        ports::{ArtifactSink, SpecSource, ToolRunner},
    };
    pub use crate::domain::{
        AppSpec, Artifact, ArtifactSet, ComponentSpec, Directive, FieldSpec, FieldType,
        GridColumns, MenuOrientation, StyleOptions, ToolInvocation, ValidationMode,
        ValidationSpec,
    };
    pub use crate::error::{UigenError, UigenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
