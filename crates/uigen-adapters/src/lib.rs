//! Infrastructure adapters for Uigen.
//!
//! This crate implements the ports defined in `uigen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod sink;
pub mod spec_loader;
pub mod tools;

// Re-export commonly used adapters
pub use sink::{LocalSink, MemorySink};
pub use spec_loader::JsonSpecLoader;
pub use tools::{RecordingRunner, ShellRunner};
