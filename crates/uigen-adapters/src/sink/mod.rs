//! Artifact sink implementations.

pub mod local;
pub mod memory;

pub use local::LocalSink;
pub use memory::MemorySink;
