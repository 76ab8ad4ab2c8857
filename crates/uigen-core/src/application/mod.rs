//! Application layer: orchestration services and ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    GenerationOptions, GenerationOutput, GenerationService, GenerationSummary, Phase,
};
