//! Application services.

pub mod generation_service;

pub use generation_service::{
    GenerationOptions, GenerationOutput, GenerationService, GenerationSummary, Phase,
};
