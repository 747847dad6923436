//! Try-on generation orchestrator
//!
//! Drives the two-call generation pipeline: an image-composition call
//! that produces the try-on render, followed by a best-effort advisory
//! call that analyzes the render for merchant-facing insights. The first
//! call is load-bearing and its failures propagate; the second degrades
//! to a fixed fallback without failing the generation.

mod advice;
mod error;
mod orchestrator;
mod prompt;

pub use advice::{segment_advice, AdviceSection, AdviceSections};
pub use error::GenerationError;
pub use orchestrator::Orchestrator;
