//! Generative-service backend abstraction for styler
//!
//! Both external calls the engine makes (image composition and advisory
//! text) go through the [`GenerativeBackend`] trait, so the orchestrator
//! never knows which provider is on the other end. The one production
//! implementation is [`GeminiBackend`], an HTTP client for the
//! `generateContent` API.

mod error;
mod gemini;
mod types;

pub use error::GenaiError;
pub use gemini::GeminiBackend;
pub use types::{GenerateRequest, GenerateResponse, GenerativeBackend, Part};
