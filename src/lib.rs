//! styler - virtual try-on generation with a bounded render history
//!
//! The pipeline takes a photo of a person and a photo of a garment, asks
//! a generative image model to compose the try-on, then asks a text model
//! for merchant-facing styling advice about the result. Completed
//! generations land in a small persisted history.
//!
//! The crate is usable two ways:
//! - **CLI**: the `styler` binary (`generate`, `history`, `presets`)
//! - **Library**: construct an [`Orchestrator`] over any
//!   [`GenerativeBackend`] and drive it directly
//!
//! # Quick start (library)
//!
//! ```no_run
//! use std::sync::Arc;
//! use styler::{GeminiBackend, GenerationRequest, ImageAsset, Orchestrator};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = styler::Config::load_or_default(None)?;
//! let backend = Arc::new(GeminiBackend::new_from_config(&config.genai)?);
//! let orchestrator = Orchestrator::new(backend, &config.genai);
//!
//! let request = GenerationRequest::new(
//!     ImageAsset::from_bytes(&std::fs::read("subject.png")?, "image/png"),
//!     ImageAsset::from_bytes(&std::fs::read("garment.png")?, "image/png"),
//! );
//! let result = orchestrator.generate(&request).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod logging;
pub mod media;

pub use styler_config::Config;
pub use styler_engine::{
    segment_advice, AdviceSection, AdviceSections, GenerationError, Orchestrator,
};
pub use styler_genai::{
    GeminiBackend, GenaiError, GenerateRequest, GenerateResponse, GenerativeBackend, Part,
};
pub use styler_history::{HistoryStore, JsonFileBackend, MemoryBackend, StorageBackend};
pub use styler_types::{
    Advisory, BackgroundPreset, GenerationRequest, GenerationResult, HistoryRecord, ImageAsset,
    FALLBACK_ADVISORY_TEXT,
};
