//! Core data model for the styler try-on engine
//!
//! This crate defines the types shared across the workspace: image assets,
//! background presets, generation requests/results, and the persisted
//! history record. All types are plain data; behavior lives in
//! `styler-engine` and `styler-history`.

mod image;
mod preset;
mod record;
mod request;

pub use image::{ImageAsset, ImageDecodeError};
pub use preset::BackgroundPreset;
pub use record::HistoryRecord;
pub use request::{Advisory, GenerationRequest, GenerationResult, FALLBACK_ADVISORY_TEXT};
