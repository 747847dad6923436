//! Persisted history records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::image::ImageAsset;
use crate::request::{GenerationRequest, GenerationResult};

/// Placeholder used when no product label was supplied
pub const UNTITLED_PRODUCT: &str = "Untitled Product";

/// One completed generation, as stored in the bounded history
///
/// Records are immutable after creation: the history store only ever
/// inserts, truncates, or deletes whole records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Unique identifier for the lifetime of the record
    pub id: String,
    /// Photo of the person, as submitted
    pub subject_image: ImageAsset,
    /// Photo of the garment, as submitted
    pub garment_image: ImageAsset,
    /// The composed try-on image
    pub composed_image: ImageAsset,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Free-text style directives that were in effect
    pub style_directives: String,
    /// Product name, defaulting to a placeholder
    pub product_label: String,
    /// Optional price label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_label: Option<String>,
    /// Advisory text if the secondary call produced any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisory_text: Option<String>,
}

impl HistoryRecord {
    /// Build a record from a completed generation
    ///
    /// Assigns a fresh v4 UUID and the current time. A degraded advisory is
    /// recorded as absent rather than persisting the fallback placeholder.
    #[must_use]
    pub fn from_generation(request: &GenerationRequest, result: &GenerationResult) -> Self {
        let advisory_text = if result.advisory.degraded {
            None
        } else {
            Some(result.advisory.text.clone())
        };

        Self {
            id: Uuid::new_v4().to_string(),
            subject_image: request.subject_image.clone().unwrap_or_else(empty_asset),
            garment_image: request.garment_image.clone().unwrap_or_else(empty_asset),
            composed_image: result.composed_image.clone(),
            created_at: Utc::now(),
            style_directives: request.style_directives.clone(),
            product_label: request
                .product_label
                .clone()
                .filter(|label| !label.trim().is_empty())
                .unwrap_or_else(|| UNTITLED_PRODUCT.to_string()),
            price_label: None,
            advisory_text,
        }
    }

    /// Set the price label
    #[must_use]
    pub fn with_price_label(mut self, price: impl Into<String>) -> Self {
        self.price_label = Some(price.into());
        self
    }
}

// A generation only completes with both inputs present, so this is never hit
// in practice; it keeps from_generation total instead of panicking.
fn empty_asset() -> ImageAsset {
    ImageAsset::from_base64("", "application/octet-stream")
}
