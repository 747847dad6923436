//! Generation request and result types

use crate::image::ImageAsset;
use crate::preset::BackgroundPreset;

/// Fixed text substituted when the advisory call fails or returns nothing
pub const FALLBACK_ADVISORY_TEXT: &str = "Styling analysis unavailable.";

/// Input to one try-on generation, assembled by the presentation layer
///
/// Images are optional here because the caller's UI state may not have both
/// set; the engine validates presence before any external call is issued.
#[derive(Debug, Clone, Default)]
pub struct GenerationRequest {
    /// Photo of the person to render
    pub subject_image: Option<ImageAsset>,
    /// Photo of the garment to composite onto the subject
    pub garment_image: Option<ImageAsset>,
    /// Free-text style directives from the caller
    pub style_directives: String,
    /// Scene the composed image should be staged in
    pub background: BackgroundPreset,
    /// Product name used in the advisory prompt and the saved record
    pub product_label: Option<String>,
}

impl GenerationRequest {
    /// Create a request with both images set
    #[must_use]
    pub fn new(subject_image: ImageAsset, garment_image: ImageAsset) -> Self {
        Self {
            subject_image: Some(subject_image),
            garment_image: Some(garment_image),
            ..Self::default()
        }
    }

    /// Set free-text style directives
    #[must_use]
    pub fn with_style_directives(mut self, directives: impl Into<String>) -> Self {
        self.style_directives = directives.into();
        self
    }

    /// Set the background preset
    #[must_use]
    pub fn with_background(mut self, background: BackgroundPreset) -> Self {
        self.background = background;
        self
    }

    /// Set the product label
    #[must_use]
    pub fn with_product_label(mut self, label: impl Into<String>) -> Self {
        self.product_label = Some(label.into());
        self
    }
}

/// Marketing/styling commentary from the secondary generative call
///
/// `degraded` is true when the advisory call failed or returned nothing and
/// `text` holds [`FALLBACK_ADVISORY_TEXT`] instead of real content. Callers
/// can branch on the flag rather than comparing against a magic string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    /// Advisory text, or the fixed fallback when degraded
    pub text: String,
    /// Whether this is fallback content rather than model output
    pub degraded: bool,
}

impl Advisory {
    /// Real advisory content from the model
    #[must_use]
    pub fn fresh(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            degraded: false,
        }
    }

    /// Fallback advisory used when the secondary call degrades
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            text: FALLBACK_ADVISORY_TEXT.to_string(),
            degraded: true,
        }
    }
}

/// Output of one successful try-on generation
#[derive(Debug, Clone)]
pub struct GenerationResult {
    /// The composed try-on image
    pub composed_image: ImageAsset,
    /// Advisory commentary, possibly degraded
    pub advisory: Advisory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let req = GenerationRequest::new(
            ImageAsset::from_bytes(b"subject", "image/png"),
            ImageAsset::from_bytes(b"garment", "image/png"),
        )
        .with_style_directives("golden hour lighting")
        .with_background(BackgroundPreset::Runway)
        .with_product_label("Silk Blouse");

        assert!(req.subject_image.is_some());
        assert!(req.garment_image.is_some());
        assert_eq!(req.style_directives, "golden hour lighting");
        assert_eq!(req.background, BackgroundPreset::Runway);
        assert_eq!(req.product_label.as_deref(), Some("Silk Blouse"));
    }

    #[test]
    fn test_advisory_fresh_vs_unavailable() {
        let fresh = Advisory::fresh("looks great");
        assert!(!fresh.degraded);
        assert_eq!(fresh.text, "looks great");

        let fallback = Advisory::unavailable();
        assert!(fallback.degraded);
        assert_eq!(fallback.text, FALLBACK_ADVISORY_TEXT);
    }
}
