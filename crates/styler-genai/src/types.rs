//! Request and response shapes shared by all backends

use async_trait::async_trait;
use styler_types::ImageAsset;

use crate::error::GenaiError;

/// One piece of multimodal content, in either direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Base64-encoded image bytes with their MIME type
    InlineImage { data: String, mime_type: String },
    /// Plain text
    Text(String),
}

impl Part {
    /// Wrap an [`ImageAsset`] as an inline-image part
    #[must_use]
    pub fn from_asset(asset: &ImageAsset) -> Self {
        Self::InlineImage {
            data: asset.data.clone(),
            mime_type: asset.mime_type.clone(),
        }
    }
}

/// A single invocation of a generative backend
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    /// Model identifier, e.g. `gemini-2.5-flash-image`
    pub model: String,
    /// Ordered content parts forming the prompt
    pub parts: Vec<Part>,
}

impl GenerateRequest {
    #[must_use]
    pub fn new(model: impl Into<String>, parts: Vec<Part>) -> Self {
        Self {
            model: model.into(),
            parts,
        }
    }
}

/// The content a backend produced for one request
///
/// A response may hold any mix of text and inline images; an empty
/// `parts` means the service answered without producing content. Callers
/// decide what that means for them.
#[derive(Debug, Clone, Default)]
pub struct GenerateResponse {
    pub parts: Vec<Part>,
}

impl GenerateResponse {
    /// First inline image in the response, if any
    #[must_use]
    pub fn first_inline_image(&self) -> Option<ImageAsset> {
        self.parts.iter().find_map(|part| match part {
            Part::InlineImage { data, mime_type } => {
                Some(ImageAsset::from_base64(data.clone(), mime_type.clone()))
            }
            Part::Text(_) => None,
        })
    }

    /// All text parts concatenated in order
    #[must_use]
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                Part::Text(text) => Some(text.as_str()),
                Part::InlineImage { .. } => None,
            })
            .collect()
    }
}

/// A generative service that turns multimodal prompts into content
///
/// Implementations must be safe to share across tasks; the engine calls
/// `invoke` twice per generation through one shared backend.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Execute one generation request
    ///
    /// # Errors
    ///
    /// Returns `GenaiError` on misconfiguration, transport failure, or a
    /// service-reported error.
    async fn invoke(&self, request: GenerateRequest) -> Result<GenerateResponse, GenaiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_inline_image_skips_text() {
        let response = GenerateResponse {
            parts: vec![
                Part::Text("preamble".to_string()),
                Part::InlineImage {
                    data: "aGVsbG8=".to_string(),
                    mime_type: "image/png".to_string(),
                },
                Part::InlineImage {
                    data: "d29ybGQ=".to_string(),
                    mime_type: "image/jpeg".to_string(),
                },
            ],
        };

        let image = response.first_inline_image().unwrap();
        assert_eq!(image.data, "aGVsbG8=");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_first_inline_image_absent() {
        let response = GenerateResponse {
            parts: vec![Part::Text("only words".to_string())],
        };
        assert!(response.first_inline_image().is_none());
    }

    #[test]
    fn test_text_concatenates_in_order() {
        let response = GenerateResponse {
            parts: vec![
                Part::Text("alpha ".to_string()),
                Part::InlineImage {
                    data: String::new(),
                    mime_type: "image/png".to_string(),
                },
                Part::Text("beta".to_string()),
            ],
        };
        assert_eq!(response.text(), "alpha beta");
    }

    #[test]
    fn test_text_empty_response() {
        assert_eq!(GenerateResponse::default().text(), "");
    }
}
