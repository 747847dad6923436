//! The two-call generation pipeline

use std::sync::Arc;

use styler_config::GenaiConfig;
use styler_genai::{GenerateRequest, GenerativeBackend, Part};
use styler_types::{Advisory, GenerationRequest, GenerationResult};

use crate::error::GenerationError;
use crate::prompt;

/// Runs try-on generations against a generative backend
///
/// The two calls use separate models: a multimodal image model for the
/// composition and a text model for the advisory analysis.
pub struct Orchestrator {
    backend: Arc<dyn GenerativeBackend>,
    image_model: String,
    advice_model: String,
}

impl Orchestrator {
    #[must_use]
    pub fn new(backend: Arc<dyn GenerativeBackend>, config: &GenaiConfig) -> Self {
        Self {
            backend,
            image_model: config.image_model.clone(),
            advice_model: config.advice_model.clone(),
        }
    }

    /// Run one full generation: compose the try-on image, then analyze it
    ///
    /// Inputs are validated before anything leaves the process; a request
    /// missing either image never reaches the backend. The advisory call
    /// is best-effort: any failure there yields a degraded [`Advisory`]
    /// on an otherwise successful result.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when an input image is missing, the
    /// composition call fails, or it returns no image.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let subject = request
            .subject_image
            .as_ref()
            .ok_or(GenerationError::MissingInput("subject image"))?;
        let garment = request
            .garment_image
            .as_ref()
            .ok_or(GenerationError::MissingInput("garment image"))?;

        tracing::info!(
            background = %request.background,
            has_directives = !request.style_directives.trim().is_empty(),
            "starting try-on generation"
        );

        let composition = GenerateRequest::new(
            self.image_model.clone(),
            vec![
                Part::from_asset(subject),
                Part::from_asset(garment),
                Part::Text(prompt::composition_prompt(
                    &request.style_directives,
                    request.background,
                )),
            ],
        );
        let response = self.backend.invoke(composition).await?;
        let composed_image = response
            .first_inline_image()
            .ok_or(GenerationError::NoImageProduced)?;

        let advisory = self
            .fetch_advisory(&composed_image, request.product_label.as_deref())
            .await;

        Ok(GenerationResult {
            composed_image,
            advisory,
        })
    }

    /// The secondary call; never fails, only degrades
    async fn fetch_advisory(
        &self,
        composed_image: &styler_types::ImageAsset,
        product_label: Option<&str>,
    ) -> Advisory {
        let request = GenerateRequest::new(
            self.advice_model.clone(),
            vec![
                Part::from_asset(composed_image),
                Part::Text(prompt::advisory_prompt(product_label)),
            ],
        );

        match self.backend.invoke(request).await {
            Ok(response) => {
                let text = response.text();
                if text.trim().is_empty() {
                    tracing::warn!("advisory call returned no text, degrading");
                    Advisory::unavailable()
                } else {
                    Advisory::fresh(text)
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "advisory call failed, degrading");
                Advisory::unavailable()
            }
        }
    }
}
