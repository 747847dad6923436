//! Gemini `generateContent` backend
//!
//! Speaks the REST surface of the Gemini API: one POST per invocation to
//! `{base}/models/{model}:generateContent`, authenticated via the
//! `x-goog-api-key` header. Multimodal parts map onto the wire as
//! `inlineData`/`text` entries.

use styler_config::GenaiConfig;

use crate::error::GenaiError;
use crate::types::{GenerateRequest, GenerateResponse, GenerativeBackend, Part};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// HTTP backend for the Gemini generative API
#[derive(Debug)]
pub struct GeminiBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiBackend {
    /// Create a backend with an explicit API key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Create a backend from configuration, reading the API key from the
    /// environment variable the config names
    ///
    /// # Errors
    ///
    /// Returns `GenaiError::Misconfiguration` if the variable is unset.
    pub fn new_from_config(config: &GenaiConfig) -> Result<Self, GenaiError> {
        let api_key = std::env::var(&config.api_key_env).map_err(|_| {
            GenaiError::Misconfiguration(format!(
                "environment variable {} is not set",
                config.api_key_env
            ))
        })?;
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Ok(Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        })
    }

    /// Override the base URL (used by tests against a local server)
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait::async_trait]
impl GenerativeBackend for GeminiBackend {
    async fn invoke(&self, request: GenerateRequest) -> Result<GenerateResponse, GenaiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, request.model
        );
        let body = GeminiRequest::from_parts(&request.parts);

        tracing::debug!(
            model = %request.model,
            parts = request.parts.len(),
            "invoking gemini backend"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenaiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "no response body".to_string());
            return Err(GenaiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| GenaiError::Transport(format!("invalid response body: {e}")))?;

        let parts = payload.into_parts();
        tracing::debug!(parts = parts.len(), "gemini backend responded");
        Ok(GenerateResponse { parts })
    }
}

// Wire format for the generateContent endpoint.

#[derive(serde::Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

impl GeminiRequest {
    fn from_parts(parts: &[Part]) -> Self {
        let wire_parts = parts
            .iter()
            .map(|part| match part {
                Part::InlineImage { data, mime_type } => GeminiPart {
                    text: None,
                    inline_data: Some(GeminiInlineData {
                        mime_type: mime_type.clone(),
                        data: data.clone(),
                    }),
                },
                Part::Text(text) => GeminiPart {
                    text: Some(text.clone()),
                    inline_data: None,
                },
            })
            .collect();
        Self {
            contents: vec![GeminiContent { parts: wire_parts }],
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<GeminiInlineData>,
}

#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(serde::Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

impl GeminiResponse {
    /// Flatten the first candidate into plain parts; a response without
    /// candidates or content yields no parts
    fn into_parts(self) -> Vec<Part> {
        self.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| {
                        if let Some(inline) = part.inline_data {
                            Some(Part::InlineImage {
                                data: inline.data,
                                mime_type: inline.mime_type,
                            })
                        } else {
                            part.text.map(Part::Text)
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[derive(serde::Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_config_missing_env_var() {
        let config = GenaiConfig {
            api_key_env: "STYLER_TEST_KEY_THAT_DOES_NOT_EXIST".to_string(),
            ..GenaiConfig::default()
        };

        let err = GeminiBackend::new_from_config(&config).unwrap_err();
        assert!(matches!(err, GenaiError::Misconfiguration(_)));
        assert!(err.to_string().contains("STYLER_TEST_KEY_THAT_DOES_NOT_EXIST"));
    }

    #[test]
    fn test_request_wire_shape() {
        let body = GeminiRequest::from_parts(&[
            Part::InlineImage {
                data: "aGVsbG8=".to_string(),
                mime_type: "image/png".to_string(),
            },
            Part::Text("describe this".to_string()),
        ]);

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json["contents"][0]["parts"][0]["inlineData"]["mimeType"],
            "image/png"
        );
        assert_eq!(
            json["contents"][0]["parts"][0]["inlineData"]["data"],
            "aGVsbG8="
        );
        assert_eq!(json["contents"][0]["parts"][1]["text"], "describe this");
        // Unset fields must not serialize at all.
        assert!(json["contents"][0]["parts"][1]
            .as_object()
            .unwrap()
            .get("inlineData")
            .is_none());
    }

    #[test]
    fn test_response_parts_flattened() {
        let payload: GeminiResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {
                        "parts": [
                            {"text": "here you go"},
                            {"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}
                        ]
                    }
                }]
            }"#,
        )
        .unwrap();

        let parts = payload.into_parts();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], Part::Text("here you go".to_string()));
        assert!(matches!(&parts[1], Part::InlineImage { mime_type, .. } if mime_type == "image/png"));
    }

    #[test]
    fn test_response_without_candidates_is_empty() {
        let payload: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.into_parts().is_empty());
    }
}
