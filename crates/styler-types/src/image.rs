//! Inline image assets
//!
//! Images travel through the system as base64 text plus a mime type, which
//! is the form the generative API consumes and produces. Assets are
//! immutable once constructed; cloning is a plain value copy.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an asset's base64 payload cannot be decoded
#[derive(Error, Debug)]
#[error("invalid base64 image payload: {0}")]
pub struct ImageDecodeError(#[from] base64::DecodeError);

/// An image payload encoded as base64 text, tagged with its mime type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAsset {
    /// Base64-encoded image bytes
    pub data: String,
    /// Mime type of the decoded bytes (e.g. "image/png")
    pub mime_type: String,
}

impl ImageAsset {
    /// Create an asset from an already-encoded base64 payload
    #[must_use]
    pub fn from_base64(data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Create an asset by encoding raw image bytes
    #[must_use]
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self {
            data: BASE64.encode(bytes),
            mime_type: mime_type.into(),
        }
    }

    /// Decode the base64 payload back into raw bytes
    ///
    /// # Errors
    ///
    /// Returns `ImageDecodeError` if the payload is not valid base64.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ImageDecodeError> {
        Ok(BASE64.decode(&self.data)?)
    }

    /// Approximate decoded size in bytes, without decoding
    #[must_use]
    pub fn approx_len(&self) -> usize {
        self.data.len() / 4 * 3
    }
}
