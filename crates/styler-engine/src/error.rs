//! Generation error taxonomy

use styler_genai::GenaiError;
use thiserror::Error;

/// Failure modes of a try-on generation
#[derive(Error, Debug)]
pub enum GenerationError {
    /// A required input image was absent; no external call was made
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// The composition call succeeded but returned no inline image
    #[error("the model produced no image")]
    NoImageProduced,

    /// The composition call itself failed
    #[error(transparent)]
    Backend(#[from] GenaiError),
}
