//! Backend error taxonomy

use thiserror::Error;

/// Failure modes of a generative backend invocation
#[derive(Error, Debug)]
pub enum GenaiError {
    /// Backend could not be constructed (missing key, bad client config)
    #[error("generative backend misconfigured: {0}")]
    Misconfiguration(String),

    /// Network-level failure or an unparseable response
    #[error("generative service transport failure: {0}")]
    Transport(String),

    /// The service answered with a failure payload
    #[error("generative service error (status {status}): {message}")]
    Api { status: u16, message: String },
}
