//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::DecodeFailure`] → 400
/// - [`ServiceError::Internal`] → 500
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request was malformed — invalid JSON or a body that does not
    /// match the endpoint's schema.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// A value that matched the encoded-string format could not be decoded
    /// back into a JSON value.
    #[error("decode failure: {0}")]
    DecodeFailure(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::DecodeFailure(_) => 400,
            ServiceError::Internal(_) => 500,
        }
    }

    /// Short machine-readable code for the error response body.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::BadRequest(_) => "bad_request",
            ServiceError::DecodeFailure(_) => "decode_failure",
            ServiceError::Internal(_) => "internal_error",
        }
    }
}
