//! Data-protection algorithm primitives.
//!
//! This module is intentionally free of HTTP dependencies. It defines the
//! capability traits the orchestration layer programs against, plus the two
//! concrete implementations:
//!
//! - [`base64::Base64Codec`] — reversible encoding of JSON values into
//!   printable strings.
//! - [`hmac::HmacSha256Signer`] — order-invariant keyed signatures over
//!   JSON objects.
//!
//! Alternate algorithms can be substituted behind the traits without
//! touching the server layer.

pub mod base64;
pub mod canonical;
pub mod hmac;

use thiserror::Error;

/// Errors produced by [`FieldCodec::decode`].
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input text is not a well-formed encoded string.
    #[error("malformed encoded string: {0}")]
    Format(&'static str),

    /// The text decoded to bytes, but the bytes are not a valid serialised
    /// JSON value (corrupt or truncated payload).
    #[error("decoded bytes are not a valid JSON value: {0}")]
    Deserialize(#[from] serde_json::Error),
}

/// Errors produced by [`SignatureScheme`] operations.
#[derive(Debug, Error)]
pub enum SignError {
    /// The value cannot be canonicalised deterministically; only JSON
    /// objects are signable at the top level.
    #[error("unsupported value shape: expected a JSON object")]
    UnsupportedShape,
}

/// A reversible value-to-text encoding.
///
/// Implementations must be pure: identical input values always produce the
/// identical encoded string, and `decode` is an exact inverse of `encode`
/// for every value `encode` can produce.
#[cfg_attr(test, mockall::automock)]
pub trait FieldCodec: Send + Sync {
    /// Short identifier for this codec (reported by the health endpoint).
    fn name(&self) -> &'static str;

    /// Encode a JSON value into its printable-string form. Never fails.
    fn encode(&self, value: &serde_json::Value) -> String;

    /// Decode an encoded string back into the JSON value it was produced
    /// from.
    ///
    /// # Errors
    ///
    /// [`CodecError::Format`] if `text` violates the encoded-string grammar;
    /// [`CodecError::Deserialize`] if the recovered bytes are corrupt.
    fn decode(&self, text: &str) -> Result<serde_json::Value, CodecError>;
}

/// A keyed, order-invariant signature over a JSON object.
///
/// Two objects equal as sets of key/value pairs must produce identical
/// signatures regardless of property insertion order, at every nesting
/// level that is itself an object.
#[cfg_attr(test, mockall::automock)]
pub trait SignatureScheme: Send + Sync {
    /// Short identifier for this scheme (reported by the health endpoint).
    fn name(&self) -> &'static str;

    /// Generate a hex-encoded digest for `value`.
    ///
    /// # Errors
    ///
    /// [`SignError::UnsupportedShape`] if `value` is not a JSON object.
    fn generate(&self, value: &serde_json::Value) -> Result<String, SignError>;

    /// Recompute the digest for `value` and compare it against `signature`.
    ///
    /// A mismatch is `Ok(false)`, not an error. The comparison is exact
    /// byte equality after a full recomputation.
    ///
    /// # Errors
    ///
    /// [`SignError::UnsupportedShape`] if `value` is not a JSON object.
    fn verify(&self, value: &serde_json::Value, signature: &str) -> Result<bool, SignError>;
}
