//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::algo::base64::Base64Codec;
use crate::algo::hmac::HmacSha256Signer;
use crate::algo::{FieldCodec, SignatureScheme};

/// Application state shared across all request handlers.
///
/// The algorithms live behind trait objects so alternate codec or
/// signature implementations can be swapped in without touching the
/// handlers. Both fields are `Arc`-wrapped; cloning the state per request
/// is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Reversible value-to-text codec used by encrypt/decrypt.
    pub codec: Arc<dyn FieldCodec>,
    /// Keyed signature scheme used by sign/verify.
    pub signer: Arc<dyn SignatureScheme>,
}

impl AppState {
    /// Create a new [`AppState`] from the provided algorithm implementations.
    pub fn new(codec: Arc<dyn FieldCodec>, signer: Arc<dyn SignatureScheme>) -> Self {
        Self { codec, signer }
    }
}

impl Default for AppState {
    /// Creates an [`AppState`] with the production algorithms and the
    /// default signing secret, suitable for tests.
    fn default() -> Self {
        Self::new(
            Arc::new(Base64Codec),
            Arc::new(HmacSha256Signer::new(crate::config::DEFAULT_SIGNING_SECRET)),
        )
    }
}
