//! Request and response types exchanged over the public HTTP API.
//!
//! All bodies are JSON. The field names (`json_field`, `encrypted_json`,
//! `signature`) are the service's wire contract and must not be renamed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Shared payload body
// ---------------------------------------------------------------------------

/// A flat JSON object wrapper, used as the request body for
/// `POST /encrypt`, `POST /decrypt`, and `POST /sign`, and as the response
/// body for `POST /decrypt`.
///
/// `json_field` maps string keys to arbitrary JSON values; nested objects
/// and arrays are allowed as values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawJsonBody {
    /// Arbitrary JSON object the operation is applied to, at depth one.
    pub json_field: serde_json::Map<String, serde_json::Value>,
}

// ---------------------------------------------------------------------------
// Encrypt endpoint
// ---------------------------------------------------------------------------

/// Successful response body for `POST /encrypt`.
///
/// Every entry of the input `json_field` appears here under the same key,
/// with the value replaced by its encoded-string form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedResponse {
    /// One encoded string per input entry, keyed identically to the input.
    pub encrypted_json: BTreeMap<String, String>,
}

// ---------------------------------------------------------------------------
// Sign / verify endpoints
// ---------------------------------------------------------------------------

/// Successful response body for `POST /sign`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignResponse {
    /// Hex-encoded keyed digest of the canonicalised `json_field`.
    pub signature: String,
}

/// Request body for `POST /verify`: the payload together with a candidate
/// signature to check it against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyRequest {
    /// JSON object the signature claims to cover.
    pub json_field: serde_json::Map<String, serde_json::Value>,
    /// Candidate hex digest to verify.
    pub signature: String,
}

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error response body returned on any non-2xx status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short machine-readable error code (e.g. `"bad_request"`).
    pub code: String,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status; always `"ok"` for this stateless service.
    pub status: String,
    /// Name of the active field codec.
    pub codec: String,
    /// Name of the active signature scheme.
    pub signer: String,
}
