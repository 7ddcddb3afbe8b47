//! Manually constructed HMAC-SHA-256 signatures over canonicalised JSON.
//!
//! The two-pass construction is built by hand from the raw SHA-256
//! primitive: `H(key⊕opad ++ H(key⊕ipad ++ message))` with the standard
//! pad constants and the hash's 64-byte block size. The secret is injected
//! at construction time, never compiled in.
//!
//! A single static shared secret gives no real confidentiality and no
//! protection if the secret leaks; that simplification is deliberate and
//! callers must not treat these digests as more than integrity tags.

use serde_json::Value;
use sha2::{Digest, Sha256};

use super::canonical::canonical_text;
use super::{SignError, SignatureScheme};

/// SHA-256 internal block size in bytes.
pub const BLOCK_LEN: usize = 64;

/// Hex digest length for a 256-bit hash.
pub const DIGEST_HEX_LEN: usize = 64;

const OPAD: u8 = 0x5C;
const IPAD: u8 = 0x36;

/// Secret key material for the signer.
///
/// The memory is overwritten with zeroes on drop, and the bytes are never
/// printed, not even in debug builds.
#[derive(Clone)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// Wrap raw secret bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

impl Drop for SecretBytes {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecretBytes([REDACTED])")
    }
}

/// Keyed signature scheme: manual HMAC-SHA-256 over the canonical form.
#[derive(Debug, Clone)]
pub struct HmacSha256Signer {
    secret: SecretBytes,
}

impl HmacSha256Signer {
    /// Create a signer holding `secret`.
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            secret: SecretBytes::new(secret),
        }
    }

    /// Derive the block-sized key: hash the secret down if it exceeds the
    /// block size, otherwise right-pad with zero bytes.
    fn block_key(&self) -> [u8; BLOCK_LEN] {
        let raw = &self.secret.0;
        let mut key = [0u8; BLOCK_LEN];
        if raw.len() > BLOCK_LEN {
            let hashed = Sha256::digest(raw);
            key[..hashed.len()].copy_from_slice(&hashed);
        } else {
            key[..raw.len()].copy_from_slice(raw);
        }
        key
    }

    fn digest_hex(&self, message: &[u8]) -> String {
        let key = self.block_key();

        let mut inner_key = key;
        inner_key.iter_mut().for_each(|b| *b ^= IPAD);
        let mut outer_key = key;
        outer_key.iter_mut().for_each(|b| *b ^= OPAD);

        let inner = Sha256::new()
            .chain_update(inner_key)
            .chain_update(message)
            .finalize();
        let outer = Sha256::new()
            .chain_update(outer_key)
            .chain_update(inner)
            .finalize();

        use std::fmt::Write as _;
        let mut hex = String::with_capacity(DIGEST_HEX_LEN);
        for byte in outer {
            // Writing into a String cannot fail.
            let _ = write!(hex, "{byte:02x}");
        }
        hex
    }
}

impl SignatureScheme for HmacSha256Signer {
    fn name(&self) -> &'static str {
        "hmac-sha256"
    }

    fn generate(&self, value: &Value) -> Result<String, SignError> {
        if !value.is_object() {
            return Err(SignError::UnsupportedShape);
        }
        Ok(self.digest_hex(canonical_text(value).as_bytes()))
    }

    fn verify(&self, value: &Value, signature: &str) -> Result<bool, SignError> {
        // Full recomputation; plain equality (no timing hardening, by the
        // same simplification as the shared secret).
        Ok(self.generate(value)? == signature)
    }
}
