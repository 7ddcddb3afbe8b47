//! Format sniffing for the decrypt endpoint.
//!
//! Deciding that a string "was encoded" purely from its shape is a
//! best-effort heuristic, not a content-type tag: any literal string that
//! happens to satisfy the grammar will be fed to the codec, and a decode
//! failure there fails the request. The policy lives here at the
//! orchestration boundary; the codec itself has no opinion on whether a
//! given string is supposed to be decoded.

/// Returns `true` if `text` matches the encoded-string grammar
/// (the codec's published format contract):
///
/// ```text
/// ^([A-Za-z0-9+/]{4})*([A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{2}==)?$
/// ```
///
/// Note the empty string matches (zero groups).
pub fn looks_encoded(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() % 4 != 0 {
        return false;
    }
    let pad = bytes.iter().rev().take_while(|&&b| b == b'=').count();
    if pad > 2 {
        return false;
    }
    bytes[..bytes.len() - pad]
        .iter()
        .all(|&b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}
