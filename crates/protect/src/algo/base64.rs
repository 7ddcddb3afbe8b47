//! From-scratch Base64 codec over serialised JSON values.
//!
//! A value is serialised to compact JSON bytes, zero-padded to a multiple
//! of 3 bytes, and each 3-byte group is repacked into four 6-bit symbols
//! indexed into the 64-character alphabet. When padding was applied, the
//! trailing symbols derived from the zero fill are replaced by literal `=`
//! characters.
//!
//! # Encoded-string grammar
//!
//! ```text
//! ^([A-Za-z0-9+/]{4})*([A-Za-z0-9+/]{3}=|[A-Za-z0-9+/]{2}==)?$
//! ```
//!
//! Total length (pad characters included) is always a multiple of 4, and
//! `=` may only occupy the final one or two positions.

use serde_json::Value;

use super::{CodecError, FieldCodec};

/// The 64-character output alphabet, indexed by 6-bit symbol value.
pub const ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Trailing pad character marking dropped zero-fill symbols.
pub const PAD: u8 = b'=';

/// Reversible JSON-value-to-text codec. Stateless; safe to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64Codec;

impl FieldCodec for Base64Codec {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn encode(&self, value: &Value) -> String {
        // Serialising a `Value` into a Vec cannot fail: every key is a
        // string and the writer is infallible.
        let bytes = serde_json::to_vec(value).unwrap_or_default();
        encode_bytes(&bytes)
    }

    fn decode(&self, text: &str) -> Result<Value, CodecError> {
        let bytes = decode_bytes(text)?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Map a symbol character back to its 6-bit index, or `None` if the byte is
/// outside the alphabet.
fn symbol_index(byte: u8) -> Option<u32> {
    match byte {
        b'A'..=b'Z' => Some(u32::from(byte - b'A')),
        b'a'..=b'z' => Some(u32::from(byte - b'a') + 26),
        b'0'..=b'9' => Some(u32::from(byte - b'0') + 52),
        b'+' => Some(62),
        b'/' => Some(63),
        _ => None,
    }
}

/// Encode a raw byte sequence into the alphabet with trailing `=` padding.
///
/// The empty input encodes to the empty string; output length is always a
/// multiple of 4.
pub fn encode_bytes(bytes: &[u8]) -> String {
    let pad = (3 - bytes.len() % 3) % 3;

    let mut padded = Vec::with_capacity(bytes.len() + pad);
    padded.extend_from_slice(bytes);
    padded.resize(bytes.len() + pad, 0);

    let mut out = String::with_capacity(padded.len() / 3 * 4);
    for group in padded.chunks_exact(3) {
        // 24 bits, most significant byte first.
        let bits =
            (u32::from(group[0]) << 16) | (u32::from(group[1]) << 8) | u32::from(group[2]);
        for shift in [18u32, 12, 6, 0] {
            out.push(ALPHABET[((bits >> shift) & 0x3F) as usize] as char);
        }
    }

    // The final `pad` symbols encode only zero fill; replace them with the
    // pad marker so decoding can recover the original length.
    if pad > 0 {
        out.truncate(out.len() - pad);
        for _ in 0..pad {
            out.push(PAD as char);
        }
    }
    out
}

/// Decode an encoded string back into the raw byte sequence it was
/// produced from.
///
/// # Errors
///
/// Returns [`CodecError::Format`] if the text violates the grammar: length
/// not a multiple of 4, a character outside the alphabet, or misplaced or
/// excess pad characters.
pub fn decode_bytes(text: &str) -> Result<Vec<u8>, CodecError> {
    let bytes = text.as_bytes();
    if bytes.len() % 4 != 0 {
        return Err(CodecError::Format("length is not a multiple of 4"));
    }

    let pad = bytes.iter().rev().take_while(|&&b| b == PAD).count();
    if pad > 2 {
        return Err(CodecError::Format("more than two pad characters"));
    }

    let mut symbols = Vec::with_capacity(bytes.len());
    for &b in &bytes[..bytes.len() - pad] {
        match symbol_index(b) {
            Some(v) => symbols.push(v),
            None if b == PAD => {
                return Err(CodecError::Format("pad character before the end"))
            }
            None => return Err(CodecError::Format("character outside the alphabet")),
        }
    }
    // Pad symbols decode as index 0, exactly reversing the zero fill.
    symbols.resize(bytes.len(), 0);

    let mut out = Vec::with_capacity(symbols.len() / 4 * 3);
    for quad in symbols.chunks_exact(4) {
        let bits = (quad[0] << 18) | (quad[1] << 12) | (quad[2] << 6) | quad[3];
        out.push((bits >> 16) as u8);
        out.push((bits >> 8) as u8);
        out.push(bits as u8);
    }
    out.truncate(out.len() - pad);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde_json::json;

    #[test]
    fn encode_decode_round_trip() {
        let codec = Base64Codec;
        let values = [
            json!("John Doe"),
            json!(30),
            json!(-1.5),
            json!(true),
            json!(null),
            json!([1, "two", {"three": 3}]),
            json!({"contact": {"email": "a@b.com"}}),
        ];
        for v in values {
            let encoded = codec.encode(&v);
            let decoded = codec.decode(&encoded).unwrap();
            assert_eq!(decoded, v, "round trip failed for {v}");
        }
    }

    #[test]
    fn encoded_length_is_multiple_of_four() {
        let codec = Base64Codec;
        for v in [json!(""), json!("a"), json!("ab"), json!("abc"), json!({"k": [1, 2, 3]})] {
            assert_eq!(codec.encode(&v).len() % 4, 0);
        }
    }

    #[test]
    fn empty_bytes_encode_to_empty_string() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(decode_bytes("").unwrap(), b"");
    }

    #[test]
    fn multiple_of_three_has_no_padding() {
        let encoded = encode_bytes(b"abcdef");
        assert!(!encoded.contains('='));
        assert_eq!(encoded.len(), 8);
    }

    #[test]
    fn pad_counts() {
        // 1 leftover byte → 2 pad chars, 2 leftover bytes → 1 pad char.
        assert!(encode_bytes(b"a").ends_with("=="));
        assert!(encode_bytes(b"ab").ends_with('='));
        assert!(!encode_bytes(b"ab").ends_with("=="));
    }

    #[test]
    fn matches_reference_base64() {
        // The zero-fill-then-replace padding scheme produces exactly the
        // standard Base64 encoding of the same bytes.
        for input in [&b""[..], b"f", b"fo", b"foo", b"foob", b"fooba", b"foobar"] {
            assert_eq!(encode_bytes(input), STANDARD.encode(input));
        }
        let payload = serde_json::to_vec(&json!({"name": "John Doe", "age": 30})).unwrap();
        assert_eq!(encode_bytes(&payload), STANDARD.encode(&payload));
    }

    #[test]
    fn byte_round_trip_all_pad_cases() {
        for input in [&b""[..], b"x", b"xy", b"xyz", b"xyzw", &[0u8, 255, 7, 1]] {
            let encoded = encode_bytes(input);
            assert_eq!(decode_bytes(&encoded).unwrap(), input);
        }
    }

    #[test]
    fn decode_rejects_bad_length() {
        assert!(matches!(
            decode_bytes("abc"),
            Err(CodecError::Format(_))
        ));
    }

    #[test]
    fn decode_rejects_non_alphabet_characters() {
        assert!(matches!(decode_bytes("ab!d"), Err(CodecError::Format(_))));
        assert!(matches!(decode_bytes("ab d"), Err(CodecError::Format(_))));
    }

    #[test]
    fn decode_rejects_misplaced_pad() {
        assert!(matches!(decode_bytes("a=bc"), Err(CodecError::Format(_))));
        assert!(matches!(decode_bytes("===="), Err(CodecError::Format(_))));
    }

    #[test]
    fn decode_rejects_corrupt_payload() {
        // Valid grammar, but the bytes are not JSON.
        let garbage = encode_bytes(b"\xff\xfe\x00");
        let codec = Base64Codec;
        assert!(matches!(
            codec.decode(&garbage),
            Err(CodecError::Deserialize(_))
        ));
    }

    #[test]
    fn encode_is_deterministic() {
        let codec = Base64Codec;
        let v = json!({"a": [1, 2], "b": "x"});
        assert_eq!(codec.encode(&v), codec.encode(&v));
    }
}
