//! Base64URL encoding/decoding per RFC 4648
//!
//! This module provides a thin wrapper around the `base64` crate with
//! size limit validation for security. Tokens use the unpadded alphabet
//! on both sides, so padded input is rejected.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

/// Reason a segment could not be decoded
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum DecodeError {
    #[error("Base64URL decode failed: {0}")]
    Base64(String),

    #[error("Decoded size exceeds limit: {size} bytes (max: {max})")]
    TooLarge { size: usize, max: usize },
}

/// Encode bytes to an unpadded Base64URL string
pub(crate) fn encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Decode Base64URL string to bytes with maximum size limit
pub(crate) fn decode_bytes(input: &str, max_size: usize) -> Result<Vec<u8>, DecodeError> {
    // Reject before allocating when the encoded length already implies an oversize result
    if base64::decoded_len_estimate(input.len()) > max_size + 2 {
        return Err(DecodeError::TooLarge {
            size: base64::decoded_len_estimate(input.len()),
            max: max_size,
        });
    }

    let result = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| DecodeError::Base64(e.to_string()))?;

    if result.len() > max_size {
        return Err(DecodeError::TooLarge {
            size: result.len(),
            max: max_size,
        });
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_invalid() {
        assert!(decode_bytes("!!!", 1000).is_err());
        assert!(decode_bytes("////", 1000).is_err()); // standard alphabet, not URL-safe
        assert!(decode_bytes("SGVsbG8=", 1000).is_err()); // padding is rejected
    }

    #[test]
    fn test_decode_valid() {
        let result = decode_bytes("SGVsbG8", 1000).unwrap();
        assert_eq!(result, b"Hello");
    }

    #[test]
    fn test_decode_with_limit() {
        // Within limit
        let result = decode_bytes("SGVsbG8", 10).unwrap();
        assert_eq!(result, b"Hello");

        // Exceeds limit
        assert!(matches!(
            decode_bytes("SGVsbG8", 3),
            Err(DecodeError::TooLarge { max: 3, .. })
        ));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_bytes("", 1000).unwrap(), Vec::<u8>::new());
        assert_eq!(decode_bytes("", 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_encode_has_no_padding() {
        assert_eq!(encode(b"Hello"), "SGVsbG8");
        assert_eq!(encode([0xfb, 0xff]), "-_8");
    }
}
