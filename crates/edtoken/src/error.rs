//! Errors for edtoken
//!
//! Rejected tokens are not errors. `TokenVerifier::introspect` reports them as a
//! [`Verdict`](crate::Verdict). The variants here cover broken invariants on the
//! issuing side: key material that cannot be produced, or a token that could
//! not be encoded within the wire limits.

use thiserror::Error;

/// edtoken Errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // ============================================================================
    // Key Errors
    // ============================================================================
    #[error("Key generation failed: {0}")]
    KeyGeneration(String),

    #[error("Key rejected: {0}")]
    KeyRejected(String),

    // ============================================================================
    // Encoding Errors
    // ============================================================================
    #[error("Token encoding failed: {0}")]
    EncodingFailure(String),

    // ============================================================================
    // Timestamp Errors
    // ============================================================================
    #[error("Timestamp out of bounds: {value} (valid range: {min} to {max})")]
    TimestampOutOfBounds { value: i64, min: i64, max: i64 },

    #[error("Integer overflow in timestamp arithmetic")]
    TimestampOverflow,
}

/// Result type alias for edtoken operations
pub type Result<T> = std::result::Result<T, Error>;
