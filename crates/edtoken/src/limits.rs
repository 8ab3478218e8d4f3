//! Size limit constants for input validation

use std::time::Duration;

/// Default lifetime of an issued token (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Maximum length for a wire token string (64KB)
pub(crate) const MAX_TOKEN_LENGTH: usize = 64 * 1024;

// ============================================================================
// Decoded segment size limits
// ============================================================================

/// Maximum size for decoded header JSON (8KB)
/// Headers hold two integers and a UUID, so this is a wide margin
pub(crate) const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded payload JSON (40KB)
/// Base64URL adds ~33%, so an encoded payload at this limit stays below MAX_TOKEN_LENGTH
pub(crate) const MAX_DECODED_PAYLOAD_SIZE: usize = 40 * 1024;

/// Maximum size for decoded signature bytes (1KB)
/// Ed25519 signatures are 64 bytes
pub(crate) const MAX_DECODED_SIGNATURE_SIZE: usize = 1024;

// ============================================================================
// Timestamp bounds
// ============================================================================

/// Minimum valid Unix timestamp (1970-01-01 00:00:00 UTC)
pub(crate) const MIN_TIMESTAMP: i64 = 0;

/// Maximum valid Unix timestamp (2100-01-01 00:00:00 UTC)
/// 4102444800 seconds since Unix epoch
pub(crate) const MAX_TIMESTAMP: i64 = 4_102_444_800;
