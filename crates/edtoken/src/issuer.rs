use crate::error::{Error, Result};
use crate::header::TokenHeader;
use crate::keys::KeyPair;
use crate::limits::{
    DEFAULT_TOKEN_TTL, MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_TOKEN_LENGTH,
};
use crate::token::{IssuedToken, Token};
use crate::utils::base64url;
use crate::utils::bounds::{add_ttl, validate_timestamp_bounds};
use std::time::Duration;
use uuid::Uuid;

/// Token issuer
///
/// Configured once with a keypair and a TTL, then reused for every token.
/// Issuing is a pure function of its arguments: the current time and token
/// id are supplied by the caller.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    keys: KeyPair,
    ttl: Duration,
}

impl TokenIssuer {
    /// Create an issuer with the default 24 hour TTL
    pub fn new(keys: KeyPair) -> Self {
        Self {
            keys,
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Configure the token lifetime
    ///
    /// Sub-second precision is truncated since header timestamps are whole seconds.
    pub fn ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// The configured token lifetime
    pub fn token_ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token with a freshly generated v4 id
    pub fn issue<P>(&self, payload: P, now: i64) -> Result<IssuedToken<P>>
    where
        P: miniserde::Serialize,
    {
        self.generate(payload, Uuid::new_v4(), now)
    }

    /// Issue a token for `payload` with the given `id`, valid from `now` for the configured TTL
    ///
    /// Fails with `EncodingFailure` when the serialized payload exceeds the
    /// decoded payload limit enforced by [`TokenVerifier`](crate::TokenVerifier).
    pub fn generate<P>(&self, payload: P, id: Uuid, now: i64) -> Result<IssuedToken<P>>
    where
        P: miniserde::Serialize,
    {
        // 1. Compute validity window
        validate_timestamp_bounds(now)?;
        let expires_at = add_ttl(now, self.ttl)?;
        validate_timestamp_bounds(expires_at)?;

        let header = TokenHeader {
            issued_at: now,
            expires_at,
            id,
        };

        // 2. Serialize header and payload independently
        // Two bounded integers and a UUID always fit
        let header_json = header.to_json();
        debug_assert!(header_json.len() <= MAX_DECODED_HEADER_SIZE);

        let payload_json = miniserde::json::to_string(&payload);
        if payload_json.len() > MAX_DECODED_PAYLOAD_SIZE {
            return Err(Error::EncodingFailure(format!(
                "Payload too large: {} bytes (maximum: {MAX_DECODED_PAYLOAD_SIZE} bytes)",
                payload_json.len()
            )));
        }

        // 3. Sign the literal "header.payload" prefix
        let signing_input = format!(
            "{}.{}",
            base64url::encode(&header_json),
            base64url::encode(&payload_json)
        );
        let signature = self.keys.sign(signing_input.as_bytes());
        let raw = format!("{signing_input}.{}", base64url::encode(&signature));

        // Implied by the payload limit
        debug_assert!(raw.len() <= MAX_TOKEN_LENGTH);

        tracing::trace!(token_id = %id, expires_at, "issued token");

        Ok(IssuedToken::new(Token { header, payload }, raw))
    }
}
