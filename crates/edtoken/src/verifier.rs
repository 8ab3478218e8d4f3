use crate::header::TokenHeader;
use crate::introspection::{Introspection, Verdict};
use crate::keys::PublicKey;
use crate::limits::{
    MAX_DECODED_HEADER_SIZE, MAX_DECODED_PAYLOAD_SIZE, MAX_DECODED_SIGNATURE_SIZE,
    MAX_TOKEN_LENGTH,
};
use crate::token::Token;
use crate::utils::base64url;

/// Token verifier
///
/// Holds only the public key. Introspection never fails: every input,
/// hostile or not, maps to a [`Verdict`].
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    public_key: PublicKey,
}

impl TokenVerifier {
    /// Create a verifier for tokens signed by the pair-mate of `public_key`
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }

    /// The key signatures are checked against
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Introspect a wire token at time `now` (seconds since the Unix epoch)
    ///
    /// Checks run in a fixed order and the first failing check decides the verdict:
    /// empty input, segment structure, Base64URL decoding, signature, JSON
    /// parsing, nil token id, issue time, expiry. Both time comparisons are
    /// strict, so a token is still valid at exactly its `iat` and its `exp`.
    pub fn introspect<P>(&self, token: &str, now: i64) -> Introspection<P>
    where
        P: miniserde::Deserialize,
    {
        let verdict = self.classify(token, now);

        match &verdict {
            Verdict::InvalidSignature => {
                tracing::warn!(verdict = verdict.as_str(), "token signature rejected");
            }
            Verdict::Valid(valid) => {
                tracing::debug!(verdict = verdict.as_str(), token_id = %valid.id(), "token introspected");
            }
            _ => tracing::debug!(verdict = verdict.as_str(), "token introspected"),
        }

        // Oversize input is not kept around or echoed back in reports
        let raw = if token.len() > MAX_TOKEN_LENGTH { "" } else { token };
        Introspection::new(raw, verdict)
    }

    fn classify<P>(&self, token: &str, now: i64) -> Verdict<P>
    where
        P: miniserde::Deserialize,
    {
        // 0. No token presented
        if token.is_empty() {
            return Verdict::Empty;
        }

        // 1. Check token format (header, payload, signature)
        if token.len() > MAX_TOKEN_LENGTH {
            return Verdict::Malformed;
        }
        let Some((header_b64, payload_b64, signature_b64)) = split_token(token) else {
            return Verdict::Malformed;
        };

        // 2. Decode all three segments with size limits
        let decoded = base64url::decode_bytes(header_b64, MAX_DECODED_HEADER_SIZE).and_then(|h| {
            Ok((
                h,
                base64url::decode_bytes(payload_b64, MAX_DECODED_PAYLOAD_SIZE)?,
                base64url::decode_bytes(signature_b64, MAX_DECODED_SIGNATURE_SIZE)?,
            ))
        });
        let (header_json, payload_json, signature) = match decoded {
            Ok(segments) => segments,
            Err(e) => {
                tracing::trace!(reason = %e, "token segment rejected");
                return Verdict::Malformed;
            }
        };

        // 3. Verify signature over the literal "header.payload" bytes
        let signing_input = &token[..header_b64.len() + 1 + payload_b64.len()];
        if !self.public_key.verify(signing_input.as_bytes(), &signature) {
            return Verdict::InvalidSignature;
        }

        // 4. Parse header and payload
        let Some(header) = std::str::from_utf8(&header_json)
            .ok()
            .and_then(TokenHeader::from_json)
        else {
            return Verdict::Malformed;
        };
        let Some(payload) = std::str::from_utf8(&payload_json)
            .ok()
            .and_then(|json| miniserde::json::from_str::<P>(json).ok())
        else {
            return Verdict::Malformed;
        };

        // 5. A nil id was never legitimately issued
        if header.id.is_nil() {
            return Verdict::Malformed;
        }

        // 6-7. Validity window
        if header.issued_at > now {
            return Verdict::NotYetIssued {
                issued_at: header.issued_at,
            };
        }
        if header.expires_at < now {
            return Verdict::Expired {
                expires_at: header.expires_at,
            };
        }

        Verdict::Valid(Token { header, payload })
    }
}

/// Split into exactly three dot-separated segments
fn split_token(token: &str) -> Option<(&str, &str, &str)> {
    let mut parts = token.split('.');
    let header = parts.next()?;
    let payload = parts.next()?;
    let signature = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((header, payload, signature))
}
