//! # edtoken - Compact, Stateless Signed Tokens
//!
//! **edtoken** issues and introspects authentication tokens that bind a
//! subject to a validity window. Tokens are signed with Ed25519 and carry
//! everything needed to check them, so verification needs no storage.
//!
//! ## Wire Format
//!
//! ```text
//! base64url(json(header)) "." base64url(json(payload)) "." base64url(signature)
//! ```
//!
//! Base64URL segments are unpadded. The header is
//! `{"iat":<seconds>,"exp":<seconds>,"id":"<uuid>"}` with timestamps in seconds
//! since the Unix epoch. The signature covers the literal ASCII bytes of the
//! first two segments joined by `.`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use edtoken::*;
//!
//! #[derive(miniserde::Serialize, miniserde::Deserialize)]
//! struct Subject {
//!     subject: String,
//! }
//!
//! let keys = KeyPair::generate()?;
//! let issuer = keys.issuer();
//! let verifier = keys.verifier();
//!
//! let issued = issuer.issue(Subject { subject: "u1".into() }, now)?;
//!
//! let introspection = verifier.introspect::<Subject>(issued.as_str(), now);
//! match introspection.payload() {
//!     Some(subject) => println!("Authorized: {}", subject.subject),
//!     None => println!("Rejected: {}", introspection.verdict().as_str()),
//! }
//! ```
//!
//! ## Introspection
//!
//! Introspection never fails. Each input maps to exactly one [`Verdict`],
//! decided by the first check that does not pass:
//!
//! ```text
//! empty input              -> Empty
//! not three segments       -> Malformed
//! bad Base64URL            -> Malformed
//! signature mismatch       -> InvalidSignature
//! unparseable JSON         -> Malformed
//! nil token id             -> Malformed
//! iat > now                -> NotYetIssued
//! exp < now                -> Expired
//! otherwise                -> Valid(token)
//! ```
//!
//! Only `Valid` exposes the payload. Time comparisons are strict: a token is
//! still valid at exactly its `exp`.
//!
//! ## Time
//!
//! Neither issuer nor verifier reads a clock. Callers pass `now` explicitly,
//! which keeps both deterministic; [`current_timestamp`] is provided for
//! callers that want the system time.

mod error;

// Internal modules
pub(crate) mod header;
pub(crate) mod introspection;
pub(crate) mod issuer;
pub(crate) mod keys;
pub(crate) mod limits;
pub(crate) mod token;
pub(crate) mod utils;
pub(crate) mod verifier;

// Public Interface
pub use error::{Error, Result};
pub use header::TokenHeader;
pub use introspection::{Introspection, IntrospectionReport, Verdict};
pub use issuer::TokenIssuer;
pub use keys::{KeyPair, PublicKey};
pub use limits::DEFAULT_TOKEN_TTL;
pub use token::{IssuedToken, Token};
pub use verifier::TokenVerifier;

pub use uuid::Uuid;

/// Current Unix timestamp in seconds
pub fn current_timestamp() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_secs() as i64
}
