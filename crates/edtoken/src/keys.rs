//! Ed25519 key material
//!
//! Both halves of a [`KeyPair`] are created together by [`KeyPair::generate`].
//! There is no way to build a private key from separately supplied parts, so
//! the public key handed to a verifier is always the pair-mate of the private
//! key used by the issuer.

use crate::error::{Error, Result};
use crate::issuer::TokenIssuer;
use crate::verifier::TokenVerifier;
use aws_lc_rs::rand::SystemRandom;
use aws_lc_rs::signature::{self, Ed25519KeyPair, KeyPair as _, UnparsedPublicKey};
use std::fmt;
use std::sync::Arc;

/// An Ed25519 signing keypair
///
/// Cloning is cheap: clones share the same key material.
#[derive(Clone)]
pub struct KeyPair {
    signing: Arc<Ed25519KeyPair>,
    public: PublicKey,
}

impl KeyPair {
    /// Generate a fresh keypair from the system CSPRNG
    ///
    /// Call this once at process start and hand the result (or its halves)
    /// to the issuer and verifier.
    pub fn generate() -> Result<Self> {
        let rng = SystemRandom::new();
        let pkcs8 = Ed25519KeyPair::generate_pkcs8(&rng)
            .map_err(|e| Error::KeyGeneration(e.to_string()))?;
        let signing = Ed25519KeyPair::from_pkcs8(pkcs8.as_ref())
            .map_err(|e| Error::KeyRejected(e.to_string()))?;
        let public = PublicKey {
            bytes: Arc::from(signing.public_key().as_ref()),
        };

        Ok(Self {
            signing: Arc::new(signing),
            public,
        })
    }

    /// The verification half of this keypair
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Create an issuer signing with this keypair
    pub fn issuer(&self) -> TokenIssuer {
        TokenIssuer::new(self.clone())
    }

    /// Create a verifier for tokens signed by this keypair
    pub fn verifier(&self) -> TokenVerifier {
        TokenVerifier::new(self.public.clone())
    }

    pub(crate) fn sign(&self, message: &[u8]) -> Vec<u8> {
        self.signing.sign(message).as_ref().to_vec()
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .finish_non_exhaustive()
    }
}

/// An Ed25519 public key (32 raw bytes)
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    bytes: Arc<[u8]>,
}

impl PublicKey {
    /// Raw public key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Check `signature` over `message`
    pub(crate) fn verify(&self, message: &[u8], signature: &[u8]) -> bool {
        UnparsedPublicKey::new(&signature::ED25519, &self.bytes[..])
            .verify(message, signature)
            .is_ok()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", crate::utils::base64url::encode(&self.bytes))
    }
}
