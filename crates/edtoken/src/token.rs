use crate::header::TokenHeader;

/// A decoded token: header plus caller-defined payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<P> {
    pub header: TokenHeader,
    pub payload: P,
}

impl<P> Token<P> {
    /// Token identifier from the header
    pub fn id(&self) -> uuid::Uuid {
        self.header.id
    }

    /// Issue time (seconds since the Unix epoch)
    pub fn issued_at(&self) -> i64 {
        self.header.issued_at
    }

    /// Expiry time (seconds since the Unix epoch)
    pub fn expires_at(&self) -> i64 {
        self.header.expires_at
    }
}

/// A freshly issued token together with its wire encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken<P> {
    pub token: Token<P>,
    raw: String,
}

impl<P> IssuedToken<P> {
    pub(crate) fn new(token: Token<P>, raw: String) -> Self {
        Self { token, raw }
    }

    /// The wire string to hand to the bearer
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consume and return the wire string
    pub fn into_string(self) -> String {
        self.raw
    }
}

impl<P> std::fmt::Display for IssuedToken<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<P> AsRef<str> for IssuedToken<P> {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
