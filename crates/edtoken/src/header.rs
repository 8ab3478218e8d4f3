use miniserde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token header structure
///
/// Integrity-protected metadata carried in the first segment of every token.
/// Timestamps are seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenHeader {
    /// Time from which the token is valid
    pub issued_at: i64,

    /// Time after which the token is no longer valid
    pub expires_at: i64,

    /// Unique token identifier, so two otherwise identical tokens never share an encoding
    pub id: Uuid,
}

/// JSON form of [`TokenHeader`]
#[derive(Serialize, Deserialize)]
struct WireHeader {
    #[serde(rename = "iat")]
    issued_at: i64,

    #[serde(rename = "exp")]
    expires_at: i64,

    id: String,
}

impl TokenHeader {
    pub(crate) fn to_json(self) -> String {
        miniserde::json::to_string(&WireHeader {
            issued_at: self.issued_at,
            expires_at: self.expires_at,
            id: self.id.hyphenated().to_string(),
        })
    }

    /// Parse header JSON; `None` if the JSON or the embedded UUID is invalid
    pub(crate) fn from_json(json: &str) -> Option<Self> {
        let wire: WireHeader = miniserde::json::from_str(json).ok()?;
        let id = Uuid::parse_str(&wire.id).ok()?;

        Some(Self {
            issued_at: wire.issued_at,
            expires_at: wire.expires_at,
            id,
        })
    }
}
