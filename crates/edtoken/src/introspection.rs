//! Introspection results
//!
//! [`TokenVerifier::introspect`](crate::TokenVerifier::introspect) classifies
//! every input into exactly one [`Verdict`]. Rejections are ordinary values,
//! not errors: a bearer presenting a bad token is routine.

use crate::token::Token;
use miniserde::Serialize;

/// Outcome of introspecting a wire token
///
/// Only [`Verdict::Valid`] carries the payload. Callers must treat every other
/// variant as "not authorized".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict<P> {
    /// No token was presented
    Empty,

    /// Input is not three Base64URL segments, or the signed content does not parse
    Malformed,

    /// Signature does not verify under the configured public key
    InvalidSignature,

    /// Header `iat` lies after the introspection time
    NotYetIssued { issued_at: i64 },

    /// Header `exp` lies before the introspection time
    Expired { expires_at: i64 },

    /// Signature and validity window check out
    Valid(Token<P>),
}

impl<P> Verdict<P> {
    /// Short name used in logs and reports
    pub const fn as_str(&self) -> &'static str {
        match self {
            Verdict::Empty => "empty",
            Verdict::Malformed => "malformed",
            Verdict::InvalidSignature => "invalid_signature",
            Verdict::NotYetIssued { .. } => "not_yet_issued",
            Verdict::Expired { .. } => "expired",
            Verdict::Valid(_) => "valid",
        }
    }
}

/// Result of introspecting a token string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Introspection<P> {
    raw: String,
    verdict: Verdict<P>,
}

impl<P> Introspection<P> {
    pub(crate) fn new(raw: &str, verdict: Verdict<P>) -> Self {
        Self {
            raw: raw.to_string(),
            verdict,
        }
    }

    /// The token string as presented
    ///
    /// Empty when the input exceeded the maximum token length; oversize input
    /// is classified without being retained.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The verdict reached for this input
    pub fn verdict(&self) -> &Verdict<P> {
        &self.verdict
    }

    /// Consume the introspection, keeping only its verdict
    pub fn into_verdict(self) -> Verdict<P> {
        self.verdict
    }

    /// `true` only for a valid token; the sole authorization signal
    pub fn is_ok(&self) -> bool {
        matches!(self.verdict, Verdict::Valid(_))
    }

    /// No token was presented
    pub fn is_empty(&self) -> bool {
        matches!(self.verdict, Verdict::Empty)
    }

    /// Rejected for structure, encoding or unparseable signed content
    pub fn is_malformed(&self) -> bool {
        matches!(self.verdict, Verdict::Malformed)
    }

    /// Rejected because the signature did not verify
    pub fn is_invalid_signature(&self) -> bool {
        matches!(self.verdict, Verdict::InvalidSignature)
    }

    /// Rejected because `iat` lies in the future
    pub fn is_not_yet_issued(&self) -> bool {
        matches!(self.verdict, Verdict::NotYetIssued { .. })
    }

    /// Rejected because `exp` has passed
    pub fn is_expired(&self) -> bool {
        matches!(self.verdict, Verdict::Expired { .. })
    }

    /// The trusted token, if valid
    pub fn token(&self) -> Option<&Token<P>> {
        match &self.verdict {
            Verdict::Valid(token) => Some(token),
            _ => None,
        }
    }

    /// The trusted payload, if valid
    pub fn payload(&self) -> Option<&P> {
        self.token().map(|token| &token.payload)
    }

    /// Consume the introspection, keeping the token if valid
    pub fn into_token(self) -> Option<Token<P>> {
        match self.verdict {
            Verdict::Valid(token) => Some(token),
            _ => None,
        }
    }

    /// Flag summary suitable for returning to clients
    pub fn report(&self) -> IntrospectionReport {
        IntrospectionReport {
            ok: self.is_ok(),
            expired: self.is_expired(),
            not_issued: self.is_not_yet_issued(),
            malformed: self.is_malformed(),
            invalid_signature: self.is_invalid_signature(),
            token_raw: (!self.raw.is_empty()).then(|| self.raw.clone()),
        }
    }
}

/// Serializable flag view of an [`Introspection`]
///
/// At most one flag is set; none are set when no token was presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntrospectionReport {
    pub ok: bool,
    pub expired: bool,
    #[serde(rename = "notIssued")]
    pub not_issued: bool,
    pub malformed: bool,
    #[serde(rename = "invalidSignature")]
    pub invalid_signature: bool,
    #[serde(rename = "tokenRaw")]
    pub token_raw: Option<String>,
}

impl IntrospectionReport {
    pub fn to_json(&self) -> String {
        miniserde::json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::TokenHeader;
    use uuid::Uuid;

    fn valid() -> Verdict<&'static str> {
        Verdict::Valid(Token {
            header: TokenHeader {
                issued_at: 10,
                expires_at: 20,
                id: Uuid::new_v4(),
            },
            payload: "u1",
        })
    }

    fn flags(report: &IntrospectionReport) -> usize {
        [
            report.ok,
            report.expired,
            report.not_issued,
            report.malformed,
            report.invalid_signature,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }

    #[test]
    fn test_only_valid_exposes_payload() {
        let ok = Introspection::new("a.b.c", valid());
        assert!(ok.is_ok());
        assert_eq!(ok.payload(), Some(&"u1"));

        for verdict in [
            Verdict::<&str>::Empty,
            Verdict::Malformed,
            Verdict::InvalidSignature,
            Verdict::NotYetIssued { issued_at: 10 },
            Verdict::Expired { expires_at: 20 },
        ] {
            let introspection = Introspection::new("a.b.c", verdict);
            assert!(!introspection.is_ok());
            assert!(introspection.payload().is_none());
            assert!(introspection.into_token().is_none());
        }
    }

    #[test]
    fn test_report_sets_at_most_one_flag() {
        let empty = Introspection::<&str>::new("", Verdict::Empty).report();
        assert_eq!(flags(&empty), 0);
        assert_eq!(empty.token_raw, None);

        for verdict in [
            Verdict::Malformed,
            Verdict::InvalidSignature,
            Verdict::NotYetIssued { issued_at: 10 },
            Verdict::Expired { expires_at: 20 },
            valid(),
        ] {
            let report = Introspection::new("a.b.c", verdict).report();
            assert_eq!(flags(&report), 1);
            assert_eq!(report.token_raw.as_deref(), Some("a.b.c"));
        }
    }

    #[test]
    fn test_report_json() {
        let report = Introspection::<&str>::new("x", Verdict::Malformed).report();
        assert_eq!(
            report.to_json(),
            r#"{"ok":false,"expired":false,"notIssued":false,"malformed":true,"invalidSignature":false,"tokenRaw":"x"}"#
        );
    }

    #[test]
    fn test_verdict_names() {
        assert_eq!(Verdict::<()>::Empty.as_str(), "empty");
        assert_eq!(Verdict::<()>::InvalidSignature.as_str(), "invalid_signature");
        assert_eq!(valid().as_str(), "valid");
    }
}
