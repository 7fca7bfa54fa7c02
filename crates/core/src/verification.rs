//! Development email-verification tokens of the form `verify:<email>:<timestamp>`.
//!
//! These tokens carry no signature and no expiry check: anyone who knows an
//! address can confirm it. They exist so the front-end can confirm an
//! account without a mail round-trip during development.
// TODO: replace with an HMAC-signed token that expires, issued at sign-up.

use crate::error::CoreError;
use crate::signup::normalize_email;

/// Prefix every verification token must carry.
pub const TOKEN_PREFIX: &str = "verify:";

/// A parsed verification token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationToken {
    /// Normalized (trimmed, lowercased) email address.
    pub email: String,
    /// Unix timestamp from the third segment, when it is numeric.
    pub issued_at: Option<i64>,
}

impl VerificationToken {
    /// Parse a raw token string.
    ///
    /// - empty -> `"Token is required"`
    /// - no `verify:` prefix -> `"Invalid token"`
    /// - empty email segment -> `"Invalid token format"`
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.is_empty() {
            return Err(CoreError::Validation("Token is required".to_string()));
        }
        if !raw.starts_with(TOKEN_PREFIX) {
            return Err(CoreError::Validation("Invalid token".to_string()));
        }

        let mut segments = raw.split(':').skip(1);
        let email = segments.next().map(normalize_email).unwrap_or_default();
        if email.is_empty() {
            return Err(CoreError::Validation("Invalid token format".to_string()));
        }
        let issued_at = segments.next().and_then(|ts| ts.trim().parse::<i64>().ok());

        Ok(Self { email, issued_at })
    }

    /// Build the token string for an address.
    pub fn format(email: &str, issued_at: i64) -> String {
        format!("{TOKEN_PREFIX}{email}:{issued_at}")
    }
}
