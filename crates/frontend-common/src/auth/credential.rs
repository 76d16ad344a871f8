//! Bearer credential and the session it belongs to

use crate::config::AuthConfig;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use chrono::{DateTime, Duration, Utc};
pub use senso_http::types::{Role, UserProfile};
use std::fmt;

/// Opaque bearer token issued by the backend.
///
/// The client never interprets the token beyond one thing: when it is a JWT
/// carrying an `exp` claim, that instant is kept as the credential's expiry.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        let token = token.into();
        let expires_at = jwt_expiry(&token);
        Self { token, expires_at }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub const fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Tokens without a readable expiry never expire client-side
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| {
            now + Duration::seconds(AuthConfig::EXPIRY_SKEW_SECS) >= expires_at
        })
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// A credential together with the profile it was issued for.
///
/// The two only ever exist as a pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub credential: Credential,
    pub profile: UserProfile,
}

fn jwt_expiry(token: &str) -> Option<DateTime<Utc>> {
    let mut segments = token.split('.');
    let (_header, payload, _signature) = (segments.next()?, segments.next()?, segments.next()?);
    if segments.next().is_some() {
        return None;
    }

    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    let exp = claims.get("exp")?;
    #[allow(clippy::cast_possible_truncation)]
    let seconds = exp.as_i64().or_else(|| exp.as_f64().map(|exp| exp as i64))?;
    DateTime::from_timestamp(seconds, 0)
}

#[cfg(test)]
pub(crate) fn test_jwt(exp: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"1","exp":{exp}}}"#));
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_tokens_have_no_expiry() {
        let credential = Credential::new("tok1");
        assert_eq!(credential.expires_at(), None);
        assert!(!credential.is_expired(Utc::now()));
    }

    #[test]
    fn jwt_exp_claim_is_read() {
        let credential = Credential::new(test_jwt(1_700_000_000));
        assert_eq!(
            credential.expires_at(),
            DateTime::from_timestamp(1_700_000_000, 0)
        );
    }

    #[test]
    fn expiry_honours_skew() {
        let now = Utc::now();
        let credential = Credential::new(test_jwt(now.timestamp() + 10));
        assert!(credential.is_expired(now));

        let credential = Credential::new(test_jwt(now.timestamp() + 3600));
        assert!(!credential.is_expired(now));
    }

    #[test]
    fn garbage_payload_is_treated_as_opaque() {
        assert_eq!(Credential::new("a.%%%.c").expires_at(), None);
        assert_eq!(Credential::new("a.b.c.d").expires_at(), None);
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", Credential::new("secret-token"));
        assert!(!rendered.contains("secret-token"));
    }
}
