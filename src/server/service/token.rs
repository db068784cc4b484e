//! HS256 JWT issuance and validation.
//!
//! Tokens are the standard three-segment form `header.claims.signature`,
//! base64url-encoded without padding and signed with HMAC-SHA256 over the
//! first two segments. Validation collapses every failure mode (malformed
//! token, bad signature, expired) into a single `InvalidToken` outcome.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use crate::server::error::auth::AuthError;

type HmacSha256 = Hmac<Sha256>;

const HEADER: &[u8] = br#"{"alg":"HS256","typ":"JWT"}"#;

/// Claims embedded in an issued token: the user's email as subject plus
/// issued-at and expiry timestamps (unix seconds).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and validates the platform's bearer tokens.
///
/// Holds the signing secret and token lifetime; cheap to clone and shared
/// through the application state.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: impl Into<String>, ttl: Duration) -> Self {
        Self {
            secret: secret.into(),
            ttl,
        }
    }

    /// Issues a signed token with the given subject, valid for the configured
    /// lifetime from now.
    pub fn issue(&self, subject: &str) -> String {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now,
            exp: now + self.ttl.num_seconds(),
        };

        let header = URL_SAFE_NO_PAD.encode(HEADER);
        let payload = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&claims).expect("token claims serialize to JSON"),
        );

        let signature = self.sign(&header, &payload);

        format!("{}.{}.{}", header, payload, signature)
    }

    /// Validates a token and returns its claims.
    ///
    /// The signature check runs in constant time. A structurally malformed
    /// token, a signature minted with a different secret and an expired token
    /// all yield the same `InvalidToken` error.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(AuthError::InvalidToken);
        };

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| AuthError::InvalidToken)?;

        let mut mac = self.mac();
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| AuthError::InvalidToken)?;

        let payload = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| AuthError::InvalidToken)?;
        let claims: Claims =
            serde_json::from_slice(&payload).map_err(|_| AuthError::InvalidToken)?;

        if claims.exp <= Utc::now().timestamp() {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims)
    }

    fn sign(&self, header: &str, payload: &str) -> String {
        let mut mac = self.mac();
        mac.update(header.as_bytes());
        mac.update(b".");
        mac.update(payload.as_bytes());

        URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(self.secret.as_bytes()).expect("HMAC can take key of any size")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", Duration::hours(1))
    }

    #[test]
    fn accepts_own_token() {
        let tokens = service();

        let token = tokens.issue("ana@x.com");
        let claims = tokens.validate(&token).unwrap();

        assert_eq!(claims.sub, "ana@x.com");
        assert_eq!(claims.exp, claims.iat + 3600);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = TokenService::new("other-secret", Duration::hours(1)).issue("ana@x.com");

        assert!(service().validate(&token).is_err());
    }

    #[test]
    fn rejects_expired_token() {
        let tokens = TokenService::new("test-secret", Duration::seconds(-10));

        let token = tokens.issue("ana@x.com");

        assert!(tokens.validate(&token).is_err());
    }

    #[test]
    fn rejects_malformed_token() {
        let tokens = service();

        assert!(tokens.validate("").is_err());
        assert!(tokens.validate("garbage").is_err());
        assert!(tokens.validate("a.b").is_err());
        assert!(tokens.validate("a.b.c.d").is_err());
        assert!(tokens.validate("ñ.ñ.ñ").is_err());
    }

    #[test]
    fn rejects_tampered_payload() {
        let tokens = service();

        let token = tokens.issue("ana@x.com");
        let mut segments: Vec<&str> = token.split('.').collect();

        let forged = URL_SAFE_NO_PAD.encode(
            serde_json::to_vec(&Claims {
                sub: "eva@x.com".to_string(),
                iat: 0,
                exp: i64::MAX,
            })
            .unwrap(),
        );
        segments[1] = &forged;

        assert!(tokens.validate(&segments.join(".")).is_err());
    }
}
