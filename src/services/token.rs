// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Bearer token decoding.
//!
//! Tokens are decoded WITHOUT signature verification. The claims are only
//! used to drive client state and display; the backend verifies every
//! token it receives and must never trust this decode.

use crate::config::SubjectClaim;
use crate::models::TokenClaims;
use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

/// Claims as they appear in the token payload.
#[derive(Debug, Deserialize)]
struct RawClaims {
    #[serde(default)]
    sub: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    exp: Option<i64>,
}

/// Decodes bearer tokens into [`TokenClaims`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenCodec {
    preferred: SubjectClaim,
}

impl TokenCodec {
    /// Create a codec that reads the subject from `preferred` first.
    pub fn new(preferred: SubjectClaim) -> Self {
        Self { preferred }
    }

    /// Decode `token` into claims. Fails on anything that is not a JWT
    /// with a JSON payload naming a subject.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = decode::<RawClaims>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| TokenError::Malformed(e.to_string()))?;

        let subject = self.select_subject(&data.claims)?;
        let expires_at = match data.claims.exp {
            Some(exp) => Some(
                DateTime::<Utc>::from_timestamp(exp, 0)
                    .ok_or_else(|| TokenError::Malformed(format!("exp out of range: {}", exp)))?,
            ),
            None => None,
        };

        Ok(TokenClaims {
            subject,
            expires_at,
        })
    }

    /// Pick the subject claim, preferring the configured one.
    fn select_subject(&self, claims: &RawClaims) -> Result<String, TokenError> {
        let sub = claims.sub.as_deref().filter(|s| !s.is_empty());
        let username = claims.username.as_deref().filter(|s| !s.is_empty());

        let (first, second) = match self.preferred {
            SubjectClaim::Sub => (sub, username),
            SubjectClaim::Username => (username, sub),
        };

        if let (Some(sub), Some(username)) = (sub, username) {
            if sub != username {
                tracing::warn!(
                    sub,
                    username,
                    preferred = %self.preferred,
                    "Token subject claims disagree, using preferred claim"
                );
            }
        }

        first
            .or(second)
            .map(str::to_string)
            .ok_or(TokenError::MissingSubject)
    }
}

/// Errors from token decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Malformed token: {0}")]
    Malformed(String),

    #[error("Token has no subject claim")]
    MissingSubject,

    #[error("Token expired")]
    Expired,
}

impl From<TokenError> for crate::error::AppError {
    fn from(err: TokenError) -> Self {
        crate::error::AppError::InvalidToken(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde_json::json;

    fn token(claims: serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"some_server_side_secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_decode_reads_sub_without_verifying_signature() {
        let claims = TokenCodec::default()
            .decode(&token(json!({"sub": "alice", "exp": 4102444800i64})))
            .unwrap();
        assert_eq!(claims.subject, "alice");
        assert_eq!(
            claims.expires_at,
            DateTime::<Utc>::from_timestamp(4102444800, 0)
        );
    }

    #[test]
    fn test_decode_falls_back_to_username_claim() {
        let claims = TokenCodec::new(SubjectClaim::Sub)
            .decode(&token(json!({"username": "bob"})))
            .unwrap();
        assert_eq!(claims.subject, "bob");
        assert_eq!(claims.expires_at, None);
    }

    #[test]
    fn test_preferred_claim_wins_when_both_present() {
        let t = token(json!({"sub": "id-42", "username": "carol"}));
        assert_eq!(TokenCodec::new(SubjectClaim::Sub).decode(&t).unwrap().subject, "id-42");
        assert_eq!(
            TokenCodec::new(SubjectClaim::Username).decode(&t).unwrap().subject,
            "carol"
        );
    }

    #[test]
    fn test_missing_subject() {
        let result = TokenCodec::default().decode(&token(json!({"sub": "", "iat": 1})));
        assert_eq!(result, Err(TokenError::MissingSubject));
    }

    #[test]
    fn test_malformed_tokens() {
        let codec = TokenCodec::default();
        for bad in ["", "garbage", "a.b.c", "valid.token.for.alice", "...."] {
            assert!(
                matches!(codec.decode(bad), Err(TokenError::Malformed(_))),
                "{bad:?} should be malformed"
            );
        }
    }
}
