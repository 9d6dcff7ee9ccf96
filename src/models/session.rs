// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-side identity record and decoded token claims.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// The authoritative client-side session.
///
/// Only constructible as unauthenticated or as authenticated with both a
/// subject and a token, so the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    is_authenticated: bool,
    subject: Option<String>,
    token: Option<String>,
}

impl Session {
    /// The default, logged-out session.
    pub fn unauthenticated() -> Self {
        Self::default()
    }

    /// A session for a successfully decoded token.
    pub fn authenticated(subject: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            subject: Some(subject.into()),
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// User identifier taken from the token claims.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Raw bearer token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Claims decoded from a bearer token. Never persisted on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// User identifier (`sub` or `username` claim)
    pub subject: String,
    /// Expiration time, when the token carries one
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenClaims {
    /// Whether the token had expired at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_default_session_is_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.subject(), None);
        assert_eq!(session.token(), None);
        assert_eq!(session, Session::unauthenticated());
    }

    #[test]
    fn test_session_serializes_camel_case() {
        let session = Session::authenticated("alice", "tok");
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"isAuthenticated": true, "subject": "alice", "token": "tok"})
        );
    }

    #[test]
    fn test_claims_expiry() {
        let now = Utc::now();
        let claims = TokenClaims {
            subject: "alice".to_string(),
            expires_at: Some(now - Duration::seconds(1)),
        };
        assert!(claims.is_expired_at(now));

        let open_ended = TokenClaims {
            subject: "alice".to_string(),
            expires_at: None,
        };
        assert!(!open_ended.is_expired_at(now));
    }
}
