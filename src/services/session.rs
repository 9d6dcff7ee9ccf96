// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session lifecycle: restore, login, logout.
//!
//! The session manager is the only writer of the credential keys. Every
//! mutation goes to the store first and to memory second, so on restart the
//! store never holds less than what the running client believed.

use crate::error::{AppError, Result};
use crate::models::{Session, TokenClaims};
use crate::services::token::{TokenCodec, TokenError};
use crate::store::{keys, KeyValueStore};
use chrono::Utc;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Owner of the authoritative [`Session`].
pub struct SessionManager {
    store: Arc<dyn KeyValueStore>,
    codec: TokenCodec,
    session: RwLock<Session>,
}

impl SessionManager {
    /// Create an unauthenticated manager without reading the store.
    pub fn new(store: Arc<dyn KeyValueStore>, codec: TokenCodec) -> Self {
        Self {
            store,
            codec,
            session: RwLock::new(Session::unauthenticated()),
        }
    }

    /// Create a manager and restore the session from the store.
    pub fn restored(store: Arc<dyn KeyValueStore>, codec: TokenCodec) -> Self {
        let manager = Self::new(store, codec);
        manager.restore();
        manager
    }

    /// Rebuild the session from the stored token.
    ///
    /// A token that cannot be decoded (or has expired) is cleared from the
    /// store and the session falls back to unauthenticated.
    pub fn restore(&self) -> Session {
        let mut session = self.write();

        let stored = match self.store.get(keys::ACCESS_TOKEN) {
            Ok(Some(stored)) => stored,
            Ok(None) => {
                *session = Session::unauthenticated();
                return Session::unauthenticated();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored token, logging out");
                self.clear(&mut session);
                return Session::unauthenticated();
            }
        };

        let token = stored.trim();
        match self.decode(token) {
            Ok(claims) => {
                if token != stored {
                    if let Err(e) = self.store.set(keys::ACCESS_TOKEN, token) {
                        tracing::warn!(error = %e, "Failed to rewrite stored token");
                    }
                }
                *session = Session::authenticated(claims.subject, token);
                tracing::info!(subject = session.subject(), "Session restored");
                session.clone()
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invalid stored token, logging out");
                self.clear(&mut session);
                Session::unauthenticated()
            }
        }
    }

    /// Start a session from a freshly issued token.
    ///
    /// Surrounding whitespace is dropped before the token is decoded, stored
    /// or sent anywhere. On a decode failure the current session is left
    /// untouched.
    pub fn login(&self, token: &str) -> Result<Session> {
        let token = token.trim();
        let claims = self.decode(token).map_err(|e| {
            tracing::warn!(error = %e, "Rejected token at login");
            AppError::from(e)
        })?;

        // Held across the store writes so a concurrent logout cannot land
        // between the store and memory updates.
        let mut session = self.write();
        self.store.set(keys::ACCESS_TOKEN, token)?;
        self.store.set(keys::USERNAME, &claims.subject)?;

        *session = Session::authenticated(claims.subject, token);
        tracing::info!(subject = session.subject(), "Logged in");
        Ok(session.clone())
    }

    /// Clear credentials and reset to unauthenticated. Safe to repeat.
    pub fn logout(&self) {
        let mut session = self.write();
        let was_authenticated = session.is_authenticated();
        self.clear(&mut session);
        if was_authenticated {
            tracing::info!("Logged out");
        }
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Session {
        self.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_authenticated()
    }

    /// Bearer token for outbound calls, when logged in.
    pub fn token(&self) -> Option<String> {
        self.read().token().map(str::to_string)
    }

    fn decode(&self, token: &str) -> std::result::Result<TokenClaims, TokenError> {
        let claims = self.codec.decode(token)?;
        if claims.is_expired_at(Utc::now()) {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    fn read(&self) -> RwLockReadGuard<'_, Session> {
        // Sessions are replaced whole, so a poisoned lock still holds a valid one.
        self.session.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Session> {
        self.session.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Remove the credential keys and reset `session`.
    fn clear(&self, session: &mut Session) {
        for key in [keys::ACCESS_TOKEN, keys::USERNAME] {
            if let Err(e) = self.store.remove(key) {
                tracing::error!(key, error = %e, "Failed to clear stored credential");
            }
        }
        *session = Session::unauthenticated();
    }
}
