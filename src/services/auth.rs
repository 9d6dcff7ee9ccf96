// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Account flows: register, login, guest login, logout.
//!
//! Credentials are validated locally before anything is sent. A successful
//! backend response hands its `access_token` to [`SessionManager::login`].

use crate::error::{AppError, Result};
use crate::models::auth::validation_messages;
use crate::models::{AuthResponse, LoginRequest, Registration, Session};
use crate::services::backend::BackendClient;
use crate::services::session::SessionManager;
use std::sync::Arc;
use validator::Validate;

/// Authentication flows on top of the backend and the session manager.
#[derive(Clone)]
pub struct AuthService {
    client: BackendClient,
    sessions: Arc<SessionManager>,
}

impl AuthService {
    pub fn new(client: BackendClient, sessions: Arc<SessionManager>) -> Self {
        Self { client, sessions }
    }

    /// Create an account and log into it.
    pub async fn register(&self, username: &str, password: &str) -> Result<Session> {
        let registration = Registration {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        registration
            .validate()
            .map_err(|e| AppError::Validation(validation_messages(&e).join(" ")))?;

        let response = self.client.register(&registration).await?;
        tracing::info!(username = %registration.username, "Registered new account");
        self.start_session(response)
    }

    /// Log into an existing account.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session> {
        let credentials = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        credentials
            .validate()
            .map_err(|e| AppError::Validation(validation_messages(&e).join(" ")))?;

        let response = self.client.login(&credentials).await?;
        self.start_session(response)
    }

    /// Log in as a temporary guest.
    pub async fn login_guest(&self) -> Result<Session> {
        let response = self.client.login_guest().await?;
        self.start_session(response)
    }

    /// Revoke the token on the server (best effort) and end the local session.
    pub async fn logout(&self) {
        if let Some(token) = self.sessions.token() {
            if let Err(e) = self.client.logout(&token).await {
                tracing::warn!(error = %e, "Server-side logout failed, clearing local session anyway");
            }
        }
        self.sessions.logout();
    }

    fn start_session(&self, response: AuthResponse) -> Result<Session> {
        let session = self.sessions.login(&response.access_token)?;

        if let Some(username) = response.username.as_deref() {
            if session.subject() != Some(username) {
                tracing::warn!(
                    username,
                    subject = session.subject(),
                    "Backend username differs from token subject"
                );
            }
        }
        if response.is_guest {
            tracing::info!(subject = session.subject(), "Guest session started");
        }
        Ok(session)
    }
}
