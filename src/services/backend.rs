// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CineMood backend API client.
//!
//! Handles:
//! - Mood recommendations (`POST /recommendations`)
//! - Registration, login and guest login (`POST /register`, `/login`, `/login_guest`)
//! - Server-side token revocation (`POST /logout`)

use crate::config::Config;
use crate::error::AppError;
use crate::models::auth::AuthErrorBody;
use crate::models::{AuthResponse, LoginRequest, Mood, MovieSummary, Registration};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

/// Anything that can answer a mood with recommended movies.
pub trait RecommendationSource: Send + Sync {
    /// Fetch recommendations for `mood`, authenticating with `token` when given.
    fn recommend(
        &self,
        mood: Mood,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Vec<MovieSummary>, AppError>> + Send;
}

#[derive(Serialize)]
struct RecommendationRequest {
    mood: Mood,
}

/// Body of a successful `/recommendations` response.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationBody {
    Movies(Vec<MovieSummary>),
    Error { error: String },
}

/// Backend API client.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AppError::Internal(anyhow::anyhow!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.backend_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get recommendations for a mood.
    pub async fn recommendations(
        &self,
        mood: Mood,
        access_token: Option<&str>,
    ) -> Result<Vec<MovieSummary>, AppError> {
        let url = format!("{}/recommendations", self.base_url);

        let mut request = self.http.post(&url).json(&RecommendationRequest { mood });
        if let Some(token) = access_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(AppError::Backend(format!("HTTP {}: {}", status, body)));
        }

        match serde_json::from_str(&body) {
            Ok(RecommendationBody::Movies(movies)) => Ok(movies),
            Ok(RecommendationBody::Error { error }) => Err(AppError::Rejected(error)),
            Err(e) => Err(AppError::Backend(format!("JSON parse error: {}", e))),
        }
    }

    /// Register a new account and receive its first token.
    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, AppError> {
        self.post_auth("register", Some(registration)).await
    }

    /// Exchange credentials for a token.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse, AppError> {
        self.post_auth("login", Some(credentials)).await
    }

    /// Obtain a token for a temporary guest account.
    pub async fn login_guest(&self) -> Result<AuthResponse, AppError> {
        self.post_auth::<()>("login_guest", None).await
    }

    /// Revoke `access_token` on the server.
    pub async fn logout(&self, access_token: &str) -> Result<(), AppError> {
        let url = format!("{}/logout", self.base_url);

        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Transport(format!("Logout request failed: {}", e)))?;

        if response.status().is_success() {
            return Ok(());
        }
        Err(Self::auth_error(response).await)
    }

    /// POST to an auth endpoint and parse the token response.
    async fn post_auth<B: Serialize>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> Result<AuthResponse, AppError> {
        let url = format!("{}/{}", self.base_url, path);

        let mut request = self.http.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::auth_error(response).await);
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Backend(format!("JSON parse error: {}", e)))
    }

    /// Turn a failed auth response into the matching error.
    async fn auth_error(response: reqwest::Response) -> AppError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let body: AuthErrorBody = serde_json::from_str(&text).unwrap_or_default();

        let fields = body.field_messages();
        if !fields.is_empty() {
            return AppError::Validation(fields.join("; "));
        }

        match (status.as_u16(), body.error) {
            (401, Some(msg)) => AppError::Unauthorized(msg),
            (401, None) => AppError::Unauthorized(AppError::UNEXPECTED.to_string()),
            (400, Some(msg)) => AppError::Validation(msg),
            (_, _) => AppError::Backend(format!("HTTP {}: {}", status, text)),
        }
    }
}

impl RecommendationSource for BackendClient {
    async fn recommend(
        &self,
        mood: Mood,
        token: Option<&str>,
    ) -> Result<Vec<MovieSummary>, AppError> {
        self.recommendations(mood, token).await
    }
}
