// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! CineMood client core: sessions and mood-based recommendations.
//!
//! This crate provides the client-side session lifecycle (decode, persist,
//! restore, invalidate), route guarding, and the mood-to-recommendation
//! request pipeline of the CineMood movie-discovery app.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use config::Config;
use error::Result;
use routes::Navigation;
use services::{
    AuthService, BackendClient, MoodStore, RecommendationOrchestrator, SessionManager, TokenCodec,
};
use std::sync::Arc;
use store::KeyValueStore;

/// Shared application state, built once at startup.
pub struct CineMood {
    pub config: Config,
    pub sessions: Arc<SessionManager>,
    pub moods: MoodStore,
    pub auth: AuthService,
    pub recommendations: RecommendationOrchestrator<BackendClient>,
}

impl CineMood {
    /// Wire every component over `store` and restore the stored session.
    pub fn new(config: Config, store: Arc<dyn KeyValueStore>) -> Result<Self> {
        let client = BackendClient::from_config(&config)?;
        let codec = TokenCodec::new(config.subject_claim);

        let sessions = Arc::new(SessionManager::restored(store.clone(), codec));
        let moods = MoodStore::new(store);
        let auth = AuthService::new(client.clone(), sessions.clone());
        let recommendations =
            RecommendationOrchestrator::new(client, sessions.clone(), moods.clone());

        Ok(Self {
            config,
            sessions,
            moods,
            auth,
            recommendations,
        })
    }

    /// Resolve a navigation against the current session.
    pub fn navigate(&self, path: &str) -> Navigation {
        routes::navigate(&self.sessions, path)
    }

    /// End the session and forget the selected mood.
    pub async fn logout(&self) {
        self.auth.logout().await;
        if let Err(e) = self.moods.clear() {
            tracing::warn!(error = %e, "Failed to clear stored mood");
        }
    }
}
