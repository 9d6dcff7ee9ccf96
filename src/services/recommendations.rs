// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mood-to-recommendation request pipeline.
//!
//! Every request is tagged with a sequence number when it starts. When it
//! resolves, the result is applied only if its tag is still the latest one
//! issued; superseded requests run to completion and are dropped. There is
//! no retry: a failure stays until the user selects a mood again.

use crate::error::{AppError, Result};
use crate::models::{Mood, MovieSummary, RecommendationState, RequestTag};
use crate::services::backend::RecommendationSource;
use crate::services::mood::MoodStore;
use crate::services::session::SessionManager;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::watch;

/// Latest issued tag together with the state it produced.
#[derive(Debug, Default)]
struct Tracker {
    latest: u64,
    state: RecommendationState,
}

/// Drives the request lifecycle and exposes its state.
pub struct RecommendationOrchestrator<S> {
    source: S,
    sessions: Arc<SessionManager>,
    moods: MoodStore,
    tracker: Mutex<Tracker>,
    updates: watch::Sender<RecommendationState>,
}

impl<S: RecommendationSource> RecommendationOrchestrator<S> {
    pub fn new(source: S, sessions: Arc<SessionManager>, moods: MoodStore) -> Self {
        let (updates, _) = watch::channel(RecommendationState::Idle);
        Self {
            source,
            sessions,
            moods,
            tracker: Mutex::new(Tracker::default()),
            updates,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> RecommendationState {
        self.lock().state.clone()
    }

    /// Receive every state transition.
    pub fn subscribe(&self) -> watch::Receiver<RecommendationState> {
        self.updates.subscribe()
    }

    /// Handle a raw mood selection from the user.
    ///
    /// Values outside the mood enumeration fail with
    /// [`AppError::Validation`] before anything is sent.
    pub async fn select_mood(&self, input: &str) -> Result<RecommendationState> {
        let mood = match input.parse::<Mood>() {
            Ok(mood) => mood,
            Err(e) => {
                let err = AppError::from(e);
                tracing::debug!(input, "Rejected mood selection");
                self.reject(err.user_message());
                return Err(err);
            }
        };
        Ok(self.select(mood).await)
    }

    /// Persist `mood` and fetch recommendations for it.
    pub async fn select(&self, mood: Mood) -> RecommendationState {
        if let Err(e) = self.moods.set(mood) {
            tracing::warn!(%mood, error = %e, "Failed to persist mood");
        }
        let token = self.sessions.token();
        self.fetch(mood, token.as_deref()).await
    }

    /// Re-issue the request for the persisted mood, if there is one.
    pub async fn resume(&self) -> Option<RecommendationState> {
        let mood = match self.moods.get() {
            Ok(mood) => mood?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted mood");
                return None;
            }
        };
        let token = self.sessions.token();
        Some(self.fetch(mood, token.as_deref()).await)
    }

    /// Issue one request and apply its outcome unless it was superseded.
    ///
    /// Returns the state after this call, which belongs to a newer request
    /// when this one was superseded.
    pub async fn fetch(&self, mood: Mood, token: Option<&str>) -> RecommendationState {
        let tag = self.begin(mood);
        tracing::debug!(%mood, tag = tag.0, authenticated = token.is_some(), "Fetching recommendations");

        let outcome = self.source.recommend(mood, token).await;
        self.resolve(tag, mood, outcome);
        self.state()
    }

    /// Start a request: new tag, `Loading`.
    fn begin(&self, mood: Mood) -> RequestTag {
        let mut tracker = self.lock();
        tracker.latest += 1;
        let tag = RequestTag(tracker.latest);
        self.transition(&mut tracker, RecommendationState::Loading { mood });
        tag
    }

    /// Apply a request outcome if `tag` is still current.
    fn resolve(&self, tag: RequestTag, mood: Mood, outcome: Result<Vec<MovieSummary>>) -> bool {
        let mut tracker = self.lock();
        if tracker.latest != tag.0 {
            tracing::debug!(tag = tag.0, latest = tracker.latest, "Discarding stale response");
            return false;
        }

        let next = match outcome {
            Ok(items) => {
                tracing::info!(%mood, count = items.len(), "Recommendations received");
                RecommendationState::Success { mood, items }
            }
            Err(AppError::Rejected(message)) => {
                tracing::warn!(%mood, error = %message, "Backend rejected recommendation request");
                RecommendationState::Failed {
                    mood: Some(mood),
                    message,
                }
            }
            Err(e) => {
                tracing::warn!(%mood, error = %e, "Recommendation request failed");
                RecommendationState::Failed {
                    mood: Some(mood),
                    message: AppError::RECOMMENDATIONS_FAILED.to_string(),
                }
            }
        };
        self.transition(&mut tracker, next);
        true
    }

    /// A rejected selection supersedes anything in flight.
    fn reject(&self, message: String) {
        let mut tracker = self.lock();
        tracker.latest += 1;
        self.transition(
            &mut tracker,
            RecommendationState::Failed {
                mood: None,
                message,
            },
        );
    }

    fn transition(&self, tracker: &mut Tracker, next: RecommendationState) {
        tracker.state = next.clone();
        self.updates.send_replace(next);
    }

    fn lock(&self) -> MutexGuard<'_, Tracker> {
        self.tracker.lock().unwrap_or_else(|e| e.into_inner())
    }
}
