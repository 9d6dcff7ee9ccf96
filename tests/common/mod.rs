// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use cinemood_client::error::AppError;
use cinemood_client::models::{Mood, MovieSummary};
use cinemood_client::services::{
    BackendClient, MoodStore, RecommendationSource, SessionManager, TokenCodec,
};
use cinemood_client::store::MemoryStore;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use tokio::sync::oneshot;

/// Server-side key; the client never sees it.
#[allow(dead_code)]
pub const TEST_SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

#[allow(dead_code)]
pub fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Mint a token with arbitrary claims, signed like the backend does.
#[allow(dead_code)]
pub fn token_with(claims: serde_json::Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SIGNING_KEY),
    )
    .expect("Failed to create JWT")
}

/// Token for `subject` valid for an hour.
#[allow(dead_code)]
pub fn token_for(subject: &str) -> String {
    let now = now_secs();
    token_with(serde_json::json!({
        "sub": subject,
        "iat": now,
        "exp": now + 3600,
        "jti": format!("jti-{}", subject),
    }))
}

/// Token for `subject` that expired a minute ago.
#[allow(dead_code)]
pub fn expired_token_for(subject: &str) -> String {
    let now = now_secs();
    token_with(serde_json::json!({
        "sub": subject,
        "iat": now - 7200,
        "exp": now - 60,
    }))
}

/// Session manager over `store`, restored from it.
#[allow(dead_code)]
pub fn sessions_over(store: &MemoryStore) -> Arc<SessionManager> {
    Arc::new(SessionManager::restored(
        Arc::new(store.clone()),
        TokenCodec::default(),
    ))
}

#[allow(dead_code)]
pub fn moods_over(store: &MemoryStore) -> MoodStore {
    MoodStore::new(Arc::new(store.clone()))
}

#[allow(dead_code)]
pub fn movie(id: u64, title: &str) -> MovieSummary {
    MovieSummary {
        id: Some(id),
        title: title.to_string(),
        overview: None,
        poster_path: None,
        release_year: None,
    }
}

/// Serve `app` on an ephemeral local port and return its base URL.
#[allow(dead_code)]
pub async fn spawn_backend(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// URL of a local port with nothing listening on it.
#[allow(dead_code)]
pub fn closed_backend_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

#[allow(dead_code)]
pub fn client_for(base_url: &str) -> BackendClient {
    BackendClient::new(base_url, Duration::from_secs(5)).unwrap()
}

#[allow(dead_code)]
type Reply = Result<Vec<MovieSummary>, AppError>;

#[allow(dead_code)]
#[derive(Default)]
struct Script {
    replies: Mutex<VecDeque<oneshot::Receiver<Reply>>>,
    calls: Mutex<Vec<(Mood, Option<String>)>>,
}

/// Recommendation source whose replies are released by the test.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct ScriptedSource {
    script: Arc<Script>,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply slot for the next call; send on it to resolve that call.
    pub fn expect_call(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.script.replies.lock().unwrap().push_back(rx);
        tx
    }

    /// Calls received so far, with the bearer token each carried.
    pub fn calls(&self) -> Vec<(Mood, Option<String>)> {
        self.script.calls.lock().unwrap().clone()
    }

    /// Yield until at least `n` calls have been made.
    pub async fn wait_for_calls(&self, n: usize) {
        for _ in 0..10_000 {
            if self.script.calls.lock().unwrap().len() >= n {
                return;
            }
            tokio::task::yield_now().await;
        }
        panic!("expected {} calls, saw {}", n, self.calls().len());
    }
}

impl RecommendationSource for ScriptedSource {
    async fn recommend(&self, mood: Mood, token: Option<&str>) -> Reply {
        self.script
            .calls
            .lock()
            .unwrap()
            .push((mood, token.map(str::to_string)));
        let reply = self.script.replies.lock().unwrap().pop_front();
        match reply {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(AppError::Transport("reply dropped".to_string()))),
            None => Err(AppError::Transport("no scripted reply".to_string())),
        }
    }
}
