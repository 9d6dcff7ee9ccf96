// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - session, mood and recommendation logic.

pub mod auth;
pub mod backend;
pub mod mood;
pub mod recommendations;
pub mod session;
pub mod token;

pub use auth::AuthService;
pub use backend::{BackendClient, RecommendationSource};
pub use mood::MoodStore;
pub use recommendations::RecommendationOrchestrator;
pub use session::SessionManager;
pub use token::{TokenCodec, TokenError};
