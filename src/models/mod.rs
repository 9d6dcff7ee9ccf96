// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the client.

pub mod auth;
pub mod mood;
pub mod movie;
pub mod recommendation;
pub mod session;

pub use auth::{AuthResponse, LoginRequest, Registration};
pub use mood::{Mood, UnknownMood};
pub use movie::MovieSummary;
pub use recommendation::{RecommendationState, RequestTag, NO_RECOMMENDATIONS};
pub use session::{Session, TokenClaims};
