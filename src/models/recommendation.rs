// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Lifecycle of the current recommendation request.

use super::{Mood, MovieSummary};
use serde::Serialize;

/// Shown instead of a list when a request succeeded with no items.
pub const NO_RECOMMENDATIONS: &str = "No recommendations found for the selected mood.";

/// State of the single live recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationState {
    #[default]
    Idle,
    Loading {
        mood: Mood,
    },
    Success {
        mood: Mood,
        items: Vec<MovieSummary>,
    },
    /// `mood` is `None` when the selection itself was rejected.
    Failed {
        mood: Option<Mood>,
        message: String,
    },
}

impl RecommendationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RecommendationState::Loading { .. })
    }

    /// Mood the state refers to, if any.
    pub fn mood(&self) -> Option<Mood> {
        match self {
            RecommendationState::Idle => None,
            RecommendationState::Loading { mood } | RecommendationState::Success { mood, .. } => {
                Some(*mood)
            }
            RecommendationState::Failed { mood, .. } => *mood,
        }
    }

    /// Recommended items on success.
    pub fn items(&self) -> Option<&[MovieSummary]> {
        match self {
            RecommendationState::Success { items, .. } => Some(items),
            _ => None,
        }
    }

    /// User-visible failure message.
    pub fn error(&self) -> Option<&str> {
        match self {
            RecommendationState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Identifies one issued request; only the latest may update state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTag(pub u64);
