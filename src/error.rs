// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with user-facing messages.

use crate::store::StoreError;

/// Application error type surfaced to the presentation layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Backend error: {0}")]
    Backend(String),

    /// The backend answered successfully but with an `{ "error": ... }` payload.
    #[error("{0}")]
    Rejected(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Shown for any failed recommendation request without a backend message.
    pub const RECOMMENDATIONS_FAILED: &'static str = "Failed to fetch recommendations.";

    /// Fallback for auth failures the backend did not explain.
    pub const UNEXPECTED: &'static str = "An unexpected error occurred.";

    /// Message suitable for showing to the user.
    ///
    /// Backend and transport details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidToken(_) => "Your session is invalid. Please log in again.".to_string(),
            AppError::Validation(msg) | AppError::Unauthorized(msg) | AppError::Rejected(msg) => {
                msg.clone()
            }
            AppError::Backend(_) | AppError::Transport(_) => Self::UNEXPECTED.to_string(),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Storage error");
                Self::UNEXPECTED.to_string()
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal error");
                Self::UNEXPECTED.to_string()
            }
        }
    }

    /// Whether the failure came from the network or a non-success status.
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, AppError::Backend(_) | AppError::Transport(_))
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, AppError>;
