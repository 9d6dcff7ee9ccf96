// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Route guard for views that need a session.

use crate::models::Session;
use crate::routes::Route;
use crate::services::SessionManager;

/// Outcome of guarding a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission<V> {
    /// Render the view.
    Admit(V),
    /// Navigate here instead.
    Redirect(Route),
}

impl<V> Admission<V> {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admit(_))
    }
}

/// Stateless guard: admits a view only for an authenticated session.
#[derive(Debug, Clone, Copy, Default)]
pub struct RouteGuard;

impl RouteGuard {
    /// Admit `view` when `session` is authenticated, else redirect to login.
    ///
    /// Pure: no decoding, no store access.
    pub fn admit<V>(session: &Session, view: V) -> Admission<V> {
        if session.is_authenticated() {
            Admission::Admit(view)
        } else {
            Admission::Redirect(Route::Login)
        }
    }
}

/// Guard `view` against the session as it is right now.
///
/// Evaluated on every navigation, so a logout anywhere in the client takes
/// effect on the next guarded view without a reload.
pub fn require_auth<V>(sessions: &SessionManager, view: V) -> Admission<V> {
    let admission = RouteGuard::admit(&sessions.session(), view);
    if !admission.is_admitted() {
        tracing::debug!("Redirecting unauthenticated navigation to login");
    }
    admission
}
