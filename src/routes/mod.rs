// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client route table and navigation.

use crate::middleware::auth::{require_auth, Admission};
use crate::services::SessionManager;
use std::fmt;

/// A view of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    /// Catalog search, with the query from `?query=`
    Search { query: Option<String> },
    /// Mood selection
    Questions,
    Recommendations,
    MovieDetails { id: u64 },
    Login,
    Register,
}

impl Route {
    /// Match a path (with optional query string) against the route table.
    ///
    /// Returns `None` for paths outside the table.
    pub fn parse(path: &str) -> Option<Route> {
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };

        let route = match path {
            "/" => Route::Home,
            "/search" => Route::Search {
                query: query.and_then(search_query),
            },
            "/questions" => Route::Questions,
            "/recommendations" => Route::Recommendations,
            "/login" => Route::Login,
            "/register" => Route::Register,
            other => {
                let id = other.strip_prefix("/movie-details/")?;
                Route::MovieDetails { id: id.parse().ok()? }
            }
        };
        Some(route)
    }

    /// Whether the view needs an authenticated session.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Recommendations)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Home => f.write_str("/"),
            Route::Search { query: None } => f.write_str("/search"),
            Route::Search { query: Some(q) } => {
                write!(f, "/search?query={}", urlencoding::encode(q))
            }
            Route::Questions => f.write_str("/questions"),
            Route::Recommendations => f.write_str("/recommendations"),
            Route::MovieDetails { id } => write!(f, "/movie-details/{}", id),
            Route::Login => f.write_str("/login"),
            Route::Register => f.write_str("/register"),
        }
    }
}

/// Extract and decode the `query` parameter.
fn search_query(query_string: &str) -> Option<String> {
    query_string
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "query")
        .and_then(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).ok().map(|v| v.into_owned())
        })
        .filter(|q| !q.is_empty())
}

/// Result of resolving a navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Route),
}

/// Resolve a navigation to `path` for the current session.
///
/// Unknown paths redirect home; guarded views redirect to login when there
/// is no session.
pub fn navigate(sessions: &SessionManager, path: &str) -> Navigation {
    let Some(route) = Route::parse(path) else {
        tracing::debug!(path, "Unknown route, redirecting home");
        return Navigation::Redirect(Route::Home);
    };

    if !route.requires_auth() {
        return Navigation::Render(route);
    }

    match require_auth(sessions, route) {
        Admission::Admit(route) => Navigation::Render(route),
        Admission::Redirect(to) => Navigation::Redirect(to),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route_table() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse(""), Some(Route::Home));
        assert_eq!(Route::parse("/questions"), Some(Route::Questions));
        assert_eq!(Route::parse("/recommendations/"), Some(Route::Recommendations));
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/register"), Some(Route::Register));
        assert_eq!(
            Route::parse("/movie-details/603"),
            Some(Route::MovieDetails { id: 603 })
        );
    }

    #[test]
    fn test_parse_unknown_paths() {
        assert_eq!(Route::parse("/nowhere"), None);
        assert_eq!(Route::parse("/movie-details/abc"), None);
        assert_eq!(Route::parse("/movie-details/"), None);
    }

    #[test]
    fn test_search_query_round_trip() {
        let route = Route::parse("/search?query=the%20matrix").unwrap();
        assert_eq!(
            route,
            Route::Search {
                query: Some("the matrix".to_string())
            }
        );
        assert_eq!(route.to_string(), "/search?query=the%20matrix");

        assert_eq!(
            Route::parse("/search?page=2&query=up+close"),
            Some(Route::Search {
                query: Some("up close".to_string())
            })
        );
        assert_eq!(Route::parse("/search"), Some(Route::Search { query: None }));
    }

    #[test]
    fn test_only_recommendations_is_guarded() {
        assert!(Route::Recommendations.requires_auth());
        assert!(!Route::Home.requires_auth());
        assert!(!Route::Questions.requires_auth());
        assert!(!Route::Login.requires_auth());
    }
}
