// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Movie summaries returned by the recommendation endpoint.

use serde::{Deserialize, Deserializer, Serialize};

/// Base URL for catalog poster images.
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Shown when a movie has no title.
pub const UNKNOWN_TITLE: &str = "Unknown Title";

/// Shown when a movie has no poster.
pub const POSTER_PLACEHOLDER_URL: &str = "https://via.placeholder.com/500x750?text=No+Image";

/// One recommended movie. Order within a response is the backend's.
///
/// Only the catalog id is reliable across backends; the recommendation
/// endpoint may omit it, and a missing or null title is left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_title")]
    pub title: String,
    #[serde(default)]
    pub overview: Option<String>,
    /// Catalog-relative poster path (e.g. "/abc.jpg")
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default, deserialize_with = "deserialize_year")]
    pub release_year: Option<i32>,
}

impl MovieSummary {
    /// Title for display, with a fallback when the backend sent none.
    pub fn display_title(&self) -> &str {
        match self.title.trim() {
            "" => UNKNOWN_TITLE,
            title => title,
        }
    }

    /// Absolute poster URL, or the placeholder image.
    pub fn poster_url(&self) -> String {
        match self.poster_path.as_deref() {
            Some(path) if !path.is_empty() => format!("{}{}", POSTER_BASE_URL, path),
            _ => POSTER_PLACEHOLDER_URL.to_string(),
        }
    }
}

fn deserialize_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The backend sends the year either as a number or as a string.
fn deserialize_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Year {
        Number(i32),
        Text(String),
    }

    Ok(match Option::<Year>::deserialize(deserializer)? {
        Some(Year::Number(y)) => Some(y),
        Some(Year::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}
