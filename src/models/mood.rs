// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The closed set of moods a user can pick.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A mood driving the recommendation query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    Sad,
    Excited,
    Relaxed,
    Nostalgic,
    Curious,
    Chill,
}

impl Mood {
    /// Every mood, in selector order.
    pub const ALL: [Mood; 7] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Excited,
        Mood::Relaxed,
        Mood::Nostalgic,
        Mood::Curious,
        Mood::Chill,
    ];

    /// Wire and storage form (lowercase).
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Excited => "excited",
            Mood::Relaxed => "relaxed",
            Mood::Nostalgic => "nostalgic",
            Mood::Curious => "curious",
            Mood::Chill => "chill",
        }
    }

    /// Capitalized label for the selector buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Excited => "Excited",
            Mood::Relaxed => "Relaxed",
            Mood::Nostalgic => "Nostalgic",
            Mood::Curious => "Curious",
            Mood::Chill => "Chill",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value outside the mood enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown mood: {0:?}")]
pub struct UnknownMood(pub String);

impl FromStr for Mood {
    type Err = UnknownMood;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownMood(s.to_string()))
    }
}

impl From<UnknownMood> for crate::error::AppError {
    fn from(err: UnknownMood) -> Self {
        crate::error::AppError::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_labels_and_wire_form() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>(), Ok(mood));
            assert_eq!(mood.label().parse::<Mood>(), Ok(mood));
        }
        assert_eq!(" CHILL ".parse::<Mood>(), Ok(Mood::Chill));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("grumpy".parse::<Mood>(), Err(UnknownMood("grumpy".to_string())));
        assert!("".parse::<Mood>().is_err());
        assert!("happy sad".parse::<Mood>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Nostalgic).unwrap(), "\"nostalgic\"");
        let mood: Mood = serde_json::from_str("\"curious\"").unwrap();
        assert_eq!(mood, Mood::Curious);
    }
}
