// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Single-slot persistence of the selected mood.

use crate::models::Mood;
use crate::store::{keys, KeyValueStore, StoreError};
use std::sync::Arc;

/// Last-write-wins slot holding the current mood.
#[derive(Clone)]
pub struct MoodStore {
    store: Arc<dyn KeyValueStore>,
}

impl MoodStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Overwrite the current mood.
    pub fn set(&self, mood: Mood) -> Result<(), StoreError> {
        self.store.set(keys::USER_MOOD, mood.as_str())
    }

    /// Current mood, if one was selected.
    ///
    /// A stored value that is no longer a known mood reads as `None`.
    pub fn get(&self) -> Result<Option<Mood>, StoreError> {
        let Some(raw) = self.store.get(keys::USER_MOOD)? else {
            return Ok(None);
        };

        match raw.parse() {
            Ok(mood) => Ok(Some(mood)),
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unrecognized stored mood");
                Ok(None)
            }
        }
    }

    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(keys::USER_MOOD)
    }
}
