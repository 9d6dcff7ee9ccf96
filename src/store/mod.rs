// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Persistent key-value store (the browser's local storage, on the client).

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Store keys as constants.
///
/// The session keys and the mood key are owned by different components and
/// never touched by the other.
pub mod keys {
    /// Raw bearer token (owned by the session manager)
    pub const ACCESS_TOKEN: &str = "access_token";
    /// Display subject derived from the token (owned by the session manager)
    pub const USERNAME: &str = "username";
    /// Last selected mood (owned by mood persistence)
    pub const USER_MOOD: &str = "userMood";
}

/// Durable, synchronous, string-keyed store.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(String),

    #[error("Store contents are corrupt: {0}")]
    Corrupt(String),
}
