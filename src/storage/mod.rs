// ABOUTME: Client-side persistence for the session token cookie and the cached user
// ABOUTME: Wraps a cookie jar and a local store behind token and user accessors
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

//! Client storage
//!
//! The bearer token lives in the `gym_sharks_token` cookie (7-day expiry,
//! `SameSite=Strict`, `secure` in production). The logged-in user is cached
//! as JSON under the `gym_sharks_user` local storage key. Neither is
//! authoritative: the cookie decides whether a session exists, the cached
//! user only saves a profile round trip.

mod cookies;
mod local;

pub use cookies::{CookieJar, CookieOptions, SameSite, StoredCookie};
pub use local::{JsonFileStore, KeyValueStore, MemoryStore};

use chrono::Duration;
use gym_sharks_api::TokenSource;
use gym_sharks_core::constants::storage::{
    COOKIE_JAR_FILE, LOCAL_STORAGE_FILE, TOKEN_COOKIE, TOKEN_COOKIE_EXPIRY_DAYS, USER_STORAGE_KEY,
};
use gym_sharks_core::errors::AppResult;
use gym_sharks_core::models::User;
use std::fmt;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// Token cookie plus cached user
#[derive(Clone)]
pub struct ClientStorage {
    cookies: CookieJar,
    local: Arc<dyn KeyValueStore>,
}

impl fmt::Debug for ClientStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientStorage")
            .field("has_token", &self.token().is_some())
            .finish_non_exhaustive()
    }
}

impl ClientStorage {
    /// Storage over explicit cookie and local stores
    #[must_use]
    pub fn new(cookie_store: Arc<dyn KeyValueStore>, local: Arc<dyn KeyValueStore>) -> Self {
        Self {
            cookies: CookieJar::new(cookie_store),
            local,
        }
    }

    /// Process-local storage that disappears with the process
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()))
    }

    /// File-backed storage under `dir`
    ///
    /// # Errors
    ///
    /// Returns a storage error when an existing file cannot be read
    pub fn open(dir: &Path) -> AppResult<Self> {
        let cookies = JsonFileStore::open(dir.join(COOKIE_JAR_FILE))?;
        let local = JsonFileStore::open(dir.join(LOCAL_STORAGE_FILE))?;
        Ok(Self::new(Arc::new(cookies), Arc::new(local)))
    }

    /// Stored bearer token; read failures are logged and read as absent
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.cookies
            .get(TOKEN_COOKIE)
            .unwrap_or_else(|error| {
                warn!(error = %error, "cannot read token cookie");
                None
            })
            .filter(|token| !token.is_empty())
    }

    /// Store the bearer token for seven days
    ///
    /// # Errors
    ///
    /// Returns a storage error when the cookie cannot be written
    pub fn set_token(&self, token: &str, secure: bool) -> AppResult<()> {
        self.cookies.set(
            TOKEN_COOKIE,
            token,
            CookieOptions {
                expires_in: Duration::days(TOKEN_COOKIE_EXPIRY_DAYS),
                secure,
                same_site: SameSite::Strict,
            },
        )
    }

    /// Full token cookie including its attributes
    ///
    /// # Errors
    ///
    /// Returns a storage error when the jar cannot be read
    pub fn token_cookie(&self) -> AppResult<Option<StoredCookie>> {
        self.cookies.get_cookie(TOKEN_COOKIE)
    }

    /// Delete the token cookie
    ///
    /// # Errors
    ///
    /// Returns a storage error when the cookie cannot be removed
    pub fn clear_token(&self) -> AppResult<()> {
        self.cookies.remove(TOKEN_COOKIE)
    }

    /// Cached user; a corrupt entry reads as absent
    #[must_use]
    pub fn cached_user(&self) -> Option<User> {
        let raw = match self.local.get(USER_STORAGE_KEY) {
            Ok(raw) => raw?,
            Err(error) => {
                warn!(error = %error, "cannot read cached user");
                return None;
            }
        };
        serde_json::from_str(&raw)
            .map_err(|error| warn!(error = %error, "ignoring corrupt cached user"))
            .ok()
    }

    /// Replace the cached user
    ///
    /// # Errors
    ///
    /// Returns a storage or serialization error when the user cannot be stored
    pub fn cache_user(&self, user: &User) -> AppResult<()> {
        self.local
            .set(USER_STORAGE_KEY, &serde_json::to_string(user)?)
    }

    /// Drop the cached user
    ///
    /// # Errors
    ///
    /// Returns a storage error when the entry cannot be removed
    pub fn clear_user(&self) -> AppResult<()> {
        self.local.remove(USER_STORAGE_KEY)
    }

    /// Drop both the token and the cached user
    ///
    /// Both removals are attempted even if the first fails.
    ///
    /// # Errors
    ///
    /// Returns the first storage error encountered
    pub fn clear_auth(&self) -> AppResult<()> {
        let token = self.clear_token();
        let user = self.clear_user();
        token.and(user)
    }
}

impl TokenSource for ClientStorage {
    fn bearer_token(&self) -> Option<String> {
        self.token()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn user() -> User {
        serde_json::from_str(r#"{"_id":"u1","name":"Ana","email":"ana@example.com"}"#).unwrap()
    }

    #[test]
    fn test_token_cookie_attributes() {
        let storage = ClientStorage::in_memory();
        storage.set_token("t-1", true).unwrap();
        let cookie = storage.token_cookie().unwrap().unwrap();
        assert_eq!(cookie.value, "t-1");
        assert!(cookie.secure);
        assert_eq!(cookie.same_site, SameSite::Strict);
        assert_eq!(storage.bearer_token().as_deref(), Some("t-1"));
    }

    #[test]
    fn test_clear_auth_removes_both_and_is_idempotent() {
        let storage = ClientStorage::in_memory();
        storage.set_token("t-1", false).unwrap();
        storage.cache_user(&user()).unwrap();
        storage.clear_auth().unwrap();
        storage.clear_auth().unwrap();
        assert!(storage.token().is_none());
        assert!(storage.cached_user().is_none());
    }

    #[test]
    fn test_corrupt_cached_user_reads_as_absent() {
        let local = Arc::new(MemoryStore::new());
        local.set(USER_STORAGE_KEY, "{broken").unwrap();
        let storage = ClientStorage::new(Arc::new(MemoryStore::new()), local);
        assert!(storage.cached_user().is_none());
    }

    #[test]
    fn test_file_storage_persists_session() {
        let dir = TempDir::new().unwrap();
        {
            let storage = ClientStorage::open(dir.path()).unwrap();
            storage.set_token("t-2", false).unwrap();
            storage.cache_user(&user()).unwrap();
        }
        let storage = ClientStorage::open(dir.path()).unwrap();
        assert_eq!(storage.token().as_deref(), Some("t-2"));
        assert_eq!(storage.cached_user().unwrap().name, "Ana");
    }
}
