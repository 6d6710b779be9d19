// ABOUTME: Shared in-memory session state plus its persisted token and cached user
// ABOUTME: Supplies the bearer token to the API client and handles its 401 responses
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use crate::logging::AppLogger;
use crate::navigation::Navigator;
use crate::storage::ClientStorage;
use async_trait::async_trait;
use gym_sharks_api::{TokenSource, UnauthorizedHandler};
use gym_sharks_core::constants::routes;
use gym_sharks_core::models::User;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Snapshot of the session as pages see it
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    /// Logged-in user
    pub user: Option<User>,
    /// True while bootstrap or an auth request is in flight
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

/// Session state shared between the manager, the API client and pages
///
/// Cloning shares the same state.
#[derive(Debug, Clone)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
    storage: ClientStorage,
    navigator: Navigator,
}

impl SessionStore {
    /// Store over the given persistence and navigator, loading until bootstrapped
    #[must_use]
    pub fn new(storage: ClientStorage, navigator: Navigator) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            storage,
            navigator,
        }
    }

    /// Persisted token and cached user
    #[must_use]
    pub const fn storage(&self) -> &ClientStorage {
        &self.storage
    }

    /// Shared navigator
    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    // Never held across an await; a panicked writer leaves plain data behind
    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.read().clone()
    }

    /// Logged-in user
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.read().user.clone()
    }

    /// True when a user is logged in
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.read().user.is_some()
    }

    /// True while bootstrap or an auth request is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().is_loading
    }

    pub(crate) fn set_user(&self, user: Option<User>) {
        self.write().user = user;
    }

    pub(crate) fn set_loading(&self, is_loading: bool) {
        self.write().is_loading = is_loading;
    }

    /// Drop the session after the backend rejected the token
    ///
    /// Clears the token cookie and cached user and redirects to the login
    /// page, unless the user is already on an `/auth/` page or holds no
    /// token. Returns whether the session was dropped. The check and the
    /// clearing happen under the state lock, so concurrent 401s redirect once.
    pub fn expire(&self, endpoint: &str) -> bool {
        let mut state = self.write();
        if self.navigator.is_auth_route() {
            debug!(endpoint, "401 on an auth page, leaving session alone");
            return false;
        }
        if self.storage.token().is_none() {
            debug!(endpoint, "401 without a stored token");
            return false;
        }

        if let Err(error) = self.storage.clear_auth() {
            warn!(error = %error, "failed to clear stored session");
        }
        let user_id = state.user.take().map(|user| user.id);
        drop(state);

        self.navigator.replace(routes::LOGIN);
        AppLogger::log_auth_event("expired", false, user_id.as_deref(), Some(endpoint));
        true
    }
}

impl TokenSource for SessionStore {
    fn bearer_token(&self) -> Option<String> {
        self.storage.token()
    }
}

#[async_trait]
impl UnauthorizedHandler for SessionStore {
    async fn on_unauthorized(&self, endpoint: &str) {
        self.expire(endpoint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_at(path: &str) -> SessionStore {
        SessionStore::new(ClientStorage::in_memory(), Navigator::at(path))
    }

    #[test]
    fn test_starts_loading_and_logged_out() {
        let store = store_at(routes::HOME);
        let state = store.snapshot();
        assert!(state.is_loading);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_expire_redirects_once() {
        let store = store_at(routes::DASHBOARD);
        store.storage().set_token("t", false).unwrap();

        assert!(store.expire("/auth/profile"));
        assert!(!store.expire("/auth/profile"));
        assert_eq!(store.navigator().current_path(), routes::LOGIN);
        assert_eq!(store.navigator().redirect_count(), 1);
        assert!(store.bearer_token().is_none());
    }

    #[test]
    fn test_expire_is_ignored_on_auth_pages() {
        let store = store_at(routes::LOGIN);
        store.storage().set_token("t", false).unwrap();

        assert!(!store.expire("/auth/login"));
        assert_eq!(store.bearer_token().as_deref(), Some("t"));
        assert_eq!(store.navigator().redirect_count(), 0);
    }
}
