// ABOUTME: Session lifecycle: bootstrap from storage, login, registration, logout, profile updates
// ABOUTME: Persists token and user only on success and reports outcomes through a Notifier
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::notifier::{Notice, Notifier, TracingNotifier};
use super::store::SessionStore;
use crate::logging::AppLogger;
use gym_sharks_api::AuthApi;
use gym_sharks_core::constants::messages;
use gym_sharks_core::errors::{ApiError, AppError, AppResult};
use gym_sharks_core::models::{AuthPayload, LoginRequest, ProfileUpdate, RegisterRequest, User};
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// How [`SessionManager::bootstrap`] resolved the stored session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// Token and cached user were both present, no request made
    Cached,
    /// Token without cached user, profile fetched and cached
    Fetched,
    /// No token stored
    LoggedOut,
    /// Token without cached user and the profile fetch failed, all auth state cleared
    Cleared,
}

/// Owns the session lifecycle on top of a [`SessionStore`]
#[derive(Clone)]
pub struct SessionManager {
    store: SessionStore,
    api: Arc<dyn AuthApi>,
    notifier: Arc<dyn Notifier>,
    secure_cookies: bool,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("store", &self.store)
            .field("secure_cookies", &self.secure_cookies)
            .finish_non_exhaustive()
    }
}

/// Surface the backend's message when it sent one, the default otherwise
fn auth_failure(error: ApiError, default_message: &str) -> AppError {
    let message = error.user_message(default_message);
    let mut app_error = AppError::from(error);
    app_error.message = message;
    app_error
}

impl SessionManager {
    /// Manager using `api` for authentication calls, notices go to the log
    #[must_use]
    pub fn new(store: SessionStore, api: Arc<dyn AuthApi>) -> Self {
        Self {
            store,
            api,
            notifier: Arc::new(TracingNotifier),
            secure_cookies: false,
        }
    }

    /// Deliver notices to `notifier`
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// Write the token cookie with the `secure` flag
    #[must_use]
    pub const fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    /// Logged-in user
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.store.current_user()
    }

    /// True when a user is logged in
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.store.is_authenticated()
    }

    /// True while bootstrap or an auth request is in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    /// Restore the session from storage
    ///
    /// Trusts a cached user when a token is present. With a token but no
    /// cached user the profile is fetched exactly once; any failure clears
    /// all auth state.
    pub async fn bootstrap(&self) -> BootstrapOutcome {
        self.store.set_loading(true);
        let storage = self.store.storage();

        let outcome = match (storage.token(), storage.cached_user()) {
            (Some(_), Some(user)) => {
                self.store.set_user(Some(user));
                BootstrapOutcome::Cached
            }
            (Some(_), None) => match self.api.profile().await {
                Ok(user) => {
                    if let Err(error) = storage.cache_user(&user) {
                        warn!(error = %error, "could not cache fetched profile");
                    }
                    self.store.set_user(Some(user));
                    BootstrapOutcome::Fetched
                }
                Err(error) => {
                    warn!(error = %error, "profile fetch failed during bootstrap");
                    self.clear_session();
                    BootstrapOutcome::Cleared
                }
            },
            (None, _) => {
                self.store.set_user(None);
                BootstrapOutcome::LoggedOut
            }
        };

        self.store.set_loading(false);
        let user = self.store.current_user();
        info!(
            outcome = ?outcome,
            user.id = user.as_ref().map_or("anonymous", |user| user.id.as_str()),
            "session bootstrapped"
        );
        outcome
    }

    /// Log in with email and password
    ///
    /// On failure the previous session is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank credentials, or the backend
    /// failure carrying the server's message when it sent one
    pub async fn login(&self, credentials: &LoginRequest) -> AppResult<User> {
        if let Err(error) = credentials.validate() {
            self.notifier.notify(Notice::error(error.message.clone()));
            return Err(error);
        }
        self.store.set_loading(true);
        let result = self.api.login(credentials).await;
        self.store.set_loading(false);

        self.establish("login", result, messages::LOGIN_SUCCESS, messages::LOGIN_FAILED)
    }

    /// Create an account and log in
    ///
    /// # Errors
    ///
    /// Returns a validation error for incomplete fields, or the backend
    /// failure carrying the server's message when it sent one
    pub async fn register(&self, fields: &RegisterRequest) -> AppResult<User> {
        if let Err(error) = fields.validate() {
            self.notifier.notify(Notice::error(error.message.clone()));
            return Err(error);
        }
        self.store.set_loading(true);
        let result = self.api.register(fields).await;
        self.store.set_loading(false);

        self.establish(
            "register",
            result,
            messages::REGISTER_SUCCESS,
            messages::REGISTER_FAILED,
        )
    }

    fn establish(
        &self,
        event: &str,
        result: Result<AuthPayload, ApiError>,
        success_message: &str,
        failure_message: &str,
    ) -> AppResult<User> {
        let payload = match result {
            Ok(payload) => payload,
            Err(error) => {
                let error = auth_failure(error, failure_message);
                AppLogger::log_auth_event(event, false, None, Some(&error.message));
                self.notifier.notify(Notice::error(error.message.clone()));
                return Err(error);
            }
        };

        // The token is written last: it alone decides whether a session exists
        let storage = self.store.storage();
        let prior_user = storage.cached_user();
        let persisted = storage.cache_user(&payload.user).and_then(|()| {
            storage
                .set_token(&payload.token, self.secure_cookies)
                .inspect_err(|_| {
                    let restored = prior_user
                        .as_ref()
                        .map_or_else(|| storage.clear_user(), |user| storage.cache_user(user));
                    if let Err(cleanup) = restored {
                        warn!(error = %cleanup, "could not restore previous cached user");
                    }
                })
        });
        if let Err(error) = persisted {
            AppLogger::log_auth_event(event, false, None, Some(&error.message));
            self.notifier.notify(Notice::error(failure_message));
            return Err(error);
        }

        self.store.set_user(Some(payload.user.clone()));
        AppLogger::log_auth_event(event, true, Some(&payload.user.id), None);
        self.notifier.notify(Notice::success(success_message));
        Ok(payload.user)
    }

    /// Log out locally and synchronously; no request is made and repeated calls are harmless
    pub fn logout(&self) {
        let user_id = self.store.current_user().map(|user| user.id);
        self.clear_session();
        AppLogger::log_auth_event("logout", true, user_id.as_deref(), None);
        self.notifier.notify(Notice::success(messages::LOGOUT_SUCCESS));
    }

    /// Send a partial profile update; only a successful answer touches the cache
    ///
    /// # Errors
    ///
    /// Returns `AuthRequired` when nobody is logged in, `InvalidInput` for an
    /// empty update, or the backend failure carrying the server's message
    pub async fn update_profile(&self, update: &ProfileUpdate) -> AppResult<User> {
        if !self.store.is_authenticated() {
            return Err(AppError::auth_required());
        }
        if update.is_empty() {
            return Err(AppError::invalid_input("profile update has no fields"));
        }

        self.store.set_loading(true);
        let result = self.api.update_profile(update).await;
        self.store.set_loading(false);

        match result {
            Ok(user) => {
                self.store.storage().cache_user(&user)?;
                self.store.set_user(Some(user.clone()));
                AppLogger::log_auth_event("profile_update", true, Some(&user.id), None);
                self.notifier.notify(Notice::success(messages::PROFILE_UPDATED));
                Ok(user)
            }
            Err(error) => {
                let error = auth_failure(error, messages::PROFILE_UPDATE_FAILED);
                self.notifier.notify(Notice::error(error.message.clone()));
                Err(error)
            }
        }
    }

    fn clear_session(&self) {
        if let Err(error) = self.store.storage().clear_auth() {
            warn!(error = %error, "failed to clear stored session");
        }
        self.store.set_user(None);
    }
}
