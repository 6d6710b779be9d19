// ABOUTME: Cookie jar with expiry, secure and SameSite attributes over a key-value store
// ABOUTME: Expired cookies read as absent and are removed on access
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::local::KeyValueStore;
use chrono::{DateTime, Duration, Utc};
use gym_sharks_core::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// `SameSite` cookie attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SameSite {
    /// Sent only with same-site requests
    #[default]
    Strict,
    /// Sent with top-level navigations
    Lax,
    /// Sent everywhere (requires `secure`)
    None,
}

/// Attributes applied when a cookie is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookieOptions {
    /// Lifetime from the moment of writing
    pub expires_in: Duration,
    /// Only sent over HTTPS
    pub secure: bool,
    /// Cross-site policy
    pub same_site: SameSite,
}

/// Cookie as persisted in the jar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCookie {
    /// Cookie value
    pub value: String,
    /// Absolute expiry
    pub expires_at: DateTime<Utc>,
    /// `secure` attribute
    pub secure: bool,
    /// `SameSite` attribute
    pub same_site: SameSite,
}

impl StoredCookie {
    /// True once `now` has reached the expiry
    #[must_use]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

/// Named cookies over any [`KeyValueStore`]
#[derive(Clone)]
pub struct CookieJar {
    store: Arc<dyn KeyValueStore>,
}

impl CookieJar {
    /// Jar over the given store
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Write `name=value` with the given attributes
    ///
    /// # Errors
    ///
    /// Returns a storage error when the jar cannot be written
    pub fn set(&self, name: &str, value: &str, options: CookieOptions) -> AppResult<()> {
        let cookie = StoredCookie {
            value: value.to_owned(),
            expires_at: Utc::now() + options.expires_in,
            secure: options.secure,
            same_site: options.same_site,
        };
        self.store.set(name, &serde_json::to_string(&cookie)?)
    }

    /// Full cookie record, or `None` when missing, expired or unreadable
    ///
    /// # Errors
    ///
    /// Returns a storage error when the jar cannot be read
    pub fn get_cookie(&self, name: &str) -> AppResult<Option<StoredCookie>> {
        let Some(raw) = self.store.get(name)? else {
            return Ok(None);
        };
        let cookie: StoredCookie = match serde_json::from_str(&raw) {
            Ok(cookie) => cookie,
            Err(error) => {
                warn!(cookie = name, error = %error, "dropping unreadable cookie");
                self.store.remove(name)?;
                return Ok(None);
            }
        };
        if cookie.is_expired_at(Utc::now()) {
            debug!(cookie = name, expired_at = %cookie.expires_at, "cookie expired");
            self.store.remove(name)?;
            return Ok(None);
        }
        Ok(Some(cookie))
    }

    /// Cookie value, or `None` when missing or expired
    ///
    /// # Errors
    ///
    /// Returns a storage error when the jar cannot be read
    pub fn get(&self, name: &str) -> AppResult<Option<String>> {
        Ok(self.get_cookie(name)?.map(|cookie| cookie.value))
    }

    /// Delete a cookie; deleting a missing cookie is not an error
    ///
    /// # Errors
    ///
    /// Returns a storage error when the jar cannot be written
    pub fn remove(&self, name: &str) -> AppResult<()> {
        self.store.remove(name)
    }
}
