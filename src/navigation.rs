// ABOUTME: Current client route and redirect history
// ABOUTME: Shared between the session store, page guards, and the CLI
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use gym_sharks_core::constants::routes;
use std::mem;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::debug;

#[derive(Debug)]
struct NavigationState {
    current: String,
    history: Vec<String>,
    redirects: usize,
}

/// Where the user currently is
///
/// Cloning shares the same location.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: Arc<Mutex<NavigationState>>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::at(routes::HOME)
    }
}

impl Navigator {
    /// Navigator positioned at `path`
    #[must_use]
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(NavigationState {
                current: path.into(),
                history: Vec::new(),
                redirects: 0,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, NavigationState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current path
    #[must_use]
    pub fn current_path(&self) -> String {
        self.lock().current.clone()
    }

    /// True while the user is on a login or registration surface
    #[must_use]
    pub fn is_auth_route(&self) -> bool {
        is_auth_path(&self.lock().current)
    }

    /// Move to `path`, keeping the previous location in history
    pub fn push(&self, path: impl Into<String>) {
        let path = path.into();
        let mut state = self.lock();
        let previous = mem::replace(&mut state.current, path);
        state.history.push(previous);
    }

    /// Move to `path` without a history entry
    pub fn replace(&self, path: impl Into<String>) {
        let path = path.into();
        debug!(to = %path, "redirect");
        let mut state = self.lock();
        state.current = path;
        state.redirects += 1;
    }

    /// Return to the previous location, if any
    pub fn back(&self) -> Option<String> {
        let mut state = self.lock();
        let previous = state.history.pop()?;
        state.current = previous.clone();
        Some(previous)
    }

    /// Number of redirects performed so far
    #[must_use]
    pub fn redirect_count(&self) -> usize {
        self.lock().redirects
    }
}

/// True for paths under `/auth/`
#[must_use]
pub fn is_auth_path(path: &str) -> bool {
    path.starts_with(routes::AUTH_PREFIX)
}
