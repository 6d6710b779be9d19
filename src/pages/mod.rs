// ABOUTME: Page view models: the data each page renders, built from a FitnessData source
// ABOUTME: Shared panel states for loading, failure with retry, not-found, and auth redirects
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

//! Page view models
//!
//! Each page loads independently. A failing panel never takes the page
//! down: it turns into [`PanelState::Failed`] with a retry flag, and an
//! unknown id becomes [`Lookup::NotFound`] with a link back to the listing.

/// AI coach demo forms
pub mod ai_coach;
/// Auth-guarded dashboard
pub mod dashboard;
/// Diet plans grouped by goal
pub mod diets;
/// Landing page
pub mod home;
/// Progress tracking
pub mod progress;
/// Supplement listing and detail
pub mod supplements;
/// Workout detail and session start
pub mod workout_detail;
/// Workout listing
pub mod workouts;

use crate::session::SessionStore;
use gym_sharks_core::constants::routes;
use gym_sharks_core::errors::{AppResult, ErrorCode};
use gym_sharks_core::models::User;
use serde::Serialize;

/// State of one independently loaded panel
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PanelState<T> {
    /// Not loaded yet
    #[default]
    Loading,
    /// Loaded
    Ready(T),
    /// Load failed
    Failed {
        /// Text shown in the panel
        message: String,
        /// Whether a retry button makes sense
        retryable: bool,
    },
}

impl<T> PanelState<T> {
    /// Panel state for a finished load
    #[must_use]
    pub fn from_result(result: AppResult<T>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(error) => {
                let retryable = !matches!(
                    error.code,
                    ErrorCode::FeatureDisabled
                        | ErrorCode::InvalidInput
                        | ErrorCode::MissingRequiredField
                        | ErrorCode::AuthRequired
                        | ErrorCode::AuthInvalid
                );
                tracing::warn!(error = %error, retryable, "panel failed to load");
                Self::Failed {
                    message: error.code.description().to_owned(),
                    retryable,
                }
            }
        }
    }

    /// Loaded value, if any
    #[must_use]
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            Self::Loading | Self::Failed { .. } => None,
        }
    }

    /// True when the panel shows a retry affordance
    #[must_use]
    pub const fn can_retry(&self) -> bool {
        matches!(self, Self::Failed { retryable: true, .. })
    }
}

/// Result of looking up a record by id
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Lookup<T> {
    /// Record exists
    Found(T),
    /// No record with that id
    NotFound {
        /// Listing to go back to
        back_link: &'static str,
    },
}

impl<T> Lookup<T> {
    /// Found value, if any
    #[must_use]
    pub const fn found(&self) -> Option<&T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound { .. } => None,
        }
    }
}

/// Page that requires a logged-in user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum Guarded<T> {
    /// Session still bootstrapping
    Loading,
    /// Nobody logged in; the navigator was sent to the login page
    RedirectToLogin,
    /// Page content
    Ready(T),
}

/// Logged-in user, or the guard state to render instead
///
/// Redirects the navigator to the login page when nobody is logged in.
pub fn require_user<T>(store: &SessionStore) -> Result<User, Guarded<T>> {
    let state = store.snapshot();
    if state.is_loading {
        return Err(Guarded::Loading);
    }
    if let Some(user) = state.user {
        return Ok(user);
    }
    store.navigator().replace(routes::LOGIN);
    Err(Guarded::RedirectToLogin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_sharks_core::errors::AppError;

    #[test]
    fn test_panel_state_marks_transient_failures_retryable() {
        let failed: PanelState<u32> =
            PanelState::from_result(Err(AppError::external_service("backend", "502")));
        assert!(failed.can_retry());

        let disabled: PanelState<u32> = PanelState::from_result(Err(AppError::new(
            ErrorCode::FeatureDisabled,
            "off",
        )));
        assert!(!disabled.can_retry());
        assert_eq!(PanelState::from_result(Ok(3)).ready(), Some(&3));
    }
}
