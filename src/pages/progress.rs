// ABOUTME: Progress tracking page: entries newest first, a local entry form, and trend summary
// ABOUTME: New entries live only in the page; the backend has no progress endpoints yet
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::{require_user, Guarded, PanelState};
use crate::data::FitnessData;
use crate::session::{Notice, Notifier, SessionStore};
use chrono::Utc;
use gym_sharks_core::constants::messages;
use gym_sharks_core::errors::AppResult;
use gym_sharks_core::models::{NewProgressEntry, Progress};
use serde::Serialize;
use std::cmp::Reverse;
use std::mem;
use tracing::info;
use uuid::Uuid;

/// Sort entries newest first; undated entries go last
pub(crate) fn newest_first(entries: &mut [Progress]) {
    entries.sort_by_key(|entry| Reverse(entry.day()));
}

/// Change between the oldest and newest entries carrying a value
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    /// Number of entries
    pub entries: usize,
    /// Most recent weight
    pub latest_weight: Option<f64>,
    /// Weight change in kilograms
    pub weight_change: Option<f64>,
    /// Body fat change in percentage points
    pub body_fat_change: Option<f64>,
    /// Muscle mass change in kilograms
    pub muscle_mass_change: Option<f64>,
}

impl ProgressSummary {
    /// Summary of `entries`, which must be newest first
    #[must_use]
    pub fn from_newest_first(entries: &[Progress]) -> Self {
        Self {
            entries: entries.len(),
            latest_weight: entries.iter().find_map(|entry| entry.weight),
            weight_change: change(entries, |entry| entry.weight),
            body_fat_change: change(entries, |entry| entry.body_fat),
            muscle_mass_change: change(entries, |entry| entry.muscle_mass),
        }
    }
}

fn change(entries: &[Progress], value: impl Fn(&Progress) -> Option<f64>) -> Option<f64> {
    let mut values = entries.iter().filter_map(value);
    let newest = values.next()?;
    let oldest = values.last()?;
    Some(newest - oldest)
}

/// Progress page for the logged-in user
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressPage {
    user_id: String,
    entries: PanelState<Vec<Progress>>,
}

impl ProgressPage {
    /// Load the page, or the guard state when nobody is logged in
    pub async fn load(store: &SessionStore, data: &dyn FitnessData) -> Guarded<Self> {
        let user = match require_user(store) {
            Ok(user) => user,
            Err(guard) => return guard,
        };
        let entries = data.progress().await.map(|mut entries| {
            newest_first(&mut entries);
            entries
        });
        Guarded::Ready(Self {
            user_id: user.id,
            entries: PanelState::from_result(entries),
        })
    }

    /// Entries newest first
    #[must_use]
    pub fn entries(&self) -> &[Progress] {
        self.entries.ready().map_or(&[], Vec::as_slice)
    }

    /// Load state of the entry list
    #[must_use]
    pub const fn state(&self) -> &PanelState<Vec<Progress>> {
        &self.entries
    }

    /// Trend summary over the loaded entries
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary::from_newest_first(self.entries())
    }

    /// Validate the form and put the new entry on top
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the form is empty or holds a negative value
    pub fn add(&mut self, form: NewProgressEntry, notifier: &dyn Notifier) -> AppResult<&Progress> {
        form.validate()?;
        let entry = form.into_progress(
            Uuid::new_v4().to_string(),
            self.user_id.clone(),
            Utc::now().date_naive(),
        );
        info!(user.id = %self.user_id, progress.id = %entry.id, "progress entry added");

        let mut entries = match &mut self.entries {
            PanelState::Ready(entries) => mem::take(entries),
            PanelState::Loading | PanelState::Failed { .. } => Vec::new(),
        };
        entries.insert(0, entry);
        self.entries = PanelState::Ready(entries);
        notifier.notify(Notice::success(messages::PROGRESS_ADDED));

        Ok(&self.entries()[0])
    }
}
