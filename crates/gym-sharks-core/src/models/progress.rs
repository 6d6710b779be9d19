// ABOUTME: Body measurement and workout log entries shown on the progress page
// ABOUTME: Includes the local entry form and date parsing for newest-first ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};

/// Body circumferences in centimetres
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Measurements {
    /// Chest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chest: Option<f64>,
    /// Waist
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waist: Option<f64>,
    /// Hips
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hips: Option<f64>,
    /// Upper arms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arms: Option<f64>,
    /// Thighs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thighs: Option<f64>,
}

impl Measurements {
    /// True when no measurement was taken
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.chest.is_none()
            && self.waist.is_none()
            && self.hips.is_none()
            && self.arms.is_none()
            && self.thighs.is_none()
    }
}

/// How hard a logged workout felt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PerceivedEffort {
    /// Easy
    Easy,
    /// Moderate
    Moderate,
    /// Hard
    Hard,
}

/// Workout attached to a progress entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutCompleted {
    /// Workout identifier
    pub workout_id: String,
    /// Minutes trained
    pub duration: u32,
    /// Energy spent
    pub calories_burned: u32,
    /// Perceived effort
    pub difficulty: PerceivedEffort,
}

/// Logged progress entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    /// Identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Owning user
    #[serde(default)]
    pub user: String,
    /// Calendar date or full timestamp
    pub date: String,
    /// Body weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Body fat percentage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    /// Muscle mass in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_mass: Option<f64>,
    /// Circumferences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measurements: Option<Measurements>,
    /// Workout done that day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_completed: Option<WorkoutCompleted>,
    /// Free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Photo URLs
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Progress {
    /// Calendar day of the entry, accepting `YYYY-MM-DD` or RFC 3339
    #[must_use]
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(&self.date)
                    .ok()
                    .map(|timestamp| timestamp.date_naive())
            })
    }
}

/// Values captured by the "log progress" form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProgressEntry {
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Body fat percentage
    pub body_fat: Option<f64>,
    /// Muscle mass in kilograms
    pub muscle_mass: Option<f64>,
    /// Circumferences
    #[serde(default)]
    pub measurements: Measurements,
    /// Free-text notes
    pub notes: Option<String>,
}

impl NewProgressEntry {
    /// Reject negative values and forms with nothing filled in
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the form is empty or a value is negative
    pub fn validate(&self) -> AppResult<()> {
        let notes_blank = self
            .notes
            .as_deref()
            .is_none_or(|notes| notes.trim().is_empty());
        if self.weight.is_none()
            && self.body_fat.is_none()
            && self.muscle_mass.is_none()
            && self.measurements.is_empty()
            && notes_blank
        {
            return Err(AppError::invalid_input(
                "enter at least one measurement or note",
            ));
        }
        let values = [
            self.weight,
            self.body_fat,
            self.muscle_mass,
            self.measurements.chest,
            self.measurements.waist,
            self.measurements.hips,
            self.measurements.arms,
            self.measurements.thighs,
        ];
        if values.into_iter().flatten().any(|value| value < 0.0) {
            return Err(AppError::invalid_input("measurements cannot be negative"));
        }
        Ok(())
    }

    /// Turn the form into an entry for `user_id` dated `date`
    #[must_use]
    pub fn into_progress(self, id: String, user_id: String, date: NaiveDate) -> Progress {
        Progress {
            id,
            user: user_id,
            date: date.format("%Y-%m-%d").to_string(),
            weight: self.weight,
            body_fat: self.body_fat,
            muscle_mass: self.muscle_mass,
            measurements: (!self.measurements.is_empty()).then_some(self.measurements),
            workout_completed: None,
            notes: self.notes.filter(|notes| !notes.trim().is_empty()),
            photos: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_accepts_date_and_timestamp() {
        let mut entry: Progress =
            serde_json::from_str(r#"{"_id": "1", "date": "2024-01-15"}"#).unwrap();
        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2024, 1, 15));
        entry.date = "2024-02-01T08:30:00.000Z".into();
        assert_eq!(entry.day(), NaiveDate::from_ymd_opt(2024, 2, 1));
        entry.date = "yesterday".into();
        assert!(entry.day().is_none());
    }

    #[test]
    fn test_empty_form_is_rejected() {
        assert!(NewProgressEntry::default().validate().is_err());
        let form = NewProgressEntry {
            weight: Some(-1.0),
            ..NewProgressEntry::default()
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_form_converts_to_entry() {
        let form = NewProgressEntry {
            weight: Some(74.2),
            notes: Some("  ".into()),
            ..NewProgressEntry::default()
        };
        form.validate().unwrap();
        let entry = form.into_progress(
            "local-1".into(),
            "u1".into(),
            NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        );
        assert_eq!(entry.date, "2024-03-09");
        assert!(entry.measurements.is_none());
        assert!(entry.notes.is_none());
    }
}
