// ABOUTME: User profile and authentication request/response models
// ABOUTME: User, preferences, login/register payloads, and partial profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::errors::{AppError, AppResult, ErrorCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Self-described gender on the profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or undisclosed
    Other,
}

impl Gender {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(AppError::invalid_input(format!("unknown gender '{other}'"))),
        }
    }
}

/// Training goal a user works towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FitnessGoal {
    /// Lose body weight
    #[serde(rename = "weight loss")]
    WeightLoss,
    /// Build muscle
    #[serde(rename = "muscle gain")]
    MuscleGain,
    /// Keep current shape
    #[serde(rename = "maintenance")]
    Maintenance,
}

impl FitnessGoal {
    /// All goals in presentation order
    pub const ALL: [Self; 3] = [Self::WeightLoss, Self::MuscleGain, Self::Maintenance];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Maintenance => "maintenance",
        }
    }
}

impl fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|goal| goal.as_str() == normalized)
            .ok_or_else(|| AppError::invalid_input(format!("unknown fitness goal '{s}'")))
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Little or no exercise
    #[serde(rename = "sedentary")]
    Sedentary,
    /// Light exercise
    #[serde(rename = "light")]
    Light,
    /// Moderate exercise
    #[serde(rename = "moderate")]
    Moderate,
    /// Hard exercise most days
    #[serde(rename = "active")]
    Active,
    /// Physical job or twice-daily training
    #[serde(rename = "very active")]
    VeryActive,
}

impl ActivityLevel {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::VeryActive => "very active",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_'], " ").as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "very active" => Ok(Self::VeryActive),
            _ => Err(AppError::invalid_input(format!(
                "unknown activity level '{s}'"
            ))),
        }
    }
}

/// Workout and diet preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    /// Preferred workout styles
    pub workout_types: Vec<String>,
    /// Dietary restrictions
    pub dietary_restrictions: Vec<String>,
    /// Equipment available at home
    pub equipment: Vec<String>,
}

/// Authenticated user profile as returned by the backend
///
/// Cached verbatim in local storage so a reload with a valid token does not
/// need a profile round-trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimetres
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Weight in kilograms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Training goal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    /// Activity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Preferences
    #[serde(default)]
    pub preferences: UserPreferences,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Goal used for recommendations, falling back to maintenance
    #[must_use]
    pub fn goal_or_default(&self) -> FitnessGoal {
        self.goal.unwrap_or(FitnessGoal::Maintenance)
    }

    /// Body mass index when both height and weight are known
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        match (self.height, self.weight) {
            (Some(height_cm), Some(weight_kg)) if height_cm > 0.0 => {
                let height_m = height_cm / 100.0;
                Some(weight_kg / (height_m * height_m))
            }
            _ => None,
        }
    }
}

/// Credentials for `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Login email
    pub email: String,
    /// Plain-text password, only ever sent over the wire
    pub password: String,
}

impl LoginRequest {
    /// Reject obviously incomplete credentials before any request is made
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when email or password is blank
    pub fn validate(&self) -> AppResult<()> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}

/// Fields accepted by `POST /auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Chosen password
    pub password: String,
    /// Age in years
    pub age: u32,
    /// Gender
    pub gender: Gender,
    /// Height in centimetres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Training goal
    pub goal: FitnessGoal,
    /// Activity level
    pub activity_level: ActivityLevel,
}

impl RegisterRequest {
    /// Reject incomplete or nonsensical registration fields
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for blank text fields and
    /// `InvalidInput` for a malformed email or non-positive body measures
    pub fn validate(&self) -> AppResult<()> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("password", &self.password)?;
        if !self.email.contains('@') {
            return Err(AppError::invalid_input("email address is not valid"));
        }
        if self.height <= 0.0 || self.weight <= 0.0 {
            return Err(AppError::invalid_input(
                "height and weight must be positive",
            ));
        }
        Ok(())
    }
}

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::new(
            ErrorCode::MissingRequiredField,
            format!("{field} is required"),
        ));
    }
    Ok(())
}

/// Partial profile update for `PUT /auth/profile`
///
/// Only the populated fields are serialized.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New age
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// New gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// New height in centimetres
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// New weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// New goal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<FitnessGoal>,
    /// New activity level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    /// Replacement preferences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

impl ProfileUpdate {
    /// True when no field would be sent
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.height.is_none()
            && self.weight.is_none()
            && self.goal.is_none()
            && self.activity_level.is_none()
            && self.preferences.is_none()
    }
}

/// Token and user returned by login and registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthPayload {
    /// Authenticated user
    pub user: User,
    /// Opaque bearer token
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_backend_shape() {
        let json = r#"{
            "_id": "u1",
            "name": "Jamie",
            "email": "jamie@example.com",
            "age": 29,
            "gender": "other",
            "height": 180,
            "weight": 81,
            "goal": "muscle gain",
            "activityLevel": "very active",
            "preferences": {"workoutTypes": ["HIIT"], "dietaryRestrictions": [], "equipment": []},
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-02T00:00:00Z"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.goal, Some(FitnessGoal::MuscleGain));
        assert_eq!(user.activity_level, Some(ActivityLevel::VeryActive));
        assert_eq!(user.preferences.workout_types, vec!["HIIT".to_owned()]);
        let bmi = user.bmi().unwrap();
        assert!((bmi - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_sparse_user_defaults() {
        let user: User =
            serde_json::from_str(r#"{"id": "u2", "name": "Sam", "email": "sam@example.com"}"#)
                .unwrap();
        assert_eq!(user.goal_or_default(), FitnessGoal::Maintenance);
        assert!(user.bmi().is_none());
    }

    #[test]
    fn test_goal_parsing_is_lenient() {
        assert_eq!(
            "Weight-Loss".parse::<FitnessGoal>().unwrap(),
            FitnessGoal::WeightLoss
        );
        assert!("bulking".parse::<FitnessGoal>().is_err());
    }

    #[test]
    fn test_profile_update_serializes_only_set_fields() {
        let update = ProfileUpdate {
            weight: Some(79.5),
            ..ProfileUpdate::default()
        };
        assert!(!update.is_empty());
        assert_eq!(serde_json::to_string(&update).unwrap(), r#"{"weight":79.5}"#);
    }

    #[test]
    fn test_login_validation() {
        let request = LoginRequest {
            email: " ".into(),
            password: "secret".into(),
        };
        let error = request.validate().unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
    }
}
