// ABOUTME: Backend response envelope and the typed payloads carried inside it
// ABOUTME: Every endpoint answers {success, message?, data?, error?} plus optional paging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use super::diet::DietPlan;
use super::membership::MembershipSubscription;
use super::supplement::Supplement;
use super::user::User;
use super::workout::HomeWorkout;
use crate::errors::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};

/// Standard backend response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the backend considers the call successful
    pub success: bool,
    /// Human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Payload
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error text on failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Items on this page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Items across all pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u32>,
    /// Current page, 1-based
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Number of pages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<u32>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope around `data`
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            error: None,
            count: None,
            total: None,
            page: None,
            pages: None,
        }
    }

    /// Failed envelope with a message
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            error: None,
            count: None,
            total: None,
            page: None,
            pages: None,
        }
    }

    /// Unwrap the payload of a successful envelope
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unsuccessful` when `success` is false or the
    /// payload is missing
    pub fn into_data(self, endpoint: &str) -> ApiResult<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            _ => Err(ApiError::Unsuccessful {
                endpoint: endpoint.to_owned(),
                message: self.message.or(self.error),
            }),
        }
    }
}

/// `data` of `GET /auth/profile` and `PUT /auth/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserData {
    /// Current user
    pub user: User,
}

/// `data` of the workout listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutsData {
    /// Workouts
    pub workouts: Vec<HomeWorkout>,
}

/// `data` of `GET /home-workouts/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutData {
    /// Requested workout
    pub workout: HomeWorkout,
}

/// `data` of the supplement listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplementsData {
    /// Supplements
    pub supplements: Vec<Supplement>,
}

/// `data` of `GET /supplements/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplementData {
    /// Requested supplement
    pub supplement: Supplement,
}

/// `data` of `GET /diets`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietsData {
    /// Goals that have at least one plan
    #[serde(default)]
    pub available_goals: Vec<String>,
    /// Plans
    pub diet_plans: Vec<DietPlan>,
}

/// `data` of `GET /diets/{goal}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietData {
    /// Plan for the requested goal
    pub diet_plan: DietPlan,
}

/// `data` of `POST /memberships/subscribe`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriptionData {
    /// Created subscription
    pub subscription: MembershipSubscription,
}

/// Body of `GET /health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Backend reports healthy
    pub success: bool,
    /// Status text
    #[serde(default)]
    pub message: String,
    /// Server time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_data_success() {
        let response: ApiResponse<WorkoutsData> = serde_json::from_str(
            r#"{"success": true, "count": 0, "total": 0, "page": 1, "pages": 0, "data": {"workouts": []}}"#,
        )
        .unwrap();
        assert_eq!(response.page, Some(1));
        assert!(response.into_data("/home-workouts").unwrap().workouts.is_empty());
    }

    #[test]
    fn test_into_data_surfaces_backend_message() {
        let response: ApiResponse<UserData> =
            serde_json::from_str(r#"{"success": false, "message": "Invalid credentials"}"#)
                .unwrap();
        let error = response.into_data("/auth/login").unwrap_err();
        assert_eq!(error.server_message(), Some("Invalid credentials"));
    }

    #[test]
    fn test_missing_data_is_unsuccessful() {
        let response: ApiResponse<UserData> =
            serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(matches!(
            response.into_data("/auth/profile"),
            Err(ApiError::Unsuccessful { .. })
        ));
    }
}
