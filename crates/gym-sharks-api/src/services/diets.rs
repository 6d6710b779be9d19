// ABOUTME: Diet plan endpoints: all plans with available goals, and the plan for one goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::client::ApiClient;
use gym_sharks_core::constants::endpoints;
use gym_sharks_core::errors::ApiResult;
use gym_sharks_core::models::{ApiResponse, DietData, DietPlan, DietsData, FitnessGoal};

/// Diet plan endpoints
#[derive(Debug, Clone)]
pub struct DietService {
    client: ApiClient,
}

impl DietService {
    /// Create the service
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /diets`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn list(&self) -> ApiResult<DietsData> {
        let response: ApiResponse<DietsData> = self.client.query(endpoints::DIETS, &[]).await?;
        response.into_data(endpoints::DIETS)
    }

    /// `GET /diets/{goal}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with status 404 when no plan exists for the goal
    pub async fn by_goal(&self, goal: FitnessGoal) -> ApiResult<DietPlan> {
        let path = endpoints::diet_by_goal(goal.as_str());
        let response: ApiResponse<DietData> = self.client.query(&path, &[]).await?;
        Ok(response.into_data(&path)?.diet_plan)
    }
}
