// ABOUTME: Home workout endpoints: listing with filters, detail, featured, recommendations
// ABOUTME: All reads use the query retry budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use super::Page;
use crate::client::ApiClient;
use gym_sharks_core::constants::endpoints;
use gym_sharks_core::errors::ApiResult;
use gym_sharks_core::models::{
    ApiResponse, HomeWorkout, WorkoutCategory, WorkoutData, WorkoutDifficulty, WorkoutsData,
};

/// Query parameters accepted by `GET /home-workouts`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutQuery {
    /// Category filter
    pub category: Option<WorkoutCategory>,
    /// Difficulty filter
    pub difficulty: Option<WorkoutDifficulty>,
    /// Duration bucket as understood by the backend
    pub duration: Option<String>,
    /// Page number, 1-based
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
}

impl WorkoutQuery {
    /// Encode the populated fields as query pairs
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("category", category.as_str().to_owned()));
        }
        if let Some(difficulty) = self.difficulty {
            params.push(("difficulty", difficulty.as_str().to_owned()));
        }
        if let Some(duration) = &self.duration {
            params.push(("duration", duration.clone()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit", limit.to_string()));
        }
        params
    }
}

/// Workout catalog endpoints
#[derive(Debug, Clone)]
pub struct WorkoutService {
    client: ApiClient,
}

impl WorkoutService {
    /// Create the service
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn list_at(&self, path: &str, params: &[(&str, String)]) -> ApiResult<Page<HomeWorkout>> {
        let response: ApiResponse<WorkoutsData> = self.client.query(path, params).await?;
        Page::from_envelope(response, path, |data| data.workouts)
    }

    /// `GET /home-workouts`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn list(&self, query: &WorkoutQuery) -> ApiResult<Page<HomeWorkout>> {
        self.list_at(endpoints::HOME_WORKOUTS, &query.to_params())
            .await
    }

    /// `GET /home-workouts/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with status 404 for unknown ids
    pub async fn get(&self, id: &str) -> ApiResult<HomeWorkout> {
        let path = endpoints::workout(id);
        let response: ApiResponse<WorkoutData> = self.client.query(&path, &[]).await?;
        Ok(response.into_data(&path)?.workout)
    }

    /// `GET /home-workouts/category/{category}`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn by_category(&self, category: WorkoutCategory) -> ApiResult<Vec<HomeWorkout>> {
        let path = endpoints::workouts_by_category(category.as_str());
        Ok(self.list_at(&path, &[]).await?.items)
    }

    /// `GET /home-workouts/difficulty/{difficulty}`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn by_difficulty(
        &self,
        difficulty: WorkoutDifficulty,
    ) -> ApiResult<Vec<HomeWorkout>> {
        let path = endpoints::workouts_by_difficulty(difficulty.as_str());
        Ok(self.list_at(&path, &[]).await?.items)
    }

    /// `GET /home-workouts/featured`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn featured(&self) -> ApiResult<Vec<HomeWorkout>> {
        Ok(self
            .list_at(endpoints::HOME_WORKOUTS_FEATURED, &[])
            .await?
            .items)
    }

    /// `GET /home-workouts/recommendations`, personalised by the bearer token
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn recommendations(&self) -> ApiResult<Vec<HomeWorkout>> {
        Ok(self
            .list_at(endpoints::HOME_WORKOUTS_RECOMMENDATIONS, &[])
            .await?
            .items)
    }
}
