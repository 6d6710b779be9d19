// ABOUTME: AI coach endpoints for workout tips, nutrition advice, and general tips
// ABOUTME: Advice requests are POSTs but read-only, so they use the mutation retry budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::client::ApiClient;
use gym_sharks_core::constants::endpoints;
use gym_sharks_core::errors::ApiResult;
use gym_sharks_core::models::{AiAdvice, ApiResponse, NutritionAdviceRequest, WorkoutTipsRequest};
use reqwest::Method;
use serde::Serialize;

/// AI coach endpoints
#[derive(Debug, Clone)]
pub struct CoachService {
    client: ApiClient,
}

impl CoachService {
    /// Create the service
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn advice<B: Serialize + Sync + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<AiAdvice> {
        let response: ApiResponse<AiAdvice> = self.client.mutate(Method::POST, path, body).await?;
        response.into_data(path)
    }

    /// `POST /ai/workout-tips`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn workout_tips(&self, request: &WorkoutTipsRequest) -> ApiResult<AiAdvice> {
        self.advice(endpoints::AI_WORKOUT_TIPS, Some(request)).await
    }

    /// `POST /ai/nutrition-advice`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn nutrition_advice(&self, request: &NutritionAdviceRequest) -> ApiResult<AiAdvice> {
        self.advice(endpoints::AI_NUTRITION_ADVICE, Some(request))
            .await
    }

    /// `POST /ai/general-tips`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn general_tips(&self) -> ApiResult<AiAdvice> {
        self.advice::<()>(endpoints::AI_GENERAL_TIPS, None).await
    }
}
