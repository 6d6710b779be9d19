// ABOUTME: Backend health check endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::client::ApiClient;
use gym_sharks_core::constants::endpoints;
use gym_sharks_core::errors::ApiResult;
use gym_sharks_core::models::HealthStatus;

/// Health check endpoint
#[derive(Debug, Clone)]
pub struct HealthService {
    client: ApiClient,
}

impl HealthService {
    /// Create the service
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /health`, a single attempt
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the backend is unreachable or unhealthy
    pub async fn check(&self) -> ApiResult<HealthStatus> {
        self.client.get_once(endpoints::HEALTH, &[]).await
    }
}
