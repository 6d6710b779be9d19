// ABOUTME: Authentication endpoints: login, registration, and the current profile
// ABOUTME: AuthApi is the seam the session manager depends on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::client::ApiClient;
use async_trait::async_trait;
use gym_sharks_core::constants::endpoints;
use gym_sharks_core::errors::ApiResult;
use gym_sharks_core::models::{
    ApiResponse, AuthPayload, LoginRequest, ProfileUpdate, RegisterRequest, User, UserData,
};
use reqwest::Method;

/// Authentication operations used by the session manager
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchange credentials for a token and user
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthPayload>;

    /// Create an account and sign in
    async fn register(&self, fields: &RegisterRequest) -> ApiResult<AuthPayload>;

    /// Fetch the profile belonging to the current token
    async fn profile(&self) -> ApiResult<User>;

    /// Apply a partial profile update and return the stored user
    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User>;
}

/// [`AuthApi`] backed by the HTTP backend
///
/// Each call is a single attempt so a failed login is never replayed.
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    /// Create the service
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthApi for AuthService {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthPayload> {
        let response: ApiResponse<AuthPayload> = self
            .client
            .send_once(Method::POST, endpoints::AUTH_LOGIN, Some(credentials))
            .await?;
        response.into_data(endpoints::AUTH_LOGIN)
    }

    async fn register(&self, fields: &RegisterRequest) -> ApiResult<AuthPayload> {
        let response: ApiResponse<AuthPayload> = self
            .client
            .send_once(Method::POST, endpoints::AUTH_REGISTER, Some(fields))
            .await?;
        response.into_data(endpoints::AUTH_REGISTER)
    }

    async fn profile(&self) -> ApiResult<User> {
        let response: ApiResponse<UserData> =
            self.client.get_once(endpoints::AUTH_PROFILE, &[]).await?;
        Ok(response.into_data(endpoints::AUTH_PROFILE)?.user)
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        let response: ApiResponse<UserData> = self
            .client
            .send_once(Method::PUT, endpoints::AUTH_PROFILE, Some(update))
            .await?;
        Ok(response.into_data(endpoints::AUTH_PROFILE)?.user)
    }
}
