// ABOUTME: Membership endpoints: plan listing and subscription
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::client::ApiClient;
use gym_sharks_core::constants::endpoints;
use gym_sharks_core::errors::ApiResult;
use gym_sharks_core::models::{ApiResponse, Membership, MembershipSubscription, SubscriptionData};
use reqwest::Method;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubscribeBody<'a> {
    plan_id: &'a str,
}

/// Membership endpoints
#[derive(Debug, Clone)]
pub struct MembershipService {
    client: ApiClient,
}

impl MembershipService {
    /// Create the service
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// `GET /memberships`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn list(&self) -> ApiResult<Vec<Membership>> {
        let response: ApiResponse<Vec<Membership>> =
            self.client.query(endpoints::MEMBERSHIPS, &[]).await?;
        response.into_data(endpoints::MEMBERSHIPS)
    }

    /// `POST /memberships/subscribe`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn subscribe(&self, plan_id: &str) -> ApiResult<MembershipSubscription> {
        let body = SubscribeBody { plan_id };
        let response: ApiResponse<SubscriptionData> = self
            .client
            .mutate(Method::POST, endpoints::MEMBERSHIPS_SUBSCRIBE, Some(&body))
            .await?;
        Ok(response
            .into_data(endpoints::MEMBERSHIPS_SUBSCRIBE)?
            .subscription)
    }
}
