// ABOUTME: Supplement endpoints: listing, detail, by category, and recommended by goal
// ABOUTME: All reads use the query retry budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use super::Page;
use crate::client::ApiClient;
use gym_sharks_core::constants::endpoints;
use gym_sharks_core::errors::ApiResult;
use gym_sharks_core::models::{
    ApiResponse, Supplement, SupplementCategory, SupplementData, SupplementTarget,
    SupplementsData,
};

/// Query parameters accepted by `GET /supplements`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupplementQuery {
    /// Category filter
    pub category: Option<SupplementCategory>,
    /// Page number, 1-based
    pub page: Option<u32>,
    /// Page size
    pub limit: Option<u32>,
}

impl SupplementQuery {
    /// Encode the populated fields as query pairs
    #[must_use]
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("category", category.as_str().to_owned()));
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

/// Supplement catalog endpoints
#[derive(Debug, Clone)]
pub struct SupplementService {
    client: ApiClient,
}

impl SupplementService {
    /// Create the service
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    async fn list_at(&self, path: &str, params: &[(&str, String)]) -> ApiResult<Page<Supplement>> {
        let response: ApiResponse<SupplementsData> = self.client.query(path, params).await?;
        Page::from_envelope(response, path, |data| data.supplements)
    }

    /// `GET /supplements`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn list(&self, query: &SupplementQuery) -> ApiResult<Page<Supplement>> {
        self.list_at(endpoints::SUPPLEMENTS, &query.to_params()).await
    }

    /// `GET /supplements/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with status 404 for unknown ids
    pub async fn get(&self, id: &str) -> ApiResult<Supplement> {
        let path = endpoints::supplement(id);
        let response: ApiResponse<SupplementData> = self.client.query(&path, &[]).await?;
        Ok(response.into_data(&path)?.supplement)
    }

    /// `GET /supplements/category/{category}`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn by_category(&self, category: SupplementCategory) -> ApiResult<Vec<Supplement>> {
        let path = endpoints::supplements_by_category(category.as_str());
        Ok(self.list_at(&path, &[]).await?.items)
    }

    /// `GET /supplements/recommended/{goal}`
    ///
    /// # Errors
    ///
    /// Returns an `ApiError` when the request or envelope fails
    pub async fn recommended(&self, goal: SupplementTarget) -> ApiResult<Vec<Supplement>> {
        let path = endpoints::recommended_supplements(goal.as_str());
        Ok(self.list_at(&path, &[]).await?.items)
    }
}
