// ABOUTME: One service per backend area, each a thin typed layer over ApiClient
// ABOUTME: Unwraps response envelopes and applies the query or mutation retry budget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

mod auth;
mod coach;
mod diets;
mod health;
mod memberships;
mod progress;
mod supplements;
mod workouts;

pub use auth::{AuthApi, AuthService};
pub use coach::CoachService;
pub use diets::DietService;
pub use health::HealthService;
pub use memberships::MembershipService;
pub use progress::ProgressService;
pub use supplements::{SupplementQuery, SupplementService};
pub use workouts::{WorkoutQuery, WorkoutService};

use gym_sharks_core::errors::ApiResult;
use gym_sharks_core::models::ApiResponse;

/// One page of a listing plus the backend's paging counters
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page
    pub items: Vec<T>,
    /// Items across all pages, when reported
    pub total: Option<u32>,
    /// Current page, 1-based
    pub page: Option<u32>,
    /// Number of pages
    pub pages: Option<u32>,
}

impl<T> Page<T> {
    /// Unwrap a list envelope, pulling the items out of its payload
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Unsuccessful` when the envelope reports failure
    pub fn from_envelope<D>(
        response: ApiResponse<D>,
        endpoint: &str,
        items: impl FnOnce(D) -> Vec<T>,
    ) -> ApiResult<Self> {
        let (total, page, pages) = (response.total, response.page, response.pages);
        let data = response.into_data(endpoint)?;
        Ok(Self {
            items: items(data),
            total,
            page,
            pages,
        })
    }

    /// True when another page follows this one
    #[must_use]
    pub fn has_next(&self) -> bool {
        matches!((self.page, self.pages), (Some(page), Some(pages)) if page < pages)
    }
}
