// ABOUTME: Progress endpoints, switched off on this client
// ABOUTME: Every call reports a Disabled error without touching the network
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use gym_sharks_core::errors::{ApiError, ApiResult};
use gym_sharks_core::models::{NewProgressEntry, Progress};
use tracing::debug;

const FEATURE: &str = "progress";

fn disabled<T>(operation: &str) -> ApiResult<T> {
    debug!(operation, "progress API disabled, no request sent");
    Err(ApiError::Disabled {
        feature: FEATURE.to_owned(),
    })
}

/// Progress endpoints
///
/// The backend routes exist but the client serves progress from local data,
/// so nothing here performs I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressService;

#[allow(clippy::unused_async)]
impl ProgressService {
    /// Create the service
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `GET /progress`
    ///
    /// # Errors
    ///
    /// Always returns `ApiError::Disabled`
    pub async fn list(&self) -> ApiResult<Vec<Progress>> {
        disabled("list")
    }

    /// `POST /progress`
    ///
    /// # Errors
    ///
    /// Always returns `ApiError::Disabled`
    pub async fn create(&self, _entry: &NewProgressEntry) -> ApiResult<Progress> {
        disabled("create")
    }

    /// `PUT /progress/{id}`
    ///
    /// # Errors
    ///
    /// Always returns `ApiError::Disabled`
    pub async fn update(&self, _id: &str, _entry: &NewProgressEntry) -> ApiResult<Progress> {
        disabled("update")
    }

    /// `DELETE /progress/{id}`
    ///
    /// # Errors
    ///
    /// Always returns `ApiError::Disabled`
    pub async fn delete(&self, _id: &str) -> ApiResult<()> {
        disabled("delete")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_every_operation_is_disabled() {
        let service = ProgressService::new();
        assert!(matches!(service.list().await, Err(ApiError::Disabled { .. })));
        let entry = NewProgressEntry::default();
        assert!(service.create(&entry).await.is_err());
        assert!(service.update("1", &entry).await.is_err());
        let error = service.delete("1").await.unwrap_err();
        assert_eq!(error.to_string(), "progress API is disabled");
    }
}
