// ABOUTME: FitnessData answered entirely from the embedded mock catalog
// ABOUTME: No network access; membership operations are unavailable
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::{AdviceRequest, FitnessData};
use crate::catalog::Catalog;
use async_trait::async_trait;
use chrono::Utc;
use gym_sharks_core::errors::{AppError, AppResult, ErrorCode};
use gym_sharks_core::models::{
    AiAdvice, AiTip, Challenge, DietPlan, HealthStatus, HomeWorkout, Membership,
    MembershipSubscription, Progress, Supplement, UserStreak,
};
use std::sync::Arc;
use tracing::debug;

/// Catalog-backed data source
#[derive(Debug, Clone)]
pub struct MockData {
    catalog: Arc<Catalog>,
}

impl MockData {
    /// Source over `catalog`
    #[must_use]
    pub const fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Source over the process-wide embedded catalog
    ///
    /// # Errors
    ///
    /// Returns an internal error when the embedded datasets are malformed
    pub fn embedded() -> AppResult<Self> {
        Ok(Self::new(Catalog::embedded()?))
    }

    fn memberships_unavailable() -> AppError {
        AppError::new(
            ErrorCode::FeatureDisabled,
            "memberships require the live backend",
        )
    }
}

#[async_trait]
impl FitnessData for MockData {
    async fn workouts(&self) -> AppResult<Vec<HomeWorkout>> {
        Ok(self.catalog.workouts().to_vec())
    }

    async fn workout(&self, id: &str) -> AppResult<Option<HomeWorkout>> {
        Ok(self.catalog.workout(id).cloned())
    }

    async fn featured_workouts(&self) -> AppResult<Vec<HomeWorkout>> {
        Ok(self
            .catalog
            .workouts()
            .iter()
            .filter(|workout| workout.is_popular)
            .cloned()
            .collect())
    }

    async fn supplements(&self) -> AppResult<Vec<Supplement>> {
        Ok(self.catalog.supplements().to_vec())
    }

    async fn supplement(&self, id: &str) -> AppResult<Option<Supplement>> {
        Ok(self.catalog.supplement(id).cloned())
    }

    async fn diet_plans(&self) -> AppResult<Vec<DietPlan>> {
        Ok(self.catalog.diet_plans().to_vec())
    }

    async fn progress(&self) -> AppResult<Vec<Progress>> {
        Ok(self.catalog.progress().to_vec())
    }

    async fn streaks(&self) -> AppResult<Vec<UserStreak>> {
        Ok(self.catalog.streaks().to_vec())
    }

    async fn challenges(&self) -> AppResult<Vec<Challenge>> {
        Ok(self.catalog.challenges().to_vec())
    }

    async fn tips(&self) -> AppResult<Vec<AiTip>> {
        Ok(self.catalog.tips().to_vec())
    }

    async fn advice(&self, request: &AdviceRequest) -> AppResult<AiAdvice> {
        debug!(kind = %request.kind(), "answering advice request from mock data");
        Ok(self.catalog.advice(request.kind()).clone())
    }

    async fn memberships(&self) -> AppResult<Vec<Membership>> {
        Err(Self::memberships_unavailable())
    }

    async fn subscribe(&self, plan_id: &str) -> AppResult<MembershipSubscription> {
        Err(Self::memberships_unavailable().with_resource_id(plan_id))
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        Ok(HealthStatus {
            success: true,
            message: "Serving embedded mock data".to_owned(),
            timestamp: Some(Utc::now().to_rfc3339()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_featured_are_popular_in_catalog_order() {
        let data = MockData::embedded().unwrap();
        let featured = data.featured_workouts().await.unwrap();
        assert_eq!(featured.len(), 6);
        assert_eq!(featured[0].title, "HIIT Cardio Blast");
        assert!(featured.iter().all(|workout| workout.is_popular));
    }

    #[tokio::test]
    async fn test_unknown_ids_are_none() {
        let data = MockData::embedded().unwrap();
        assert!(data.workout("nope").await.unwrap().is_none());
        assert!(data.supplement("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_memberships_need_backend() {
        let data = MockData::embedded().unwrap();
        let error = data.memberships().await.unwrap_err();
        assert_eq!(error.code, ErrorCode::FeatureDisabled);
    }
}
