// ABOUTME: FitnessData backed by the live backend through the query cache
// ABOUTME: Falls back to the embedded catalog for progress, streaks, challenges, and tips
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::{AdviceRequest, FitnessData};
use crate::cache::{keys, QueryCache};
use crate::catalog::Catalog;
use crate::config::StaleTimes;
use async_trait::async_trait;
use gym_sharks_api::{
    ApiClient, CoachService, DietService, HealthService, MembershipService, ProgressService,
    SupplementQuery, SupplementService, WorkoutQuery, WorkoutService,
};
use gym_sharks_core::errors::{ApiError, ApiResult, AppResult};
use gym_sharks_core::models::{
    AiAdvice, AiTip, Challenge, DietPlan, HealthStatus, HomeWorkout, Membership,
    MembershipSubscription, Progress, Supplement, UserStreak,
};
use std::sync::Arc;
use tracing::debug;

/// Page size requested when the whole listing is wanted
const FULL_LISTING: u32 = 100;

/// `None` for a 404, the record otherwise
fn found<T>(result: ApiResult<T>) -> AppResult<Option<T>> {
    match result {
        Ok(record) => Ok(Some(record)),
        Err(ApiError::Rejected { status: 404, .. }) => Ok(None),
        Err(error) => Err(error.into()),
    }
}

/// Backend-backed data source
#[derive(Debug, Clone)]
pub struct RemoteData {
    workouts: WorkoutService,
    supplements: SupplementService,
    diets: DietService,
    progress: ProgressService,
    memberships: MembershipService,
    coach: CoachService,
    health: HealthService,
    cache: QueryCache,
    stale: StaleTimes,
    catalog: Arc<Catalog>,
}

impl RemoteData {
    /// Source calling the backend through `client`
    #[must_use]
    pub fn new(
        client: &ApiClient,
        cache: QueryCache,
        stale: StaleTimes,
        catalog: Arc<Catalog>,
    ) -> Self {
        Self {
            workouts: WorkoutService::new(client.clone()),
            supplements: SupplementService::new(client.clone()),
            diets: DietService::new(client.clone()),
            progress: ProgressService::new(),
            memberships: MembershipService::new(client.clone()),
            coach: CoachService::new(client.clone()),
            health: HealthService::new(client.clone()),
            cache,
            stale,
            catalog,
        }
    }

    /// Query cache shared with the rest of the client
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }
}

#[async_trait]
impl FitnessData for RemoteData {
    async fn workouts(&self) -> AppResult<Vec<HomeWorkout>> {
        let service = &self.workouts;
        self.cache
            .get_or_fetch(keys::WORKOUTS, self.stale.workouts, move || async move {
                let query = WorkoutQuery {
                    limit: Some(FULL_LISTING),
                    ..WorkoutQuery::default()
                };
                Ok(service.list(&query).await?.items)
            })
            .await
    }

    async fn workout(&self, id: &str) -> AppResult<Option<HomeWorkout>> {
        let key = keys::workout(id);
        if let Some(workout) = self.cache.get(&key).await {
            return Ok(Some(workout));
        }
        let workout = found(self.workouts.get(id).await)?;
        if let Some(workout) = &workout {
            self.cache.set(&key, workout, self.stale.workouts).await?;
        }
        Ok(workout)
    }

    async fn featured_workouts(&self) -> AppResult<Vec<HomeWorkout>> {
        let service = &self.workouts;
        self.cache
            .get_or_fetch(
                keys::FEATURED_WORKOUTS,
                self.stale.featured_workouts,
                move || async move { Ok(service.featured().await?) },
            )
            .await
    }

    async fn supplements(&self) -> AppResult<Vec<Supplement>> {
        let service = &self.supplements;
        self.cache
            .get_or_fetch(keys::SUPPLEMENTS, self.stale.supplements, move || async move {
                let query = SupplementQuery {
                    limit: Some(FULL_LISTING),
                    ..SupplementQuery::default()
                };
                Ok(service.list(&query).await?.items)
            })
            .await
    }

    async fn supplement(&self, id: &str) -> AppResult<Option<Supplement>> {
        let key = keys::supplement(id);
        if let Some(supplement) = self.cache.get(&key).await {
            return Ok(Some(supplement));
        }
        let supplement = found(self.supplements.get(id).await)?;
        if let Some(supplement) = &supplement {
            self.cache.set(&key, supplement, self.stale.supplements).await?;
        }
        Ok(supplement)
    }

    async fn diet_plans(&self) -> AppResult<Vec<DietPlan>> {
        let service = &self.diets;
        self.cache
            .get_or_fetch(keys::DIETS, self.stale.diets, move || async move {
                Ok(service.list().await?.diet_plans)
            })
            .await
    }

    async fn progress(&self) -> AppResult<Vec<Progress>> {
        match self.progress.list().await {
            Ok(entries) => Ok(entries),
            Err(ApiError::Disabled { .. }) => {
                debug!("progress API disabled, serving sample entries");
                Ok(self.catalog.progress().to_vec())
            }
            Err(error) => Err(error.into()),
        }
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
        let advice = match request {
            AdviceRequest::Workout(tips) => self.coach.workout_tips(tips).await?,
            AdviceRequest::Nutrition(nutrition) => self.coach.nutrition_advice(nutrition).await?,
            AdviceRequest::General => self.coach.general_tips().await?,
        };
        Ok(advice)
    }

    async fn memberships(&self) -> AppResult<Vec<Membership>> {
        let service = &self.memberships;
        self.cache
            .get_or_fetch(keys::MEMBERSHIPS, self.stale.memberships, move || async move {
                Ok(service.list().await?)
            })
            .await
    }

    async fn subscribe(&self, plan_id: &str) -> AppResult<MembershipSubscription> {
        let subscription = self.memberships.subscribe(plan_id).await?;
        self.cache.invalidate_prefix(keys::MEMBERSHIPS).await;
        Ok(subscription)
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        let service = &self.health;
        self.cache
            .get_or_fetch(keys::HEALTH, self.stale.health, move || async move {
                Ok(service.check().await?)
            })
            .await
    }
}
