// ABOUTME: Data sources behind the pages: embedded mock catalog or the live backend
// ABOUTME: FitnessData is the seam, selected from configuration at startup
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

//! Data sources
//!
//! Pages read everything through [`FitnessData`]. [`MockData`] answers from
//! the embedded catalog, [`RemoteData`] calls the backend through the query
//! cache and falls back to the catalog where the backend has no endpoint.

mod mock;
mod remote;

pub use mock::MockData;
pub use remote::RemoteData;

use async_trait::async_trait;
use gym_sharks_core::errors::AppResult;
use gym_sharks_core::models::{
    AdviceKind, AiAdvice, AiTip, Challenge, DietPlan, HealthStatus, HomeWorkout, Membership,
    MembershipSubscription, NutritionAdviceRequest, Progress, Supplement, UserStreak,
    WorkoutTipsRequest,
};

/// Question put to the AI coach
#[derive(Debug, Clone)]
pub enum AdviceRequest {
    /// Workout tips for a goal, experience level and equipment
    Workout(WorkoutTipsRequest),
    /// Nutrition advice for a profile
    Nutrition(NutritionAdviceRequest),
    /// General tips, no input
    General,
}

impl AdviceRequest {
    /// Kind of answer requested
    #[must_use]
    pub const fn kind(&self) -> AdviceKind {
        match self {
            Self::Workout(_) => AdviceKind::Workout,
            Self::Nutrition(_) => AdviceKind::Nutrition,
            Self::General => AdviceKind::General,
        }
    }
}

/// Everything the pages read
#[async_trait]
pub trait FitnessData: Send + Sync {
    /// All workouts in catalog order
    async fn workouts(&self) -> AppResult<Vec<HomeWorkout>>;

    /// Workout by id, `None` when it does not exist
    async fn workout(&self, id: &str) -> AppResult<Option<HomeWorkout>>;

    /// Popular workouts
    async fn featured_workouts(&self) -> AppResult<Vec<HomeWorkout>>;

    /// All supplements in catalog order
    async fn supplements(&self) -> AppResult<Vec<Supplement>>;

    /// Supplement by id, `None` when it does not exist
    async fn supplement(&self, id: &str) -> AppResult<Option<Supplement>>;

    /// All diet plans
    async fn diet_plans(&self) -> AppResult<Vec<DietPlan>>;

    /// Progress entries of the current user
    async fn progress(&self) -> AppResult<Vec<Progress>>;

    /// Activity streaks of the current user
    async fn streaks(&self) -> AppResult<Vec<UserStreak>>;

    /// Running challenges
    async fn challenges(&self) -> AppResult<Vec<Challenge>>;

    /// Coaching tips
    async fn tips(&self) -> AppResult<Vec<AiTip>>;

    /// Ask the AI coach
    async fn advice(&self, request: &AdviceRequest) -> AppResult<AiAdvice>;

    /// Membership plans
    async fn memberships(&self) -> AppResult<Vec<Membership>>;

    /// Subscribe the current user to a plan
    async fn subscribe(&self, plan_id: &str) -> AppResult<MembershipSubscription>;

    /// Backend status
    async fn health(&self) -> AppResult<HealthStatus>;
}
