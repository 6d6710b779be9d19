// ABOUTME: Static mock catalog compiled into the binary
// ABOUTME: Workouts, supplements, diet plans, progress, streaks, challenges, tips, and canned AI advice
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

//! Embedded mock catalog
//!
//! The JSON datasets under `data/` are parsed once on first use and shared
//! through [`Catalog::embedded`]. Records are read-only.

use gym_sharks_core::errors::{AppError, AppResult};
use gym_sharks_core::models::{
    AdviceKind, AiAdvice, AiTip, Challenge, DietPlan, FitnessGoal, HomeWorkout, Progress,
    Supplement, UserStreak,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::{Arc, OnceLock};
use tracing::debug;

const WORKOUTS: &str = include_str!("data/workouts.json");
const SUPPLEMENTS: &str = include_str!("data/supplements.json");
const DIET_PLANS: &str = include_str!("data/diet_plans.json");
const PROGRESS: &str = include_str!("data/progress.json");
const AI_TIPS: &str = include_str!("data/ai_tips.json");
const STREAKS: &str = include_str!("data/streaks.json");
const CHALLENGES: &str = include_str!("data/challenges.json");
const AI_RESPONSES: &str = include_str!("data/ai_responses.json");

static EMBEDDED: OnceLock<Arc<Catalog>> = OnceLock::new();

#[derive(Debug, Clone, Deserialize)]
struct CannedAdvice {
    workout: AiAdvice,
    nutrition: AiAdvice,
    general: AiAdvice,
}

/// Every mock dataset
#[derive(Debug, Clone)]
pub struct Catalog {
    workouts: Vec<HomeWorkout>,
    supplements: Vec<Supplement>,
    diet_plans: Vec<DietPlan>,
    progress: Vec<Progress>,
    tips: Vec<AiTip>,
    streaks: Vec<UserStreak>,
    challenges: Vec<Challenge>,
    advice: CannedAdvice,
}

fn parse<T: DeserializeOwned>(name: &str, raw: &str) -> AppResult<T> {
    serde_json::from_str(raw).map_err(|error| {
        AppError::internal(format!("embedded dataset {name} is malformed: {error}"))
            .with_source(error)
    })
}

impl Catalog {
    /// Parse the embedded datasets
    ///
    /// # Errors
    ///
    /// Returns an internal error when a dataset does not match its model
    pub fn load() -> AppResult<Self> {
        let catalog = Self {
            workouts: parse("workouts", WORKOUTS)?,
            supplements: parse("supplements", SUPPLEMENTS)?,
            diet_plans: parse("diet_plans", DIET_PLANS)?,
            progress: parse("progress", PROGRESS)?,
            tips: parse("ai_tips", AI_TIPS)?,
            streaks: parse("streaks", STREAKS)?,
            challenges: parse("challenges", CHALLENGES)?,
            advice: parse("ai_responses", AI_RESPONSES)?,
        };
        debug!(
            workouts = catalog.workouts.len(),
            supplements = catalog.supplements.len(),
            diet_plans = catalog.diet_plans.len(),
            "mock catalog loaded"
        );
        Ok(catalog)
    }

    /// Process-wide shared catalog
    ///
    /// # Errors
    ///
    /// Returns an internal error when a dataset does not match its model
    pub fn embedded() -> AppResult<Arc<Self>> {
        if let Some(catalog) = EMBEDDED.get() {
            return Ok(Arc::clone(catalog));
        }
        let catalog = Arc::new(Self::load()?);
        Ok(Arc::clone(EMBEDDED.get_or_init(|| catalog)))
    }

    /// All workouts in catalog order
    #[must_use]
    pub fn workouts(&self) -> &[HomeWorkout] {
        &self.workouts
    }

    /// Workout by id
    #[must_use]
    pub fn workout(&self, id: &str) -> Option<&HomeWorkout> {
        self.workouts.iter().find(|workout| workout.id == id)
    }

    /// All supplements in catalog order
    #[must_use]
    pub fn supplements(&self) -> &[Supplement] {
        &self.supplements
    }

    /// Supplement by id
    #[must_use]
    pub fn supplement(&self, id: &str) -> Option<&Supplement> {
        self.supplements.iter().find(|supplement| supplement.id == id)
    }

    /// All diet plans
    #[must_use]
    pub fn diet_plans(&self) -> &[DietPlan] {
        &self.diet_plans
    }

    /// First diet plan for `goal`
    #[must_use]
    pub fn diet_for_goal(&self, goal: FitnessGoal) -> Option<&DietPlan> {
        self.diet_plans.iter().find(|plan| plan.goal == goal)
    }

    /// Sample progress entries
    #[must_use]
    pub fn progress(&self) -> &[Progress] {
        &self.progress
    }

    /// Coaching tips
    #[must_use]
    pub fn tips(&self) -> &[AiTip] {
        &self.tips
    }

    /// Activity streaks
    #[must_use]
    pub fn streaks(&self) -> &[UserStreak] {
        &self.streaks
    }

    /// Running challenges
    #[must_use]
    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Canned advice answer for a request kind
    #[must_use]
    pub const fn advice(&self, kind: AdviceKind) -> &AiAdvice {
        match kind {
            AdviceKind::Workout => &self.advice.workout,
            AdviceKind::Nutrition => &self.advice.nutrition,
            AdviceKind::General => &self.advice.general,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_datasets_parse() {
        let catalog = Catalog::load().unwrap();
        assert_eq!(catalog.workouts().len(), 15);
        assert_eq!(catalog.supplements().len(), 20);
        assert!(!catalog.diet_plans().is_empty());
        assert_eq!(catalog.streaks().len(), 3);
        assert_eq!(catalog.challenges().len(), 3);
    }

    #[test]
    fn test_lookups_by_id() {
        let catalog = Catalog::embedded().unwrap();
        assert_eq!(catalog.workout("2").unwrap().title, "Strength Builder");
        assert!(catalog.workout("999").is_none());
        assert_eq!(catalog.supplement("1").unwrap().name, "Whey Protein Isolate");
        assert!(catalog.diet_for_goal(FitnessGoal::WeightLoss).is_some());
    }

    #[test]
    fn test_canned_advice_per_kind() {
        let catalog = Catalog::embedded().unwrap();
        assert!(!catalog.advice(AdviceKind::Workout).recommendations.is_empty());
        assert!(!catalog.advice(AdviceKind::General).personalized_advice.is_empty());
    }
}
