// ABOUTME: Catalog commands for the gym-sharks CLI
// ABOUTME: Lists and shows workouts, supplements, and diet plans, and checks backend health
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use gym_sharks::context::ClientContext;
use gym_sharks::pages::workout_detail::WorkoutDetailPage;
use gym_sharks::pages::{self, Lookup};
use gym_sharks_core::models::FitnessGoal;
use gym_sharks_core::search::{DietFilter, SupplementFilter, WorkoutFilter};
use tracing::warn;

use crate::helpers::display::{
    display_diets, display_health, display_panel, display_supplement, display_supplements,
    display_workout, display_workouts,
};

fn not_found(kind: &str, id: &str, back_link: &str) {
    eprintln!("Error {kind} '{id}' not found");
    println!("   Browse {back_link} instead");
}

/// Workouts matching `filter`
pub async fn workouts(context: &ClientContext, filter: &WorkoutFilter) {
    let state = pages::workouts::load(context.data(), filter).await;
    display_panel(&state, display_workouts);
}

/// One workout by id
pub async fn workout(context: &ClientContext, id: &str) {
    let state = WorkoutDetailPage::load(context.data(), id).await;
    display_panel(&state, |lookup| match lookup {
        Lookup::Found(page) => display_workout(page),
        Lookup::NotFound { back_link } => not_found("Workout", id, back_link),
    });
}

/// Supplements matching `filter`
pub async fn supplements(context: &ClientContext, filter: &SupplementFilter) {
    let state = pages::supplements::load_list(context.data(), filter).await;
    display_panel(&state, |cards| display_supplements(cards));
}

/// One supplement by id
pub async fn supplement(context: &ClientContext, id: &str) {
    let state = pages::supplements::load_detail(context.data(), id).await;
    display_panel(&state, |lookup| match lookup {
        Lookup::Found(supplement) => display_supplement(supplement),
        Lookup::NotFound { back_link } => not_found("Supplement", id, back_link),
    });
}

/// Diet plans, optionally for one goal
pub async fn diets(context: &ClientContext, goal: Option<FitnessGoal>) {
    let filter = DietFilter { query: None, goal };
    let state = pages::diets::load(context.data(), &filter).await;
    display_panel(&state, display_diets);
}

/// Backend status
pub async fn health(context: &ClientContext) {
    match context.data().health().await {
        Ok(status) => display_health(&status),
        Err(error) => {
            warn!(error = %error, "health check failed");
            eprintln!("Error backend unreachable: {error}");
        }
    }
}
