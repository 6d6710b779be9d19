// ABOUTME: Integration tests for page view models over the embedded catalog
// ABOUTME: Tests persisted sessions across restarts, auth guards, and catalog filtering
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use anyhow::Result;
use common::{init_test_logging, sample_user, GOOD_TOKEN};
use gym_sharks::config::ClientConfig;
use gym_sharks::context::ClientContext;
use gym_sharks::navigation::Navigator;
use gym_sharks::pages::dashboard;
use gym_sharks::pages::home::HomePage;
use gym_sharks::pages::progress::ProgressPage;
use gym_sharks::pages::{diets, supplements, workouts, Guarded, PanelState};
use gym_sharks::session::{BootstrapOutcome, RecordingNotifier};
use gym_sharks::storage::ClientStorage;
use gym_sharks_core::constants::routes;
use gym_sharks_core::models::{FitnessGoal, SupplementCategory, WorkoutDifficulty};
use gym_sharks_core::search::{DietFilter, SupplementFilter, WorkoutFilter};
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn context_in(dir: &Path, navigator: Navigator) -> Result<ClientContext> {
    init_test_logging();
    let config = ClientConfig {
        data_dir: dir.to_path_buf(),
        ..ClientConfig::default()
    };
    let storage = ClientStorage::open(dir)?;
    Ok(ClientContext::new(
        config,
        storage,
        navigator,
        Arc::new(RecordingNotifier::new()),
    )?)
}

#[tokio::test]
async fn test_session_survives_restart_until_logout() -> Result<()> {
    let dir = TempDir::new()?;
    {
        let storage = ClientStorage::open(dir.path())?;
        storage.set_token(GOOD_TOKEN, false)?;
        storage.cache_user(&sample_user("u1"))?;
    }

    let context = context_in(dir.path(), Navigator::at(routes::DASHBOARD))?;
    assert_eq!(context.bootstrap().await, BootstrapOutcome::Cached);
    let Guarded::Ready(page) = dashboard::load(context.store(), context.data()).await else {
        unreachable!("cached user is logged in");
    };
    assert_eq!(page.user.id, "u1");
    assert_eq!(page.goal, FitnessGoal::MuscleGain);
    context.session().logout();

    let restarted = context_in(dir.path(), Navigator::default())?;
    assert_eq!(restarted.bootstrap().await, BootstrapOutcome::LoggedOut);
    assert!(restarted.store().storage().cached_user().is_none());
    Ok(())
}

#[tokio::test]
async fn test_guarded_pages_redirect_anonymous_visitors() -> Result<()> {
    let dir = TempDir::new()?;
    let navigator = Navigator::at(routes::PROGRESS);
    let context = context_in(dir.path(), navigator.clone())?;
    context.bootstrap().await;

    let progress = ProgressPage::load(context.store(), context.data()).await;
    assert!(matches!(progress, Guarded::RedirectToLogin));
    assert_eq!(navigator.current_path(), routes::LOGIN);

    let dash = dashboard::load(context.store(), context.data()).await;
    assert!(matches!(dash, Guarded::RedirectToLogin));
    assert_eq!(navigator.redirect_count(), 2);
    Ok(())
}

#[tokio::test]
async fn test_workout_search_ignores_case_and_combines_filters() -> Result<()> {
    let dir = TempDir::new()?;
    let context = context_in(dir.path(), Navigator::at(routes::WORKOUTS))?;

    let lower = workouts::load(
        context.data(),
        &WorkoutFilter {
            query: Some("builder".to_owned()),
            ..WorkoutFilter::default()
        },
    )
    .await;
    let upper = workouts::load(
        context.data(),
        &WorkoutFilter {
            query: Some("BUILDER".to_owned()),
            ..WorkoutFilter::default()
        },
    )
    .await;
    assert_eq!(lower, upper);
    let list = lower.ready().unwrap();
    assert_eq!((list.len(), list.total), (2, 15));

    let beginner = workouts::load(
        context.data(),
        &WorkoutFilter {
            difficulty: Some(WorkoutDifficulty::Beginner),
            max_duration: Some(20),
            ..WorkoutFilter::default()
        },
    )
    .await;
    for workout in &beginner.ready().unwrap().items {
        assert_eq!(workout.difficulty, WorkoutDifficulty::Beginner);
        assert!(workout.duration_minutes <= 20);
    }
    Ok(())
}

#[tokio::test]
async fn test_supplement_and_diet_filters() -> Result<()> {
    let dir = TempDir::new()?;
    let context = context_in(dir.path(), Navigator::at(routes::SUPPLEMENTS))?;

    let protein = supplements::load_list(
        context.data(),
        &SupplementFilter {
            category: Some(SupplementCategory::Protein),
            ..SupplementFilter::default()
        },
    )
    .await;
    let names: Vec<_> = protein
        .ready()
        .unwrap()
        .iter()
        .map(|card| card.name.as_str())
        .collect();
    assert_eq!(names, ["Whey Protein Isolate", "Casein Protein"]);

    let nothing = diets::load(
        context.data(),
        &DietFilter {
            query: Some("keto".to_owned()),
            goal: None,
        },
    )
    .await;
    let PanelState::Ready(page) = nothing else {
        unreachable!("embedded diets always load");
    };
    assert!(page.groups.is_empty());
    assert_eq!(page.goals, [FitnessGoal::WeightLoss]);
    Ok(())
}

#[tokio::test]
async fn test_home_page_loads_every_panel() -> Result<()> {
    let dir = TempDir::new()?;
    let context = context_in(dir.path(), Navigator::default())?;

    let home = HomePage::load(context.data()).await;
    assert_eq!(home.featured.ready().map(Vec::len), Some(3));
    assert!(home.tips.ready().is_some_and(|tips| !tips.is_empty()));
    assert!(home.health.ready().is_some_and(|health| health.success));
    Ok(())
}
