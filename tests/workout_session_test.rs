// ABOUTME: Integration tests for the workout session timer on a paused tokio clock
// ABOUTME: Tests elapsed time across pauses, completion in any order, and the start guard
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use anyhow::Result;
use common::{init_test_logging, manager, sample_user, store_at, store_with_session};
use common::{AuthScript, ScriptedAuth};
use gym_sharks::data::{FitnessData, MockData};
use gym_sharks::pages::workout_detail::{StartOutcome, WorkoutDetailPage};
use gym_sharks::pages::{Lookup, PanelState};
use gym_sharks::workout_session::{
    CompletionOutcome, WorkoutPhase, WorkoutSession, WorkoutTimer,
};
use gym_sharks_core::constants::routes;
use gym_sharks_core::models::HomeWorkout;
use std::time::Duration;
use tokio::time::sleep;

async fn workout_with_exercises(min: usize) -> Result<HomeWorkout> {
    let workouts = MockData::embedded()?.workouts().await?;
    Ok(workouts
        .into_iter()
        .find(|workout| workout.exercises.len() >= min)
        .expect("catalog has a workout with enough exercises"))
}

#[tokio::test(start_paused = true)]
async fn test_elapsed_time_only_counts_while_running() -> Result<()> {
    init_test_logging();
    let mut timer = WorkoutTimer::new(WorkoutSession::new(workout_with_exercises(2).await?));

    timer.start().await?;
    sleep(Duration::from_millis(10_500)).await;
    assert!(timer.toggle_pause().await?);
    assert_eq!(timer.snapshot().await.elapsed_secs(), 10);

    // Paused time does not count
    sleep(Duration::from_secs(60)).await;
    assert_eq!(timer.snapshot().await.elapsed_secs(), 10);
    assert!(!timer.is_ticking());

    assert!(!timer.toggle_pause().await?);
    sleep(Duration::from_millis(7_500)).await;
    timer.toggle_pause().await?;
    timer.toggle_pause().await?;
    sleep(Duration::from_millis(2_500)).await;

    let session = timer.snapshot().await;
    assert_eq!(session.elapsed(), Duration::from_millis(20_500));
    assert_eq!(session.elapsed_secs(), 20);
    assert_eq!(session.elapsed_label(), "00:20");
    assert!(timer.is_ticking());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_sub_second_runs_between_pauses_add_up() -> Result<()> {
    let mut timer = WorkoutTimer::new(WorkoutSession::new(workout_with_exercises(2).await?));
    timer.start().await?;

    for _ in 0..10 {
        sleep(Duration::from_millis(900)).await;
        timer.toggle_pause().await?;
        sleep(Duration::from_secs(3)).await;
        timer.toggle_pause().await?;
    }

    let session = timer.snapshot().await;
    assert_eq!(session.elapsed(), Duration::from_secs(9));
    assert_eq!(session.elapsed_secs(), 9);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_clock_stays_stopped_after_finishing_on_a_tick() -> Result<()> {
    let workout = workout_with_exercises(2).await?;
    let count = workout.exercises.len();
    let mut timer = WorkoutTimer::new(WorkoutSession::new(workout));
    let mut elapsed = timer.subscribe();

    timer.start().await?;
    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(*elapsed.borrow_and_update(), 2);

    // Lands exactly on the third tick
    sleep(Duration::from_millis(500)).await;
    for index in 0..count {
        timer.complete_exercise(index).await?;
    }
    assert_eq!(*elapsed.borrow_and_update(), 3);
    assert!(!timer.is_ticking());

    sleep(Duration::from_secs(10)).await;
    assert!(!elapsed.has_changed()?);
    let session = timer.snapshot().await;
    assert_eq!(session.phase(), WorkoutPhase::Completed);
    assert_eq!(session.elapsed_secs(), 3);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_completing_every_exercise_in_any_order_finishes() -> Result<()> {
    init_test_logging();
    let workout = workout_with_exercises(3).await?;
    let count = workout.exercises.len();
    let mut timer = WorkoutTimer::new(WorkoutSession::new(workout));
    timer.start().await?;
    sleep(Duration::from_secs(5)).await;

    // Last, then first, then the rest
    let mut order: Vec<usize> = vec![count - 1, 0];
    order.extend(1..count - 1);
    for (step, index) in order.iter().enumerate() {
        let outcome = timer.complete_exercise(*index).await?;
        if step + 1 == count {
            assert_eq!(outcome, CompletionOutcome::Finished);
        } else {
            assert!(matches!(outcome, CompletionOutcome::Advanced { .. }));
        }
    }

    let session = timer.snapshot().await;
    assert_eq!(session.phase(), WorkoutPhase::Completed);
    assert_eq!(session.progress_percent(), 100);
    assert!(session.completed().iter().all(|done| *done));
    assert!(!timer.is_ticking());

    sleep(Duration::from_secs(30)).await;
    assert_eq!(timer.snapshot().await.elapsed_secs(), 5);
    assert!(timer.toggle_pause().await.is_err());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_completing_twice_is_a_no_op() -> Result<()> {
    let mut timer = WorkoutTimer::new(WorkoutSession::new(workout_with_exercises(3).await?));
    timer.start().await?;

    assert_eq!(
        timer.complete_exercise(1).await?,
        CompletionOutcome::Advanced { next: 2 }
    );
    assert_eq!(
        timer.complete_exercise(1).await?,
        CompletionOutcome::AlreadyDone
    );
    let session = timer.snapshot().await;
    assert_eq!(session.completed_count(), 1);
    assert_eq!(session.current_index(), 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_detail_page_start_requires_login() -> Result<()> {
    init_test_logging();
    let data = MockData::embedded()?;
    let workout = workout_with_exercises(2).await?;

    let anonymous = store_at("/workouts/1");
    let (session, _) = manager(anonymous, ScriptedAuth::new(AuthScript::Accept));
    session.bootstrap().await;
    let mut page = WorkoutDetailPage::new(workout.clone());
    assert_eq!(
        page.start(session.store()).await?,
        StartOutcome::RedirectToLogin
    );
    assert_eq!(session.store().navigator().current_path(), routes::LOGIN);
    assert!(!page.is_ticking());

    let member = store_with_session("/workouts/1", Some(&sample_user("u1")));
    let (session, _) = manager(member, ScriptedAuth::new(AuthScript::Accept));
    session.bootstrap().await;
    let PanelState::Ready(Lookup::Found(mut page)) =
        WorkoutDetailPage::load(&data, &workout.id).await
    else {
        unreachable!("workout {} is in the catalog", workout.id);
    };

    assert_eq!(page.start(session.store()).await?, StartOutcome::Started);
    sleep(Duration::from_millis(3_500)).await;
    let view = page.session().await;
    assert_eq!(view.phase, WorkoutPhase::Active);
    assert_eq!(view.elapsed, "00:03");
    assert!(view.share.is_none());
    Ok(())
}
