// ABOUTME: In-memory workout session state machine: Preview, Active, Completed
// ABOUTME: Tracks exercise completion, elapsed seconds, pause state, and derived calories
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

//! Workout session
//!
//! A session moves `Preview -> Active -> Completed` and never back. Running
//! time is measured on the tokio clock and only accumulates while the session
//! is active and not paused; [`WorkoutTimer`] publishes the elapsed seconds
//! once per second for display. Nothing is persisted.

mod timer;

pub use timer::WorkoutTimer;

use crate::logging::AppLogger;
use gym_sharks_core::constants::api::APP_URL;
use gym_sharks_core::errors::AppError;
use gym_sharks_core::models::HomeWorkout;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// Lifecycle phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutPhase {
    /// Exercises listed, timer not started
    Preview,
    /// Started and not yet finished
    Active,
    /// Every exercise done; terminal
    Completed,
}

/// Result of marking an exercise done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Marked done, `next` is the following incomplete exercise
    Advanced {
        /// Index now current
        next: usize,
    },
    /// The exercise was already done; nothing changed
    AlreadyDone,
    /// That was the last one; the session is now completed
    Finished,
}

/// Transition rejected by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkoutSessionError {
    /// `start` outside the preview phase
    #[error("workout already started")]
    AlreadyStarted,
    /// Pause or completion outside the active phase
    #[error("workout is not active")]
    NotActive,
    /// Exercise index past the end of the list
    #[error("exercise {index} does not exist, workout has {len}")]
    ExerciseOutOfRange {
        /// Requested index
        index: usize,
        /// Number of exercises
        len: usize,
    },
    /// Workout without exercises cannot be started
    #[error("workout has no exercises")]
    NoExercises,
}

impl From<WorkoutSessionError> for AppError {
    fn from(error: WorkoutSessionError) -> Self {
        match error {
            WorkoutSessionError::ExerciseOutOfRange { .. } => {
                Self::invalid_input(error.to_string()).with_source(error)
            }
            _ => Self::invalid_state(error.to_string()).with_source(error),
        }
    }
}

/// One run through a workout
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSession {
    workout: HomeWorkout,
    phase: WorkoutPhase,
    current_index: usize,
    completed: Vec<bool>,
    accumulated: Duration,
    running_since: Option<Instant>,
    paused: bool,
}

impl WorkoutSession {
    /// Session in preview for `workout`
    #[must_use]
    pub fn new(workout: HomeWorkout) -> Self {
        let completed = vec![false; workout.exercises.len()];
        Self {
            workout,
            phase: WorkoutPhase::Preview,
            current_index: 0,
            completed,
            accumulated: Duration::ZERO,
            running_since: None,
            paused: false,
        }
    }

    /// Workout being performed
    #[must_use]
    pub const fn workout(&self) -> &HomeWorkout {
        &self.workout
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> WorkoutPhase {
        self.phase
    }

    /// Index of the exercise in focus
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    /// Per-exercise completion flags
    #[must_use]
    pub fn completed(&self) -> &[bool] {
        &self.completed
    }

    /// Total running time, including the stretch in progress
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.running_since
            .map_or(self.accumulated, |since| self.accumulated + since.elapsed())
    }

    /// Whole seconds of running time
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    /// True while paused; stays true once completed
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// True when time should accumulate
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == WorkoutPhase::Active && !self.paused
    }

    /// Begin the workout
    ///
    /// # Errors
    ///
    /// `AlreadyStarted` outside preview, `NoExercises` for an empty workout
    pub fn start(&mut self) -> Result<(), WorkoutSessionError> {
        if self.phase != WorkoutPhase::Preview {
            return Err(WorkoutSessionError::AlreadyStarted);
        }
        if self.completed.is_empty() {
            return Err(WorkoutSessionError::NoExercises);
        }
        self.phase = WorkoutPhase::Active;
        self.paused = false;
        self.current_index = 0;
        self.running_since = Some(Instant::now());
        AppLogger::log_workout_event(&self.workout.id, "start", 0, 0);
        Ok(())
    }

    /// Flip the pause flag, returning the new value
    ///
    /// # Errors
    ///
    /// `NotActive` outside the active phase
    pub fn toggle_pause(&mut self) -> Result<bool, WorkoutSessionError> {
        if self.phase != WorkoutPhase::Active {
            return Err(WorkoutSessionError::NotActive);
        }
        self.paused = !self.paused;
        let event = if self.paused {
            self.stop_clock();
            "pause"
        } else {
            self.running_since = Some(Instant::now());
            "resume"
        };
        AppLogger::log_workout_event(
            &self.workout.id,
            event,
            self.elapsed_secs(),
            self.completed_count(),
        );
        Ok(self.paused)
    }

    /// Focus a different exercise without completing anything
    ///
    /// # Errors
    ///
    /// `NotActive` outside the active phase, `ExerciseOutOfRange` for a bad index
    pub fn select(&mut self, index: usize) -> Result<(), WorkoutSessionError> {
        if self.phase != WorkoutPhase::Active {
            return Err(WorkoutSessionError::NotActive);
        }
        self.check_index(index)?;
        self.current_index = index;
        Ok(())
    }

    /// Mark exercise `index` done
    ///
    /// Focus moves to the next incomplete exercise after `index`, wrapping
    /// to the start of the list. Completing the last one finishes the
    /// session and pauses it for good.
    ///
    /// # Errors
    ///
    /// `NotActive` outside the active phase, `ExerciseOutOfRange` for a bad index
    pub fn complete_exercise(
        &mut self,
        index: usize,
    ) -> Result<CompletionOutcome, WorkoutSessionError> {
        if self.phase != WorkoutPhase::Active {
            return Err(WorkoutSessionError::NotActive);
        }
        self.check_index(index)?;
        if self.completed[index] {
            return Ok(CompletionOutcome::AlreadyDone);
        }
        self.completed[index] = true;

        let len = self.completed.len();
        let next = (1..len)
            .map(|offset| (index + offset) % len)
            .find(|&candidate| !self.completed[candidate]);

        if let Some(next) = next {
            self.current_index = next;
            Ok(CompletionOutcome::Advanced { next })
        } else {
            self.stop_clock();
            self.phase = WorkoutPhase::Completed;
            self.paused = true;
            AppLogger::log_workout_event(&self.workout.id, "complete", self.elapsed_secs(), len);
            Ok(CompletionOutcome::Finished)
        }
    }

    fn stop_clock(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    fn check_index(&self, index: usize) -> Result<(), WorkoutSessionError> {
        if index < self.completed.len() {
            Ok(())
        } else {
            Err(WorkoutSessionError::ExerciseOutOfRange {
                index,
                len: self.completed.len(),
            })
        }
    }

    /// Exercises marked done
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|done| **done).count()
    }

    /// Completed exercises as a whole percentage
    #[must_use]
    pub fn progress_percent(&self) -> u32 {
        if self.completed.is_empty() {
            return 0;
        }
        ((self.completed_count() * 100) as f64 / self.completed.len() as f64).round() as u32
    }

    /// Elapsed share of the nominal duration times the nominal calories
    ///
    /// Not capped: running over the nominal duration keeps adding calories.
    #[must_use]
    pub fn calories_burned(&self) -> u32 {
        let nominal_secs = self.workout.nominal_duration_secs();
        if nominal_secs == 0 {
            return 0;
        }
        let fraction = self.elapsed_secs() as f64 / nominal_secs as f64;
        (fraction * f64::from(self.workout.calories)).round() as u32
    }

    /// Elapsed time as `mm:ss`
    #[must_use]
    pub fn elapsed_label(&self) -> String {
        let secs = self.elapsed_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }

    /// Summary to share after finishing
    #[must_use]
    pub fn share_text(&self) -> String {
        format!(
            "Just completed \"{}\" - {} min, {} cal burned!",
            self.workout.title,
            self.elapsed_secs().div_ceil(60),
            self.calories_burned()
        )
    }

    /// Public link to the workout
    #[must_use]
    pub fn share_link(&self) -> String {
        format!("{APP_URL}/workouts/{}", self.workout.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gym_sharks_core::models::{Exercise, WorkoutCategory, WorkoutDifficulty};
    use tokio::time::advance;

    fn exercise(name: &str) -> Exercise {
        Exercise {
            name: name.to_owned(),
            instructions: String::new(),
            sets: Some(3),
            reps: "10".to_owned(),
            rest_time: Some(30),
            modifications: None,
            tips: Vec::new(),
        }
    }

    fn workout(exercises: usize) -> HomeWorkout {
        HomeWorkout {
            id: "w1".to_owned(),
            title: "Core Crusher".to_owned(),
            description: String::new(),
            category: WorkoutCategory::Core,
            difficulty: WorkoutDifficulty::Beginner,
            duration_minutes: 20,
            equipment: Vec::new(),
            target_muscle_groups: Vec::new(),
            exercises: (0..exercises).map(|i| exercise(&format!("e{i}"))).collect(),
            warm_up: Vec::new(),
            cool_down: Vec::new(),
            calories: 200,
            tags: Vec::new(),
            is_popular: false,
        }
    }

    #[test]
    fn test_transitions_are_guarded() {
        let mut session = WorkoutSession::new(workout(2));
        assert_eq!(session.toggle_pause(), Err(WorkoutSessionError::NotActive));
        assert_eq!(session.complete_exercise(0), Err(WorkoutSessionError::NotActive));
        session.start().unwrap();
        assert_eq!(session.start(), Err(WorkoutSessionError::AlreadyStarted));
        assert_eq!(
            session.complete_exercise(5),
            Err(WorkoutSessionError::ExerciseOutOfRange { index: 5, len: 2 })
        );
        assert_eq!(session.completed_count(), 0);
    }

    #[test]
    fn test_empty_workout_cannot_start() {
        let mut session = WorkoutSession::new(workout(0));
        assert_eq!(session.start(), Err(WorkoutSessionError::NoExercises));
        assert_eq!(session.phase(), WorkoutPhase::Preview);
    }

    #[test]
    fn test_completion_advances_with_wrap_around() {
        let mut session = WorkoutSession::new(workout(3));
        session.start().unwrap();
        assert_eq!(
            session.complete_exercise(1),
            Ok(CompletionOutcome::Advanced { next: 2 })
        );
        assert_eq!(
            session.complete_exercise(2),
            Ok(CompletionOutcome::Advanced { next: 0 })
        );
        assert_eq!(session.complete_exercise(2), Ok(CompletionOutcome::AlreadyDone));
        assert_eq!(session.complete_exercise(0), Ok(CompletionOutcome::Finished));
        assert_eq!(session.phase(), WorkoutPhase::Completed);
        assert!(session.is_paused());
        assert_eq!(session.toggle_pause(), Err(WorkoutSessionError::NotActive));
    }

    #[tokio::test(start_paused = true)]
    async fn test_time_only_counts_while_running() {
        let mut session = WorkoutSession::new(workout(2));
        advance(Duration::from_secs(5)).await;
        assert_eq!(session.elapsed(), Duration::ZERO);

        session.start().unwrap();
        advance(Duration::from_millis(1_400)).await;
        session.toggle_pause().unwrap();
        advance(Duration::from_secs(30)).await;
        session.toggle_pause().unwrap();
        advance(Duration::from_millis(700)).await;
        assert_eq!(session.elapsed(), Duration::from_millis(2_100));
        assert_eq!(session.elapsed_secs(), 2);

        session.complete_exercise(0).unwrap();
        session.complete_exercise(1).unwrap();
        advance(Duration::from_secs(30)).await;
        assert_eq!(session.elapsed(), Duration::from_millis(2_100));
    }

    #[tokio::test(start_paused = true)]
    async fn test_calories_and_labels() {
        let mut session = WorkoutSession::new(workout(2));
        session.start().unwrap();
        advance(Duration::from_secs(600)).await;
        assert_eq!(session.calories_burned(), 100);
        assert_eq!(session.elapsed_label(), "10:00");
        session.complete_exercise(0).unwrap();
        assert_eq!(session.progress_percent(), 50);
        assert_eq!(
            session.share_text(),
            "Just completed \"Core Crusher\" - 10 min, 100 cal burned!"
        );
    }

    #[test]
    fn test_error_maps_to_app_error_codes() {
        use gym_sharks_core::errors::ErrorCode;
        let error: AppError = WorkoutSessionError::NotActive.into();
        assert_eq!(error.code, ErrorCode::InvalidState);
        let error: AppError = WorkoutSessionError::ExerciseOutOfRange { index: 3, len: 1 }.into();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }
}
