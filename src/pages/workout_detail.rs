// ABOUTME: Workout detail page: exercise cards plus the live session controls
// ABOUTME: Starting needs a logged-in user; anonymous visitors are sent to the login page
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::{Lookup, PanelState};
use crate::data::FitnessData;
use crate::session::SessionStore;
use crate::workout_session::{CompletionOutcome, WorkoutPhase, WorkoutSession, WorkoutTimer};
use gym_sharks_core::constants::routes;
use gym_sharks_core::errors::AppResult;
use gym_sharks_core::models::{Exercise, HomeWorkout};
use serde::Serialize;
use tokio::sync::watch;
use tracing::info;

/// Exercise as shown in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseCard {
    /// Exercise name
    pub name: String,
    /// Sets, reps and rest on one line
    pub prescription: String,
    /// How to perform it
    pub instructions: String,
    /// Coaching cues
    pub tips: Vec<String>,
}

impl From<&Exercise> for ExerciseCard {
    fn from(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name.clone(),
            prescription: exercise.prescription(),
            instructions: exercise.instructions.clone(),
            tips: exercise.tips.clone(),
        }
    }
}

/// Session panel contents
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Lifecycle phase
    pub phase: WorkoutPhase,
    /// Highlighted exercise
    pub current_index: usize,
    /// Done flags per exercise
    pub completed: Vec<bool>,
    /// Clock as `mm:ss`
    pub elapsed: String,
    /// Clock paused
    pub paused: bool,
    /// Done exercises in percent
    pub progress_percent: u32,
    /// Calories burned so far
    pub calories_burned: u32,
    /// Share text and link, once completed
    pub share: Option<(String, String)>,
}

impl From<&WorkoutSession> for SessionView {
    fn from(session: &WorkoutSession) -> Self {
        let share = (session.phase() == WorkoutPhase::Completed)
            .then(|| (session.share_text(), session.share_link()));
        Self {
            phase: session.phase(),
            current_index: session.current_index(),
            completed: session.completed().to_vec(),
            elapsed: session.elapsed_label(),
            paused: session.is_paused(),
            progress_percent: session.progress_percent(),
            calories_burned: session.calories_burned(),
            share,
        }
    }
}

/// What pressing "Start workout" led to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// Session running
    Started,
    /// Nobody logged in; the navigator is on the login page
    RedirectToLogin,
}

/// Detail page for one workout
#[derive(Debug)]
pub struct WorkoutDetailPage {
    workout: HomeWorkout,
    exercises: Vec<ExerciseCard>,
    timer: WorkoutTimer,
}

impl WorkoutDetailPage {
    /// Page for `workout`, session in preview
    #[must_use]
    pub fn new(workout: HomeWorkout) -> Self {
        let exercises = workout.exercises.iter().map(ExerciseCard::from).collect();
        let timer = WorkoutTimer::new(WorkoutSession::new(workout.clone()));
        Self {
            workout,
            exercises,
            timer,
        }
    }

    /// Load the workout with id `id`
    pub async fn load(data: &dyn FitnessData, id: &str) -> PanelState<Lookup<Self>> {
        let lookup = data.workout(id).await.map(|workout| {
            workout.map_or_else(
                || {
                    info!(workout.id = %id, "workout not found");
                    Lookup::NotFound {
                        back_link: routes::WORKOUTS,
                    }
                },
                |workout| Lookup::Found(Self::new(workout)),
            )
        });
        PanelState::from_result(lookup)
    }

    /// Workout shown
    #[must_use]
    pub const fn workout(&self) -> &HomeWorkout {
        &self.workout
    }

    /// Exercise list
    #[must_use]
    pub fn exercises(&self) -> &[ExerciseCard] {
        &self.exercises
    }

    /// True while the clock runs
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.timer.is_ticking()
    }

    /// Elapsed seconds for the live clock display
    #[must_use]
    pub fn elapsed_updates(&self) -> watch::Receiver<u64> {
        self.timer.subscribe()
    }

    /// Current session panel
    pub async fn session(&self) -> SessionView {
        SessionView::from(&self.timer.snapshot().await)
    }

    /// Start the session, or redirect to login when nobody is logged in
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` when the session was already started or the
    /// workout has no exercises
    pub async fn start(&mut self, store: &SessionStore) -> AppResult<StartOutcome> {
        if !store.is_authenticated() {
            store.navigator().push(routes::LOGIN);
            return Ok(StartOutcome::RedirectToLogin);
        }
        self.timer.start().await?;
        Ok(StartOutcome::Started)
    }

    /// Pause or resume, returning the new paused flag
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` outside an active session
    pub async fn toggle_pause(&mut self) -> AppResult<bool> {
        Ok(self.timer.toggle_pause().await?)
    }

    /// Mark exercise `index` done
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown index and `InvalidState` outside
    /// an active session
    pub async fn complete_exercise(&mut self, index: usize) -> AppResult<CompletionOutcome> {
        Ok(self.timer.complete_exercise(index).await?)
    }

    /// Highlight exercise `index`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an unknown index and `InvalidState` outside
    /// an active session
    pub async fn select(&self, index: usize) -> AppResult<()> {
        Ok(self.timer.select(index).await?)
    }
}
