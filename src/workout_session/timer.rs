// ABOUTME: One-second display ticker over a shared workout session
// ABOUTME: Publishes elapsed seconds while running, aborted on pause, completion, and drop
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::{CompletionOutcome, WorkoutSession, WorkoutSessionError};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

const TICK: Duration = Duration::from_secs(1);

/// Workout session plus the task that refreshes its elapsed time
///
/// The session measures running time itself; the ticker only republishes the
/// whole seconds so a view can redraw. Must be used inside a tokio runtime.
/// Dropping the timer stops the ticker.
#[derive(Debug)]
pub struct WorkoutTimer {
    session: Arc<Mutex<WorkoutSession>>,
    ticker: Option<JoinHandle<()>>,
    elapsed: watch::Sender<u64>,
}

impl WorkoutTimer {
    /// Wrap a session; nothing ticks until [`Self::start`]
    #[must_use]
    pub fn new(session: WorkoutSession) -> Self {
        let (elapsed, _) = watch::channel(session.elapsed_secs());
        Self {
            session: Arc::new(Mutex::new(session)),
            ticker: None,
            elapsed,
        }
    }

    /// Elapsed whole seconds, updated every second while running
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.elapsed.subscribe()
    }

    /// Copy of the session as it is right now
    pub async fn snapshot(&self) -> WorkoutSession {
        self.session.lock().await.clone()
    }

    /// True while a ticker task is alive
    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|ticker| !ticker.is_finished())
    }

    /// Start the workout and the clock
    ///
    /// # Errors
    ///
    /// Propagates the session's rejection of the transition
    pub async fn start(&mut self) -> Result<(), WorkoutSessionError> {
        self.session.lock().await.start()?;
        self.spawn_ticker();
        Ok(())
    }

    /// Pause or resume, returning the new paused flag
    ///
    /// # Errors
    ///
    /// Propagates the session's rejection of the transition
    pub async fn toggle_pause(&mut self) -> Result<bool, WorkoutSessionError> {
        let paused = self.session.lock().await.toggle_pause()?;
        if paused {
            self.stop_ticker();
            self.publish().await;
        } else {
            self.spawn_ticker();
        }
        Ok(paused)
    }

    /// Mark an exercise done, stopping the clock when it was the last one
    ///
    /// # Errors
    ///
    /// Propagates the session's rejection of the transition
    pub async fn complete_exercise(
        &mut self,
        index: usize,
    ) -> Result<CompletionOutcome, WorkoutSessionError> {
        let outcome = self.session.lock().await.complete_exercise(index)?;
        if outcome == CompletionOutcome::Finished {
            self.stop_ticker();
            self.publish().await;
        }
        Ok(outcome)
    }

    /// Focus a different exercise
    ///
    /// # Errors
    ///
    /// Propagates the session's rejection of the selection
    pub async fn select(&self, index: usize) -> Result<(), WorkoutSessionError> {
        self.session.lock().await.select(index)
    }

    fn spawn_ticker(&mut self) {
        self.stop_ticker();
        let session = Arc::clone(&self.session);
        let elapsed = self.elapsed.clone();
        self.ticker = Some(tokio::spawn(async move {
            let mut interval = interval_at(Instant::now() + TICK, TICK);
            loop {
                interval.tick().await;
                let current = session.lock().await;
                if !current.is_running() {
                    debug!("workout ticker exiting, session no longer running");
                    break;
                }
                elapsed.send_replace(current.elapsed_secs());
            }
        }));
    }

    async fn publish(&self) {
        let secs = self.session.lock().await.elapsed_secs();
        self.elapsed.send_replace(secs);
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

impl Drop for WorkoutTimer {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
