// ABOUTME: Main library entry point for the Gym Sharks fitness client
// ABOUTME: Session cache, workout sessions, mock catalog, data sources, and page view models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

#![deny(unsafe_code)]

//! # Gym Sharks
//!
//! Client-side core of the Gym Sharks fitness application. Everything the
//! web front end does besides drawing lives here: the auth session cache,
//! the workout session timer, catalog filtering, the backend data sources
//! and one view model per page.
//!
//! ## Architecture
//!
//! - **Storage**: token cookie and cached user persisted on disk or in memory
//! - **Session**: bootstrap from storage, login, register, logout, 401 expiry
//! - **Workout session**: `Preview -> Active -> Completed` with a 1s ticker
//! - **Data**: embedded mock catalog or the backend behind a query cache
//! - **Pages**: independent view models with retry and not-found states
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gym_sharks::config::ClientConfig;
//! use gym_sharks::context::ClientContext;
//! use gym_sharks::pages::home::HomePage;
//! use gym_sharks_core::errors::AppResult;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let context = ClientContext::from_config(ClientConfig::from_env()?)?;
//!     context.bootstrap().await;
//!
//!     let home = HomePage::load(context.data()).await;
//!     println!("{} featured workouts", home.featured.ready().map_or(0, Vec::len));
//!     Ok(())
//! }
//! ```

/// Query cache with per-key stale times
pub mod cache;

/// Embedded mock datasets
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Dependency wiring for pages and the CLI
pub mod context;

/// Mock and backend data sources
pub mod data;

/// Tracing subscriber setup and structured event helpers
pub mod logging;

/// Current route and auth redirects
pub mod navigation;

/// Page view models
pub mod pages;

/// Authentication session cache
pub mod session;

/// Cookie jar and local storage
pub mod storage;

/// Workout session state machine and timer
pub mod workout_session;
