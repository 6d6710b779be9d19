// ABOUTME: Typed HTTP client for the Gym Sharks fitness backend
// ABOUTME: Shared connection pool, auth interceptors, retry policy, and one service per backend area
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

#![deny(unsafe_code)]

//! # Gym Sharks API
//!
//! Everything that talks to the backend lives here. [`ApiClient`] attaches
//! the bearer token from a [`TokenSource`], hands 401 responses to an
//! [`UnauthorizedHandler`], and logs rate limiting and server errors. The
//! services in [`services`] wrap it per backend area and unwrap the
//! `{success, data}` envelope.

/// Backend client with bearer-token and unauthorized interceptors
pub mod client;
/// Shared HTTP client for backend API calls
pub mod http_client;
/// Retry policy with exponential backoff
pub mod retry;
/// Typed services per backend area
pub mod services;

pub use client::{ApiClient, RetryPolicies, TokenSource, UnauthorizedHandler};
pub use http_client::{initialize_shared_client, shared_client};
pub use retry::{with_retry, RetryPolicy};
pub use services::{
    AuthApi, AuthService, CoachService, DietService, HealthService, MembershipService, Page,
    ProgressService, SupplementQuery, SupplementService, WorkoutQuery, WorkoutService,
};
