// ABOUTME: Core types and constants for the Gym Sharks fitness client
// ABOUTME: Foundation crate with error handling, domain models, constants, and catalog search
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

#![deny(unsafe_code)]

//! # Gym Sharks Core
//!
//! Foundation crate providing shared types and constants for the Gym Sharks
//! fitness client. Nothing in here performs I/O, which keeps it cheap to
//! depend on from both the HTTP layer and the application crate.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ApiError`
//! - **constants**: Storage keys, routes, endpoints, stale times and retry counts
//! - **models**: Users, workouts, supplements, diet plans, progress and engagement records
//! - **search**: Pure, order-preserving catalog filtering

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Domain models shared with the backend
pub mod models;

/// Case-insensitive catalog search and equality filters
pub mod search;
