// ABOUTME: Query cache for backend answers with per-resource stale times
// ABOUTME: Cache keys mirror backend resource paths so mutations can invalidate by prefix
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

/// In-memory cache implementation
pub mod memory;

pub use memory::QueryCache;

/// Query keys
///
/// Keys are resource paths without the leading slash, so invalidating
/// `home-workouts` also drops `home-workouts/featured`.
pub mod keys {
    /// Workout listing
    pub const WORKOUTS: &str = "home-workouts";
    /// Featured workouts
    pub const FEATURED_WORKOUTS: &str = "home-workouts/featured";
    /// Supplement listing
    pub const SUPPLEMENTS: &str = "supplements";
    /// Diet plans
    pub const DIETS: &str = "diets";
    /// Membership plans
    pub const MEMBERSHIPS: &str = "memberships";
    /// Backend health
    pub const HEALTH: &str = "health";

    /// Single workout
    #[must_use]
    pub fn workout(id: &str) -> String {
        format!("{WORKOUTS}/id/{id}")
    }

    /// Single supplement
    #[must_use]
    pub fn supplement(id: &str) -> String {
        format!("{SUPPLEMENTS}/id/{id}")
    }
}
