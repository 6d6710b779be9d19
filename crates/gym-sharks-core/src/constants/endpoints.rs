// ABOUTME: Backend REST endpoint paths for authentication, catalog, progress, and AI calls
// ABOUTME: Path builders percent-encode user-supplied path segments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use std::borrow::Cow;

/// Login
pub const AUTH_LOGIN: &str = "/auth/login";
/// Registration
pub const AUTH_REGISTER: &str = "/auth/register";
/// Current user profile (GET and PUT)
pub const AUTH_PROFILE: &str = "/auth/profile";
/// Workout listing
pub const HOME_WORKOUTS: &str = "/home-workouts";
/// Featured workouts
pub const HOME_WORKOUTS_FEATURED: &str = "/home-workouts/featured";
/// Recommended workouts for the current user
pub const HOME_WORKOUTS_RECOMMENDATIONS: &str = "/home-workouts/recommendations";
/// Supplement listing
pub const SUPPLEMENTS: &str = "/supplements";
/// Diet plan listing
pub const DIETS: &str = "/diets";
/// Progress entries
pub const PROGRESS: &str = "/progress";
/// Membership plans
pub const MEMBERSHIPS: &str = "/memberships";
/// Membership subscription
pub const MEMBERSHIPS_SUBSCRIBE: &str = "/memberships/subscribe";
/// AI workout tips
pub const AI_WORKOUT_TIPS: &str = "/ai/workout-tips";
/// AI nutrition advice
pub const AI_NUTRITION_ADVICE: &str = "/ai/nutrition-advice";
/// AI general tips
pub const AI_GENERAL_TIPS: &str = "/ai/general-tips";
/// Backend health check
pub const HEALTH: &str = "/health";

/// Encode a single path segment so ids and category names cannot escape it
fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// `/home-workouts/{id}`
#[must_use]
pub fn workout(id: &str) -> String {
    format!("{HOME_WORKOUTS}/{}", segment(id))
}

/// `/home-workouts/category/{category}`
#[must_use]
pub fn workouts_by_category(category: &str) -> String {
    format!("{HOME_WORKOUTS}/category/{}", segment(category))
}

/// `/home-workouts/difficulty/{difficulty}`
#[must_use]
pub fn workouts_by_difficulty(difficulty: &str) -> String {
    format!("{HOME_WORKOUTS}/difficulty/{}", segment(difficulty))
}

/// `/supplements/{id}`
#[must_use]
pub fn supplement(id: &str) -> String {
    format!("{SUPPLEMENTS}/{}", segment(id))
}

/// `/supplements/category/{category}`
#[must_use]
pub fn supplements_by_category(category: &str) -> String {
    format!("{SUPPLEMENTS}/category/{}", segment(category))
}

/// `/supplements/recommended/{goal}`
#[must_use]
pub fn recommended_supplements(goal: &str) -> String {
    format!("{SUPPLEMENTS}/recommended/{}", segment(goal))
}

/// `/diets/{goal}`
#[must_use]
pub fn diet_by_goal(goal: &str) -> String {
    format!("{DIETS}/{}", segment(goal))
}

/// `/progress/{id}`
#[must_use]
pub fn progress_entry(id: &str) -> String {
    format!("{PROGRESS}/{}", segment(id))
}
