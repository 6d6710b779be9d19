// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage keys, routes, backend endpoints, cache stale times and retry counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace.

/// Backend endpoint paths relative to the API base URL
pub mod endpoints;

/// Client-side storage keys and cookie settings
pub mod storage {
    /// Cookie holding the bearer token
    pub const TOKEN_COOKIE: &str = "gym_sharks_token";
    /// Local storage entry holding the JSON-serialized user
    pub const USER_STORAGE_KEY: &str = "gym_sharks_user";
    /// Token cookie lifetime in days
    pub const TOKEN_COOKIE_EXPIRY_DAYS: i64 = 7;
    /// File name for the persisted cookie jar
    pub const COOKIE_JAR_FILE: &str = "cookies.json";
    /// File name for the persisted local storage
    pub const LOCAL_STORAGE_FILE: &str = "local_storage.json";
}

/// Client-side routes
pub mod routes {
    /// Landing page
    pub const HOME: &str = "/";
    /// Login surface that 401s redirect to
    pub const LOGIN: &str = "/auth/login";
    /// Registration surface
    pub const REGISTER: &str = "/auth/register";
    /// Prefix shared by all authentication surfaces
    pub const AUTH_PREFIX: &str = "/auth/";
    /// Dashboard
    pub const DASHBOARD: &str = "/dashboard";
    /// Workout listing
    pub const WORKOUTS: &str = "/workouts";
    /// Supplement listing
    pub const SUPPLEMENTS: &str = "/supplements";
    /// Diet plans
    pub const DIETS: &str = "/diets";
    /// Progress tracking
    pub const PROGRESS: &str = "/progress";
    /// AI coach demo forms
    pub const AI_COACH: &str = "/ai-coach";
}

/// Backend base URLs
pub mod api {
    /// Base URL used outside production
    pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:5000/api";
    /// Base URL used in production when no override is configured
    pub const PRODUCTION_BASE_URL: &str = "https://gymshark-backend-sbqa.onrender.com/api";
    /// Public URL of the web application, used in share text
    pub const APP_URL: &str = "https://gym-shark-frontend.vercel.app";
}

/// Query cache stale times in seconds
pub mod stale_times {
    /// Default for queries without a specific stale time
    pub const DEFAULT_SECS: u64 = 5 * 60;
    /// Workout listings
    pub const WORKOUTS_SECS: u64 = 5 * 60;
    /// Featured workouts
    pub const FEATURED_WORKOUTS_SECS: u64 = 10 * 60;
    /// Supplement listings
    pub const SUPPLEMENTS_SECS: u64 = 10 * 60;
    /// Diet plans
    pub const DIETS_SECS: u64 = 15 * 60;
    /// Membership plans
    pub const MEMBERSHIPS_SECS: u64 = 30 * 60;
    /// Backend health check
    pub const HEALTH_SECS: u64 = 2 * 60;
}

/// Retry budgets
pub mod retries {
    /// Extra attempts for read queries
    pub const QUERY_MAX_RETRIES: u32 = 3;
    /// Extra attempts for mutations
    pub const MUTATION_MAX_RETRIES: u32 = 1;
    /// Initial backoff between attempts in milliseconds
    pub const INITIAL_BACKOFF_MS: u64 = 500;
    /// Ceiling for the exponential backoff in milliseconds
    pub const MAX_BACKOFF_MS: u64 = 30_000;
}

/// Preview and presentation limits
pub mod limits {
    /// Number of items in "featured" preview strips
    pub const FEATURED_PREVIEW: usize = 3;
    /// Benefits shown on a supplement card
    pub const CARD_BENEFITS: usize = 2;
    /// Streak length rated "on fire"
    pub const STREAK_HIGH: u32 = 10;
    /// Streak length rated "warming up"
    pub const STREAK_MEDIUM: u32 = 5;
    /// Query cache capacity
    pub const QUERY_CACHE_ENTRIES: usize = 256;
}

/// Service names used in structured logs
pub mod service_names {
    /// Client library
    pub const GYM_SHARKS_CLIENT: &str = "gym-sharks-client";
    /// Command-line front end
    pub const GYM_SHARKS_CLI: &str = "gym-sharks-cli";
}

/// User-facing notice texts
pub mod messages {
    /// Login success
    pub const LOGIN_SUCCESS: &str = "Welcome back! Login successful.";
    /// Login failure default
    pub const LOGIN_FAILED: &str = "Login failed. Please try again.";
    /// Registration success
    pub const REGISTER_SUCCESS: &str = "Account created successfully! Welcome to Gym Sharks!";
    /// Registration failure default
    pub const REGISTER_FAILED: &str = "Registration failed. Please try again.";
    /// Logout success
    pub const LOGOUT_SUCCESS: &str = "Logged out successfully!";
    /// Profile update success
    pub const PROFILE_UPDATED: &str = "Profile updated successfully!";
    /// Profile update failure default
    pub const PROFILE_UPDATE_FAILED: &str = "Profile update failed.";
    /// Progress entry saved locally
    pub const PROGRESS_ADDED: &str = "Progress entry added successfully!";
    /// Coach form submitted with blanks
    pub const REQUIRED_FIELDS: &str = "Please fill in all required fields";
    /// Workout tips answered
    pub const WORKOUT_TIPS_READY: &str = "Workout tips generated!";
    /// Nutrition advice answered
    pub const NUTRITION_ADVICE_READY: &str = "Nutrition advice generated!";
    /// General tips answered
    pub const GENERAL_TIPS_READY: &str = "General tips generated!";
    /// Coach request failed
    pub const ADVICE_FAILED: &str = "Could not get advice. Please try again.";
}
