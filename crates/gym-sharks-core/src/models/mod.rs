// ABOUTME: Core data models shared between the fitness client and its backend
// ABOUTME: Re-exports user, workout, supplement, diet, progress, coach, and engagement types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

//! # Data Models
//!
//! Wire-compatible representations of everything the backend (or the
//! embedded mock catalog) hands to the client. Field names follow the
//! backend's camelCase JSON and its `_id` identifiers.
//!
//! ## Design Principles
//!
//! - **Lenient on input**: optional attributes default instead of failing the whole record
//! - **Strong enums**: categories, difficulties and goals are closed sets
//! - **Read-only catalog**: workouts, supplements and diet plans are never mutated client-side

mod coach;
mod diet;
mod engagement;
mod envelope;
mod membership;
mod progress;
mod supplement;
mod user;
mod workout;

// User domain
pub use user::{
    ActivityLevel, AuthPayload, FitnessGoal, Gender, LoginRequest, ProfileUpdate,
    RegisterRequest, User, UserPreferences,
};

// Workout domain
pub use workout::{
    Exercise, ExerciseModifications, HomeWorkout, TimedStep, WorkoutCategory, WorkoutDifficulty,
};

// Supplement domain
pub use supplement::{
    AgeRange, Dosage, Effectiveness, EvidenceLevel, Ingredient, PriceRange, Supplement,
    SupplementCategory, SupplementTarget, TargetGender,
};

// Nutrition domain
pub use diet::{DietPlan, FoodItem, Macros, Meal, MealTime};

// Progress domain
pub use progress::{Measurements, NewProgressEntry, PerceivedEffort, Progress, WorkoutCompleted};

// Membership domain
pub use membership::{
    Membership, MembershipPrice, MembershipSubscription, PaymentStatus, SubscriptionStatus,
};

// AI coach domain
pub use coach::{
    AdviceKind, AiAdvice, AiTip, NutritionAdviceRequest, TipCategory, TipDifficulty,
    WorkoutTipsRequest,
};

// Streaks and challenges
pub use engagement::{Challenge, ChallengeCategory, ChallengePeriod, StreakKind, StreakTier, UserStreak};

// Response envelopes
pub use envelope::{
    ApiResponse, DietData, DietsData, HealthStatus, SubscriptionData, SupplementData,
    SupplementsData, UserData, WorkoutData, WorkoutsData,
};
