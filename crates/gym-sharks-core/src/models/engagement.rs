// ABOUTME: Activity streaks and time-boxed challenges shown on the dashboard
// ABOUTME: Streak tiers and challenge completion percentages drive the badges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::constants::limits::{STREAK_HIGH, STREAK_MEDIUM};
use serde::{Deserialize, Serialize};

/// Activity a streak counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakKind {
    /// Days with a workout
    Workout,
    /// Days with a login
    Login,
    /// Days with a supplement taken
    Supplement,
    /// Days with a progress entry
    Progress,
}

/// Visual weight of a streak badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakTier {
    /// Under 5 days
    Low,
    /// 5 to 9 days
    Medium,
    /// 10 days or more
    High,
}

/// Consecutive-day counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStreak {
    /// Counted activity
    #[serde(rename = "type")]
    pub kind: StreakKind,
    /// Current run in days
    pub current_streak: u32,
    /// Best run in days
    pub longest_streak: u32,
    /// Date of the last counted activity
    pub last_activity: String,
}

impl UserStreak {
    /// Badge tier for the current run
    #[must_use]
    pub const fn tier(&self) -> StreakTier {
        if self.current_streak >= STREAK_HIGH {
            StreakTier::High
        } else if self.current_streak >= STREAK_MEDIUM {
            StreakTier::Medium
        } else {
            StreakTier::Low
        }
    }
}

/// Challenge period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengePeriod {
    /// One day
    Daily,
    /// One week
    Weekly,
    /// One month
    Monthly,
}

/// Challenge theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeCategory {
    /// Training
    Fitness,
    /// Food
    Nutrition,
    /// Habits
    Lifestyle,
}

/// Time-boxed goal with a numeric target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    /// Identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Headline
    pub title: String,
    /// What to do
    pub description: String,
    /// Period
    #[serde(rename = "type")]
    pub period: ChallengePeriod,
    /// Target count
    pub target: u32,
    /// Count so far
    pub progress: u32,
    /// First day
    pub start_date: String,
    /// Last day
    pub end_date: String,
    /// Still running
    pub is_active: bool,
    /// Reward on completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<String>,
    /// Emoji icon
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Theme
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<ChallengeCategory>,
}

impl Challenge {
    /// Completion in whole percent, capped at 100
    #[must_use]
    pub fn completion_percent(&self) -> u32 {
        if self.target == 0 {
            return 100;
        }
        let percent = u64::from(self.progress) * 100 / u64::from(self.target);
        u32::try_from(percent.min(100)).unwrap_or(100)
    }

    /// True once progress reaches the target
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.progress >= self.target
    }
}
