// ABOUTME: AI coach tips, advice payloads, and advice request bodies
// ABOUTME: AdviceKind selects between workout, nutrition, and general guidance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Topic of a coaching tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipCategory {
    /// Training
    Workout,
    /// Food
    Nutrition,
    /// Rest and recovery
    Recovery,
    /// Mindset
    Motivation,
}

/// Audience level of a tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipDifficulty {
    /// New to training
    Beginner,
    /// Some experience
    Intermediate,
    /// Experienced
    Advanced,
}

/// Short coaching tip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiTip {
    /// Identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Topic
    pub category: TipCategory,
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Audience level
    pub difficulty: TipDifficulty,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Like count
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Advice returned by the AI endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAdvice {
    /// Concrete recommendations
    pub recommendations: Vec<String>,
    /// Supporting tips
    pub tips: Vec<String>,
    /// One-paragraph summary
    pub personalized_advice: String,
}

/// Which kind of advice to request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceKind {
    /// Training advice
    Workout,
    /// Nutrition advice
    Nutrition,
    /// Anything else
    General,
}

impl AdviceKind {
    /// Lowercase name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Workout => "workout",
            Self::Nutrition => "nutrition",
            Self::General => "general",
        }
    }
}

impl fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdviceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "workout" => Ok(Self::Workout),
            "nutrition" => Ok(Self::Nutrition),
            "general" => Ok(Self::General),
            _ => Err(AppError::invalid_input(format!("unknown advice kind '{s}'"))),
        }
    }
}

/// Body of `POST /ai/workout-tips`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTipsRequest {
    /// Goal in free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_goal: Option<String>,
    /// Training experience
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    /// Available equipment
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<String>,
}

/// Body of `POST /ai/nutrition-advice`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionAdviceRequest {
    /// Goal in free text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Activity level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    /// Dietary restrictions
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dietary_restrictions: Vec<String>,
}
