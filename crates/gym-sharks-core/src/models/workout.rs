// ABOUTME: Home workout programs and their exercises
// ABOUTME: HomeWorkout, Exercise, warm-up/cool-down steps, category and difficulty enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workout style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutCategory {
    /// Bodyweight only
    Bodyweight,
    /// High-intensity interval training
    #[serde(rename = "HIIT")]
    Hiit,
    /// Yoga
    Yoga,
    /// Pilates
    Pilates,
    /// Steady cardio
    Cardio,
    /// Strength training
    Strength,
    /// Stretching
    Flexibility,
    /// Core and abs
    Core,
    /// Functional movement
    Functional,
    /// Active recovery
    Recovery,
}

impl WorkoutCategory {
    /// Categories offered as filters on the workout listing
    pub const FILTERABLE: [Self; 8] = [
        Self::Bodyweight,
        Self::Hiit,
        Self::Yoga,
        Self::Pilates,
        Self::Cardio,
        Self::Strength,
        Self::Flexibility,
        Self::Core,
    ];

    /// Every known category
    pub const ALL: [Self; 10] = [
        Self::Bodyweight,
        Self::Hiit,
        Self::Yoga,
        Self::Pilates,
        Self::Cardio,
        Self::Strength,
        Self::Flexibility,
        Self::Core,
        Self::Functional,
        Self::Recovery,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bodyweight => "Bodyweight",
            Self::Hiit => "HIIT",
            Self::Yoga => "Yoga",
            Self::Pilates => "Pilates",
            Self::Cardio => "Cardio",
            Self::Strength => "Strength",
            Self::Flexibility => "Flexibility",
            Self::Core => "Core",
            Self::Functional => "Functional",
            Self::Recovery => "Recovery",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("unknown workout category '{s}'")))
    }
}

/// Workout difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkoutDifficulty {
    /// Entry level
    Beginner,
    /// Some training experience
    Intermediate,
    /// Experienced athletes
    Advanced,
}

impl WorkoutDifficulty {
    /// All difficulties, easiest first
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for WorkoutDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutDifficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|difficulty| difficulty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::invalid_input(format!("unknown difficulty '{s}'")))
    }
}

/// Easier and harder variants of an exercise
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseModifications {
    /// Regression for beginners
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beginner: Option<String>,
    /// Progression for advanced athletes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advanced: Option<String>,
}

/// Single exercise inside a workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// How to perform it
    pub instructions: String,
    /// Number of sets
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets: Option<u32>,
    /// Repetitions or a duration such as "45 seconds"
    pub reps: String,
    /// Rest between sets in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rest_time: Option<u32>,
    /// Easier and harder variants
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifications: Option<ExerciseModifications>,
    /// Coaching cues
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Exercise {
    /// One-line prescription, e.g. "4 sets × 45 seconds • 15s rest"
    #[must_use]
    pub fn prescription(&self) -> String {
        let mut line = self.sets.map_or_else(
            || self.reps.clone(),
            |sets| format!("{sets} sets × {}", self.reps),
        );
        if let Some(rest) = self.rest_time.filter(|rest| *rest > 0) {
            line.push_str(&format!(" • {rest}s rest"));
        }
        line
    }
}

/// Warm-up or cool-down step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedStep {
    /// Step name
    pub name: String,
    /// Free-text duration
    pub duration: String,
    /// How to perform it
    pub instructions: String,
}

/// Home workout program
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeWorkout {
    /// Identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Title
    pub title: String,
    /// Short description
    pub description: String,
    /// Style
    pub category: WorkoutCategory,
    /// Difficulty
    pub difficulty: WorkoutDifficulty,
    /// Nominal duration in minutes
    #[serde(rename = "duration")]
    pub duration_minutes: u32,
    /// Equipment needed
    #[serde(default)]
    pub equipment: Vec<String>,
    /// Muscle groups worked
    #[serde(default)]
    pub target_muscle_groups: Vec<String>,
    /// Ordered exercises
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    /// Warm-up steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warm_up: Vec<TimedStep>,
    /// Cool-down steps
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cool_down: Vec<TimedStep>,
    /// Nominal calorie estimate for the full duration
    pub calories: u32,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Shown in featured strips
    #[serde(default)]
    pub is_popular: bool,
}

impl HomeWorkout {
    /// Nominal duration in seconds
    #[must_use]
    pub fn nominal_duration_secs(&self) -> u64 {
        u64::from(self.duration_minutes) * 60
    }

    /// Equipment list for display, "None" when nothing is needed
    #[must_use]
    pub fn equipment_label(&self) -> String {
        if self.equipment.is_empty() {
            "None".to_owned()
        } else {
            self.equipment.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_wire_names() {
        let category: WorkoutCategory = serde_json::from_str(r#""HIIT""#).unwrap();
        assert_eq!(category, WorkoutCategory::Hiit);
        assert_eq!("hiit".parse::<WorkoutCategory>().unwrap(), WorkoutCategory::Hiit);
        assert!("Zumba".parse::<WorkoutCategory>().is_err());
    }

    #[test]
    fn test_exercise_prescription() {
        let exercise = Exercise {
            name: "Burpees".into(),
            instructions: "Drop, kick, jump.".into(),
            sets: Some(4),
            reps: "30 seconds".into(),
            rest_time: Some(30),
            modifications: None,
            tips: vec![],
        };
        assert_eq!(exercise.prescription(), "4 sets × 30 seconds • 30s rest");

        let hold = Exercise {
            sets: None,
            rest_time: Some(0),
            ..exercise
        };
        assert_eq!(hold.prescription(), "30 seconds");
    }
}
