// ABOUTME: Diet plans with meals, food items, and macro targets
// ABOUTME: Plans are grouped by fitness goal on the nutrition page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use super::user::FitnessGoal;
use serde::{Deserialize, Serialize};

/// Protein, carbohydrate and fat amounts
///
/// Grams on meals and food items, percentages on a plan's targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    /// Protein
    pub protein: f64,
    /// Carbohydrates
    pub carbs: f64,
    /// Fat
    pub fat: f64,
}

/// Time slot of a meal within the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealTime {
    /// Breakfast
    Breakfast,
    /// Mid-morning snack
    #[serde(rename = "Mid-Morning Snack")]
    MidMorningSnack,
    /// Lunch
    Lunch,
    /// Afternoon snack
    #[serde(rename = "Afternoon Snack")]
    AfternoonSnack,
    /// Dinner
    Dinner,
    /// Evening snack
    #[serde(rename = "Evening Snack")]
    EveningSnack,
}

impl MealTime {
    /// Display label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::MidMorningSnack => "Mid-Morning Snack",
            Self::Lunch => "Lunch",
            Self::AfternoonSnack => "Afternoon Snack",
            Self::Dinner => "Dinner",
            Self::EveningSnack => "Evening Snack",
        }
    }
}

/// Single food in a meal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Food name
    pub name: String,
    /// Energy in kcal
    pub calories: u32,
    /// Protein grams
    pub protein: f64,
    /// Carbohydrate grams
    pub carbs: f64,
    /// Fat grams
    pub fat: f64,
    /// Portion description
    pub quantity: String,
    /// Preparation notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Meal made of food items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    /// Slot in the day
    pub time: MealTime,
    /// Foods
    pub items: Vec<FoodItem>,
    /// Declared total energy
    pub total_calories: u32,
    /// Declared macro totals in grams
    pub macros: Macros,
}

/// Goal-specific nutrition plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietPlan {
    /// Identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Plan name
    pub name: String,
    /// Short description
    pub description: String,
    /// Goal the plan serves
    pub goal: FitnessGoal,
    /// Daily energy target
    pub target_calories: u32,
    /// Macro split in percent
    pub macro_targets: Macros,
    /// Meals in day order
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Rules to follow
    #[serde(default)]
    pub guidelines: Vec<String>,
    /// Practical tips
    #[serde(default)]
    pub tips: Vec<String>,
    /// Free-text plan length
    pub duration: String,
    /// Highlighted plan
    #[serde(default)]
    pub is_popular: bool,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Update timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl DietPlan {
    /// Sum of the meals' declared calories
    #[must_use]
    pub fn planned_calories(&self) -> u32 {
        self.meals.iter().map(|meal| meal.total_calories).sum()
    }
}
