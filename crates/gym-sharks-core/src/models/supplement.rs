// ABOUTME: Supplement catalog entries with dosage, ingredients, and effectiveness ratings
// ABOUTME: Category and recommendation-target enums use the backend's display strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use super::user::FitnessGoal;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supplement category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplementCategory {
    /// Protein powders
    Protein,
    /// Taken before training
    #[serde(rename = "Pre-Workout")]
    PreWorkout,
    /// Taken after training
    #[serde(rename = "Post-Workout")]
    PostWorkout,
    /// Vitamins
    Vitamins,
    /// Minerals
    Minerals,
    /// Amino acids
    #[serde(rename = "Amino Acids")]
    AminoAcids,
    /// Fat burners
    #[serde(rename = "Fat Burners")]
    FatBurners,
    /// Mass gainers
    #[serde(rename = "Mass Gainers")]
    MassGainers,
    /// Recovery aids
    Recovery,
    /// General health
    #[serde(rename = "General Health")]
    GeneralHealth,
}

impl SupplementCategory {
    /// Every category in display order
    pub const ALL: [Self; 10] = [
        Self::Protein,
        Self::PreWorkout,
        Self::PostWorkout,
        Self::Vitamins,
        Self::Minerals,
        Self::AminoAcids,
        Self::FatBurners,
        Self::MassGainers,
        Self::Recovery,
        Self::GeneralHealth,
    ];

    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Protein => "Protein",
            Self::PreWorkout => "Pre-Workout",
            Self::PostWorkout => "Post-Workout",
            Self::Vitamins => "Vitamins",
            Self::Minerals => "Minerals",
            Self::AminoAcids => "Amino Acids",
            Self::FatBurners => "Fat Burners",
            Self::MassGainers => "Mass Gainers",
            Self::Recovery => "Recovery",
            Self::GeneralHealth => "General Health",
        }
    }
}

impl fmt::Display for SupplementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplementCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().replace('-', " ").eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| AppError::invalid_input(format!("unknown supplement category '{s}'")))
    }
}

/// Goal a supplement is recommended for
///
/// A superset of [`FitnessGoal`]: supplements also target endurance,
/// recovery, and general health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupplementTarget {
    /// Lose body weight
    #[serde(rename = "weight loss")]
    WeightLoss,
    /// Build muscle
    #[serde(rename = "muscle gain")]
    MuscleGain,
    /// Keep current shape
    #[serde(rename = "maintenance")]
    Maintenance,
    /// Endurance sports
    #[serde(rename = "endurance")]
    Endurance,
    /// Recovery between sessions
    #[serde(rename = "recovery")]
    Recovery,
    /// General wellbeing
    #[serde(rename = "general health")]
    GeneralHealth,
}

impl SupplementTarget {
    /// Wire representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WeightLoss => "weight loss",
            Self::MuscleGain => "muscle gain",
            Self::Maintenance => "maintenance",
            Self::Endurance => "endurance",
            Self::Recovery => "recovery",
            Self::GeneralHealth => "general health",
        }
    }
}

impl From<FitnessGoal> for SupplementTarget {
    fn from(goal: FitnessGoal) -> Self {
        match goal {
            FitnessGoal::WeightLoss => Self::WeightLoss,
            FitnessGoal::MuscleGain => Self::MuscleGain,
            FitnessGoal::Maintenance => Self::Maintenance,
        }
    }
}

/// How strong the research behind a supplement is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EvidenceLevel {
    /// Weak evidence
    Low,
    /// Mixed evidence
    Medium,
    /// Strong evidence
    High,
}

/// Rating and evidence summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Effectiveness {
    /// Rating out of 5
    pub rating: f64,
    /// Evidence strength
    pub evidence_level: EvidenceLevel,
}

/// Intended audience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetGender {
    /// Men
    #[serde(rename = "male")]
    Male,
    /// Women
    #[serde(rename = "female")]
    Female,
    /// Anyone
    All,
}

/// Recommended intake
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dosage {
    /// Amount per serving
    pub amount: String,
    /// How often
    pub frequency: String,
    /// When to take it
    pub timing: String,
    /// Preparation notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

/// Active or filler ingredient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name
    pub name: String,
    /// Amount per serving
    pub amount: String,
    /// Why it is included
    pub purpose: String,
}

/// Recommended age bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    /// Minimum age
    pub min: u32,
    /// Maximum age
    pub max: u32,
}

/// Rough price bracket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    /// Bracket such as "$20-40"
    pub range: String,
    /// Currency code
    pub currency: String,
}

/// Supplement catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplement {
    /// Identifier
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    /// Product name
    pub name: String,
    /// Category
    pub category: SupplementCategory,
    /// Short description
    pub description: String,
    /// Benefits, most important first
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Goals it helps with
    #[serde(default)]
    pub recommended_for: Vec<SupplementTarget>,
    /// Intake guidance
    pub dosage: Dosage,
    /// Ingredient breakdown
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Known side effects
    #[serde(default)]
    pub side_effects: Vec<String>,
    /// When not to take it
    #[serde(default)]
    pub contraindications: Vec<String>,
    /// Drug or supplement interactions
    #[serde(default)]
    pub interactions: Vec<String>,
    /// Intended audience
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_gender: Option<TargetGender>,
    /// Recommended age bracket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_range: Option<AgeRange>,
    /// Price bracket
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRange>,
    /// Rating and evidence
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effectiveness: Option<Effectiveness>,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Part of a basic stack
    #[serde(default)]
    pub is_essential: bool,
    /// Frequently bought
    #[serde(default)]
    pub is_popular: bool,
}

impl Supplement {
    /// True when the supplement lists the given goal
    #[must_use]
    pub fn is_recommended_for(&self, target: SupplementTarget) -> bool {
        self.recommended_for.contains(&target)
    }

    /// First `count` benefits for card previews
    #[must_use]
    pub fn benefit_preview(&self, count: usize) -> &[String] {
        &self.benefits[..self.benefits.len().min(count)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing_accepts_display_and_slug_forms() {
        assert_eq!(
            "pre-workout".parse::<SupplementCategory>().unwrap(),
            SupplementCategory::PreWorkout
        );
        assert_eq!(
            "amino_acids".parse::<SupplementCategory>().unwrap(),
            SupplementCategory::AminoAcids
        );
        assert!("Snacks".parse::<SupplementCategory>().is_err());
    }

    #[test]
    fn test_supplement_defaults_optional_lists() {
        let json = r#"{
            "_id": "9",
            "name": "Creatine",
            "category": "Amino Acids",
            "description": "Strength",
            "benefits": ["Power", "Size", "Recovery"],
            "recommendedFor": ["muscle gain"],
            "dosage": {"amount": "5g", "frequency": "daily", "timing": "any"},
            "effectiveness": {"rating": 4.9, "evidenceLevel": "High"}
        }"#;
        let supplement: Supplement = serde_json::from_str(json).unwrap();
        assert!(supplement.side_effects.is_empty());
        assert!(supplement.is_recommended_for(FitnessGoal::MuscleGain.into()));
        assert!(!supplement.is_recommended_for(SupplementTarget::WeightLoss));
        assert_eq!(supplement.benefit_preview(2), ["Power", "Size"]);
        assert_eq!(supplement.benefit_preview(10).len(), 3);
    }
}
