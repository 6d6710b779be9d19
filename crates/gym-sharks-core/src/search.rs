// ABOUTME: Pure catalog filtering for workouts, supplements, and diet plans
// ABOUTME: Case-insensitive substring search plus equality filters, preserving input order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

//! Catalog search
//!
//! All filters are synchronous and deterministic: the same inputs always
//! yield the same subset, in input order. A filter value that no record
//! carries simply yields an empty result.

use crate::models::{
    DietPlan, FitnessGoal, HomeWorkout, Supplement, SupplementCategory, SupplementTarget,
    WorkoutCategory, WorkoutDifficulty,
};

/// Records that can be matched by a free-text query
pub trait Searchable {
    /// Primary label (title or name)
    fn label(&self) -> &str;
    /// Longer description
    fn description(&self) -> &str;

    /// Case-insensitive substring match on label or description
    ///
    /// `needle` must already be lowercased.
    fn matches_lowercase(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.label().to_lowercase().contains(needle)
            || self.description().to_lowercase().contains(needle)
    }
}

impl Searchable for HomeWorkout {
    fn label(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Searchable for Supplement {
    fn label(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl Searchable for DietPlan {
    fn label(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

fn normalized(query: Option<&str>) -> String {
    query.unwrap_or_default().to_lowercase()
}

/// Workout listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutFilter {
    /// Free-text query over title and description
    pub query: Option<String>,
    /// Exact category
    pub category: Option<WorkoutCategory>,
    /// Exact difficulty
    pub difficulty: Option<WorkoutDifficulty>,
    /// Upper bound on nominal duration in minutes
    pub max_duration: Option<u32>,
}

impl WorkoutFilter {
    /// Filter with only a text query
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Matching workouts in input order
    #[must_use]
    pub fn apply<'a>(&self, workouts: &'a [HomeWorkout]) -> Vec<&'a HomeWorkout> {
        let needle = normalized(self.query.as_deref());
        workouts
            .iter()
            .filter(|workout| workout.matches_lowercase(&needle))
            .filter(|workout| self.category.is_none_or(|category| workout.category == category))
            .filter(|workout| {
                self.difficulty
                    .is_none_or(|difficulty| workout.difficulty == difficulty)
            })
            .filter(|workout| {
                self.max_duration
                    .is_none_or(|limit| workout.duration_minutes <= limit)
            })
            .collect()
    }
}

/// Supplement listing filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SupplementFilter {
    /// Free-text query over name and description
    pub query: Option<String>,
    /// Exact category
    pub category: Option<SupplementCategory>,
    /// Goal listed in `recommendedFor`
    pub recommended_for: Option<SupplementTarget>,
}

impl SupplementFilter {
    /// Filter with only a text query
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    /// Matching supplements in input order
    #[must_use]
    pub fn apply<'a>(&self, supplements: &'a [Supplement]) -> Vec<&'a Supplement> {
        let needle = normalized(self.query.as_deref());
        supplements
            .iter()
            .filter(|supplement| supplement.matches_lowercase(&needle))
            .filter(|supplement| {
                self.category
                    .is_none_or(|category| supplement.category == category)
            })
            .filter(|supplement| {
                self.recommended_for
                    .is_none_or(|target| supplement.is_recommended_for(target))
            })
            .collect()
    }
}

/// Diet plan filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DietFilter {
    /// Free-text query over name and description
    pub query: Option<String>,
    /// Exact goal
    pub goal: Option<FitnessGoal>,
}

impl DietFilter {
    /// Matching plans in input order
    #[must_use]
    pub fn apply<'a>(&self, plans: &'a [DietPlan]) -> Vec<&'a DietPlan> {
        let needle = normalized(self.query.as_deref());
        plans
            .iter()
            .filter(|plan| plan.matches_lowercase(&needle))
            .filter(|plan| self.goal.is_none_or(|goal| plan.goal == goal))
            .collect()
    }
}

/// Popular workouts, first `limit` in input order
#[must_use]
pub fn featured_workouts(workouts: &[HomeWorkout], limit: usize) -> Vec<&HomeWorkout> {
    workouts
        .iter()
        .filter(|workout| workout.is_popular)
        .take(limit)
        .collect()
}

/// Supplements recommended for `goal`, first `limit` in input order
#[must_use]
pub fn recommended_supplements(
    supplements: &[Supplement],
    goal: SupplementTarget,
    limit: usize,
) -> Vec<&Supplement> {
    supplements
        .iter()
        .filter(|supplement| supplement.is_recommended_for(goal))
        .take(limit)
        .collect()
}

/// Plans grouped by goal, goals in first-seen order
#[must_use]
pub fn group_by_goal(plans: &[DietPlan]) -> Vec<(FitnessGoal, Vec<&DietPlan>)> {
    let mut groups: Vec<(FitnessGoal, Vec<&DietPlan>)> = Vec::new();
    for plan in plans {
        match groups.iter_mut().find(|(goal, _)| *goal == plan.goal) {
            Some((_, members)) => members.push(plan),
            None => groups.push((plan.goal, vec![plan])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Dosage;

    fn workout(id: &str, title: &str, category: WorkoutCategory, popular: bool) -> HomeWorkout {
        HomeWorkout {
            id: id.into(),
            title: title.into(),
            description: format!("{title} session"),
            category,
            difficulty: WorkoutDifficulty::Beginner,
            duration_minutes: 20,
            equipment: vec![],
            target_muscle_groups: vec![],
            exercises: vec![],
            warm_up: vec![],
            cool_down: vec![],
            calories: 200,
            tags: vec![],
            is_popular: popular,
        }
    }

    fn supplement(id: &str, name: &str, targets: Vec<SupplementTarget>) -> Supplement {
        Supplement {
            id: id.into(),
            name: name.into(),
            category: SupplementCategory::Protein,
            description: String::new(),
            benefits: vec![],
            recommended_for: targets,
            dosage: Dosage {
                amount: "1".into(),
                frequency: "daily".into(),
                timing: "any".into(),
                instructions: None,
            },
            ingredients: vec![],
            side_effects: vec![],
            contraindications: vec![],
            interactions: vec![],
            target_gender: None,
            age_range: None,
            price: None,
            effectiveness: None,
            tags: vec![],
            is_essential: false,
            is_popular: false,
        }
    }

    #[test]
    fn test_query_is_case_insensitive_and_order_preserving() {
        let workouts = vec![
            workout("1", "Morning Stretch", WorkoutCategory::Flexibility, false),
            workout("2", "Core STRENGTH", WorkoutCategory::Core, true),
            workout("3", "Strength Circuit", WorkoutCategory::Strength, true),
        ];
        let ids: Vec<&str> = WorkoutFilter::query("strength")
            .apply(&workouts)
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, ["2", "3"]);
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let workouts = vec![workout("1", "A", WorkoutCategory::Yoga, false)];
        assert_eq!(WorkoutFilter::query("").apply(&workouts).len(), 1);
        assert_eq!(WorkoutFilter::default().apply(&workouts).len(), 1);
    }

    #[test]
    fn test_surrounding_whitespace_is_part_of_the_query() {
        let workouts = vec![
            workout("1", "Push Up Ladder", WorkoutCategory::Strength, false),
            workout("2", "Upper Body Burn", WorkoutCategory::Strength, false),
        ];
        let ids: Vec<&str> = WorkoutFilter::query(" up")
            .apply(&workouts)
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, ["1"]);
        assert!(WorkoutFilter::query("   ").apply(&workouts).is_empty());
    }

    #[test]
    fn test_absent_category_yields_empty() {
        let workouts = vec![workout("1", "A", WorkoutCategory::Yoga, false)];
        let filter = WorkoutFilter {
            category: Some(WorkoutCategory::Recovery),
            ..WorkoutFilter::default()
        };
        assert!(filter.apply(&workouts).is_empty());
    }

    #[test]
    fn test_featured_takes_popular_prefix() {
        let workouts = vec![
            workout("1", "A", WorkoutCategory::Yoga, true),
            workout("2", "B", WorkoutCategory::Yoga, false),
            workout("3", "C", WorkoutCategory::Yoga, true),
            workout("4", "D", WorkoutCategory::Yoga, true),
        ];
        let ids: Vec<&str> = featured_workouts(&workouts, 2)
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_recommended_supplements_by_goal() {
        let supplements = vec![
            supplement("1", "Whey", vec![SupplementTarget::MuscleGain]),
            supplement("2", "Green Tea", vec![SupplementTarget::WeightLoss]),
            supplement("3", "Creatine", vec![SupplementTarget::MuscleGain]),
        ];
        let picks = recommended_supplements(&supplements, SupplementTarget::MuscleGain, 3);
        assert_eq!(picks.len(), 2);
        assert!(recommended_supplements(&supplements, SupplementTarget::Maintenance, 3).is_empty());

        let filter = SupplementFilter {
            recommended_for: Some(SupplementTarget::WeightLoss),
            ..SupplementFilter::query("TEA")
        };
        assert_eq!(filter.apply(&supplements).len(), 1);
    }
}
