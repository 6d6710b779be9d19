// ABOUTME: Workout listing with free-text search and category, difficulty, and duration filters
// ABOUTME: Filtering happens client-side over the full listing, preserving catalog order
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::PanelState;
use crate::data::FitnessData;
use gym_sharks_core::models::HomeWorkout;
use gym_sharks_core::search::WorkoutFilter;
use serde::Serialize;

/// Workouts matching the current filter
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutList {
    /// Matches in catalog order
    pub items: Vec<HomeWorkout>,
    /// Size of the unfiltered listing
    pub total: usize,
}

impl WorkoutList {
    /// Number of matches
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Load the listing and apply `filter`
pub async fn load(data: &dyn FitnessData, filter: &WorkoutFilter) -> PanelState<WorkoutList> {
    let result = data.workouts().await.map(|workouts| WorkoutList {
        items: filter.apply(&workouts).into_iter().cloned().collect(),
        total: workouts.len(),
    });
    PanelState::from_result(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;
    use gym_sharks_core::models::WorkoutCategory;

    #[tokio::test]
    async fn test_search_is_case_insensitive() {
        let data = MockData::embedded().unwrap();
        let list = load(&data, &WorkoutFilter::query("BUILDER")).await;
        let list = list.ready().unwrap();
        assert_eq!(list.total, 15);
        assert_eq!(list.len(), 2);
    }

    #[tokio::test]
    async fn test_category_filter() {
        let data = MockData::embedded().unwrap();
        let filter = WorkoutFilter {
            category: Some(WorkoutCategory::Yoga),
            ..WorkoutFilter::default()
        };
        let list = load(&data, &filter).await;
        let items = &list.ready().unwrap().items;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].category, WorkoutCategory::Yoga);

        let nobody = WorkoutFilter {
            category: Some(WorkoutCategory::Functional),
            ..WorkoutFilter::default()
        };
        assert!(load(&data, &nobody).await.ready().unwrap().is_empty());
    }
}
