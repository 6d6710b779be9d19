// ABOUTME: Diet plans page: plans grouped by goal with the available goals as tabs
// ABOUTME: Goal tabs come from the whole listing, groups from the filtered plans
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::PanelState;
use crate::data::FitnessData;
use gym_sharks_core::models::{DietPlan, FitnessGoal};
use gym_sharks_core::search::{group_by_goal, DietFilter};
use serde::Serialize;

/// Plans serving one goal
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietGroup {
    /// Shared goal
    pub goal: FitnessGoal,
    /// Plans in listing order
    pub plans: Vec<DietPlan>,
}

/// What the diets page renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DietsPage {
    /// Goals with at least one plan, first-seen order
    pub goals: Vec<FitnessGoal>,
    /// Filtered plans by goal
    pub groups: Vec<DietGroup>,
}

/// Load the plans and apply `filter`
pub async fn load(data: &dyn FitnessData, filter: &DietFilter) -> PanelState<DietsPage> {
    let page = data.diet_plans().await.map(|plans| {
        let goals = group_by_goal(&plans)
            .into_iter()
            .map(|(goal, _)| goal)
            .collect();
        let matching: Vec<DietPlan> = filter.apply(&plans).into_iter().cloned().collect();
        let groups = group_by_goal(&matching)
            .into_iter()
            .map(|(goal, plans)| DietGroup {
                goal,
                plans: plans.into_iter().cloned().collect(),
            })
            .collect();
        DietsPage { goals, groups }
    });
    PanelState::from_result(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;

    #[tokio::test]
    async fn test_groups_and_goal_tabs() {
        let data = MockData::embedded().unwrap();
        let page = load(&data, &DietFilter::default()).await;
        let page = page.ready().unwrap();
        assert_eq!(page.goals, vec![FitnessGoal::WeightLoss]);
        assert_eq!(page.groups.len(), 1);
        assert_eq!(page.groups[0].plans[0].name, "Weight Loss Plan");
    }

    #[tokio::test]
    async fn test_absent_goal_keeps_tabs_but_no_groups() {
        let data = MockData::embedded().unwrap();
        let filter = DietFilter {
            goal: Some(FitnessGoal::MuscleGain),
            ..DietFilter::default()
        };
        let page = load(&data, &filter).await;
        let page = page.ready().unwrap();
        assert_eq!(page.goals.len(), 1);
        assert!(page.groups.is_empty());
    }
}
