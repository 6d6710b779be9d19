// ABOUTME: Landing page: featured workouts preview, coaching tips, and backend status
// ABOUTME: Each panel loads on its own so a dead backend only greys out the status badge
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::PanelState;
use crate::data::FitnessData;
use gym_sharks_core::constants::limits::FEATURED_PREVIEW;
use gym_sharks_core::models::{AiTip, HealthStatus, HomeWorkout};
use serde::Serialize;

/// What the landing page renders
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePage {
    /// First popular workouts
    pub featured: PanelState<Vec<HomeWorkout>>,
    /// Coaching tips strip
    pub tips: PanelState<Vec<AiTip>>,
    /// Backend status badge
    pub health: PanelState<HealthStatus>,
}

impl HomePage {
    /// Load every panel
    pub async fn load(data: &dyn FitnessData) -> Self {
        let featured = data.featured_workouts().await.map(|mut workouts| {
            workouts.truncate(FEATURED_PREVIEW);
            workouts
        });
        Self {
            featured: PanelState::from_result(featured),
            tips: PanelState::from_result(data.tips().await),
            health: PanelState::from_result(data.health().await),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;

    #[tokio::test]
    async fn test_home_previews_three_featured() {
        let data = MockData::embedded().unwrap();
        let page = HomePage::load(&data).await;
        let featured = page.featured.ready().unwrap();
        assert_eq!(featured.len(), 3);
        assert!(featured.iter().all(|workout| workout.is_popular));
        assert!(page.health.ready().unwrap().success);
    }
}
