// ABOUTME: Dashboard for the logged-in user: featured workouts, goal-based supplements, progress
// ABOUTME: Streak badges and challenge progress round it off; anonymous visitors are redirected
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use super::progress::newest_first;
use super::supplements::SupplementCard;
use super::{require_user, Guarded, PanelState};
use crate::data::FitnessData;
use crate::session::SessionStore;
use gym_sharks_core::constants::limits::FEATURED_PREVIEW;
use gym_sharks_core::models::{
    Challenge, FitnessGoal, HomeWorkout, Progress, StreakTier, SupplementTarget, User, UserStreak,
};
use gym_sharks_core::search::{featured_workouts, recommended_supplements};
use serde::Serialize;

/// Streak with its badge tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakBadge {
    /// Underlying counter
    #[serde(flatten)]
    pub streak: UserStreak,
    /// Badge tier
    pub tier: StreakTier,
}

/// Challenge with its progress bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeCard {
    /// Underlying challenge
    #[serde(flatten)]
    pub challenge: Challenge,
    /// Whole percent, capped at 100
    pub percent: u32,
    /// Target reached
    pub complete: bool,
}

/// What the dashboard renders
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Logged-in user
    pub user: User,
    /// Goal driving recommendations
    pub goal: FitnessGoal,
    /// Body mass index when height and weight are known
    pub bmi: Option<f64>,
    /// First popular workouts
    pub featured: PanelState<Vec<HomeWorkout>>,
    /// First supplements recommended for the goal
    pub recommended: PanelState<Vec<SupplementCard>>,
    /// Most recent progress entry
    pub latest_progress: PanelState<Option<Progress>>,
    /// Streak badges
    pub streaks: PanelState<Vec<StreakBadge>>,
    /// Running challenges
    pub challenges: PanelState<Vec<ChallengeCard>>,
}

/// Load the dashboard, or the guard state when nobody is logged in
pub async fn load(store: &SessionStore, data: &dyn FitnessData) -> Guarded<Dashboard> {
    let user = match require_user(store) {
        Ok(user) => user,
        Err(guard) => return guard,
    };
    let goal = user.goal_or_default();

    let featured = data.workouts().await.map(|workouts| {
        featured_workouts(&workouts, FEATURED_PREVIEW)
            .into_iter()
            .cloned()
            .collect()
    });
    let recommended = data.supplements().await.map(|supplements| {
        recommended_supplements(
            &supplements,
            SupplementTarget::from(goal),
            FEATURED_PREVIEW,
        )
        .into_iter()
        .map(SupplementCard::from)
        .collect()
    });
    let latest_progress = data.progress().await.map(|mut entries| {
        newest_first(&mut entries);
        entries.into_iter().next()
    });
    let streaks = data.streaks().await.map(|streaks| {
        streaks
            .into_iter()
            .map(|streak| StreakBadge {
                tier: streak.tier(),
                streak,
            })
            .collect()
    });
    let challenges = data.challenges().await.map(|challenges| {
        challenges
            .into_iter()
            .map(|challenge| ChallengeCard {
                percent: challenge.completion_percent(),
                complete: challenge.is_complete(),
                challenge,
            })
            .collect()
    });

    Guarded::Ready(Dashboard {
        bmi: user.bmi(),
        user,
        goal,
        featured: PanelState::from_result(featured),
        recommended: PanelState::from_result(recommended),
        latest_progress: PanelState::from_result(latest_progress),
        streaks: PanelState::from_result(streaks),
        challenges: PanelState::from_result(challenges),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;
    use crate::navigation::Navigator;
    use crate::storage::ClientStorage;
    use gym_sharks_core::models::UserPreferences;

    fn user(goal: Option<FitnessGoal>) -> User {
        User {
            id: "u1".to_owned(),
            name: "Sam".to_owned(),
            email: "sam@example.com".to_owned(),
            age: None,
            gender: None,
            height: Some(180.0),
            weight: Some(81.0),
            goal,
            activity_level: None,
            preferences: UserPreferences::default(),
            created_at: None,
            updated_at: None,
        }
    }

    fn store_with(user: Option<User>) -> SessionStore {
        let store = SessionStore::new(ClientStorage::in_memory(), Navigator::at("/dashboard"));
        store.set_user(user);
        store.set_loading(false);
        store
    }

    #[tokio::test]
    async fn test_anonymous_visitor_is_redirected() {
        let data = MockData::embedded().unwrap();
        let store = store_with(None);
        let page = load(&store, &data).await;
        assert_eq!(page, Guarded::RedirectToLogin);
        assert_eq!(store.navigator().current_path(), "/auth/login");
    }

    #[tokio::test]
    async fn test_waits_for_bootstrap() {
        let data = MockData::embedded().unwrap();
        let store = SessionStore::new(ClientStorage::in_memory(), Navigator::at("/dashboard"));
        assert_eq!(load(&store, &data).await, Guarded::Loading);
        assert_eq!(store.navigator().current_path(), "/dashboard");
    }

    #[tokio::test]
    async fn test_dashboard_for_muscle_gain() {
        let data = MockData::embedded().unwrap();
        let store = store_with(Some(user(Some(FitnessGoal::MuscleGain))));
        let Guarded::Ready(dashboard) = load(&store, &data).await else {
            unreachable!("user is logged in");
        };
        assert_eq!(dashboard.featured.ready().map(Vec::len), Some(3));
        let recommended = dashboard.recommended.ready().unwrap();
        assert_eq!(recommended.len(), 3);
        assert_eq!(recommended[0].name, "Whey Protein Isolate");
        assert_eq!(dashboard.bmi.map(f64::round), Some(25.0));

        let streaks = dashboard.streaks.ready().unwrap();
        assert_eq!(streaks[0].tier, StreakTier::Medium);
        assert_eq!(streaks[2].tier, StreakTier::Low);
        let challenges = dashboard.challenges.ready().unwrap();
        assert_eq!(challenges[0].percent, 66);
        assert!(dashboard.latest_progress.ready().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_default_goal_is_maintenance() {
        let data = MockData::embedded().unwrap();
        let store = store_with(Some(user(None)));
        let Guarded::Ready(dashboard) = load(&store, &data).await else {
            unreachable!("user is logged in");
        };
        assert_eq!(dashboard.goal, FitnessGoal::Maintenance);
        assert!(dashboard.recommended.ready().unwrap().is_empty());
    }
}
