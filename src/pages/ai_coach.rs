// ABOUTME: AI coach page: workout, nutrition, and general advice tabs with their forms
// ABOUTME: Checkbox lists toggle; required fields are checked before asking the data source
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

use crate::data::{AdviceRequest, FitnessData};
use crate::session::{Notice, Notifier};
use gym_sharks_core::constants::messages;
use gym_sharks_core::errors::{AppError, AppResult, ErrorCode};
use gym_sharks_core::models::{AdviceKind, AiAdvice, NutritionAdviceRequest, WorkoutTipsRequest};
use serde::Serialize;
use tracing::warn;

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(position) = list.iter().position(|item| item == value) {
        list.remove(position);
    } else {
        list.push(value.to_owned());
    }
}

fn filled(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

/// State of the coach page
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiCoachPage {
    active_tab: Option<AdviceKind>,
    /// Workout tips form
    pub workout_form: WorkoutTipsRequest,
    /// Nutrition advice form
    pub nutrition_form: NutritionAdviceRequest,
    answer: Option<AiAdvice>,
}

impl AiCoachPage {
    /// Tab shown, workout tips until another is picked
    #[must_use]
    pub fn active_tab(&self) -> AdviceKind {
        self.active_tab.unwrap_or(AdviceKind::Workout)
    }

    /// Switch tabs; the last answer stays visible
    pub fn select_tab(&mut self, kind: AdviceKind) {
        self.active_tab = Some(kind);
    }

    /// Tick or untick a piece of equipment
    pub fn toggle_equipment(&mut self, equipment: &str) {
        toggle(&mut self.workout_form.equipment, equipment);
    }

    /// Tick or untick a dietary restriction
    pub fn toggle_restriction(&mut self, restriction: &str) {
        toggle(&mut self.nutrition_form.dietary_restrictions, restriction);
    }

    /// Last answer received
    #[must_use]
    pub const fn answer(&self) -> Option<&AiAdvice> {
        self.answer.as_ref()
    }

    /// Ask for workout tips; goal and experience are required
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank required field, or the data
    /// source's error
    pub async fn submit_workout(
        &mut self,
        data: &dyn FitnessData,
        notifier: &dyn Notifier,
    ) -> AppResult<&AiAdvice> {
        let form = &self.workout_form;
        if !(filled(form.fitness_goal.as_deref()) && filled(form.experience.as_deref())) {
            return Err(Self::missing_fields(notifier));
        }
        let request = AdviceRequest::Workout(form.clone());
        self.ask(data, notifier, &request, messages::WORKOUT_TIPS_READY)
            .await
    }

    /// Ask for nutrition advice; goal, age, gender and activity level are required
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank required field, or the data
    /// source's error
    pub async fn submit_nutrition(
        &mut self,
        data: &dyn FitnessData,
        notifier: &dyn Notifier,
    ) -> AppResult<&AiAdvice> {
        let form = &self.nutrition_form;
        let complete = filled(form.goal.as_deref())
            && form.age.is_some()
            && filled(form.gender.as_deref())
            && filled(form.activity_level.as_deref());
        if !complete {
            return Err(Self::missing_fields(notifier));
        }
        let request = AdviceRequest::Nutrition(form.clone());
        self.ask(data, notifier, &request, messages::NUTRITION_ADVICE_READY)
            .await
    }

    /// Ask for general tips
    ///
    /// # Errors
    ///
    /// Returns the data source's error
    pub async fn general_tips(
        &mut self,
        data: &dyn FitnessData,
        notifier: &dyn Notifier,
    ) -> AppResult<&AiAdvice> {
        self.ask(
            data,
            notifier,
            &AdviceRequest::General,
            messages::GENERAL_TIPS_READY,
        )
        .await
    }

    fn missing_fields(notifier: &dyn Notifier) -> AppError {
        notifier.notify(Notice::error(messages::REQUIRED_FIELDS));
        AppError::new(ErrorCode::MissingRequiredField, messages::REQUIRED_FIELDS)
    }

    async fn ask(
        &mut self,
        data: &dyn FitnessData,
        notifier: &dyn Notifier,
        request: &AdviceRequest,
        success: &str,
    ) -> AppResult<&AiAdvice> {
        self.active_tab = Some(request.kind());
        match data.advice(request).await {
            Ok(advice) => {
                notifier.notify(Notice::success(success));
                Ok(self.answer.insert(advice))
            }
            Err(error) => {
                warn!(kind = %request.kind(), error = %error, "advice request failed");
                notifier.notify(Notice::error(messages::ADVICE_FAILED));
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;
    use crate::session::{NoticeLevel, RecordingNotifier};

    #[test]
    fn test_checkbox_toggles() {
        let mut page = AiCoachPage::default();
        page.toggle_equipment("dumbbells");
        page.toggle_equipment("mat");
        page.toggle_equipment("dumbbells");
        assert_eq!(page.workout_form.equipment, ["mat"]);

        page.toggle_restriction("vegan");
        assert_eq!(page.nutrition_form.dietary_restrictions, ["vegan"]);
        assert_eq!(page.active_tab(), AdviceKind::Workout);
    }

    #[tokio::test]
    async fn test_workout_form_requires_goal_and_experience() {
        let data = MockData::embedded().unwrap();
        let notifier = RecordingNotifier::new();
        let mut page = AiCoachPage::default();
        page.workout_form.fitness_goal = Some("muscle gain".to_owned());

        let error = page.submit_workout(&data, &notifier).await.unwrap_err();
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(notifier.last().map(|n| n.level), Some(NoticeLevel::Error));
        assert!(page.answer().is_none());

        page.workout_form.experience = Some("beginner".to_owned());
        let advice = page.submit_workout(&data, &notifier).await.unwrap();
        assert!(!advice.recommendations.is_empty());
        assert_eq!(
            notifier.last().map(|n| n.message),
            Some("Workout tips generated!".to_owned())
        );
    }

    #[tokio::test]
    async fn test_general_tips_switch_tab() {
        let data = MockData::embedded().unwrap();
        let notifier = RecordingNotifier::new();
        let mut page = AiCoachPage::default();
        page.general_tips(&data, &notifier).await.unwrap();
        assert_eq!(page.active_tab(), AdviceKind::General);
        assert!(page.answer().is_some());
    }
}
