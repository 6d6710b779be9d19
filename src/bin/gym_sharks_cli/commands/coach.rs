// ABOUTME: AI coach command for the gym-sharks CLI
// ABOUTME: Fills the coach form from flags and prints the answer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use anyhow::Result;
use gym_sharks::context::ClientContext;
use gym_sharks::pages::ai_coach::AiCoachPage;

use crate::helpers::display::{display_advice, ConsoleNotifier};

/// What to ask the coach
pub enum Question {
    Workout {
        goal: String,
        experience: String,
        equipment: Vec<String>,
    },
    Nutrition {
        goal: String,
        age: u32,
        gender: String,
        activity_level: String,
        restrictions: Vec<String>,
    },
    General,
}

/// Ask the coach and print the advice
pub async fn ask(context: &ClientContext, question: Question) -> Result<()> {
    let mut page = AiCoachPage::default();
    let advice = match question {
        Question::Workout {
            goal,
            experience,
            equipment,
        } => {
            page.workout_form.fitness_goal = Some(goal);
            page.workout_form.experience = Some(experience);
            for item in &equipment {
                page.toggle_equipment(item);
            }
            page.submit_workout(context.data(), &ConsoleNotifier).await?
        }
        Question::Nutrition {
            goal,
            age,
            gender,
            activity_level,
            restrictions,
        } => {
            page.nutrition_form.goal = Some(goal);
            page.nutrition_form.age = Some(age);
            page.nutrition_form.gender = Some(gender);
            page.nutrition_form.activity_level = Some(activity_level);
            for restriction in &restrictions {
                page.toggle_restriction(restriction);
            }
            page.submit_nutrition(context.data(), &ConsoleNotifier).await?
        }
        Question::General => page.general_tips(context.data(), &ConsoleNotifier).await?,
    };
    display_advice(advice);
    Ok(())
}
