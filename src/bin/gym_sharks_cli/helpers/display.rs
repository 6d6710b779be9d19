// ABOUTME: Output formatting helpers for the gym-sharks CLI
// ABOUTME: Prints notices, catalog listings, the dashboard, progress, and coach answers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use gym_sharks::pages::dashboard::Dashboard;
use gym_sharks::pages::diets::DietsPage;
use gym_sharks::pages::progress::ProgressSummary;
use gym_sharks::pages::supplements::SupplementCard;
use gym_sharks::pages::workout_detail::WorkoutDetailPage;
use gym_sharks::pages::workouts::WorkoutList;
use gym_sharks::pages::PanelState;
use gym_sharks::session::{Notice, NoticeLevel, Notifier};
use gym_sharks_core::models::{AiAdvice, HealthStatus, Progress, Supplement, User};

/// Prints notices to the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => println!("Success {}", notice.message),
            NoticeLevel::Error => eprintln!("Error {}", notice.message),
        }
    }
}

fn heading(title: &str, width: usize) {
    println!("\n{title}");
    println!("{}", "=".repeat(width));
}

/// Print a panel, or why it has nothing to show
pub fn display_panel<T>(state: &PanelState<T>, show: impl FnOnce(&T)) {
    match state {
        PanelState::Loading => println!("Loading..."),
        PanelState::Ready(value) => show(value),
        PanelState::Failed { message, retryable } => {
            eprintln!("Error {message}");
            if *retryable {
                eprintln!("   Run the command again to retry");
            }
        }
    }
}

/// Display the logged-in user
pub fn display_user(user: &User) {
    heading(&format!("User {}", user.name), 50);
    println!("   Email: {}", user.email);
    if let Some(age) = user.age {
        println!("   Age: {age}");
    }
    if let Some(goal) = user.goal {
        println!("   Goal: {goal}");
    }
    if let Some(level) = user.activity_level {
        println!("   Activity: {}", level.as_str());
    }
    if let Some(bmi) = user.bmi() {
        println!("   BMI: {bmi:.1}");
    }
}

/// Display a filtered workout listing
pub fn display_workouts(list: &WorkoutList) {
    heading(
        &format!("Workouts ({} of {})", list.len(), list.total),
        60,
    );
    if list.is_empty() {
        println!("No workouts match these filters.");
        return;
    }
    for workout in &list.items {
        println!(
            "[{}] {} - {} • {} • {} min • {} kcal",
            workout.id,
            workout.title,
            workout.category,
            workout.difficulty,
            workout.duration_minutes,
            workout.calories
        );
    }
}

/// Display one workout with its exercise cards
pub fn display_workout(page: &WorkoutDetailPage) {
    let workout = page.workout();
    heading(&workout.title, 60);
    println!("{}", workout.description);
    println!(
        "   {} • {} • {} min • {} kcal",
        workout.category, workout.difficulty, workout.duration_minutes, workout.calories
    );
    if !workout.equipment.is_empty() {
        println!("   Equipment: {}", workout.equipment.join(", "));
    }

    println!("\nExercises:");
    for (number, card) in page.exercises().iter().enumerate() {
        println!("{}. {} ({})", number + 1, card.name, card.prescription);
        println!("   {}", card.instructions);
        for tip in &card.tips {
            println!("   • {tip}");
        }
    }
}

/// Display supplement cards
pub fn display_supplements(cards: &[SupplementCard]) {
    heading(&format!("Supplements ({})", cards.len()), 60);
    if cards.is_empty() {
        println!("No supplements match these filters.");
        return;
    }
    for card in cards {
        let popular = if card.is_popular { " (popular)" } else { "" };
        println!("[{}] {} - {}{popular}", card.id, card.name, card.category);
        for benefit in &card.benefits {
            println!("   • {benefit}");
        }
    }
}

/// Display one supplement in full
pub fn display_supplement(supplement: &Supplement) {
    heading(&supplement.name, 60);
    println!("{}", supplement.description);
    println!("   Category: {}", supplement.category);
    println!(
        "   Dosage: {} {} ({})",
        supplement.dosage.amount, supplement.dosage.frequency, supplement.dosage.timing
    );
    if let Some(price) = &supplement.price {
        println!("   Price: {} {}", price.range, price.currency);
    }
    println!("\nBenefits:");
    for benefit in &supplement.benefits {
        println!("   • {benefit}");
    }
    if !supplement.side_effects.is_empty() {
        println!("\nSide effects:");
        for effect in &supplement.side_effects {
            println!("   • {effect}");
        }
    }
}

/// Display diet plans grouped by goal
pub fn display_diets(page: &DietsPage) {
    heading("Diet plans", 60);
    if page.groups.is_empty() {
        println!("No diet plans for this goal.");
        return;
    }
    for group in &page.groups {
        println!("\n{}", group.goal);
        println!("{}", "-".repeat(40));
        for plan in &group.plans {
            println!(
                "[{}] {} - {} kcal/day, {}",
                plan.id, plan.name, plan.target_calories, plan.duration
            );
            println!("   {}", plan.description);
        }
    }
}

/// Display the dashboard panels
pub fn display_dashboard(dashboard: &Dashboard) {
    heading(&format!("Welcome back, {}", dashboard.user.name), 60);
    println!("   Goal: {}", dashboard.goal);
    if let Some(bmi) = dashboard.bmi {
        println!("   BMI: {bmi:.1}");
    }

    println!("\nFeatured workouts:");
    display_panel(&dashboard.featured, |workouts| {
        for workout in workouts {
            println!("   [{}] {}", workout.id, workout.title);
        }
    });

    println!("\nRecommended supplements:");
    display_panel(&dashboard.recommended, |cards| {
        if cards.is_empty() {
            println!("   None for this goal");
        }
        for card in cards {
            println!("   [{}] {}", card.id, card.name);
        }
    });

    println!("\nLatest progress:");
    display_panel(&dashboard.latest_progress, |entry| match entry {
        Some(entry) => display_progress_entry(entry),
        None => println!("   No entries yet"),
    });

    println!("\nStreaks:");
    display_panel(&dashboard.streaks, |badges| {
        for badge in badges {
            println!(
                "   {:?}: {} days (best {}) [{:?}]",
                badge.streak.kind, badge.streak.current_streak, badge.streak.longest_streak, badge.tier
            );
        }
    });

    println!("\nChallenges:");
    display_panel(&dashboard.challenges, |cards| {
        for card in cards {
            let done = if card.complete { " done" } else { "" };
            println!(
                "   {} {}/{} ({}%){done}",
                card.challenge.title, card.challenge.progress, card.challenge.target, card.percent
            );
        }
    });
}

fn display_progress_entry(entry: &Progress) {
    let mut parts = vec![entry.date.clone()];
    if let Some(weight) = entry.weight {
        parts.push(format!("{weight} kg"));
    }
    if let Some(body_fat) = entry.body_fat {
        parts.push(format!("{body_fat}% fat"));
    }
    if let Some(muscle) = entry.muscle_mass {
        parts.push(format!("{muscle} kg muscle"));
    }
    println!("   {}", parts.join(" • "));
    if let Some(notes) = &entry.notes {
        println!("     {notes}");
    }
}

/// Display progress entries and their trend
pub fn display_progress(entries: &[Progress], summary: &ProgressSummary) {
    heading(&format!("Progress ({} entries)", summary.entries), 60);
    for entry in entries {
        display_progress_entry(entry);
    }
    if let Some(change) = summary.weight_change {
        println!("\nWeight change: {change:+.1} kg");
    }
    if let Some(change) = summary.body_fat_change {
        println!("Body fat change: {change:+.1} pts");
    }
    if let Some(change) = summary.muscle_mass_change {
        println!("Muscle mass change: {change:+.1} kg");
    }
}

/// Display an answer from the AI coach
pub fn display_advice(advice: &AiAdvice) {
    heading("AI coach", 60);
    println!("{}", advice.personalized_advice);
    println!("\nRecommendations:");
    for item in &advice.recommendations {
        println!("   • {item}");
    }
    println!("\nTips:");
    for tip in &advice.tips {
        println!("   • {tip}");
    }
}

/// Display backend health
pub fn display_health(status: &HealthStatus) {
    let verdict = if status.success { "Success" } else { "Error" };
    println!("{verdict} {}", status.message);
    if let Some(timestamp) = &status.timestamp {
        println!("   Server time: {timestamp}");
    }
}
