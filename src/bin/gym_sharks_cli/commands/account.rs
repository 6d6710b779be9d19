// ABOUTME: Account commands for the gym-sharks CLI
// ABOUTME: Shows the dashboard and progress entries of the logged-in user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use gym_sharks::context::ClientContext;
use gym_sharks::pages::progress::ProgressPage;
use gym_sharks::pages::{self, Guarded};

use crate::helpers::display::{display_dashboard, display_panel, display_progress};

fn guard_message<T>(guard: &Guarded<T>) {
    match guard {
        Guarded::Loading => println!("Session is still loading."),
        Guarded::RedirectToLogin => {
            println!("Not logged in. Use `gym-sharks login` first.");
        }
        Guarded::Ready(_) => {}
    }
}

/// Dashboard of the logged-in user
pub async fn dashboard(context: &ClientContext) {
    match pages::dashboard::load(context.store(), context.data()).await {
        Guarded::Ready(page) => display_dashboard(&page),
        guard => guard_message(&guard),
    }
}

/// Progress entries of the logged-in user, newest first
pub async fn progress(context: &ClientContext) {
    match ProgressPage::load(context.store(), context.data()).await {
        Guarded::Ready(page) => display_panel(page.state(), |entries| {
            display_progress(entries, &page.summary());
        }),
        guard => guard_message(&guard),
    }
}
