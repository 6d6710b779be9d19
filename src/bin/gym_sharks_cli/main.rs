// ABOUTME: Gym Sharks CLI - terminal front end over the client library
// ABOUTME: Logs in, browses the catalog, shows the dashboard, and asks the AI coach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks
//!
//! Usage:
//! ```bash
//! # Log in; the token and user are kept in the data directory
//! gym-sharks login --email sam@example.com --password secret
//!
//! # Browse workouts matching a term
//! gym-sharks workouts --search builder --difficulty Intermediate
//!
//! # Dashboard for the logged-in user
//! gym-sharks dashboard
//!
//! # General tips from the AI coach, against the live backend
//! gym-sharks --live coach general
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gym_sharks::config::ClientConfig;
use gym_sharks::context::ClientContext;
use gym_sharks::logging::LoggingConfig;
use gym_sharks::navigation::Navigator;
use gym_sharks::storage::ClientStorage;
use gym_sharks_core::constants::service_names::GYM_SHARKS_CLI;
use gym_sharks_core::models::{
    ActivityLevel, FitnessGoal, Gender, ProfileUpdate, SupplementCategory, SupplementTarget,
    WorkoutCategory, WorkoutDifficulty,
};
use gym_sharks_core::search::{SupplementFilter, WorkoutFilter};
use helpers::display::ConsoleNotifier;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "gym-sharks",
    about = "Gym Sharks fitness client",
    long_about = "Browse workouts, supplements and diet plans, track progress, and manage your Gym Sharks session from the terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Backend base URL override
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding the cookie jar and local storage
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Read the catalog from the backend instead of the embedded mock data
    #[arg(long, global = true)]
    live: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Log in and keep the session
    Login {
        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,
    },

    /// Create an account and keep the session
    Register {
        /// Display name
        #[arg(long)]
        name: String,

        /// Account email
        #[arg(long)]
        email: String,

        /// Account password
        #[arg(long)]
        password: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// male, female or other
        #[arg(long)]
        gender: Gender,

        /// Height in centimetres
        #[arg(long)]
        height: f64,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// "weight loss", "muscle gain" or maintenance
        #[arg(long)]
        goal: FitnessGoal,

        /// sedentary, light, moderate, active or "very active"
        #[arg(long)]
        activity_level: ActivityLevel,
    },

    /// Forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Update profile fields of the logged-in user
    Profile {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New age
        #[arg(long)]
        age: Option<u32>,

        /// New height in centimetres
        #[arg(long)]
        height: Option<f64>,

        /// New weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// New goal
        #[arg(long)]
        goal: Option<FitnessGoal>,

        /// New activity level
        #[arg(long)]
        activity_level: Option<ActivityLevel>,
    },

    /// List workouts, optionally filtered
    Workouts {
        /// Text to look for in title or description
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Exact category, e.g. HIIT
        #[arg(long)]
        category: Option<WorkoutCategory>,

        /// Beginner, Intermediate or Advanced
        #[arg(long)]
        difficulty: Option<WorkoutDifficulty>,

        /// Longest acceptable duration in minutes
        #[arg(long)]
        max_duration: Option<u32>,
    },

    /// Show one workout with its exercises
    Workout {
        /// Workout id
        id: String,
    },

    /// List supplements, optionally filtered
    Supplements {
        /// Text to look for in name or description
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Exact category, e.g. Protein
        #[arg(long)]
        category: Option<SupplementCategory>,

        /// Goal the supplement is recommended for
        #[arg(long)]
        goal: Option<String>,
    },

    /// Show one supplement
    Supplement {
        /// Supplement id
        id: String,
    },

    /// Diet plans grouped by goal
    Diets {
        /// Only plans for this goal
        #[arg(long)]
        goal: Option<FitnessGoal>,
    },

    /// Dashboard of the logged-in user
    Dashboard,

    /// Progress entries of the logged-in user
    Progress,

    /// Ask the AI coach
    Coach {
        #[command(subcommand)]
        action: CoachCommand,
    },

    /// Backend status
    Health,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum CoachCommand {
    /// Workout tips for a goal and experience level
    Workout {
        /// Goal in your own words
        #[arg(long)]
        goal: String,

        /// beginner, intermediate or advanced
        #[arg(long)]
        experience: String,

        /// Available equipment, repeatable
        #[arg(long)]
        equipment: Vec<String>,
    },

    /// Nutrition advice for a profile
    Nutrition {
        /// Goal in your own words
        #[arg(long)]
        goal: String,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender
        #[arg(long)]
        gender: String,

        /// Activity level
        #[arg(long)]
        activity_level: String,

        /// Dietary restriction, repeatable
        #[arg(long)]
        restriction: Vec<String>,
    },

    /// General tips
    General,
}

fn parse_target(goal: Option<&str>) -> Result<Option<SupplementTarget>> {
    goal.map(|goal| {
        serde_json::from_value(Value::String(goal.to_lowercase()))
            .with_context(|| format!("unknown supplement goal: {goal}"))
    })
    .transpose()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env().with_service_name(GYM_SHARKS_CLI);
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging.init().context("failed to initialize logging")?;

    let mut config = ClientConfig::from_env().context("invalid client configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_base_url = api_url.trim_end_matches('/').to_owned();
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if cli.live {
        config.use_mock_data = false;
    }

    let storage = ClientStorage::open(&config.data_dir)
        .with_context(|| format!("cannot open data directory {}", config.data_dir.display()))?;
    let context = ClientContext::new(
        config,
        storage,
        Navigator::default(),
        Arc::new(ConsoleNotifier),
    )?;
    context.bootstrap().await;

    dispatch(&context, cli.command).await
}

#[allow(clippy::too_many_lines)]
async fn dispatch(context: &ClientContext, command: Command) -> Result<()> {
    match command {
        Command::Login { email, password } => commands::auth::login(context, email, password).await?,
        Command::Register {
            name,
            email,
            password,
            age,
            gender,
            height,
            weight,
            goal,
            activity_level,
        } => {
            let fields = commands::auth::Registration {
                name,
                email,
                password,
                age,
                gender,
                height,
                weight,
                goal,
                activity_level,
            };
            commands::auth::register(context, fields).await?;
        }
        Command::Logout => commands::auth::logout(context),
        Command::Whoami => commands::auth::whoami(context),
        Command::Profile {
            name,
            age,
            height,
            weight,
            goal,
            activity_level,
        } => {
            let update = ProfileUpdate {
                name,
                age,
                height,
                weight,
                goal,
                activity_level,
                ..ProfileUpdate::default()
            };
            commands::auth::update_profile(context, &update).await?;
        }
        Command::Workouts {
            search,
            category,
            difficulty,
            max_duration,
        } => {
            let filter = WorkoutFilter {
                query: search,
                category,
                difficulty,
                max_duration,
            };
            commands::catalog::workouts(context, &filter).await;
        }
        Command::Workout { id } => commands::catalog::workout(context, &id).await,
        Command::Supplements {
            search,
            category,
            goal,
        } => {
            let filter = SupplementFilter {
                query: search,
                category,
                recommended_for: parse_target(goal.as_deref())?,
            };
            commands::catalog::supplements(context, &filter).await;
        }
        Command::Supplement { id } => commands::catalog::supplement(context, &id).await,
        Command::Diets { goal } => commands::catalog::diets(context, goal).await,
        Command::Dashboard => commands::account::dashboard(context).await,
        Command::Progress => commands::account::progress(context).await,
        Command::Coach { action } => {
            let request = match action {
                CoachCommand::Workout {
                    goal,
                    experience,
                    equipment,
                } => commands::coach::Question::Workout {
                    goal,
                    experience,
                    equipment,
                },
                CoachCommand::Nutrition {
                    goal,
                    age,
                    gender,
                    activity_level,
                    restriction,
                } => commands::coach::Question::Nutrition {
                    goal,
                    age,
                    gender,
                    activity_level,
                    restrictions: restriction,
                },
                CoachCommand::General => commands::coach::Question::General,
            };
            commands::coach::ask(context, request).await?;
        }
        Command::Health => commands::catalog::health(context).await,
    }

    Ok(())
}
