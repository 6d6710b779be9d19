// ABOUTME: Session commands for the gym-sharks CLI
// ABOUTME: Handles login, register, logout, whoami, and profile updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use anyhow::Result;
use gym_sharks::context::ClientContext;
use gym_sharks_core::models::{
    ActivityLevel, FitnessGoal, Gender, LoginRequest, ProfileUpdate, RegisterRequest,
};
use tracing::info;

use crate::helpers::display::display_user;

/// Fields collected by `gym-sharks register`
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub goal: FitnessGoal,
    pub activity_level: ActivityLevel,
}

impl From<Registration> for RegisterRequest {
    fn from(fields: Registration) -> Self {
        Self {
            name: fields.name,
            email: fields.email,
            password: fields.password,
            age: fields.age,
            gender: fields.gender,
            height: fields.height,
            weight: fields.weight,
            goal: fields.goal,
            activity_level: fields.activity_level,
        }
    }
}

/// Log in and keep the token and user in the data directory
pub async fn login(context: &ClientContext, email: String, password: String) -> Result<()> {
    info!(email = %email, "logging in");
    let user = context
        .session()
        .login(&LoginRequest { email, password })
        .await?;
    display_user(&user);
    Ok(())
}

/// Create an account; the new session is kept like a login
pub async fn register(context: &ClientContext, fields: Registration) -> Result<()> {
    let request = RegisterRequest::from(fields);
    let user = context.session().register(&request).await?;
    display_user(&user);
    Ok(())
}

/// Forget the stored session
pub fn logout(context: &ClientContext) {
    context.session().logout();
}

/// Show the cached user
pub fn whoami(context: &ClientContext) {
    match context.session().current_user() {
        Some(user) => display_user(&user),
        None => println!("Not logged in. Use `gym-sharks login` first."),
    }
}

/// Send changed profile fields and show the updated user
pub async fn update_profile(context: &ClientContext, update: &ProfileUpdate) -> Result<()> {
    let user = context.session().update_profile(update).await?;
    display_user(&user);
    Ok(())
}
