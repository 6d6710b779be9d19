// ABOUTME: Re-exports command modules for the gym-sharks CLI
// ABOUTME: Provides access to session, catalog, account, and coach commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

pub mod account;
pub mod auth;
pub mod catalog;
pub mod coach;
