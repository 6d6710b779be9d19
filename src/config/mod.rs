// ABOUTME: Configuration management module for the fitness client
// ABOUTME: Environment-driven settings for backend URL, storage, timeouts, and caching
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

//! Configuration module
//!
//! All settings are read from environment variables once at startup. See
//! [`environment::ClientConfig::from_env`] for the variables and defaults.

/// Environment and client configuration
pub mod environment;

pub use environment::{ClientConfig, Environment, LogLevel, StaleTimes};
