// ABOUTME: Re-exports helper modules for the gym-sharks CLI
// ABOUTME: Provides access to terminal display formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

pub mod display;
