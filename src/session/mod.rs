// ABOUTME: Authentication session: shared state, lifecycle manager, and user notices
// ABOUTME: A stored token decides whether a session exists, the cached user avoids a refetch
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

//! Session handling
//!
//! [`SessionStore`] is handed to the API client twice, as its token source
//! and as its 401 handler, and to the [`SessionManager`] which drives
//! bootstrap, login, registration, logout and profile updates.

mod manager;
mod notifier;
mod store;

pub use manager::{BootstrapOutcome, SessionManager};
pub use notifier::{Notice, NoticeLevel, Notifier, RecordingNotifier, TracingNotifier};
pub use store::{SessionState, SessionStore};
