// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging, fixtures, a scripted auth API, and an axum mock backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks
#![allow(
    dead_code,
    missing_docs,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unused_async,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `gym_sharks`
//!
//! This module provides common test setup functions to reduce duplication
//! across integration tests.

use async_trait::async_trait;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use gym_sharks::config::ClientConfig;
use gym_sharks::context::ClientContext;
use gym_sharks::navigation::Navigator;
use gym_sharks::session::{RecordingNotifier, SessionManager, SessionStore};
use gym_sharks::storage::{ClientStorage, KeyValueStore, MemoryStore};
use gym_sharks_api::{AuthApi, RetryPolicies, RetryPolicy};
use gym_sharks_core::errors::{ApiError, ApiResult, AppError, AppResult};
use gym_sharks_core::models::{
    AuthPayload, HomeWorkout, LoginRequest, ProfileUpdate, RegisterRequest, User,
};
use http::{HeaderMap, StatusCode};
use serde_json::{json, Value};
use std::env;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use tokio::net::TcpListener;
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Token the mock backend accepts
pub const GOOD_TOKEN: &str = "good-token";
/// Password the mock backend accepts
pub const GOOD_PASSWORD: &str = "secret";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// User as the backend returns it
pub fn sample_user(id: &str) -> User {
    serde_json::from_value(json!({
        "_id": id,
        "name": "Sam Shark",
        "email": "sam@example.com",
        "age": 30,
        "gender": "male",
        "height": 180,
        "weight": 81,
        "goal": "muscle gain",
        "activityLevel": "moderate"
    }))
    .unwrap()
}

/// Fresh in-memory store with the navigator at `path`
pub fn store_at(path: &str) -> SessionStore {
    SessionStore::new(ClientStorage::in_memory(), Navigator::at(path))
}

/// Store whose storage already holds a token and, optionally, a cached user
pub fn store_with_session(path: &str, cached: Option<&User>) -> SessionStore {
    let store = store_at(path);
    store.storage().set_token(GOOD_TOKEN, false).unwrap();
    if let Some(user) = cached {
        store.storage().cache_user(user).unwrap();
    }
    store
}

/// In-memory store whose writes can be switched to fail
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    pub fail_writes: AtomicBool,
}

impl FlakyStore {
    fn check_writable(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(AppError::storage("disk full"))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.check_writable()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.check_writable()?;
        self.inner.remove(key)
    }
}

/// Token held by [`flaky_store_with_session`] before any login
pub const PRIOR_TOKEN: &str = "prior-token";

/// Store with a token and cached user whose cookie and local stores can fail
pub fn flaky_store_with_session(
    path: &str,
    cached: &User,
) -> (SessionStore, Arc<FlakyStore>, Arc<FlakyStore>) {
    let cookies = Arc::new(FlakyStore::default());
    let local = Arc::new(FlakyStore::default());
    let storage = ClientStorage::new(cookies.clone(), local.clone());
    storage.set_token(PRIOR_TOKEN, false).unwrap();
    storage.cache_user(cached).unwrap();
    (
        SessionStore::new(storage, Navigator::at(path)),
        cookies,
        local,
    )
}

/// How [`ScriptedAuth`] answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScript {
    /// Every call succeeds
    Accept,
    /// Every call fails with 401
    Reject,
    /// Every call fails with a server error
    Down,
}

/// In-process [`AuthApi`] that counts its calls
#[derive(Debug)]
pub struct ScriptedAuth {
    script: AuthScript,
    pub login_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
}

impl ScriptedAuth {
    pub fn new(script: AuthScript) -> Arc<Self> {
        Arc::new(Self {
            script,
            login_calls: AtomicUsize::new(0),
            profile_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
        })
    }

    fn answer<T>(&self, endpoint: &str, value: T) -> ApiResult<T> {
        match self.script {
            AuthScript::Accept => Ok(value),
            AuthScript::Reject => Err(ApiError::Unauthorized {
                endpoint: endpoint.to_owned(),
                message: Some("Invalid credentials".to_owned()),
            }),
            AuthScript::Down => Err(ApiError::Server {
                endpoint: endpoint.to_owned(),
                status: 503,
            }),
        }
    }
}

#[async_trait]
impl AuthApi for ScriptedAuth {
    async fn login(&self, credentials: &LoginRequest) -> ApiResult<AuthPayload> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        let mut user = sample_user("u1");
        user.email.clone_from(&credentials.email);
        self.answer(
            "/auth/login",
            AuthPayload {
                user,
                token: GOOD_TOKEN.to_owned(),
            },
        )
    }

    async fn register(&self, fields: &RegisterRequest) -> ApiResult<AuthPayload> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        let mut user = sample_user("u2");
        user.name.clone_from(&fields.name);
        user.email.clone_from(&fields.email);
        self.answer(
            "/auth/register",
            AuthPayload {
                user,
                token: GOOD_TOKEN.to_owned(),
            },
        )
    }

    async fn profile(&self) -> ApiResult<User> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        self.answer("/auth/profile", sample_user("u1"))
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut user = sample_user("u1");
        if let Some(name) = &update.name {
            user.name.clone_from(name);
        }
        if let Some(weight) = update.weight {
            user.weight = Some(weight);
        }
        self.answer("/auth/profile", user)
    }
}

/// Session manager over `store` and `api`, with a recording notifier
pub fn manager(
    store: SessionStore,
    api: Arc<ScriptedAuth>,
) -> (SessionManager, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let manager = SessionManager::new(store, api).with_notifier(notifier.clone());
    (manager, notifier)
}

/// Counters and fixtures behind the mock backend
#[derive(Debug, Default)]
pub struct BackendState {
    pub health_calls: AtomicUsize,
    pub health_failures: AtomicUsize,
    pub workout_calls: AtomicUsize,
    pub profile_calls: AtomicUsize,
    pub authorization: Mutex<Vec<Option<String>>>,
    pub workouts: Vec<HomeWorkout>,
}

impl BackendState {
    pub fn calls(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    pub fn seen_authorization(&self) -> Vec<Option<String>> {
        self.authorization.lock().unwrap().clone()
    }

    fn record_authorization(&self, headers: &HeaderMap) -> Option<String> {
        let value = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        self.authorization.lock().unwrap().push(value.clone());
        value
    }
}

type Shared = Arc<BackendState>;

async fn health(State(state): State<Shared>) -> (StatusCode, Json<Value>) {
    state.health_calls.fetch_add(1, Ordering::SeqCst);
    let remaining = state.health_failures.load(Ordering::SeqCst);
    if remaining > 0 {
        state.health_failures.store(remaining - 1, Ordering::SeqCst);
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({"success": false, "message": "warming up"})),
        );
    }
    (
        StatusCode::OK,
        Json(json!({"success": true, "message": "Gym Sharks API is running"})),
    )
}

async fn workouts(State(state): State<Shared>, headers: HeaderMap) -> Json<Value> {
    state.workout_calls.fetch_add(1, Ordering::SeqCst);
    state.record_authorization(&headers);
    let total = state.workouts.len();
    Json(json!({
        "success": true,
        "count": total,
        "total": total,
        "page": 1,
        "pages": 1,
        "data": {"workouts": state.workouts}
    }))
}

async fn profile(State(state): State<Shared>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    state.profile_calls.fetch_add(1, Ordering::SeqCst);
    let authorization = state.record_authorization(&headers);
    let expected = format!("Bearer {GOOD_TOKEN}");
    if authorization.as_deref() == Some(expected.as_str()) {
        (
            StatusCode::OK,
            Json(json!({"success": true, "data": {"user": sample_user("u1")}})),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Token expired"})),
        )
    }
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == GOOD_PASSWORD {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {"user": sample_user("u1"), "token": GOOD_TOKEN}
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "Invalid credentials"})),
        )
    }
}

/// Backend running on an ephemeral local port
pub struct MockBackend {
    pub base_url: String,
    pub state: Shared,
}

impl MockBackend {
    /// Serve `state` under `/api` on 127.0.0.1
    pub async fn start(state: BackendState) -> Self {
        let state = Arc::new(state);
        let api = Router::new()
            .route("/health", get(health))
            .route("/home-workouts", get(workouts))
            .route("/auth/profile", get(profile))
            .route("/auth/login", post(login))
            .with_state(state.clone());
        let app = Router::new().nest("/api", api);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{address}/api"),
            state,
        }
    }
}

/// Fast retry budgets so failure tests do not wait on backoff
pub fn fast_retries() -> RetryPolicies {
    let quick = RetryPolicy {
        max_retries: 2,
        initial_backoff_ms: 1,
        max_backoff_ms: 5,
    };
    RetryPolicies {
        query: quick,
        mutation: quick.with_max_retries(1),
    }
}

/// Context talking to `backend` with in-memory storage
pub fn live_context(
    backend: &MockBackend,
    storage: ClientStorage,
    navigator: Navigator,
) -> (ClientContext, Arc<RecordingNotifier>) {
    init_test_logging();
    let config = ClientConfig {
        api_base_url: backend.base_url.clone(),
        use_mock_data: false,
        retry: fast_retries(),
        ..ClientConfig::default()
    };
    let notifier = Arc::new(RecordingNotifier::new());
    let context = ClientContext::new(config, storage, navigator, notifier.clone()).unwrap();
    (context, notifier)
}
