// ABOUTME: Client context wiring configuration, storage, session, API client, and data source
// ABOUTME: One place builds the dependency graph so pages and the CLI receive ready parts
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Gym Sharks

//! Client context
//!
//! [`ClientContext`] owns one instance of every shared part:
//!
//! - `ClientStorage`: cookie jar and local store
//! - `Navigator`: current route, target of auth redirects
//! - `SessionManager`: auth state over a `SessionStore`
//! - `ApiClient`: bearer token and 401 handling wired to the session store
//! - `QueryCache` and the `FitnessData` source selected by configuration

use crate::cache::QueryCache;
use crate::catalog::Catalog;
use crate::config::ClientConfig;
use crate::data::{FitnessData, MockData, RemoteData};
use crate::navigation::Navigator;
use crate::session::{BootstrapOutcome, Notifier, SessionManager, SessionStore, TracingNotifier};
use crate::storage::ClientStorage;
use gym_sharks_api::{initialize_shared_client, shared_client, ApiClient, AuthService};
use gym_sharks_core::errors::AppResult;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Everything a page or command needs
#[derive(Clone)]
pub struct ClientContext {
    config: ClientConfig,
    navigator: Navigator,
    session: SessionManager,
    api: ApiClient,
    cache: QueryCache,
    data: Arc<dyn FitnessData>,
}

impl fmt::Debug for ClientContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientContext")
            .field("environment", &self.config.environment)
            .field("api_base_url", &self.api.base_url())
            .field("use_mock_data", &self.config.use_mock_data)
            .field("current_path", &self.navigator.current_path())
            .finish_non_exhaustive()
    }
}

impl ClientContext {
    /// Wire every part from `config`, persisting storage under its data directory
    ///
    /// # Errors
    ///
    /// Returns a storage error when the data directory cannot be opened, or an
    /// internal error when the embedded catalog is malformed
    pub fn from_config(config: ClientConfig) -> AppResult<Self> {
        let storage = ClientStorage::open(&config.data_dir)?;
        Self::new(
            config,
            storage,
            Navigator::default(),
            Arc::new(TracingNotifier),
        )
    }

    /// Wire every part around the given storage, navigator and notifier
    ///
    /// # Errors
    ///
    /// Returns an internal error when the embedded catalog is malformed
    pub fn new(
        config: ClientConfig,
        storage: ClientStorage,
        navigator: Navigator,
        notifier: Arc<dyn Notifier>,
    ) -> AppResult<Self> {
        initialize_shared_client(config.http_timeout_secs, config.http_connect_timeout_secs);

        let store = SessionStore::new(storage, navigator.clone());
        let store_handle = Arc::new(store.clone());
        let api = ApiClient::new(config.api_base_url.clone())
            .with_http_client(shared_client().clone())
            .with_token_source(store_handle.clone())
            .with_unauthorized_handler(store_handle)
            .with_retry_policies(config.retry);

        let session = SessionManager::new(store, Arc::new(AuthService::new(api.clone())))
            .with_notifier(notifier)
            .with_secure_cookies(config.secure_cookies());

        let cache = QueryCache::default();
        let catalog = Catalog::embedded()?;
        let data: Arc<dyn FitnessData> = if config.use_mock_data {
            Arc::new(MockData::new(catalog))
        } else {
            Arc::new(RemoteData::new(
                &api,
                cache.clone(),
                config.stale_times,
                catalog,
            ))
        };

        info!(
            environment = %config.environment,
            api_base_url = %config.api_base_url,
            mock_data = config.use_mock_data,
            "client context ready"
        );

        Ok(Self {
            config,
            navigator,
            session,
            api,
            cache,
            data,
        })
    }

    /// Restore the session from storage
    pub async fn bootstrap(&self) -> BootstrapOutcome {
        self.session.bootstrap().await
    }

    /// Loaded configuration
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Route tracker
    #[must_use]
    pub const fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Session lifecycle
    #[must_use]
    pub const fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Shared session state
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        self.session.store()
    }

    /// Backend client
    #[must_use]
    pub const fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Query cache
    #[must_use]
    pub const fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Data source for the pages
    #[must_use]
    pub fn data(&self) -> &dyn FitnessData {
        self.data.as_ref()
    }
}
