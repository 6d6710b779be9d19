// ABOUTME: Backend API client that attaches the bearer token and classifies failures
// ABOUTME: Routes 401 responses to an UnauthorizedHandler and logs rate limits and server errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use crate::http_client::shared_client;
use crate::retry::{with_retry, RetryPolicy};
use async_trait::async_trait;
use gym_sharks_core::errors::{ApiError, ApiResult};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Source of the bearer token attached to every request
pub trait TokenSource: Send + Sync {
    /// Current token, if the user holds one
    fn bearer_token(&self) -> Option<String>;
}

/// Receives every 401 answered by the backend
#[async_trait]
pub trait UnauthorizedHandler: Send + Sync {
    /// Called once per unauthorized response, before the error is returned
    async fn on_unauthorized(&self, endpoint: &str);
}

/// Retry budgets for reads and writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicies {
    /// Applied to [`ApiClient::query`]
    pub query: RetryPolicy,
    /// Applied to [`ApiClient::mutate`]
    pub mutation: RetryPolicy,
}

impl Default for RetryPolicies {
    fn default() -> Self {
        Self {
            query: RetryPolicy::query(),
            mutation: RetryPolicy::mutation(),
        }
    }
}

/// Error body the backend sends with non-success statuses
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message.or(parsed.error))
        .filter(|message| !message.trim().is_empty())
}

/// HTTP client for the fitness backend
///
/// Cheap to clone: the underlying connection pool and the interceptors are
/// shared.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    tokens: Option<Arc<dyn TokenSource>>,
    unauthorized: Option<Arc<dyn UnauthorizedHandler>>,
    policies: RetryPolicies,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token_source", &self.tokens.is_some())
            .field("has_unauthorized_handler", &self.unauthorized.is_some())
            .field("policies", &self.policies)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client for `base_url` using the shared connection pool
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: shared_client().clone(),
            base_url,
            tokens: None,
            unauthorized: None,
            policies: RetryPolicies::default(),
        }
    }

    /// Use a dedicated reqwest client instead of the shared one
    #[must_use]
    pub fn with_http_client(mut self, http: Client) -> Self {
        self.http = http;
        self
    }

    /// Attach a bearer token source
    #[must_use]
    pub fn with_token_source(mut self, tokens: Arc<dyn TokenSource>) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Attach a handler for unauthorized responses
    #[must_use]
    pub fn with_unauthorized_handler(mut self, handler: Arc<dyn UnauthorizedHandler>) -> Self {
        self.unauthorized = Some(handler);
        self
    }

    /// Override the retry budgets
    #[must_use]
    pub const fn with_retry_policies(mut self, policies: RetryPolicies) -> Self {
        self.policies = policies;
        self
    }

    /// Base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retry budgets in effect
    #[must_use]
    pub const fn policies(&self) -> RetryPolicies {
        self.policies
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Single GET attempt
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] classifying the transport, status, or decode failure
    pub async fn get_once<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        let request = self.http.get(self.url(path)).query(params);
        self.execute(request, path).await
    }

    /// GET with the query retry budget
    ///
    /// # Errors
    ///
    /// Returns the last [`ApiError`] once retries are exhausted or the
    /// failure is not retryable
    pub async fn query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> ApiResult<T> {
        with_retry(self.policies.query, path, || self.get_once(path, params)).await
    }

    /// Single request with an optional JSON body
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] classifying the transport, status, or decode failure
    pub async fn send_once<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request, path).await
    }

    /// Request with the mutation retry budget
    ///
    /// # Errors
    ///
    /// Returns the last [`ApiError`] once retries are exhausted or the
    /// failure is not retryable
    pub async fn mutate<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        with_retry(self.policies.mutation, path, || {
            self.send_once(method.clone(), path, body)
        })
        .await
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        endpoint: &str,
    ) -> ApiResult<T> {
        let request = match self.tokens.as_ref().and_then(|tokens| tokens.bearer_token()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request
            .send()
            .await
            .map_err(|error| ApiError::from_transport(endpoint, &error))?;
        let status = response.status();
        debug!(endpoint, status = status.as_u16(), "backend response");

        if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .map_err(|error| ApiError::from_transport(endpoint, &error))?;
            return serde_json::from_slice(&bytes).map_err(|error| ApiError::Decode {
                endpoint: endpoint.to_owned(),
                reason: error.to_string(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        Err(self.classify_failure(status, endpoint, &body).await)
    }

    async fn classify_failure(&self, status: StatusCode, endpoint: &str, body: &str) -> ApiError {
        let message = error_message(body);
        match status {
            StatusCode::UNAUTHORIZED => {
                warn!(endpoint, "unauthorized response from backend");
                if let Some(handler) = &self.unauthorized {
                    handler.on_unauthorized(endpoint).await;
                }
                ApiError::Unauthorized {
                    endpoint: endpoint.to_owned(),
                    message,
                }
            }
            StatusCode::TOO_MANY_REQUESTS => {
                warn!(endpoint, "backend rate limit exceeded");
                ApiError::RateLimited {
                    endpoint: endpoint.to_owned(),
                }
            }
            status if status.is_server_error() => {
                error!(endpoint, status = status.as_u16(), "backend server error");
                ApiError::Server {
                    status: status.as_u16(),
                    endpoint: endpoint.to_owned(),
                }
            }
            status => ApiError::Rejected {
                status: status.as_u16(),
                endpoint: endpoint.to_owned(),
                message,
            },
        }
    }
}
