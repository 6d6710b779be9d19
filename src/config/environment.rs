// ABOUTME: Environment configuration for the fitness client
// ABOUTME: Deployment mode, backend URL, storage directory, timeouts, stale times and retry budgets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

//! Environment-based configuration

use gym_sharks_api::{RetryPolicies, RetryPolicy};
use gym_sharks_api::http_client::{DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS};
use gym_sharks_core::constants::{api, retries, stale_times};
use gym_sharks_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn, Level};
use url::Url;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> Level {
        match self {
            Self::Error => Level::ERROR,
            Self::Warn => Level::WARN,
            Self::Info => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development against `localhost`
    #[default]
    Development,
    /// Deployed build
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }

    /// Backend base URL used when no override is configured
    #[must_use]
    pub const fn default_api_url(self) -> &'static str {
        match self {
            Self::Production => api::PRODUCTION_BASE_URL,
            Self::Development | Self::Testing => api::DEVELOPMENT_BASE_URL,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// How long each kind of query stays fresh in the query cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleTimes {
    /// Fallback for queries without a specific entry
    pub default: Duration,
    /// Workout listings and details
    pub workouts: Duration,
    /// Featured workouts
    pub featured_workouts: Duration,
    /// Supplement listings and details
    pub supplements: Duration,
    /// Diet plans
    pub diets: Duration,
    /// Membership plans
    pub memberships: Duration,
    /// Backend health
    pub health: Duration,
}

impl Default for StaleTimes {
    fn default() -> Self {
        Self {
            default: Duration::from_secs(stale_times::DEFAULT_SECS),
            workouts: Duration::from_secs(stale_times::WORKOUTS_SECS),
            featured_workouts: Duration::from_secs(stale_times::FEATURED_WORKOUTS_SECS),
            supplements: Duration::from_secs(stale_times::SUPPLEMENTS_SECS),
            diets: Duration::from_secs(stale_times::DIETS_SECS),
            memberships: Duration::from_secs(stale_times::MEMBERSHIPS_SECS),
            health: Duration::from_secs(stale_times::HEALTH_SECS),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Backend base URL without trailing slash
    pub api_base_url: String,
    /// Directory holding the cookie jar and local storage files
    pub data_dir: PathBuf,
    /// Request timeout in seconds
    pub http_timeout_secs: u64,
    /// Connect timeout in seconds
    pub http_connect_timeout_secs: u64,
    /// Serve catalog pages from the embedded mock data
    pub use_mock_data: bool,
    /// Query cache stale times
    pub stale_times: StaleTimes,
    /// Retry budgets for queries and mutations
    pub retry: RetryPolicies,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let environment = Environment::default();
        Self {
            environment,
            log_level: LogLevel::default(),
            api_base_url: environment.default_api_url().to_owned(),
            data_dir: default_data_dir(),
            http_timeout_secs: DEFAULT_TIMEOUT_SECS,
            http_connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            use_mock_data: true,
            stale_times: StaleTimes::default(),
            retry: RetryPolicies::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a variable is set to a value that
    /// cannot be parsed, such as a malformed URL or a non-numeric timeout
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::from_str_or_default(
            &env::var("GYM_SHARKS_ENV")
                .or_else(|_| env::var("ENVIRONMENT"))
                .or_else(|_| env::var("NODE_ENV"))
                .unwrap_or_default(),
        );

        let api_base_url = validate_base_url(&env_var_or(
            "GYM_SHARKS_API_URL",
            environment.default_api_url(),
        ))?;

        let data_dir = env::var("GYM_SHARKS_DATA_DIR")
            .map_or_else(|_| default_data_dir(), PathBuf::from);

        let config = Self {
            environment,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            api_base_url,
            data_dir,
            http_timeout_secs: parse_env("GYM_SHARKS_HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            http_connect_timeout_secs: parse_env(
                "GYM_SHARKS_HTTP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )?,
            use_mock_data: parse_bool_env("GYM_SHARKS_USE_MOCK_DATA", true),
            stale_times: StaleTimes::default(),
            retry: RetryPolicies {
                query: RetryPolicy::query().with_max_retries(parse_env(
                    "GYM_SHARKS_QUERY_RETRIES",
                    retries::QUERY_MAX_RETRIES,
                )?),
                mutation: RetryPolicy::mutation().with_max_retries(parse_env(
                    "GYM_SHARKS_MUTATION_RETRIES",
                    retries::MUTATION_MAX_RETRIES,
                )?),
            },
        };

        info!(
            environment = %config.environment,
            api_base_url = %config.api_base_url,
            data_dir = %config.data_dir.display(),
            use_mock_data = config.use_mock_data,
            "client configuration loaded"
        );
        Ok(config)
    }

    /// Whether cookies are written with the `secure` flag
    #[must_use]
    pub const fn secure_cookies(&self) -> bool {
        self.environment.is_production()
    }
}

/// `<platform data dir>/gym-sharks`, or `./.gym-sharks` when none exists
fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from(".gym-sharks"), |dir| dir.join("gym-sharks"))
}

fn validate_base_url(raw: &str) -> AppResult<String> {
    let parsed = Url::parse(raw)
        .map_err(|error| AppError::config(format!("invalid GYM_SHARKS_API_URL '{raw}': {error}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::config(format!(
            "GYM_SHARKS_API_URL must use http or https, got '{}'",
            parsed.scheme()
        )));
    }
    Ok(raw.trim_end_matches('/').to_owned())
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|error| AppError::config(format!("invalid {key} '{raw}': {error}"))),
        Err(_) => Ok(default),
    }
}

fn parse_bool_env(key: &str, default: bool) -> bool {
    match env::var(key).map(|raw| raw.trim().to_lowercase()) {
        Ok(value) if matches!(value.as_str(), "1" | "true" | "yes" | "on") => true,
        Ok(value) if matches!(value.as_str(), "0" | "false" | "no" | "off") => false,
        Ok(value) => {
            warn!(key, value = %value, default, "unrecognized boolean, using default");
            default
        }
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 8] = [
        "GYM_SHARKS_ENV",
        "ENVIRONMENT",
        "NODE_ENV",
        "GYM_SHARKS_API_URL",
        "GYM_SHARKS_DATA_DIR",
        "GYM_SHARKS_HTTP_TIMEOUT_SECS",
        "GYM_SHARKS_USE_MOCK_DATA",
        "GYM_SHARKS_QUERY_RETRIES",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_environment_parsing_falls_back_to_development() {
        assert_eq!(Environment::from_str_or_default("PROD"), Environment::Production);
        assert_eq!(Environment::from_str_or_default("test"), Environment::Testing);
        assert_eq!(Environment::from_str_or_default("staging"), Environment::Development);
    }

    #[test]
    #[serial]
    fn test_defaults_follow_environment() {
        clear_env();
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base_url, api::DEVELOPMENT_BASE_URL);
        assert!(config.use_mock_data);
        assert!(!config.secure_cookies());

        env::set_var("NODE_ENV", "production");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base_url, api::PRODUCTION_BASE_URL);
        assert!(config.secure_cookies());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_overrides_are_applied() {
        clear_env();
        env::set_var("GYM_SHARKS_API_URL", "https://api.example.com/v1/");
        env::set_var("GYM_SHARKS_DATA_DIR", "/tmp/gym-sharks-test");
        env::set_var("GYM_SHARKS_USE_MOCK_DATA", "false");
        env::set_var("GYM_SHARKS_QUERY_RETRIES", "5");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(config.data_dir, PathBuf::from("/tmp/gym-sharks-test"));
        assert!(!config.use_mock_data);
        assert_eq!(config.retry.query.max_retries, 5);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_values_are_rejected() {
        clear_env();
        env::set_var("GYM_SHARKS_API_URL", "ftp://example.com");
        assert!(ClientConfig::from_env().is_err());
        clear_env();
        env::set_var("GYM_SHARKS_HTTP_TIMEOUT_SECS", "soon");
        assert!(ClientConfig::from_env().is_err());
        clear_env();
    }
}
