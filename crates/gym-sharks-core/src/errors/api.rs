// ABOUTME: Error types for calls made against the fitness backend HTTP API
// ABOUTME: Classifies transport, status, and envelope failures and decides which are retryable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Gym Sharks

use super::{AppError, ErrorCode};
use thiserror::Error;

/// Failure of a single backend API call
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Backend answered 401
    #[error("unauthorized request to {endpoint}")]
    Unauthorized {
        /// Endpoint path that was called
        endpoint: String,
        /// Message from the response body, if any
        message: Option<String>,
    },

    /// Backend answered 429
    #[error("rate limit exceeded on {endpoint}")]
    RateLimited {
        /// Endpoint path that was called
        endpoint: String,
    },

    /// Backend answered 5xx
    #[error("server error {status} on {endpoint}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Endpoint path that was called
        endpoint: String,
    },

    /// Backend answered another non-success status
    #[error("request to {endpoint} failed with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// Endpoint path that was called
        endpoint: String,
        /// Message from the response body, if any
        message: Option<String>,
    },

    /// Backend answered 2xx but the envelope reported `success: false`
    #[error("unsuccessful response from {endpoint}")]
    Unsuccessful {
        /// Endpoint path that was called
        endpoint: String,
        /// Message from the response body, if any
        message: Option<String>,
    },

    /// Request never produced a response
    #[error("network error calling {endpoint}: {reason}")]
    Network {
        /// Endpoint path that was called
        endpoint: String,
        /// Transport failure description
        reason: String,
    },

    /// Response body could not be decoded
    #[error("could not decode response from {endpoint}: {reason}")]
    Decode {
        /// Endpoint path that was called
        endpoint: String,
        /// Decoder failure description
        reason: String,
    },

    /// Feature is switched off on this client and no request was sent
    #[error("{feature} API is disabled")]
    Disabled {
        /// Name of the disabled feature
        feature: String,
    },
}

impl ApiError {
    /// Whether the failure is transient and worth another attempt
    ///
    /// Authentication failures are never retried.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Server { .. } | Self::RateLimited { .. }
        )
    }

    /// Whether this is a 401 from the backend
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// HTTP status of the response, when there was one
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized { .. } => Some(401),
            Self::RateLimited { .. } => Some(429),
            Self::Server { status, .. } | Self::Rejected { status, .. } => Some(*status),
            Self::Unsuccessful { .. }
            | Self::Network { .. }
            | Self::Decode { .. }
            | Self::Disabled { .. } => None,
        }
    }

    /// Message supplied by the backend in the response body
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message, .. }
            | Self::Rejected { message, .. }
            | Self::Unsuccessful { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Message to show the user: the backend's own wording when it sent one
    #[must_use]
    pub fn user_message(&self, default_message: &str) -> String {
        self.server_message()
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(default_message)
            .to_owned()
    }
}

impl From<ApiError> for AppError {
    fn from(error: ApiError) -> Self {
        let code = match &error {
            ApiError::Unauthorized { .. } => ErrorCode::AuthInvalid,
            ApiError::RateLimited { .. } => ErrorCode::RateLimitExceeded,
            ApiError::Server { .. } | ApiError::Unsuccessful { .. } => {
                ErrorCode::ExternalServiceError
            }
            ApiError::Rejected { status: 404, .. } => ErrorCode::ResourceNotFound,
            ApiError::Rejected { status: 403, .. } => ErrorCode::PermissionDenied,
            ApiError::Rejected { .. } => ErrorCode::InvalidInput,
            ApiError::Network { .. } => ErrorCode::ExternalServiceUnavailable,
            ApiError::Decode { .. } => ErrorCode::SerializationError,
            ApiError::Disabled { .. } => ErrorCode::FeatureDisabled,
        };
        let message = error
            .server_message()
            .map_or_else(|| error.to_string(), str::to_owned);
        Self::new(code, message).with_source(error)
    }
}

#[cfg(feature = "http-errors")]
impl ApiError {
    /// Classify a transport-level reqwest failure
    #[must_use]
    pub fn from_transport(endpoint: &str, error: &reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode {
                endpoint: endpoint.to_owned(),
                reason: error.to_string(),
            }
        } else {
            Self::Network {
                endpoint: endpoint.to_owned(),
                reason: error.to_string(),
            }
        }
    }
}

/// Result type alias for API calls
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        let network = ApiError::Network {
            endpoint: "/health".into(),
            reason: "connection refused".into(),
        };
        let server = ApiError::Server {
            status: 503,
            endpoint: "/diets".into(),
        };
        let unauthorized = ApiError::Unauthorized {
            endpoint: "/auth/profile".into(),
            message: None,
        };
        let rejected = ApiError::Rejected {
            status: 400,
            endpoint: "/auth/login".into(),
            message: Some("Invalid credentials".into()),
        };

        assert!(network.is_retryable());
        assert!(server.is_retryable());
        assert!(!unauthorized.is_retryable());
        assert!(!rejected.is_retryable());
    }

    #[test]
    fn test_user_message_prefers_server_wording() {
        let rejected = ApiError::Rejected {
            status: 400,
            endpoint: "/auth/login".into(),
            message: Some("Invalid credentials".into()),
        };
        assert_eq!(
            rejected.user_message("Login failed. Please try again."),
            "Invalid credentials"
        );

        let network = ApiError::Network {
            endpoint: "/auth/login".into(),
            reason: "timeout".into(),
        };
        assert_eq!(
            network.user_message("Login failed. Please try again."),
            "Login failed. Please try again."
        );
    }

    #[test]
    fn test_conversion_to_app_error() {
        let error: AppError = ApiError::Disabled {
            feature: "Progress".into(),
        }
        .into();
        assert_eq!(error.code, ErrorCode::FeatureDisabled);

        let error: AppError = ApiError::Rejected {
            status: 404,
            endpoint: "/home-workouts/99".into(),
            message: None,
        }
        .into();
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
    }
}
