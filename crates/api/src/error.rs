use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use office_core::error::CoreError;
use office_core::maturity::MaturityLevel;
use office_core::types::Timestamp;
use serde::Serialize;

use crate::hateoas::Link;
use crate::response::ApiResponse;

/// How a maturity level turns domain failures into HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusPolicy {
    /// Levels 0 and 1: every response is 200; failure lives in the body.
    AlwaysOk,
    /// Levels 2 and 3: 404 for missing resources, 400 for bad input, 500 otherwise.
    Standard,
}

impl StatusPolicy {
    pub fn for_level(level: MaturityLevel) -> Self {
        match level {
            MaturityLevel::Level0 | MaturityLevel::Level1 => Self::AlwaysOk,
            MaturityLevel::Level2 | MaturityLevel::Level3 => Self::Standard,
        }
    }

    pub fn status_for(self, err: &CoreError) -> StatusCode {
        match self {
            Self::AlwaysOk => StatusCode::OK,
            Self::Standard => match err {
                e if e.is_not_found() => StatusCode::NOT_FOUND,
                CoreError::MissingParameter(_)
                | CoreError::InvalidParameter(_)
                | CoreError::UnknownAction(_) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }
}

/// A domain failure rendered as a level's failure envelope.
///
/// Handlers return `Result<Json<ApiResponse<T>>, LevelRejection>` and use `?`
/// on catalog lookups after choosing the level's [`StatusPolicy`].
#[derive(Debug)]
pub struct LevelRejection {
    pub policy: StatusPolicy,
    pub error: CoreError,
    pub links: Option<Vec<Link>>,
}

impl LevelRejection {
    pub fn always_ok(error: CoreError) -> Self {
        Self {
            policy: StatusPolicy::AlwaysOk,
            error,
            links: None,
        }
    }

    pub fn standard(error: CoreError) -> Self {
        Self {
            policy: StatusPolicy::Standard,
            error,
            links: None,
        }
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = Some(links);
        self
    }

    /// An unexpected failure inside one of `level`'s handlers.
    ///
    /// Level 3 envelopes always carry `links`, empty here.
    pub fn internal(level: MaturityLevel, details: String) -> Self {
        Self {
            policy: StatusPolicy::for_level(level),
            error: CoreError::Internal(details),
            links: (level == MaturityLevel::Level3).then(Vec::new),
        }
    }
}

/// Convenience type alias for level handler return values.
pub type LevelResult<T> = Result<axum::Json<ApiResponse<T>>, LevelRejection>;

impl IntoResponse for LevelRejection {
    fn into_response(self) -> Response {
        let status = self.policy.status_for(&self.error);
        match &self.error {
            CoreError::Internal(msg) => tracing::error!(error = %msg, "Internal error"),
            other => tracing::debug!(error = %other, %status, "Request rejected"),
        }

        let mut body = ApiResponse::failure(&self.error);
        body.links = self.links;
        (status, axum::Json(body)).into_response()
    }
}

/// Framework-level error envelope for failures outside any level's handlers.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub timestamp: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Errors raised by the routing and middleware layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No route matched the request.
    #[error("Route not found: {path}")]
    RouteNotFound {
        path: String,
        trace_id: Option<String>,
    },

    /// A handler panicked. `details` is only populated in development.
    #[error("Handler panicked")]
    Panic { details: Option<String> },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, details, path, trace_id) = match self {
            AppError::RouteNotFound { path, trace_id } => (
                StatusCode::NOT_FOUND,
                "The requested resource was not found",
                None,
                Some(path),
                trace_id,
            ),
            AppError::Panic { details } => {
                tracing::error!(details = ?details, "Handler panicked");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred",
                    details,
                    None,
                    None,
                )
            }
        };

        let body = ErrorResponse {
            status_code: status.as_u16(),
            message: message.to_string(),
            details,
            timestamp: Utc::now(),
            path,
            trace_id,
        };

        (status, axum::Json(body)).into_response()
    }
}
