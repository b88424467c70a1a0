//! Typed API errors for HTTP handlers.
//!
//! Handlers return `Result<Json<T>, ApiError>`. Each variant renders the exact
//! body shape clients already depend on:
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | `DataUnavailable` | 500 | `{"error": "..."}` |
//! | `NotFound` | 404 | `{"message": "..."}` or `{"index": -1, "message": "..."}` |
//! | `RouteNotFound` | 404 | `Route not found.` (plain text) |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use wildlife_lib::Error as LibError;

/// Plain-text body for requests no handler claims.
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 500: the sightings document could not be loaded. The message is the
    /// generic library message; the cause has already been logged.
    DataUnavailable(String),
    /// 404: a lookup query found nothing.
    NotFound {
        message: String,
        index: Option<i64>,
    },
    /// 404: no handler matched the request.
    RouteNotFound,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Serialize)]
struct NotFoundBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    index: Option<i64>,
    message: &'a str,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::DataUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound { .. } | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::DataUnavailable(message) => write!(f, "{}", message),
            ApiError::NotFound { message, .. } => write!(f, "{}", message),
            ApiError::RouteNotFound => write!(f, "{}", ROUTE_NOT_FOUND_MESSAGE),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::DataUnavailable(message) => {
                (status, Json(ErrorBody { error: &message })).into_response()
            }
            ApiError::NotFound { message, index } => (
                status,
                Json(NotFoundBody {
                    index,
                    message: &message,
                }),
            )
                .into_response(),
            ApiError::RouteNotFound => (status, ROUTE_NOT_FOUND_MESSAGE).into_response(),
        }
    }
}

impl From<LibError> for ApiError {
    fn from(err: LibError) -> Self {
        from_lib_error(&err)
    }
}

/// Convert library errors to API errors.
pub fn from_lib_error(error: &LibError) -> ApiError {
    match error {
        LibError::DataUnavailable { .. } => ApiError::DataUnavailable(error.to_string()),
        LibError::NoSpeciesMatch { .. } | LibError::SpeciesNotFound { .. } => ApiError::NotFound {
            message: error.to_string(),
            index: error.index(),
        },
    }
}
