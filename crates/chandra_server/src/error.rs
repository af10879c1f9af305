//! Mapping of failures onto HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chandra_search::SearchError;
use chandra_time::TimeError;
use serde_json::json;
use tracing::{error, warn};

/// A request failure; every variant renders `{"error", "details"}`.
#[derive(Debug)]
pub enum ApiError {
    /// `iso` did not parse as an instant.
    InvalidInstant(TimeError),
    /// The computation ran past its budget.
    Timeout(String),
    /// Ephemeris or search failure.
    Compute(String),
}

impl From<SearchError> for ApiError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Timeout(_) => Self::Timeout(e.to_string()),
            other => Self::Compute(other.to_string()),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidInstant(_) => StatusCode::BAD_REQUEST,
            Self::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            Self::Compute(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (message, details) = match self {
            Self::InvalidInstant(e) => {
                warn!(error = %e, "rejected instant");
                ("Invalid instant", e.to_string())
            }
            Self::Timeout(details) => {
                warn!(%details, "lunar computation timed out");
                ("Lunar computation timed out", details)
            }
            Self::Compute(details) => {
                error!(%details, "lunar computation failed");
                ("Failed to compute lunar data", details)
            }
        };
        (status, Json(json!({ "error": message, "details": details }))).into_response()
    }
}
