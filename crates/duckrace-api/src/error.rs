//! Error types for the roster API.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use duckrace_core::RosterError;
use tracing::warn;

/// Errors that can occur in the API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The store refused the operation.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A duck id could not be parsed from the request path.
    #[error("invalid duck id: {0}")]
    InvalidId(String),
}

impl ApiError {
    /// HTTP status for this error.
    ///
    /// Every store refusal is a client error except id exhaustion,
    /// which the client cannot fix.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Roster(RosterError::IdGeneration { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Roster(_) | Self::InvalidId(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();
        warn!(status = status.as_u16(), error = %message, "request refused");

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
