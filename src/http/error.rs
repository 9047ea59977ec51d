//! Request errors raised before validation runs.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// A request the body or query parser could not decode.
///
/// These never reach the validation error set: the request part could not be
/// turned into a value to validate in the first place.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to read request body: {0}")]
    BodyRead(String),

    #[error("request body is not valid JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("query string could not be decoded: {0}")]
    MalformedQuery(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejecting undecodable request");
        (StatusCode::BAD_REQUEST, Json(json!({ "message": self.to_string() }))).into_response()
    }
}
