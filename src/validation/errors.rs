//! The validation error set and its HTTP rendering.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::validation::part::RequestPart;
use crate::validation::schema::FieldError;

/// Field path to message, for a single request part.
pub type FieldErrors = BTreeMap<String, String>;

/// Aggregated failures of one validation pass, keyed by request part.
///
/// Empty means the request is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<RequestPart, FieldErrors>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records the failures of one part.
    ///
    /// A part with failures always gets a key, even when none of them carry
    /// a field path; pathless failures are not listed. Later failures for the
    /// same path overwrite earlier ones.
    pub fn record(&mut self, part: RequestPart, failures: Vec<FieldError>) {
        if failures.is_empty() {
            return;
        }
        let fields = self.0.entry(part).or_default();
        for failure in failures {
            if let Some(path) = failure.path {
                fields.insert(path, failure.message);
            }
        }
    }

    pub fn get(&self, part: RequestPart) -> Option<&FieldErrors> {
        self.0.get(&part)
    }

    /// Parts that failed, in validation order.
    pub fn parts(&self) -> impl Iterator<Item = RequestPart> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    errors: &'a ValidationErrors,
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ErrorBody { errors: &self })).into_response()
    }
}
