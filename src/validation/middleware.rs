//! Validation middleware.
//!
//! A [`RequestValidator`] pairs request parts with object schemas. Wrapped in
//! [`validate_request`] it becomes a pipeline stage that either forwards the
//! untouched request or answers `400 Bad Request` with every failure found.
//!
//! # Data Flow
//! ```text
//! Request
//!     → split into parts, buffer the body if a body schema is declared
//!     → decode each declared part into a JSON value
//!     → validate every declared part (collect-all, no early abort)
//!     → empty error set:     store ValidatedParts, reassemble request → next stage
//!     → non-empty error set: 400 { "errors": { part: { path: message } } }
//! ```

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    extract::{FromRequestParts, Query, RawPathParams, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};

use crate::http::error::ApiError;
use crate::observability::metrics;
use crate::validation::errors::ValidationErrors;
use crate::validation::part::RequestPart;
use crate::validation::rule::{coerce_number, coerce_string};
use crate::validation::schema::ObjectSchema;

/// Default cap on buffered request bodies (1 MiB).
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

/// Decoded request parts, ready to validate.
pub type PartValues = BTreeMap<RequestPart, Value>;

/// The values a request passed validation with.
///
/// [`validate_request`] stores these in the request extensions, so handlers
/// read exactly what was validated (`Extension<ValidatedParts>`) instead of
/// decoding the request again. Only declared parts are present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidatedParts(PartValues);

impl ValidatedParts {
    pub fn new(values: PartValues) -> Self {
        Self(values)
    }

    /// The whole decoded part, `null` when the part was not declared.
    pub fn part(&self, part: RequestPart) -> &Value {
        self.0.get(&part).unwrap_or(&Value::Null)
    }

    pub fn field(&self, part: RequestPart, name: &str) -> Option<&Value> {
        self.part(part).get(name)
    }

    /// A field read with the coercion non-strict number rules apply.
    pub fn number(&self, part: RequestPart, name: &str) -> Option<f64> {
        self.field(part, name).and_then(coerce_number)
    }

    /// A field read with the coercion non-strict string rules apply.
    pub fn string(&self, part: RequestPart, name: &str) -> Option<Cow<'_, str>> {
        self.field(part, name).and_then(coerce_string)
    }
}

/// Schemas for the request parts one route validates.
///
/// Parts without a schema are never looked at.
#[derive(Debug, Clone)]
pub struct RequestValidator {
    schemas: BTreeMap<RequestPart, ObjectSchema>,
    body_limit: usize,
}

impl RequestValidator {
    pub fn new() -> Self {
        Self {
            schemas: BTreeMap::new(),
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }

    pub fn body(self, schema: ObjectSchema) -> Self {
        self.part(RequestPart::Body, schema)
    }

    pub fn query(self, schema: ObjectSchema) -> Self {
        self.part(RequestPart::Query, schema)
    }

    pub fn params(self, schema: ObjectSchema) -> Self {
        self.part(RequestPart::Params, schema)
    }

    pub fn header(self, schema: ObjectSchema) -> Self {
        self.part(RequestPart::Header, schema)
    }

    /// Declares (or replaces) the schema for `part`.
    pub fn part(mut self, part: RequestPart, schema: ObjectSchema) -> Self {
        self.schemas.insert(part, schema);
        self
    }

    /// Maximum number of body bytes buffered for validation.
    pub fn with_body_limit(mut self, limit: usize) -> Self {
        self.body_limit = limit;
        self
    }

    pub fn declares(&self, part: RequestPart) -> bool {
        self.schemas.contains_key(&part)
    }

    /// Validates every declared part. A declared part missing from `values`
    /// is validated as `null`.
    pub fn validate(&self, values: &PartValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for (part, schema) in &self.schemas {
            let value = values.get(part).unwrap_or(&Value::Null);
            errors.record(*part, schema.validate(value));
        }
        errors
    }

    /// Decodes the declared parts of a split request.
    ///
    /// Returns the decoded values and the body to hand on. A buffered body is
    /// rebuilt from the same bytes, so downstream stages see it unchanged.
    async fn decode(&self, parts: &mut Parts, body: Body) -> Result<(PartValues, Body), ApiError> {
        let mut values = PartValues::new();

        let body = if self.declares(RequestPart::Body) {
            let bytes = axum::body::to_bytes(body, self.body_limit)
                .await
                .map_err(|e| ApiError::BodyRead(e.to_string()))?;
            values.insert(RequestPart::Body, body_value(&bytes)?);
            Body::from(bytes)
        } else {
            body
        };

        if self.declares(RequestPart::Query) {
            values.insert(RequestPart::Query, query_value(parts)?);
        }
        if self.declares(RequestPart::Params) {
            values.insert(RequestPart::Params, params_value(parts).await);
        }
        if self.declares(RequestPart::Header) {
            values.insert(RequestPart::Header, header_value(parts));
        }

        Ok((values, body))
    }
}

impl Default for RequestValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipeline stage running a shared [`RequestValidator`].
///
/// Install with `axum::middleware::from_fn_with_state(Arc::new(validator), validate_request)`.
pub async fn validate_request(
    State(validator): State<Arc<RequestValidator>>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();

    let (values, body) = match validator.decode(&mut parts, body).await {
        Ok(decoded) => decoded,
        Err(err) => return err.into_response(),
    };

    let errors = validator.validate(&values);
    if errors.is_empty() {
        parts.extensions.insert(ValidatedParts::new(values));
        return next.run(Request::from_parts(parts, body)).await;
    }

    let failed: Vec<RequestPart> = errors.parts().collect();
    for part in &failed {
        metrics::record_validation_failure(*part);
    }
    tracing::debug!(
        method = %parts.method,
        path = %parts.uri.path(),
        parts = ?failed,
        "Request failed validation"
    );
    errors.into_response()
}

/// JSON body as a value. An empty body is an empty object.
fn body_value(bytes: &Bytes) -> Result<Value, ApiError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_slice(bytes)?)
}

/// Query string as an object of strings. Repeated keys keep the last value.
fn query_value(parts: &Parts) -> Result<Value, ApiError> {
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
        .map_err(|rejection| ApiError::MalformedQuery(rejection.body_text()))?;
    Ok(string_object(pairs))
}

/// Matched path parameters as an object of strings.
async fn params_value(parts: &mut Parts) -> Value {
    match RawPathParams::from_request_parts(parts, &()).await {
        Ok(params) => string_object(
            params
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string())),
        ),
        Err(_) => Value::Object(Map::new()),
    }
}

/// Headers as an object keyed by lowercase name. Values that are not visible
/// ASCII are skipped.
fn header_value(parts: &Parts) -> Value {
    string_object(parts.headers.iter().filter_map(|(name, value)| {
        value
            .to_str()
            .ok()
            .map(|value| (name.as_str().to_string(), value.to_string()))
    }))
}

fn string_object(pairs: impl IntoIterator<Item = (String, String)>) -> Value {
    let object: Map<String, Value> = pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    Value::Object(object)
}
