//! Handlers for the cities resource.
//!
//! Every handler runs after its validator accepted the request and reads the
//! values it validated from [`ValidatedParts`]. Nothing is decoded twice and
//! nothing is stored: the handlers log what they received and answer with a
//! fixed status.

use axum::{http::StatusCode, response::IntoResponse, Extension, Json};

use crate::cities::dto::{CityBody, CityCreated, CityParams, CityQuery};
use crate::validation::{RequestPart, ValidatedParts};

pub async fn create(Extension(validated): Extension<ValidatedParts>) -> impl IntoResponse {
    let city = CityBody::from_validated(&validated);
    tracing::info!(name = %city.name, state = %city.state, "Received city to create");

    (
        StatusCode::CREATED,
        Json(CityCreated {
            message: "City created successfully",
            data: validated.part(RequestPart::Body).clone(),
        }),
    )
}

pub async fn get_all(Extension(validated): Extension<ValidatedParts>) -> impl IntoResponse {
    let query = CityQuery::from_validated(&validated);
    tracing::info!(
        page = ?query.page,
        limit = ?query.limit,
        filter = ?query.filter,
        "Received city search filters"
    );

    (StatusCode::OK, Json(Vec::<CityBody>::new()))
}

pub async fn get_by_id(Extension(validated): Extension<ValidatedParts>) -> impl IntoResponse {
    let params = CityParams::from_validated(&validated);
    tracing::info!(id = params.id, "Received city lookup");

    (StatusCode::ACCEPTED, "in process...")
}

/// Answers `204 No Content`, which carries no body.
pub async fn update_by_id(Extension(validated): Extension<ValidatedParts>) -> impl IntoResponse {
    let params = CityParams::from_validated(&validated);
    let city = CityBody::from_validated(&validated);
    tracing::info!(id = params.id, name = %city.name, state = %city.state, "Received city update");

    StatusCode::NO_CONTENT
}

pub async fn delete_by_id(Extension(validated): Extension<ValidatedParts>) -> impl IntoResponse {
    let params = CityParams::from_validated(&validated);
    tracing::info!(id = params.id, "Received city deletion");

    (StatusCode::ACCEPTED, "deletion accepted")
}
