//! The cities resource.
//!
//! # Data Flow
//! ```text
//! POST   /cities       → create_validator        (body)         → create
//! GET    /cities       → get_all_validator       (query)        → get_all
//! GET    /cities/{id}  → get_by_id_validator     (params)       → get_by_id
//! PUT    /cities/{id}  → update_by_id_validator  (params, body) → update_by_id
//! DELETE /cities/{id}  → delete_by_id_validator  (params)       → delete_by_id
//! ```

pub mod dto;
pub mod handlers;
pub mod schemas;

use std::sync::Arc;

use axum::{
    handler::Handler,
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::validation::{validate_request, RequestValidator};

fn shared(validator: RequestValidator, body_limit: usize) -> Arc<RequestValidator> {
    Arc::new(validator.with_body_limit(body_limit))
}

/// Routes of the cities resource, each as `[validator, handler]`.
///
/// `body_limit` caps how many body bytes a validator buffers.
pub fn routes(body_limit: usize) -> Router {
    Router::new()
        .route(
            "/cities",
            post(handlers::create.layer(from_fn_with_state(
                shared(schemas::create_validator(), body_limit),
                validate_request,
            )))
            .get(handlers::get_all.layer(from_fn_with_state(
                shared(schemas::get_all_validator(), body_limit),
                validate_request,
            ))),
        )
        .route(
            "/cities/{id}",
            get(handlers::get_by_id.layer(from_fn_with_state(
                shared(schemas::get_by_id_validator(), body_limit),
                validate_request,
            )))
            .put(handlers::update_by_id.layer(from_fn_with_state(
                shared(schemas::update_by_id_validator(), body_limit),
                validate_request,
            )))
            .delete(handlers::delete_by_id.layer(from_fn_with_state(
                shared(schemas::delete_by_id_validator(), body_limit),
                validate_request,
            ))),
        )
}
