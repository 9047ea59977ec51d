//! Application route table.

use axum::{routing::get, Router};

use crate::cities;
use crate::config::schema::LimitsConfig;

/// Plain-text acknowledgment served at `/`.
pub const ACKNOWLEDGMENT: &str = "cities-api is up";

async fn acknowledge() -> &'static str {
    ACKNOWLEDGMENT
}

/// Build every application route. Ambient layers are added by the server.
pub fn app_router(limits: &LimitsConfig) -> Router {
    Router::new()
        .route("/", get(acknowledge))
        .merge(cities::routes(limits.max_body_bytes))
}
