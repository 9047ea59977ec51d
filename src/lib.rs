//! Cities HTTP API with request-shape validation.
//!
//! A CRUD resource (`/cities`) whose routes each run a schema-driven
//! validation middleware before a placeholder handler.

// Core subsystems
pub mod cities;
pub mod config;
pub mod http;
pub mod routing;
pub mod validation;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
