//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (method, path)
//!     → router.rs (route table)
//!     → per-route pipeline: [validation middleware, handler]
//!     → no match: 404
//! ```
//!
//! # Design Decisions
//! - Routes are fixed at startup, immutable at runtime
//! - One validator per operation, never shared between methods

pub mod router;

pub use router::{app_router, ACKNOWLEDGMENT};
