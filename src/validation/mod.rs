//! Request-shape validation.
//!
//! # Data Flow
//! ```text
//! rule.rs       FieldRule     one field: type, presence, constraints
//! schema.rs     ObjectSchema  named field rules for one request part
//! part.rs       RequestPart   body | query | params | header
//! middleware.rs RequestValidator + validate_request (pipeline stage)
//! errors.rs     ValidationErrors → 400 { "errors": ... }
//! ```
//!
//! # Design Decisions
//! - Collect all errors; never stop at the first invalid field or part
//! - Parts are validated in a fixed order so error output is deterministic
//! - Validators are immutable and shared across requests behind `Arc`

pub mod errors;
pub mod middleware;
pub mod part;
pub mod rule;
pub mod schema;

pub use errors::{FieldErrors, ValidationErrors};
pub use middleware::{validate_request, PartValues, RequestValidator, ValidatedParts};
pub use part::RequestPart;
pub use rule::{coerce_number, coerce_string, FieldRule};
pub use schema::{FieldError, ObjectSchema};
