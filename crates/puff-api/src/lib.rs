//! # puff-api — HTTP Adaptation Layer
//!
//! Wires `puff-schema` request validation into Axum: a body-screening
//! middleware, the fixed JSON:API error envelope, and a demo server binary.
//!
//! ## Shape
//!
//! - [`screen`] — the framework-independent half: explicit inputs (method,
//!   path, raw body, schema) in, explicit outcome out.
//! - [`middleware`] — the Axum shim over it; install with
//!   `axum::middleware::from_fn_with_state`.
//! - [`error`] — the one JSON:API error envelope every rejection uses.
//!
//! ## Crate Policy
//!
//! - No schema or validation logic here — that lives in `puff-schema`.
//! - Handlers behind the middleware receive the request unchanged; the
//!   layer only short-circuits failures.

pub mod error;
pub mod middleware;
pub mod screen;

pub use error::{ErrorDocument, ErrorObject, ErrorSource, INVALID_BODY_TITLE};
pub use middleware::{validate_body, BodyValidation};
pub use screen::{method_applies, screen_document, SchemaSource};
