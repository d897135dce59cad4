//! # Request Screening
//!
//! The framework-independent half of body validation: explicit inputs
//! (method filter, request method, path, raw body) in, explicit outcome
//! out. The Axum middleware in [`crate::middleware`] is a thin shim over
//! these functions — no ambient request state is consulted anywhere.

use axum::http::Method;
use serde_json::Value;

use puff_schema::{validate_request, SchemaDocument, UnsupportedTypeError};

use crate::error::ErrorDocument;

/// Produces the request schema for the resource being screened.
///
/// Consulted freshly on every screened request — derived documents are
/// never cached. Implemented for closures so callers can pass a plain
/// derivation function.
pub trait SchemaSource: Send + Sync {
    /// Derive the schema to validate the current request against.
    fn request_schema(&self) -> Result<SchemaDocument, UnsupportedTypeError>;
}

impl<F> SchemaSource for F
where
    F: Fn() -> Result<SchemaDocument, UnsupportedTypeError> + Send + Sync,
{
    fn request_schema(&self) -> Result<SchemaDocument, UnsupportedTypeError> {
        self()
    }
}

/// Whether a request method is subject to validation under `filter`.
///
/// An absent filter screens every method.
pub fn method_applies(filter: Option<&[Method]>, method: &Method) -> bool {
    filter.map_or(true, |methods| methods.contains(method))
}

/// Parse `body` as JSON and validate it against `schema`.
///
/// The first violation — or a body that is not JSON at all — becomes a 422
/// [`ErrorDocument`] whose source pointer is `path`.
pub fn screen_document(
    path: &str,
    body: &[u8],
    schema: &SchemaDocument,
) -> Result<(), ErrorDocument> {
    let document: Value = serde_json::from_slice(body).map_err(|e| {
        ErrorDocument::invalid_body(path, format!("request body is not valid JSON: {e}"))
    })?;

    validate_request(&document, schema).map_err(|failure| {
        tracing::debug!(%path, %failure, "request body rejected");
        ErrorDocument::invalid_body(path, failure.to_string())
    })
}
