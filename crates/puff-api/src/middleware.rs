//! # Body Validation Middleware
//!
//! Axum layer that buffers the request body, screens it against a freshly
//! derived schema, and either short-circuits with the JSON:API error
//! response or forwards the unchanged request to the inner handler.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::Method;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::ErrorDocument;
use crate::screen::{method_applies, screen_document, SchemaSource};

/// Validation policy shared by the middleware: which methods to screen and
/// where request schemas come from.
pub struct BodyValidation {
    methods: Option<Vec<Method>>,
    source: Box<dyn SchemaSource>,
}

impl BodyValidation {
    /// Screen every method.
    pub fn new(source: impl SchemaSource + 'static) -> Self {
        Self {
            methods: None,
            source: Box::new(source),
        }
    }

    /// Restrict screening to the given methods; all others pass through
    /// without touching the body.
    #[must_use]
    pub fn methods(mut self, methods: impl IntoIterator<Item = Method>) -> Self {
        self.methods = Some(methods.into_iter().collect());
        self
    }
}

/// The middleware function. Install with
/// `axum::middleware::from_fn_with_state(Arc::new(policy), validate_body)`.
///
/// A schema-derivation failure at request time is a server-side defect:
/// it is logged and answered with a generic 500 in the envelope shape,
/// leaking no internal detail.
pub async fn validate_body(
    State(policy): State<Arc<BodyValidation>>,
    request: Request,
    next: Next,
) -> Response {
    if !method_applies(policy.methods.as_deref(), request.method()) {
        return next.run(request).await;
    }

    let path = request.uri().path().to_string();

    let schema = match policy.source.request_schema() {
        Ok(schema) => schema,
        Err(err) => {
            tracing::error!(error = %err, %path, "schema derivation failed");
            return ErrorDocument::server_error(&path).into_response();
        }
    };

    let (parts, body) = request.into_parts();
    let bytes = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(error = %err, %path, "failed to read request body");
            return ErrorDocument::server_error(&path).into_response();
        }
    };

    if let Err(rejection) = screen_document(&path, &bytes, &schema) {
        return rejection.into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
