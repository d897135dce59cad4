//! # JSON:API Error Responses
//!
//! The fixed error envelope returned when a request body fails validation.
//! One error object, one envelope shape — nothing beyond the single
//! top-level error is formatted here.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// Title carried by every body-validation error object.
pub const INVALID_BODY_TITLE: &str = "Invalid Body";

/// JSON:API version advertised in the envelope.
const JSONAPI_VERSION: &str = "1.0";

/// Pointer to the request path that produced the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorSource {
    pub pointer: String,
}

/// A single member of the `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorObject {
    /// HTTP status code, as a JSON integer.
    pub status: u16,
    pub source: ErrorSource,
    pub title: String,
    pub detail: String,
}

/// The `jsonapi` member of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonApiObject {
    pub version: String,
}

/// The `meta` member of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaObject {
    pub sqlalchemy_jsonapi_version: String,
}

/// The complete error response body.
///
/// Wire shape is fixed:
///
/// ```json
/// {"errors": [{"status": 422,
///              "source": {"pointer": "/v1/things"},
///              "title": "Invalid Body",
///              "detail": "'data' is a required property"}],
///  "jsonapi": {"version": "1.0"},
///  "meta": {"sqlalchemy_jsonapi_version": "0.1.0"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
    pub jsonapi: JsonApiObject,
    pub meta: MetaObject,
}

impl ErrorDocument {
    /// 422 envelope for a request body that failed validation.
    pub fn invalid_body(path: &str, detail: impl Into<String>) -> Self {
        Self::single(
            StatusCode::UNPROCESSABLE_ENTITY,
            path,
            INVALID_BODY_TITLE,
            detail.into(),
        )
    }

    /// 500 envelope for a server-side failure. The detail is generic —
    /// internal messages are logged, never returned to clients.
    pub fn server_error(path: &str) -> Self {
        Self::single(
            StatusCode::INTERNAL_SERVER_ERROR,
            path,
            "Server Error",
            "An internal error occurred".to_string(),
        )
    }

    fn single(status: StatusCode, path: &str, title: &str, detail: String) -> Self {
        Self {
            errors: vec![ErrorObject {
                status: status.as_u16(),
                source: ErrorSource {
                    pointer: path.to_string(),
                },
                title: title.to_string(),
                detail,
            }],
            jsonapi: JsonApiObject {
                version: JSONAPI_VERSION.to_string(),
            },
            meta: MetaObject {
                sqlalchemy_jsonapi_version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    /// The HTTP status this document answers with.
    pub fn status(&self) -> StatusCode {
        self.errors
            .first()
            .and_then(|e| StatusCode::from_u16(e.status).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ErrorDocument {
    fn into_response(self) -> Response {
        (self.status(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_body_envelope_shape() {
        let doc = ErrorDocument::invalid_body("/v1/things", "'data' is a required property");
        let json = serde_json::to_value(&doc).unwrap();

        assert_eq!(json["errors"][0]["status"], serde_json::json!(422));
        assert_eq!(json["errors"][0]["source"]["pointer"], "/v1/things");
        assert_eq!(json["errors"][0]["title"], INVALID_BODY_TITLE);
        assert_eq!(
            json["errors"][0]["detail"],
            "'data' is a required property"
        );
        assert_eq!(json["jsonapi"]["version"], "1.0");
        assert_eq!(
            json["meta"]["sqlalchemy_jsonapi_version"],
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn status_is_an_integer_not_a_string() {
        let doc = ErrorDocument::invalid_body("/", "x");
        let json = serde_json::to_value(&doc).unwrap();
        assert!(json["errors"][0]["status"].is_u64());
    }

    #[test]
    fn invalid_body_answers_422() {
        let doc = ErrorDocument::invalid_body("/", "x");
        assert_eq!(doc.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn server_error_is_generic() {
        let doc = ErrorDocument::server_error("/v1/things");
        assert_eq!(doc.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(doc.errors[0].detail, "An internal error occurred");
        assert_eq!(doc.errors[0].title, "Server Error");
    }

    #[test]
    fn envelope_round_trips() {
        let doc = ErrorDocument::invalid_body("/v1/things", "detail");
        let json = serde_json::to_string(&doc).unwrap();
        let back: ErrorDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }

    use http_body_util::BodyExt;

    #[tokio::test]
    async fn into_response_carries_status_and_body() {
        let doc = ErrorDocument::invalid_body("/v1/things", "'data' is a required property");
        let response = doc.clone().into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorDocument = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, doc);
    }
}
