//! # puff-api — Demo Server
//!
//! Starts an Axum server exposing one sample resource guarded by the
//! body-validation middleware. Binds to a configurable port (default 8080).

use std::collections::HashMap;
use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;

use puff_api::middleware::{validate_body, BodyValidation};
use puff_schema::{ColumnType, ModelDescription, SchemaDocument, UnsupportedTypeError};

/// Derive the request schema for the sample resource. Consulted freshly on
/// every screened request.
fn thing_schema() -> Result<SchemaDocument, UnsupportedTypeError> {
    let columns: HashMap<&str, ColumnType> = HashMap::from([
        ("id", ColumnType::Integer),
        ("name", ColumnType::String),
        ("enabled", ColumnType::Boolean),
    ]);
    ModelDescription::new(["id", "name", "enabled"])
        .required(["name", "enabled"])
        .build_schema(&columns)
}

/// The guarded handler only sees bodies that already passed validation.
async fn create_thing(Json(document): Json<Value>) -> (StatusCode, Json<Value>) {
    (StatusCode::CREATED, Json(document))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let policy = Arc::new(BodyValidation::new(thing_schema).methods([Method::POST]));

    let app = Router::new()
        .route("/v1/things", post(create_thing))
        .layer(axum::middleware::from_fn_with_state(policy, validate_body))
        .layer(tower_http::trace::TraceLayer::new_for_http());

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("puff demo API listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
