//! # Request Validation
//!
//! Structural validation of inbound documents against a derived
//! [`SchemaDocument`], via the `jsonschema` crate in draft-04 mode.
//!
//! Validation is fail-fast: the first violated constraint is reported and
//! checking stops. Nothing is aggregated — the caller gets exactly one
//! failure with a human-readable message and the instance pointer.

use serde_json::Value;
use thiserror::Error;

use crate::build::SchemaDocument;

/// A structural validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    /// The document violated a schema constraint.
    #[error("{message}")]
    Constraint {
        /// JSON Pointer to the violating value in the instance; empty for
        /// the document root.
        pointer: String,
        /// Human-readable description of the violated constraint.
        message: String,
    },

    /// The schema itself would not compile. Reachable only through a
    /// trusted-verbatim type override that is not a draft-04 type name.
    #[error("schema failed to compile: {reason}")]
    Schema {
        /// Compiler diagnostic from the `jsonschema` crate.
        reason: String,
    },
}

impl ValidationFailure {
    /// JSON Pointer to the violating value, where one exists.
    pub fn pointer(&self) -> Option<&str> {
        match self {
            Self::Constraint { pointer, .. } => Some(pointer),
            Self::Schema { .. } => None,
        }
    }
}

/// Validate a parsed document against a derived schema.
///
/// The schema is compiled per call; derived documents are never cached, so
/// there is nothing to invalidate and concurrent callers share no state.
///
/// # Errors
///
/// Returns the first structural violation as
/// [`ValidationFailure::Constraint`], or [`ValidationFailure::Schema`] when
/// the schema cannot be compiled.
pub fn validate_request(
    document: &Value,
    schema: &SchemaDocument,
) -> Result<(), ValidationFailure> {
    let mut options = jsonschema::options();
    options.with_draft(jsonschema::Draft::Draft4);
    let validator = options
        .build(schema.as_value())
        .map_err(|e| ValidationFailure::Schema {
            reason: e.to_string(),
        })?;

    validator
        .validate(document)
        .map_err(|e| ValidationFailure::Constraint {
            pointer: e.instance_path.to_string(),
            message: e.to_string(),
        })
}
