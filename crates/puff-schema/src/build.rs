//! # Schema Derivation
//!
//! Derives a JSON Schema (draft-04) document describing the expected
//! JSON:API request envelope for one resource.
//!
//! The envelope shape is fixed; only the `attributes` object varies with the
//! [`ModelDescription`]. Documents are derived fresh on every call — the
//! base template is constructed per call, so no nested structure is ever
//! shared between two derivations and concurrent callers cannot observe
//! cross-call mutation.

use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::model::{ColumnType, ModelDescription, PrimitiveType, TypeSource};

/// `$schema` identifier emitted on every derived document.
pub const SCHEMA_DRAFT_URI: &str = "http://json-schema.org/draft-04/schema#";

/// Error deriving a schema: a field's type could not be resolved to a
/// schema primitive. Fatal to the whole derivation attempt — no field is
/// ever skipped silently.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnsupportedTypeError {
    /// The type source has no column for the field.
    #[error("no column type known for field '{0}'")]
    UnknownField(String),

    /// The column type exists but maps to no schema primitive.
    #[error("column type '{column}' of field '{field}' has no schema primitive")]
    Unmapped {
        /// Field whose type failed to map.
        field: String,
        /// The unmappable column type.
        column: ColumnType,
    },
}

/// An immutable derived schema document.
///
/// Wraps the rendered JSON value. Consumers either borrow it for
/// validation via [`as_value`](Self::as_value) or take it apart with
/// [`into_value`](Self::into_value); there is no in-place mutation surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SchemaDocument(Value);

impl SchemaDocument {
    /// Borrow the rendered schema value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consume the document, yielding the rendered schema value.
    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Translate an internal (underscored) field name to its external
/// (hyphenated) presentation form.
///
/// Applied identically to `attributes.properties` keys and
/// `attributes.required` entries. Internal lookups — type sources and
/// overrides — always use the underscore form.
pub fn presentation_name(field: &str) -> String {
    field.replace('_', "-")
}

/// Fresh copy of the fixed envelope template. Never held in a shared
/// static: each derivation gets its own allocation.
fn base_envelope() -> Value {
    json!({
        "$schema": SCHEMA_DRAFT_URI,
        "type": "object",
        "properties": {
            "data": {
                "type": "object",
                "properties": {
                    "type": { "type": "string" },
                    "id": { "type": "string" },
                    "attributes": { "type": "object" },
                },
                "required": ["type", "attributes"],
            },
        },
        "required": ["data"],
    })
}

impl ModelDescription {
    /// Derive the request schema for this description.
    ///
    /// Fields are resolved in declaration order. An explicit type override
    /// wins over the column-type lookup and is emitted verbatim; inferred
    /// types must map to a schema primitive. The `attributes.required` key
    /// is omitted entirely when no fields are required.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedTypeError`] when a field without an override
    /// has no column in `types`, or a column type outside the primitive
    /// set.
    pub fn build_schema(
        &self,
        types: &impl TypeSource,
    ) -> Result<SchemaDocument, UnsupportedTypeError> {
        let mut properties = Map::new();
        for field in self.fields() {
            let type_name = match self.type_override(field) {
                Some(name) => name.to_string(),
                None => {
                    let column = types
                        .column_type(field)
                        .ok_or_else(|| UnsupportedTypeError::UnknownField(field.clone()))?;
                    PrimitiveType::from_column(column)
                        .ok_or_else(|| UnsupportedTypeError::Unmapped {
                            field: field.clone(),
                            column,
                        })?
                        .as_str()
                        .to_string()
                }
            };
            properties.insert(presentation_name(field), json!({ "type": type_name }));
        }

        let mut attributes = Map::new();
        attributes.insert("type".to_string(), Value::String("object".to_string()));
        attributes.insert("properties".to_string(), Value::Object(properties));
        if !self.required_fields().is_empty() {
            let required: Vec<Value> = self
                .required_fields()
                .iter()
                .map(|field| Value::String(presentation_name(field)))
                .collect();
            attributes.insert("required".to_string(), Value::Array(required));
        }

        let mut document = base_envelope();
        document["properties"]["data"]["properties"]["attributes"] = Value::Object(attributes);
        Ok(SchemaDocument(document))
    }
}
