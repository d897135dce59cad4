//! # Model Descriptions
//!
//! The input side of schema derivation: the ordered field list, the
//! required subset, explicit type overrides, and the pluggable column-type
//! lookup supplied by the embedding application's data-model layer.

use std::collections::HashMap;
use std::fmt;

/// Underlying storage type reported by a [`TypeSource`].
///
/// Only `Integer`, `String`, and `Boolean` map to a schema primitive. Every
/// other variant makes derivation fail with
/// [`UnsupportedTypeError`](crate::UnsupportedTypeError) — there is no
/// silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Integer,
    String,
    Boolean,
    Float,
    Numeric,
    DateTime,
    Date,
    Binary,
    Json,
}

impl ColumnType {
    /// Lowercase tag used in error messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Float => "float",
            Self::Numeric => "numeric",
            Self::DateTime => "datetime",
            Self::Date => "date",
            Self::Binary => "binary",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Schema value types the envelope supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Integer,
    String,
    Boolean,
}

impl PrimitiveType {
    /// Map an underlying column type to its schema primitive, if one exists.
    pub fn from_column(column: ColumnType) -> Option<Self> {
        match column {
            ColumnType::Integer => Some(Self::Integer),
            ColumnType::String => Some(Self::String),
            ColumnType::Boolean => Some(Self::Boolean),
            _ => None,
        }
    }

    /// The draft-04 type name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pluggable lookup from field name to underlying column type.
///
/// Supplied by the caller's data-model layer; schema derivation consults it
/// only for fields without an explicit override. Implemented for plain maps,
/// and for lookup functions via [`FnTypeSource`].
pub trait TypeSource {
    /// Report the column type backing `field`, or `None` when the model has
    /// no such column.
    fn column_type(&self, field: &str) -> Option<ColumnType>;
}

impl TypeSource for HashMap<String, ColumnType> {
    fn column_type(&self, field: &str) -> Option<ColumnType> {
        self.get(field).copied()
    }
}

impl<'a> TypeSource for HashMap<&'a str, ColumnType> {
    fn column_type(&self, field: &str) -> Option<ColumnType> {
        self.get(field).copied()
    }
}

/// Adapter turning a plain lookup function into a [`TypeSource`].
pub struct FnTypeSource<F>(pub F);

impl<F> TypeSource for FnTypeSource<F>
where
    F: Fn(&str) -> Option<ColumnType>,
{
    fn column_type(&self, field: &str) -> Option<ColumnType> {
        (self.0)(field)
    }
}

/// Describes the attributes of one resource for schema derivation.
///
/// `fields` is ordered and assumed unique. `required` must be a subset of
/// `fields`; that is a caller precondition, not validated here — a stray
/// required name is reproduced in the derived schema as given. Override
/// values are trusted verbatim and only consulted for names drawn from
/// `fields`.
#[derive(Debug, Clone, Default)]
pub struct ModelDescription {
    fields: Vec<String>,
    required: Vec<String>,
    type_overrides: HashMap<String, String>,
}

impl ModelDescription {
    /// Create a description over the given attribute fields, in order.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
            required: Vec::new(),
            type_overrides: HashMap::new(),
        }
    }

    /// Mark a subset of fields as required in the derived schema, in order.
    #[must_use]
    pub fn required<I, S>(mut self, required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = required.into_iter().map(Into::into).collect();
        self
    }

    /// Force an explicit schema type name for a field, bypassing the
    /// column-type lookup. The value is emitted verbatim — it is not
    /// checked against the primitive enumeration.
    #[must_use]
    pub fn override_type(mut self, field: impl Into<String>, type_name: impl Into<String>) -> Self {
        self.type_overrides.insert(field.into(), type_name.into());
        self
    }

    /// The attribute fields, in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The required fields, in declaration order.
    pub fn required_fields(&self) -> &[String] {
        &self.required
    }

    /// The explicit type override for `field`, if one was declared.
    pub fn type_override(&self, field: &str) -> Option<&str> {
        self.type_overrides.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_mapping_covers_exactly_three_column_types() {
        assert_eq!(
            PrimitiveType::from_column(ColumnType::Integer),
            Some(PrimitiveType::Integer)
        );
        assert_eq!(
            PrimitiveType::from_column(ColumnType::String),
            Some(PrimitiveType::String)
        );
        assert_eq!(
            PrimitiveType::from_column(ColumnType::Boolean),
            Some(PrimitiveType::Boolean)
        );

        for unmapped in [
            ColumnType::Float,
            ColumnType::Numeric,
            ColumnType::DateTime,
            ColumnType::Date,
            ColumnType::Binary,
            ColumnType::Json,
        ] {
            assert_eq!(PrimitiveType::from_column(unmapped), None, "{unmapped}");
        }
    }

    #[test]
    fn closure_acts_as_type_source() {
        let source = FnTypeSource(|field: &str| match field {
            "id" => Some(ColumnType::Integer),
            _ => None,
        });
        assert_eq!(source.column_type("id"), Some(ColumnType::Integer));
        assert_eq!(source.column_type("name"), None);
    }

    #[test]
    fn map_acts_as_type_source() {
        let source: HashMap<&str, ColumnType> = HashMap::from([("name", ColumnType::String)]);
        assert_eq!(source.column_type("name"), Some(ColumnType::String));
        assert_eq!(source.column_type("ghost"), None);
    }

    #[test]
    fn description_preserves_field_order() {
        let desc = ModelDescription::new(["id", "name", "enabled"]);
        assert_eq!(desc.fields(), ["id", "name", "enabled"]);
    }

    #[test]
    fn description_exposes_overrides() {
        let desc = ModelDescription::new(["id"]).override_type("id", "string");
        assert_eq!(desc.type_override("id"), Some("string"));
        assert_eq!(desc.type_override("name"), None);
    }
}
