//! # puff-schema — JSON:API Request Schema Derivation & Validation
//!
//! Derives a JSON Schema (draft-04) document from a data-model description
//! and validates inbound JSON:API request envelopes against it.
//!
//! ## Envelope
//!
//! Every derived schema describes the same fixed shape: a top-level `data`
//! object carrying a string `type`, an optional string `id`, and an
//! `attributes` object whose properties and required list are drawn from the
//! [`ModelDescription`]. Field names are rendered in presentation form
//! (underscores become hyphens); internal lookups keep the underscore form.
//!
//! ## Derivation (`build`)
//!
//! [`ModelDescription::build_schema`] resolves each field's type — an
//! explicit override taken verbatim, or a [`TypeSource`] lookup mapped
//! through [`PrimitiveType`] — and assembles the envelope. Any field whose
//! type cannot be resolved fails the whole derivation with
//! [`UnsupportedTypeError`]; nothing is skipped silently.
//!
//! ## Validation (`validate`)
//!
//! [`validate_request`] is a thin pass-through to the `jsonschema` crate in
//! draft-04 mode. Validation is fail-fast: the first violated constraint is
//! reported as a [`ValidationFailure`] and checking stops.
//!
//! ## Crate Policy
//!
//! - No I/O and no shared mutable state: every derivation builds a fresh
//!   document and is safe to call concurrently.
//! - No `unsafe` code; no `panic!()` or `.unwrap()` outside tests.
//! - Exactly two public error kinds: [`UnsupportedTypeError`] and
//!   [`ValidationFailure`].

pub mod build;
pub mod model;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use build::{presentation_name, SchemaDocument, UnsupportedTypeError, SCHEMA_DRAFT_URI};
pub use model::{ColumnType, FnTypeSource, ModelDescription, PrimitiveType, TypeSource};
pub use validate::{validate_request, ValidationFailure};
