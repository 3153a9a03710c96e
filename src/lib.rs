//! Schema-item engine for message validation.
//!
//! Validate, normalize, and default-populate dynamically-typed message values
//! (`serde_json::Value`) against a statically-composed schema tree before
//! they hit the transport layer.
//!
//! Design goals:
//! - One immutable tree per message shape, built once, shared everywhere
//!   (`Arc` handles, no node duplication, no locking).
//! - Four operations per node: `validate` (fail-fast, path-attributed),
//!   `apply_schema` / `unapply_schema` (in-place transport coercion), and
//!   `build_object` (default-structure completion).
//! - Failures are returned values, never panics: a closed
//!   [`outcome::ValidationError`] set with JSON-Pointer-style locations.
//! - Every constraint is independently optional via [`param::Param`] —
//!   "absent" is never a sentinel value.
//!
//! ```
//! use msg_schema::schema::{ArraySchema, NumberSchema};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), msg_schema::schema::SchemaError> {
//! let readings = ArraySchema::new()
//!     .element(NumberSchema::new().min(0.0).max(100.0).build()?)
//!     .min_size(1)
//!     .max_size(10)
//!     .build()?;
//!
//! assert!(readings.validate(&json!([12, 99.5])).is_ok());
//! assert!(readings.validate(&json!([])).is_err());
//! # Ok(())
//! # }
//! ```
pub mod emit;
pub mod outcome;
pub mod param;
pub mod schema;
pub mod value;

pub use outcome::{Path, Segment, Validation, ValidationError};
pub use param::Param;
pub use schema::{
    ArraySchema, BoolSchema, EnumSchema, NumberSchema, ObjectSchema, SchemaError, SchemaItem,
    SchemaRef, StringSchema, always,
};
pub use value::{Kind, kind_of};
