//! Schema-item tree.
//!
//! A schema is an immutable tree of [`SchemaItem`] nodes, assembled once and
//! shared behind [`SchemaRef`] handles for the life of the process. One node
//! may sit under many parents (a DAG); it can never reach itself, since
//! children are supplied at construction and nodes carry no interior
//! mutability. Nodes are deliberately not `Clone`: two "equal" schema nodes
//! are meant to be the *same* shared node, so sharing goes through the
//! `Arc` handle and never through duplication.
//!
//! Every node answers the same four operations:
//! - `validate`       — read-only conformance check, fail-fast;
//! - `apply_schema`   — in-place normalization toward the transport form;
//! - `unapply_schema` — the inverse transform;
//! - `build_object`   — recursive default-structure completion.
//!
//! All four recurse schema-first: each recursive call consumes one schema
//! level, so depth is bounded by the declared nesting of the schema, not by
//! the data ([`SchemaItem::AlwaysTrue`] terminates descent). Operations take
//! `&self`, so one tree serves any number of concurrent callers.
pub mod array;
pub mod enumeration;
pub mod num;
pub mod object;
pub mod str;

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;
use thiserror::Error;

use crate::outcome::{Validation, ValidationError};
use crate::param::Param;
use crate::value::{Kind, kind_of};

pub use array::ArraySchema;
pub use enumeration::EnumSchema;
pub use num::NumberSchema;
pub use object::{Member, ObjectSchema};
pub use str::StringSchema;

/// Shared handle to an immutable schema node.
pub type SchemaRef = Arc<SchemaItem>;

/// One node of a schema tree. Closed set: adding a variant forces every
/// `match` in the crate to be revisited.
#[derive(Debug)]
pub enum SchemaItem {
    Array(ArraySchema),
    Object(ObjectSchema),
    Enumeration(EnumSchema),
    Number(NumberSchema),
    String(StringSchema),
    Boolean(BoolSchema),
    AlwaysTrue,
}

impl SchemaItem {
    /// Check `value` against this node and, recursively, its children.
    /// Returns the first failure encountered; element/field order is the
    /// value's own order, and no further children are visited after a failure.
    pub fn validate(&self, value: &Value) -> Validation {
        match self {
            SchemaItem::Array(s) => s.validate(value),
            SchemaItem::Object(s) => s.validate(value),
            SchemaItem::Enumeration(s) => s.validate(value),
            SchemaItem::Number(s) => s.validate(value),
            SchemaItem::String(s) => s.validate(value),
            SchemaItem::Boolean(s) => s.validate(value),
            SchemaItem::AlwaysTrue => Ok(()),
        }
    }

    /// Normalize `value` in place into its transport representation.
    /// Never validates; non-conforming shapes are left untouched.
    pub fn apply_schema(&self, value: &mut Value) {
        match self {
            SchemaItem::Array(s) => s.apply_schema(value),
            SchemaItem::Object(s) => s.apply_schema(value),
            SchemaItem::Enumeration(s) => s.apply_schema(value),
            SchemaItem::Number(_) | SchemaItem::String(_) | SchemaItem::Boolean(_) => {}
            SchemaItem::AlwaysTrue => {}
        }
    }

    /// Inverse of [`SchemaItem::apply_schema`]: restore the generic
    /// representation in place.
    pub fn unapply_schema(&self, value: &mut Value) {
        match self {
            SchemaItem::Array(s) => s.unapply_schema(value),
            SchemaItem::Object(s) => s.unapply_schema(value),
            SchemaItem::Enumeration(s) => s.unapply_schema(value),
            SchemaItem::Number(_) | SchemaItem::String(_) | SchemaItem::Boolean(_) => {}
            SchemaItem::AlwaysTrue => {}
        }
    }

    /// Fill missing structure in place with declared defaults. Never
    /// validates and never enforces size bounds — completion only.
    pub fn build_object(&self, value: &mut Value) {
        match self {
            SchemaItem::Array(s) => s.build_object(value),
            SchemaItem::Object(s) => s.build_object(value),
            SchemaItem::Enumeration(s) => s.build_object(value),
            SchemaItem::Number(s) => s.build_object(value),
            SchemaItem::String(s) => s.build_object(value),
            SchemaItem::Boolean(s) => s.build_object(value),
            SchemaItem::AlwaysTrue => {}
        }
    }
}

/// The process-wide accept-all node: validates anything, transforms nothing.
///
/// Used as the default element/child schema so "no constraint declared" is an
/// ordinary composable node rather than a special case.
pub fn always() -> SchemaRef {
    static NODE: Lazy<SchemaRef> = Lazy::new(|| Arc::new(SchemaItem::AlwaysTrue));
    NODE.clone()
}

/// Schema assembly defects. Disjoint from [`ValidationError`]: these are
/// caught when a tree is *built*, not when a message is checked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("{what}: minimum {min} exceeds maximum {max}")]
    BoundsOutOfOrder {
        what: &'static str,
        min: String,
        max: String,
    },

    #[error("numeric bound is not finite")]
    NonFiniteBound,

    #[error("duplicate enumeration symbol `{symbol}`")]
    DuplicateSymbol { symbol: String },

    #[error("duplicate enumeration code {code} (symbol `{symbol}`)")]
    DuplicateCode { symbol: String, code: i64 },

    #[error("default symbol `{symbol}` is not in the enumeration")]
    UnknownDefaultSymbol { symbol: String },
}

/// Construction-time check shared by every bounded variant: when both ends of
/// a constraint pair are set, minimum must not exceed maximum.
pub(crate) fn check_bounds_order<T>(
    what: &'static str,
    min: &Param<T>,
    max: &Param<T>,
) -> Result<(), SchemaError>
where
    T: PartialOrd + std::fmt::Display,
{
    if let (Some(lo), Some(hi)) = (min.get(), max.get()) {
        if lo > hi {
            return Err(SchemaError::BoundsOutOfOrder {
                what,
                min: lo.to_string(),
                max: hi.to_string(),
            });
        }
    }
    Ok(())
}

pub(crate) fn wrong_type(expected: Kind, value: &Value) -> ValidationError {
    ValidationError::WrongType {
        path: crate::outcome::Path::root(),
        expected,
        found: kind_of(value),
    }
}

/// State of the Boolean variant: a bare tag check, plus an optional default
/// for structure building.
#[derive(Debug, Default)]
pub struct BoolSchema {
    pub(crate) default: Param<bool>,
}

impl BoolSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_value(mut self, v: bool) -> Self {
        self.default = Param::set(v);
        self
    }

    /// Finalize into a shared node. Booleans have no bounds, so assembly
    /// cannot fail.
    pub fn build(self) -> SchemaRef {
        Arc::new(SchemaItem::Boolean(self))
    }

    fn validate(&self, value: &Value) -> Validation {
        match value {
            Value::Bool(_) => Ok(()),
            other => Err(wrong_type(Kind::Bool, other)),
        }
    }

    fn build_object(&self, value: &mut Value) {
        if value.is_null() {
            if let Some(d) = self.default.value() {
                *value = Value::Bool(d);
            }
        }
    }
}
