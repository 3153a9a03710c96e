//! Array schema item: size bounds plus one element schema applied to every
//! position.

use std::sync::Arc;

use serde_json::Value;

use crate::outcome::{Segment, Validation, ValidationError};
use crate::param::Param;
use crate::schema::{SchemaError, SchemaItem, SchemaRef, always, check_bounds_order, wrong_type};
use crate::value::Kind;

/// State of the Array variant.
///
/// Also its own options record: every constraint defaults to "absent"
/// (element = accept-all, both size bounds unset), so a default-built array
/// schema accepts every sequence value.
#[derive(Debug)]
pub struct ArraySchema {
    pub(crate) element: SchemaRef,
    pub(crate) min_size: Param<usize>,
    pub(crate) max_size: Param<usize>,
}

impl Default for ArraySchema {
    fn default() -> Self {
        Self::new()
    }
}

impl ArraySchema {
    pub fn new() -> Self {
        ArraySchema {
            element: always(),
            min_size: Param::unset(),
            max_size: Param::unset(),
        }
    }

    /// Schema every element must satisfy.
    pub fn element(mut self, schema: SchemaRef) -> Self {
        self.element = schema;
        self
    }

    pub fn min_size(mut self, n: usize) -> Self {
        self.min_size = Param::set(n);
        self
    }

    pub fn max_size(mut self, n: usize) -> Self {
        self.max_size = Param::set(n);
        self
    }

    /// Finalize into a shared node. Fails if both size bounds are set with
    /// minimum > maximum.
    pub fn build(self) -> Result<SchemaRef, SchemaError> {
        check_bounds_order("array size", &self.min_size, &self.max_size)?;
        Ok(Arc::new(SchemaItem::Array(self)))
    }

    /// Size bounds first, then elements in order. The first failing element
    /// short-circuits the traversal; its error comes back attributed with the
    /// element index.
    pub(crate) fn validate(&self, value: &Value) -> Validation {
        let Value::Array(items) = value else {
            return Err(wrong_type(Kind::Array, value));
        };

        let size = items.len();
        let below = self.min_size.value().is_some_and(|min| size < min);
        let above = self.max_size.value().is_some_and(|max| size > max);
        if below || above {
            return Err(ValidationError::SizeOutOfRange {
                path: crate::outcome::Path::root(),
                size,
                min: self.min_size.value(),
                max: self.max_size.value(),
            });
        }

        for (i, el) in items.iter().enumerate() {
            if let Err(err) = self.element.validate(el) {
                return Err(err.nested(Segment::Index(i)));
            }
        }
        Ok(())
    }

    /// Element-wise, in place. Cardinality never changes: no element is
    /// added, removed, or reordered. Non-sequences are left alone.
    pub(crate) fn apply_schema(&self, value: &mut Value) {
        if let Value::Array(items) = value {
            for el in items {
                self.element.apply_schema(el);
            }
        }
    }

    pub(crate) fn unapply_schema(&self, value: &mut Value) {
        if let Value::Array(items) = value {
            for el in items {
                self.element.unapply_schema(el);
            }
        }
    }

    /// Null becomes an empty sequence; existing elements are completed
    /// recursively. Size bounds play no part here — building never pads to
    /// `min_size` and never truncates to `max_size`.
    pub(crate) fn build_object(&self, value: &mut Value) {
        match value {
            Value::Null => *value = Value::Array(Vec::new()),
            Value::Array(items) => {
                for el in items {
                    self.element.build_object(el);
                }
            }
            _ => {}
        }
    }
}
