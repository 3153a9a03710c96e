//! Number schema item: one variant for both integer and floating tags, with
//! an optional inclusive value range.

use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde_json::Value;

use crate::outcome::{Validation, ValidationError};
use crate::param::Param;
use crate::schema::{SchemaError, SchemaItem, SchemaRef, check_bounds_order, wrong_type};
use crate::value::Kind;

/// State of the Number variant.
#[derive(Debug, Default)]
pub struct NumberSchema {
    pub(crate) min: Param<f64>,
    pub(crate) max: Param<f64>,
    pub(crate) default: Param<f64>,
}

impl NumberSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min(mut self, v: f64) -> Self {
        self.min = Param::set(v);
        self
    }

    pub fn max(mut self, v: f64) -> Self {
        self.max = Param::set(v);
        self
    }

    pub fn default_value(mut self, v: f64) -> Self {
        self.default = Param::set(v);
        self
    }

    /// Finalize into a shared node. Set bounds must be finite and ordered.
    pub fn build(self) -> Result<SchemaRef, SchemaError> {
        for bound in [&self.min, &self.max, &self.default] {
            if bound.value().is_some_and(|v| !v.is_finite()) {
                return Err(SchemaError::NonFiniteBound);
            }
        }
        check_bounds_order("number range", &self.min, &self.max)?;
        Ok(Arc::new(SchemaItem::Number(self)))
    }

    pub(crate) fn validate(&self, value: &Value) -> Validation {
        let Value::Number(n) = value else {
            return Err(wrong_type(Kind::Number, value));
        };
        // always Some for the standard number representation
        let Some(x) = n.as_f64() else {
            return Ok(());
        };

        let below = self.min.value().is_some_and(|min| OrderedFloat(x) < OrderedFloat(min));
        let above = self.max.value().is_some_and(|max| OrderedFloat(x) > OrderedFloat(max));
        if below || above {
            return Err(ValidationError::ValueOutOfRange {
                path: crate::outcome::Path::root(),
                value: x,
                min: self.min.value(),
                max: self.max.value(),
            });
        }
        Ok(())
    }

    pub(crate) fn build_object(&self, value: &mut Value) {
        if value.is_null() {
            if let Some(d) = self.default.value() {
                *value = Value::from(d);
            }
        }
    }
}
