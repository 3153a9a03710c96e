//! String schema item: length bounds (Unicode scalar count) and an optional
//! anchored pattern.

use std::sync::Arc;

use regex::Regex;
use serde_json::Value;

use crate::outcome::{Validation, ValidationError};
use crate::param::Param;
use crate::schema::{SchemaError, SchemaItem, SchemaRef, check_bounds_order, wrong_type};
use crate::value::Kind;

/// State of the String variant.
#[derive(Debug, Default)]
pub struct StringSchema {
    pub(crate) min_len: Param<usize>,
    pub(crate) max_len: Param<usize>,
    pub(crate) pattern: Option<Regex>,
    pub(crate) default: Param<String>,
}

impl StringSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn min_len(mut self, n: usize) -> Self {
        self.min_len = Param::set(n);
        self
    }

    pub fn max_len(mut self, n: usize) -> Self {
        self.max_len = Param::set(n);
        self
    }

    /// Pattern every conforming string must match. Compiled once here, at
    /// assembly time, never per message.
    pub fn pattern(mut self, re: Regex) -> Self {
        self.pattern = Some(re);
        self
    }

    pub fn default_value(mut self, v: impl Into<String>) -> Self {
        self.default = Param::set(v.into());
        self
    }

    /// Finalize into a shared node.
    pub fn build(self) -> Result<SchemaRef, SchemaError> {
        check_bounds_order("string length", &self.min_len, &self.max_len)?;
        Ok(Arc::new(SchemaItem::String(self)))
    }

    pub(crate) fn validate(&self, value: &Value) -> Validation {
        let Value::String(s) = value else {
            return Err(wrong_type(Kind::String, value));
        };

        // length in Unicode scalar values, not bytes
        let length = s.chars().count();
        let below = self.min_len.value().is_some_and(|min| length < min);
        let above = self.max_len.value().is_some_and(|max| length > max);
        if below || above {
            return Err(ValidationError::LengthOutOfRange {
                path: crate::outcome::Path::root(),
                length,
                min: self.min_len.value(),
                max: self.max_len.value(),
            });
        }

        if let Some(re) = &self.pattern {
            if !re.is_match(s) {
                return Err(ValidationError::PatternMismatch {
                    path: crate::outcome::Path::root(),
                    pattern: re.as_str().to_string(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn build_object(&self, value: &mut Value) {
        if value.is_null() {
            if let Some(d) = self.default.get() {
                *value = Value::String(d.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn length_bounds_count_scalars_not_bytes() {
        let schema = StringSchema::new().min_len(1).max_len(4).build().unwrap();
        assert_eq!(schema.validate(&json!("αβγδ")), Ok(()));
        assert!(matches!(
            schema.validate(&json!("")),
            Err(ValidationError::LengthOutOfRange { length: 0, .. })
        ));
        assert!(matches!(
            schema.validate(&json!("αβγδε")),
            Err(ValidationError::LengthOutOfRange { length: 5, .. })
        ));
    }

    #[test]
    fn non_string_is_wrong_type() {
        let schema = StringSchema::new().build().unwrap();
        assert!(matches!(
            schema.validate(&json!(42)),
            Err(ValidationError::WrongType { expected: Kind::String, found: Kind::Number, .. })
        ));
    }

    #[test]
    fn pattern_is_checked_after_length() {
        let schema = StringSchema::new()
            .max_len(16)
            .pattern(Regex::new(r"^[a-z]+-\d{3}$").unwrap())
            .build()
            .unwrap();
        assert_eq!(schema.validate(&json!("node-007")), Ok(()));
        assert!(matches!(
            schema.validate(&json!("node007")),
            Err(ValidationError::PatternMismatch { .. })
        ));
        // over-length strings report the length, not the pattern
        assert!(matches!(
            schema.validate(&json!("node-007-node-007")),
            Err(ValidationError::LengthOutOfRange { .. })
        ));
    }

    #[test]
    fn inverted_length_bounds_fail_at_build() {
        assert!(matches!(
            StringSchema::new().min_len(9).max_len(3).build(),
            Err(SchemaError::BoundsOutOfOrder { .. })
        ));
    }

    #[test]
    fn default_fills_null_only() {
        let schema = StringSchema::new().default_value("n/a").build().unwrap();
        let mut v = json!(null);
        schema.build_object(&mut v);
        assert_eq!(v, json!("n/a"));

        let mut v = json!("set");
        schema.build_object(&mut v);
        assert_eq!(v, json!("set"));
    }
}
