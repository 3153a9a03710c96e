//! Type tags over the dynamic value model.
//!
//! The engine consumes `serde_json::Value` as its tagged-union message value
//! (null / bool / number / string / array / object) and needs nothing from it
//! beyond tag queries, indexed/keyed access, and primitive extraction.

use serde::Serialize;
use serde_json::Value;

/// Kind of a dynamic value — the tag of the union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

/// Tag detector.
pub fn kind_of(v: &Value) -> Kind {
    match v {
        Value::Null => Kind::Null,
        Value::Bool(_) => Kind::Bool,
        Value::Number(_) => Kind::Number,
        Value::String(_) => Kind::String,
        Value::Array(_) => Kind::Array,
        Value::Object(_) => Kind::Object,
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Kind::Null => "null",
            Kind::Bool => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_cover_every_variant() {
        assert_eq!(kind_of(&json!(null)), Kind::Null);
        assert_eq!(kind_of(&json!(true)), Kind::Bool);
        assert_eq!(kind_of(&json!(3.5)), Kind::Number);
        assert_eq!(kind_of(&json!("x")), Kind::String);
        assert_eq!(kind_of(&json!([1])), Kind::Array);
        assert_eq!(kind_of(&json!({"a": 1})), Kind::Object);
    }
}
