//! JSON-Schema-style description of a schema tree.
//!
//! Debug/interop aid: renders a [`SchemaItem`] tree as a compact draft-ish
//! schema document (`items`, `minItems`, `properties`, `required`, `enum`,
//! `minimum`, `minLength`, `pattern`). Not part of the validation contract —
//! nothing here is read back by the engine.

use serde_json::{Value, json};

use crate::schema::SchemaItem;

/// Render a schema tree as a JSON-Schema-ish document.
pub fn schema_json(item: &SchemaItem) -> Value {
    match item {
        SchemaItem::Array(s) => {
            let mut o = json!({
                "type": "array",
                "items": schema_json(&s.element),
            });
            if let Some(min) = s.min_size.value() {
                o["minItems"] = Value::from(min);
            }
            if let Some(max) = s.max_size.value() {
                o["maxItems"] = Value::from(max);
            }
            o
        }

        SchemaItem::Object(s) => {
            let mut props = serde_json::Map::new();
            let mut required: Vec<Value> = Vec::new();
            for (name, member) in s.members() {
                props.insert(name.clone(), schema_json(&member.schema));
                if member.mandatory {
                    required.push(Value::from(name.clone()));
                }
            }
            let mut o = json!({
                "type": "object",
                "properties": props,
                "additionalProperties": false,
            });
            if !required.is_empty() {
                o["required"] = Value::Array(required);
            }
            o
        }

        SchemaItem::Enumeration(s) => {
            json!({
                "type": "string",
                "enum": s.symbols.keys().cloned().collect::<Vec<_>>(),
            })
        }

        SchemaItem::Number(s) => {
            let mut o = json!({ "type": "number" });
            if let Some(min) = s.min.value() {
                o["minimum"] = json_num_pref_i64(min);
            }
            if let Some(max) = s.max.value() {
                o["maximum"] = json_num_pref_i64(max);
            }
            if let Some(d) = s.default.value() {
                o["default"] = json_num_pref_i64(d);
            }
            o
        }

        SchemaItem::String(s) => {
            let mut o = json!({ "type": "string" });
            if let Some(min) = s.min_len.value() {
                o["minLength"] = Value::from(min);
            }
            if let Some(max) = s.max_len.value() {
                o["maxLength"] = Value::from(max);
            }
            if let Some(re) = &s.pattern {
                o["pattern"] = Value::from(re.as_str());
            }
            if let Some(d) = s.default.get() {
                o["default"] = Value::from(d.clone());
            }
            o
        }

        SchemaItem::Boolean(s) => {
            let mut o = json!({ "type": "boolean" });
            if let Some(d) = s.default.value() {
                o["default"] = Value::from(d);
            }
            o
        }

        // accept-all: the empty schema matches everything
        SchemaItem::AlwaysTrue => json!({}),
    }
}

// Prefer emitting integers when exact.
fn json_num_pref_i64(n: f64) -> Value {
    if n.is_finite() && n.fract() == 0.0 && n >= i64::MIN as f64 && n <= i64::MAX as f64 {
        Value::from(n as i64)
    } else {
        Value::from(n)
    }
}
