//! Object/struct schema item: named members, each with a child schema and a
//! mandatory flag. Closed schema — undeclared fields are rejected.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::outcome::{Segment, Validation, ValidationError};
use crate::schema::{SchemaError, SchemaItem, SchemaRef, wrong_type};
use crate::value::Kind;

/// One declared field of an object schema.
#[derive(Debug)]
pub struct Member {
    pub schema: SchemaRef,
    pub mandatory: bool,
}

/// State of the Object variant. Member order is declaration order, kept
/// stable for deterministic traversal and emission.
#[derive(Debug, Default)]
pub struct ObjectSchema {
    members: IndexMap<String, Member>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field that must be present. Re-declaring a name replaces the
    /// earlier declaration.
    pub fn mandatory(mut self, name: impl Into<String>, schema: SchemaRef) -> Self {
        self.members.insert(name.into(), Member { schema, mandatory: true });
        self
    }

    /// Declare a field that may be absent.
    pub fn optional(mut self, name: impl Into<String>, schema: SchemaRef) -> Self {
        self.members.insert(name.into(), Member { schema, mandatory: false });
        self
    }

    /// Finalize into a shared node.
    pub fn build(self) -> Result<SchemaRef, SchemaError> {
        Ok(Arc::new(SchemaItem::Object(self)))
    }

    pub fn members(&self) -> &IndexMap<String, Member> {
        &self.members
    }

    /// Tag, then mandatory presence, then the closed-schema check, then each
    /// present member against its child schema in declaration order.
    /// First failure wins throughout.
    pub(crate) fn validate(&self, value: &Value) -> Validation {
        let Value::Object(map) = value else {
            return Err(wrong_type(Kind::Object, value));
        };

        for (name, member) in &self.members {
            if member.mandatory && !map.contains_key(name) {
                return Err(ValidationError::MissingMandatoryField {
                    path: crate::outcome::Path::root(),
                    field: name.clone(),
                });
            }
        }

        for name in map.keys() {
            if !self.members.contains_key(name) {
                return Err(ValidationError::UnexpectedField {
                    path: crate::outcome::Path::root(),
                    field: name.clone(),
                });
            }
        }

        for (name, member) in &self.members {
            if let Some(field_value) = map.get(name) {
                if let Err(err) = member.schema.validate(field_value) {
                    return Err(err.nested(Segment::Field(name.clone())));
                }
            }
        }
        Ok(())
    }

    /// Recurse into present declared members only; absent optional members
    /// are not materialized and undeclared members are left untouched.
    pub(crate) fn apply_schema(&self, value: &mut Value) {
        if let Value::Object(map) = value {
            for (name, member) in &self.members {
                if let Some(field_value) = map.get_mut(name) {
                    member.schema.apply_schema(field_value);
                }
            }
        }
    }

    pub(crate) fn unapply_schema(&self, value: &mut Value) {
        if let Value::Object(map) = value {
            for (name, member) in &self.members {
                if let Some(field_value) = map.get_mut(name) {
                    member.schema.unapply_schema(field_value);
                }
            }
        }
    }

    /// Null becomes an empty mapping. Existing declared members are completed
    /// recursively; absent mandatory members are created by running the child
    /// schema's completion on a null starting value. Optional members are
    /// never invented.
    pub(crate) fn build_object(&self, value: &mut Value) {
        if value.is_null() {
            *value = Value::Object(Map::new());
        }
        let Value::Object(map) = value else {
            return;
        };

        for (name, member) in &self.members {
            match map.get_mut(name) {
                Some(field_value) => member.schema.build_object(field_value),
                None if member.mandatory => {
                    let mut fresh = Value::Null;
                    member.schema.build_object(&mut fresh);
                    map.insert(name.clone(), fresh);
                }
                None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ArraySchema, BoolSchema, NumberSchema, StringSchema};
    use serde_json::json;

    fn point() -> SchemaRef {
        ObjectSchema::new()
            .mandatory("x", NumberSchema::new().build().unwrap())
            .mandatory("y", NumberSchema::new().build().unwrap())
            .optional("label", StringSchema::new().build().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn conforming_objects_pass_with_or_without_optionals() {
        let schema = point();
        assert_eq!(schema.validate(&json!({"x": 1, "y": 2})), Ok(()));
        assert_eq!(schema.validate(&json!({"x": 1, "y": 2, "label": "origin"})), Ok(()));
    }

    #[test]
    fn missing_mandatory_field_is_reported_by_name() {
        let schema = point();
        assert!(matches!(
            schema.validate(&json!({"x": 1})),
            Err(ValidationError::MissingMandatoryField { field, .. }) if field == "y"
        ));
    }

    #[test]
    fn undeclared_fields_are_rejected() {
        let schema = point();
        assert!(matches!(
            schema.validate(&json!({"x": 1, "y": 2, "z": 3})),
            Err(ValidationError::UnexpectedField { field, .. }) if field == "z"
        ));
    }

    #[test]
    fn member_failure_is_attributed_to_the_field() {
        let schema = point();
        let err = schema.validate(&json!({"x": 1, "y": "two"})).unwrap_err();
        assert_eq!(err.path().to_string(), "/y");
        assert!(matches!(err, ValidationError::WrongType { expected: Kind::Number, .. }));
    }

    #[test]
    fn nested_failure_paths_compose() {
        let schema = ObjectSchema::new()
            .mandatory(
                "points",
                ArraySchema::new().element(point()).build().unwrap(),
            )
            .build()
            .unwrap();
        let err = schema
            .validate(&json!({"points": [{"x": 1, "y": 2}, {"x": 1}]}))
            .unwrap_err();
        assert_eq!(err.path().to_string(), "/points/1");
    }

    #[test]
    fn non_object_is_wrong_type() {
        let schema = point();
        assert!(matches!(
            schema.validate(&json!([1, 2])),
            Err(ValidationError::WrongType { expected: Kind::Object, found: Kind::Array, .. })
        ));
    }

    #[test]
    fn build_materializes_mandatory_members_only() {
        let schema = ObjectSchema::new()
            .mandatory("flag", BoolSchema::new().default_value(false).build())
            .mandatory("tags", ArraySchema::new().build().unwrap())
            .optional("note", StringSchema::new().build().unwrap())
            .build()
            .unwrap();

        let mut v = json!(null);
        schema.build_object(&mut v);
        assert_eq!(v, json!({"flag": false, "tags": []}));

        // idempotent: a second pass changes nothing
        let before = v.clone();
        schema.build_object(&mut v);
        assert_eq!(v, before);
    }

    #[test]
    fn build_preserves_existing_structure() {
        let schema = point();
        let mut v = json!({"x": 9, "label": "kept"});
        schema.build_object(&mut v);
        assert_eq!(v["x"], json!(9));
        assert_eq!(v["label"], json!("kept"));
        // y was materialized but has no default, so it stays null
        assert!(v.as_object().unwrap().contains_key("y"));
        assert_eq!(v["y"], json!(null));
    }

    #[test]
    fn apply_touches_present_declared_members_only() {
        let schema = point();
        let mut v = json!({"x": 1, "stray": "untouched"});
        schema.apply_schema(&mut v);
        assert_eq!(v, json!({"x": 1, "stray": "untouched"}));
    }
}
