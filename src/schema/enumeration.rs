//! Enumeration schema item: a closed set of allowed symbols, optionally
//! mapped to numeric transport codes.
//!
//! This is the one scalar variant whose apply/unapply transforms are not
//! identity: a declared symbol travels as its numeric code and comes back as
//! the symbol. Codes are unique by construction, so the two transforms are
//! mutual inverses.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::outcome::{Validation, ValidationError};
use crate::param::Param;
use crate::schema::{SchemaError, SchemaItem, SchemaRef, wrong_type};
use crate::value::Kind;

/// Options record for the Enumeration variant. Symbols accumulate in
/// declaration order; duplicates are caught at [`EnumSchemaBuilder::build`].
#[derive(Debug, Default)]
pub struct EnumSchemaBuilder {
    symbols: Vec<(String, Option<i64>)>,
    default: Param<String>,
}

/// State of the Enumeration variant.
#[derive(Debug)]
pub struct EnumSchema {
    pub(crate) symbols: IndexMap<String, Option<i64>>,
    pub(crate) default: Param<String>,
}

impl EnumSchema {
    pub fn new() -> EnumSchemaBuilder {
        EnumSchemaBuilder::default()
    }
}

impl EnumSchemaBuilder {
    /// Declare an allowed symbol with no transport code.
    pub fn symbol(mut self, name: impl Into<String>) -> Self {
        self.symbols.push((name.into(), None));
        self
    }

    /// Declare an allowed symbol that travels as `code`.
    pub fn symbol_with_code(mut self, name: impl Into<String>, code: i64) -> Self {
        self.symbols.push((name.into(), Some(code)));
        self
    }

    pub fn default_symbol(mut self, name: impl Into<String>) -> Self {
        self.default = Param::set(name.into());
        self
    }

    /// Finalize into a shared node. Symbols must be unique, codes must be
    /// unique, and a declared default must be a member of the set.
    pub fn build(self) -> Result<SchemaRef, SchemaError> {
        let mut symbols: IndexMap<String, Option<i64>> = IndexMap::with_capacity(self.symbols.len());
        for (name, code) in self.symbols {
            if symbols.contains_key(&name) {
                return Err(SchemaError::DuplicateSymbol { symbol: name });
            }
            if let Some(c) = code {
                if let Some((clash, _)) = symbols.iter().find(|(_, v)| **v == Some(c)) {
                    return Err(SchemaError::DuplicateCode { symbol: clash.clone(), code: c });
                }
            }
            symbols.insert(name, code);
        }
        if let Some(d) = self.default.get() {
            if !symbols.contains_key(d) {
                return Err(SchemaError::UnknownDefaultSymbol { symbol: d.clone() });
            }
        }
        Ok(Arc::new(SchemaItem::Enumeration(EnumSchema {
            symbols,
            default: self.default,
        })))
    }
}

impl EnumSchema {
    fn symbol_for_code(&self, code: i64) -> Option<&str> {
        self.symbols
            .iter()
            .find(|(_, v)| **v == Some(code))
            .map(|(name, _)| name.as_str())
    }

    /// Accepts either representation: a declared symbol (generic form) or a
    /// declared code (transport form). Anything else in the string/number
    /// tags is an invalid symbol; other tags are the wrong type outright.
    pub(crate) fn validate(&self, value: &Value) -> Validation {
        match value {
            Value::String(s) if self.symbols.contains_key(s) => Ok(()),
            Value::String(s) => Err(ValidationError::InvalidEnumSymbol {
                path: crate::outcome::Path::root(),
                symbol: s.clone(),
            }),
            Value::Number(n) => match n.as_i64().and_then(|c| self.symbol_for_code(c)) {
                Some(_) => Ok(()),
                None => Err(ValidationError::InvalidEnumSymbol {
                    path: crate::outcome::Path::root(),
                    symbol: n.to_string(),
                }),
            },
            other => Err(wrong_type(Kind::String, other)),
        }
    }

    /// Symbol → code. Symbols without a code, unknown symbols, and non-string
    /// values are left untouched.
    pub(crate) fn apply_schema(&self, value: &mut Value) {
        if let Value::String(s) = value {
            if let Some(Some(code)) = self.symbols.get(s.as_str()) {
                *value = Value::from(*code);
            }
        }
    }

    /// Code → symbol.
    pub(crate) fn unapply_schema(&self, value: &mut Value) {
        if let Value::Number(n) = value {
            if let Some(symbol) = n.as_i64().and_then(|c| self.symbol_for_code(c)) {
                *value = Value::String(symbol.to_string());
            }
        }
    }

    pub(crate) fn build_object(&self, value: &mut Value) {
        if value.is_null() {
            if let Some(d) = self.default.get() {
                *value = Value::String(d.clone());
            }
        }
    }
}
